use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const TAG_NAMESPACE: &str = "git-annex";
pub const TAG_FIELD: &str = "tag";

/// Per-item metadata as returned by `GET /api/data/{key}`.
///
/// The backend promises a JSON object keyed by section name. Anything else
/// is kept under a single `value` section so it still renders.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub struct Metadata {
    sections: Map<String, Value>,
}

impl From<Value> for Metadata {
    fn from(v: Value) -> Self {
        match v {
            Value::Object(sections) => Self { sections },
            Value::Null => Self::default(),
            other => {
                let mut sections = Map::new();
                sections.insert("value".to_string(), other);
                Self { sections }
            }
        }
    }
}

impl From<Metadata> for Value {
    fn from(m: Metadata) -> Self {
        Value::Object(m.sections)
    }
}

impl Metadata {
    pub fn sections(&self) -> &Map<String, Value> {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Tags live in the `git-annex` namespace. Missing or oddly shaped tag
    /// data yields an empty list.
    pub fn tags(&self) -> Vec<String> {
        let Some(Value::Object(ns)) = self.sections.get(TAG_NAMESPACE) else {
            return Vec::new();
        };
        match ns.get(TAG_FIELD) {
            Some(Value::Array(tags)) => tags
                .iter()
                .filter_map(|t| t.as_str().map(|s| s.to_string()))
                .collect(),
            Some(Value::String(tag)) if !tag.is_empty() => vec![tag.clone()],
            _ => Vec::new(),
        }
    }

    pub fn format_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (label, value) in &self.sections {
            match value {
                Value::Object(fields) => {
                    lines.push(format!("{}:", label));
                    for (field, v) in fields {
                        lines.push(format!("  {}: {}", field, render_value(v)));
                    }
                }
                other => lines.push(format!("{}: {}", label, render_value(other))),
            }
        }
        lines
    }
}

fn render_value(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(render_value)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => v.to_string(),
    }
}
