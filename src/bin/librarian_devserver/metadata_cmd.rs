use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum Edit {
    Set { field: String, value: String },
    Add { field: String, value: String },
    Remove { field: String, value: String },
    Clear { field: String },
}

fn split_assignment(arg: &str) -> Option<Edit> {
    if let Some((field, value)) = arg.split_once("+=") {
        return Some(Edit::Add {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    if let Some((field, value)) = arg.split_once("-=") {
        return Some(Edit::Remove {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    let (field, value) = arg.split_once('=')?;
    if value.is_empty() {
        return Some(Edit::Clear {
            field: field.to_string(),
        });
    }
    Some(Edit::Set {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Parses `annex metadata` arguments: `f=v`, `f+=v`, `f-=v`, `f=` and the
/// tag shorthands `-t/--tag v`, `-u/--untag v`.
pub(super) fn parse_edits(args: &str) -> Result<Vec<Edit>, String> {
    let mut edits = Vec::new();
    let mut it = args.split_whitespace();
    while let Some(arg) = it.next() {
        let edit = match arg {
            "-t" | "--tag" | "-u" | "--untag" => {
                let value = it
                    .next()
                    .ok_or_else(|| format!("{} needs a value", arg))?
                    .to_string();
                let field = TAG_FIELD.to_string();
                if arg == "-t" || arg == "--tag" {
                    Edit::Add { field, value }
                } else {
                    Edit::Remove { field, value }
                }
            }
            _ => split_assignment(arg).ok_or_else(|| format!("bad metadata argument: {}", arg))?,
        };
        let field = match &edit {
            Edit::Set { field, .. }
            | Edit::Add { field, .. }
            | Edit::Remove { field, .. }
            | Edit::Clear { field } => field,
        };
        if field.is_empty() {
            return Err(format!("bad metadata argument: {}", arg));
        }
        edits.push(edit);
    }
    Ok(edits)
}

pub(super) fn apply(item: &mut FixtureItem, edits: &[Edit]) {
    for edit in edits {
        match edit {
            Edit::Set { field, value } => {
                item.fields.insert(field.clone(), vec![value.clone()]);
            }
            Edit::Add { field, value } => {
                let values = item.fields.entry(field.clone()).or_default();
                if !values.contains(value) {
                    values.push(value.clone());
                }
            }
            Edit::Remove { field, value } => {
                if let Some(values) = item.fields.get_mut(field) {
                    values.retain(|v| v != value);
                    if values.is_empty() {
                        item.fields.remove(field);
                    }
                }
            }
            Edit::Clear { field } => {
                item.fields.remove(field);
            }
        }
    }
}

fn failed(message: impl Into<String>) -> CommandResult {
    CommandResult {
        message: message.into(),
        result: false,
    }
}

/// Runs one `/api/cli` request against the fixture items.
pub(super) fn run(items: &mut [FixtureItem], req: &CommandRequest) -> CommandResult {
    let cmd = req.cmd.trim();
    let Some(keys) = &req.keys else {
        if cmd == "sync" {
            return CommandResult {
                message: "synced".to_string(),
                result: true,
            };
        }
        return failed(format!("unsupported command: {}", cmd));
    };

    let Some(args) = cmd
        .strip_prefix(METADATA_COMMAND_PREFIX)
        .filter(|rest| rest.is_empty() || rest.starts_with(' '))
    else {
        return failed(format!("unsupported command: {}", cmd));
    };

    let edits = match parse_edits(args) {
        Ok(e) if e.is_empty() => return failed("no metadata changes given"),
        Ok(e) => e,
        Err(msg) => return failed(msg),
    };

    let mut updated = 0;
    let mut unknown = Vec::new();
    for key in keys {
        match items.iter_mut().find(|i| &i.key == key) {
            Some(item) => {
                apply(item, &edits);
                updated += 1;
            }
            None => unknown.push(key.as_str()),
        }
    }

    if unknown.is_empty() {
        CommandResult {
            message: format!("{} updated", updated),
            result: true,
        }
    } else {
        failed(format!(
            "{} updated; unknown keys: {}",
            updated,
            unknown.join(", ")
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/bin/librarian_devserver/metadata_cmd_tests.rs"]
mod tests;
