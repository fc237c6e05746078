use super::*;

fn item(key: &str, fields: &[(&str, &[&str])]) -> FixtureItem {
    FixtureItem {
        key: key.to_string(),
        date: "2024-01-01T00:00:00".to_string(),
        fields: fields
            .iter()
            .map(|(f, vs)| (f.to_string(), vs.iter().map(|v| v.to_string()).collect()))
            .collect(),
    }
}

#[test]
fn field_terms_match_metadata_values() {
    let a = item("SHA256E-s1--aa.jpg", &[("state", &["new"]), ("tag", &["cat"])]);
    assert!(matches(&a, "state:new"));
    assert!(matches(&a, "state:NEW"));
    assert!(!matches(&a, "state:done"));
    assert!(matches(&a, "tag:"));
    assert!(!matches(&a, "camera:*"));
}

#[test]
fn bare_terms_match_tags_or_key() {
    let a = item("SHA256E-s1--aa.jpg", &[("tag", &["beach"])]);
    assert!(matches(&a, "beach"));
    assert!(matches(&a, "s1--AA"));
    assert!(!matches(&a, "mountain"));
    assert!(!matches(&a, "beach state:"), "every term must match");
}

#[test]
fn page_reports_window_and_rank() {
    let items: Vec<_> = (0..5)
        .map(|i| item(&format!("k{}", i), &[("state", &["new"])]))
        .collect();
    let body = page(&items, "state:new", 3, 10);
    assert_eq!(body["total"], 5);
    assert_eq!(body["start"], 3);
    assert_eq!(body["end"], 5);
    assert_eq!(body["q"], "state:new");
    assert_eq!(body["matches"][0]["key"], "k3");
    assert_eq!(body["matches"][0]["rank"], 4);
}

#[test]
fn past_the_end_page_is_empty() {
    let items = vec![item("k0", &[])];
    let body = page(&items, "k0", 10, 10);
    assert_eq!(body["total"], 1);
    assert_eq!(body["matches"].as_array().map(Vec::len), Some(0));
}

#[test]
fn int_params_are_lenient() {
    assert_eq!(int_param(Some("12"), 20), 12);
    assert_eq!(int_param(Some("abc"), 20), 20);
    assert_eq!(int_param(None, 20), 20);
}
