use std::collections::HashSet;

use super::*;

#[test]
fn keys_are_unique_and_stable() {
    let a = generate(50);
    let b = generate(50);
    let keys: HashSet<_> = a.iter().map(|i| i.key.as_str()).collect();
    assert_eq!(keys.len(), 50);
    assert_eq!(a[7].key, b[7].key);
}

#[test]
fn every_item_has_a_state() {
    let items = generate(12);
    assert!(items.iter().all(|i| !i.values("state").is_empty()));
    assert!(items.iter().any(|i| i.values("state") == ["new".to_string()]));
    assert!(items.iter().any(|i| i.tags().contains(&"cat".to_string())));
}
