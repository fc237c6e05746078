use super::*;

const CAMERAS: [&str; 3] = ["X100V", "EOS R6", "Pixel 8"];

/// Deterministic items, newest first.
pub(super) fn generate(count: usize) -> Vec<FixtureItem> {
    (0..count)
        .map(|i| {
            let n = (count - i) as u64;
            let hash = n.wrapping_mul(0x9e37_79b9_7f4a_7c15);
            let key = format!("SHA256E-s{}--{:016x}.jpg", 40_000 + n * 137, hash);

            let hours = n * 7;
            let date = format!(
                "2024-{:02}-{:02}T{:02}:{:02}:00",
                1 + (hours / (28 * 24)) % 12,
                1 + (hours / 24) % 28,
                hours % 24,
                (n * 13) % 60
            );

            let mut fields = BTreeMap::new();
            let state = if n % 3 == 0 { "done" } else { "new" };
            fields.insert("state".to_string(), vec![state.to_string()]);
            fields.insert(
                "camera".to_string(),
                vec![CAMERAS[(n as usize) % CAMERAS.len()].to_string()],
            );

            let mut tags = Vec::new();
            if n % 4 == 0 {
                tags.push("cat".to_string());
            }
            if n % 5 == 0 {
                tags.push("beach".to_string());
            }
            if !tags.is_empty() {
                fields.insert(TAG_FIELD.to_string(), tags);
            }

            FixtureItem { key, date, fields }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/bin/librarian_devserver/fixtures_tests.rs"]
mod tests;
