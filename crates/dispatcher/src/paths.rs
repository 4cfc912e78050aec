//! Path derivation from log entries

use contracts::LogEntry;

/// Derive the target paths for one entry.
///
/// `entry.path` comes first, then every element of `entry.paths` in
/// reported order; empty strings are dropped. With `add_md_suffix`, any
/// derived path lacking a literal `.` gets `.md` appended.
pub fn derive_paths(entry: &LogEntry, add_md_suffix: bool) -> Vec<String> {
    let extra = entry.paths.iter().flatten().cloned();

    std::iter::once(entry.path.clone())
        .chain(extra)
        .filter(|path| !path.is_empty())
        .map(|path| {
            if add_md_suffix && !path.contains('.') {
                format!("{path}.md")
            } else {
                path
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(value: serde_json::Value) -> LogEntry {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_primary_path_then_extras_in_order() {
        let entry = entry(json!({"path": "/a", "paths": ["/b", "/c"]}));
        assert_eq!(derive_paths(&entry, false), vec!["/a", "/b", "/c"]);
    }

    #[test]
    fn test_empty_elements_dropped() {
        let entry = entry(json!({"path": "/a", "paths": ["/b", "", "/c"]}));
        assert_eq!(derive_paths(&entry, false), vec!["/a", "/b", "/c"]);
    }

    #[test]
    fn test_empty_primary_path_dropped() {
        let entry = entry(json!({"paths": ["/b"]}));
        assert_eq!(derive_paths(&entry, false), vec!["/b"]);
    }

    #[test]
    fn test_md_suffix_added_when_no_dot() {
        let entry = entry(json!({"path": "foo"}));
        assert_eq!(derive_paths(&entry, true), vec!["foo.md"]);
    }

    #[test]
    fn test_md_suffix_skipped_when_dot_present() {
        let entry = entry(json!({"path": "foo.json", "paths": ["bar.md", "baz"]}));
        assert_eq!(
            derive_paths(&entry, true),
            vec!["foo.json", "bar.md", "baz.md"]
        );
    }

    #[test]
    fn test_suffix_mode_off_leaves_paths_alone() {
        let entry = entry(json!({"path": "foo"}));
        assert_eq!(derive_paths(&entry, false), vec!["foo"]);
    }

    #[test]
    fn test_no_paths_at_all() {
        let entry = entry(json!({}));
        assert!(derive_paths(&entry, true).is_empty());
    }
}
