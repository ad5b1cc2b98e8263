//! Dot-path splitting and traversal for JSON documents
//!
//! Paths name nested object keys separated by `.` (`"owner.email"`,
//! `"metadata.labels.env"`). Traversal only descends through objects;
//! arrays and scalars block it.

use serde_json::{Map, Value};

/// Split a dot-path into its segments, dropping empty ones.
pub(crate) fn split(path: &str) -> Vec<&str> {
    path.split('.').filter(|s| !s.is_empty()).collect()
}

/// Resolve a path to a value, read-only.
///
/// Returns `None` when any segment is missing or a non-object value sits
/// in the middle of the path.
pub(crate) fn resolve<'a>(root: &'a Map<String, Value>, segments: &[&str]) -> Option<&'a Value> {
    let (last, init) = segments.split_last()?;
    let mut current = root;
    for segment in init {
        current = current.get(*segment)?.as_object()?;
    }
    current.get(*last)
}

/// Walk down to the parent object of the final segment, mutably.
///
/// With `create_missing`, absent intermediate segments are created as
/// empty objects and non-object intermediates are replaced by empty
/// objects, so the walk only fails on an empty path. Without it, the walk
/// fails wherever [`resolve`] would.
pub(crate) fn resolve_parent_mut<'a>(
    root: &'a mut Map<String, Value>,
    segments: &[&str],
    create_missing: bool,
) -> Option<(&'a mut Map<String, Value>, String)> {
    let (last, init) = segments.split_last()?;
    let mut current = root;
    for segment in init {
        if create_missing {
            let next = current
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !next.is_object() {
                *next = Value::Object(Map::new());
            }
            current = next.as_object_mut()?;
        } else {
            current = current.get_mut(*segment)?.as_object_mut()?;
        }
    }
    Some((current, (*last).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Map<String, Value> {
        match json!({"owner": {"name": "alice"}, "port": 8080}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_split_drops_empty_segments() {
        assert_eq!(split("owner.email"), vec!["owner", "email"]);
        assert_eq!(split(".owner..email."), vec!["owner", "email"]);
        assert!(split("").is_empty());
        assert!(split("...").is_empty());
    }

    #[test]
    fn test_resolve_nested() {
        let root = sample();
        assert_eq!(resolve(&root, &["owner", "name"]), Some(&json!("alice")));
        assert_eq!(resolve(&root, &["port"]), Some(&json!(8080)));
    }

    #[test]
    fn test_resolve_missing_or_blocked() {
        let root = sample();
        assert_eq!(resolve(&root, &["owner", "email"]), None);
        // "port" is a number, not an object to descend into
        assert_eq!(resolve(&root, &["port", "tcp"]), None);
        assert_eq!(resolve(&root, &[]), None);
    }

    #[test]
    fn test_resolve_parent_mut_creates_intermediates() {
        let mut root = Map::new();
        let (parent, key) =
            resolve_parent_mut(&mut root, &["metadata", "labels", "env"], true)
                .expect("parent should be created");
        parent.insert(key, json!("prod"));
        assert_eq!(
            resolve(&root, &["metadata", "labels", "env"]),
            Some(&json!("prod"))
        );
    }

    #[test]
    fn test_resolve_parent_mut_replaces_non_object_intermediate() {
        let mut root = sample();
        let (parent, key) = resolve_parent_mut(&mut root, &["port", "tcp"], true)
            .expect("intermediate should be replaced");
        parent.insert(key, json!(true));
        assert_eq!(resolve(&root, &["port", "tcp"]), Some(&json!(true)));
    }

    #[test]
    fn test_resolve_parent_mut_without_create() {
        let mut root = sample();
        assert!(resolve_parent_mut(&mut root, &["owner", "name"], false).is_some());
        assert!(resolve_parent_mut(&mut root, &["missing", "name"], false).is_none());
        assert!(resolve_parent_mut(&mut root, &[], false).is_none());
    }
}
