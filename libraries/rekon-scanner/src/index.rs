//! Source Index: Root Name → disk path

use rekon_core::root_name;
use std::collections::HashMap;

/// Mapping from Root Name to one concrete disk path
///
/// When several files share a Root Name the last one inserted is kept, so
/// the result follows directory enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceIndex {
    entries: HashMap<String, String>,
}

impl SourceIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every path under its Root Name
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = Self::new();
        for path in paths {
            index.insert(path);
        }
        index
    }

    /// Insert a path, returning the path it displaced, if any
    pub fn insert(&mut self, path: impl Into<String>) -> Option<String> {
        let path = path.into();
        let key = root_name(&path);
        let previous = self.entries.insert(key, path);

        if let Some(ref previous) = previous {
            tracing::debug!("Root name collision, replacing {}", previous);
        }
        previous
    }

    /// Resolved path for a Root Name
    pub fn get(&self, root_name: &str) -> Option<&str> {
        self.entries.get(root_name).map(String::as_str)
    }

    pub fn contains(&self, root_name: &str) -> bool {
        self.entries.contains_key(root_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(root name, path)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, path)| (key.as_str(), path.as_str()))
    }
}

impl<S: Into<String>> FromIterator<S> for SourceIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_paths(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_root_names() {
        let index = SourceIndex::from_paths(["music/a-1.mp3", "music/b.mp3"]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("a.mp3"), Some("music/a-1.mp3"));
        assert_eq!(index.get("b.mp3"), Some("music/b.mp3"));
        assert!(!index.contains("a-1.mp3"));
    }

    #[test]
    fn test_last_path_wins() {
        let mut index = SourceIndex::new();
        assert_eq!(index.insert("one/a.mp3"), None);
        assert_eq!(index.insert("two/a-3.mp3"), Some("one/a.mp3".to_string()));
        assert_eq!(index.get("a.mp3"), Some("two/a-3.mp3"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_empty_index() {
        let index: SourceIndex = Vec::<String>::new().into_iter().collect();
        assert!(index.is_empty());
        assert_eq!(index.get("a.mp3"), None);
    }

    #[test]
    fn test_iter_yields_every_entry() {
        let index: SourceIndex = ["x/a.mp3", "x/b.mp3"].into_iter().collect();
        let mut keys: Vec<_> = index.iter().map(|(key, _)| key).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["a.mp3", "b.mp3"]);
    }
}
