//! The option map: option keys mapped to optional string values.
//!
//! A key present without a value is a boolean flag (`--unsupported`), a key
//! with a value carries it verbatim (`--prefix=dbms.`). Keys are stored
//! without their leading dashes. The map is built once per invocation and is
//! read-only afterward.

use std::collections::BTreeMap;

/// Option key for the summary ID.
pub const ID: &str = "id";
/// Option key for the summary title.
pub const TITLE: &str = "title";
/// Option key for the per-setting ID prefix.
pub const ID_PREFIX: &str = "id-prefix";
/// Include (or exclude) deprecated settings.
pub const DEPRECATED: &str = "deprecated";
/// Include only deprecated settings.
pub const DEPRECATED_ONLY: &str = "deprecated-only";
/// Include (or exclude) internal settings.
pub const INTERNAL: &str = "internal";
/// A single setting by exact name.
pub const NAME: &str = "name";
/// Several settings by exact name, comma separated.
pub const NAMES: &str = "names";
/// All settings whose name starts with a prefix.
pub const PREFIX: &str = "prefix";
/// Lift the default exclusion of internal settings.
pub const UNSUPPORTED: &str = "unsupported";

/// Mapping from option key to an optional value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionMap {
    entries: BTreeMap<String, Option<String>>,
}

impl OptionMap {
    /// Create an empty option map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key with a value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), Some(value.into()));
    }

    /// Record a key present without a value.
    pub fn insert_flag(&mut self, key: impl Into<String>) {
        self.entries.insert(key.into(), None);
    }

    /// Check whether a key is present, with or without a value.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Get the value of a key.
    ///
    /// Returns `None` both when the key is absent and when it is a bare flag;
    /// use [`OptionMap::has`] to tell the two apart.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Option::as_deref)
    }

    /// Iterate over all entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Number of keys present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no keys are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for OptionMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.map(Into::into)))
            .collect();
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_map() {
        let options = OptionMap::new();
        assert!(options.is_empty());
        assert!(!options.has(ID));
        assert_eq!(options.get(ID), None);
    }

    #[test]
    fn test_flag_is_present_without_value() {
        let mut options = OptionMap::new();
        options.insert_flag(UNSUPPORTED);

        assert!(options.has(UNSUPPORTED));
        assert_eq!(options.get(UNSUPPORTED), None);
    }

    #[test]
    fn test_value_is_kept_verbatim() {
        let mut options = OptionMap::new();
        options.insert(ID, "");
        options.insert(TITLE, "  Spaced Title ");

        assert_eq!(options.get(ID), Some(""));
        assert_eq!(options.get(TITLE), Some("  Spaced Title "));
    }

    #[test]
    fn test_later_insert_replaces_earlier() {
        let mut options = OptionMap::new();
        options.insert(PREFIX, "dbms.");
        options.insert(PREFIX, "db.");
        assert_eq!(options.get(PREFIX), Some("db."));
        assert_eq!(options.len(), 1);
    }

    #[test]
    fn test_from_iter() {
        let options: OptionMap = [(NAME, Some("foo")), (UNSUPPORTED, None)]
            .into_iter()
            .collect();

        assert_eq!(options.len(), 2);
        assert_eq!(options.get(NAME), Some("foo"));
        assert!(options.has(UNSUPPORTED));
    }

    #[test]
    fn test_iter_is_key_ordered() {
        let options: OptionMap = [("prefix", Some("b")), ("name", Some("a"))]
            .into_iter()
            .collect();
        let keys: Vec<_> = options.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["name", "prefix"]);
    }
}
