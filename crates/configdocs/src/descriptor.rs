//! Setting descriptors.

use serde::{Deserialize, Serialize};

/// Description of a single configuration setting.
///
/// Only `name`, `deprecated` and `internal` take part in filtering; the rest
/// is carried through to rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingDescriptor {
    /// Fully qualified setting name, e.g. `dbms.memory.heap.max_size`.
    pub name: String,
    /// Human-readable description.
    pub description: Option<String>,
    /// Default value, as written in a config file.
    #[serde(rename = "default")]
    pub default_value: Option<String>,
    /// Description of the accepted values.
    pub valid_values: Option<String>,
    /// Whether the setting is deprecated.
    pub deprecated: bool,
    /// Whether the setting is internal (unsupported).
    pub internal: bool,
    /// Whether the setting can be changed at runtime.
    pub dynamic: bool,
    /// Name of the setting that replaces this one, if any.
    pub replaced_by: Option<String>,
}

impl SettingDescriptor {
    /// Create a descriptor with just a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Mark the descriptor deprecated.
    #[must_use]
    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Mark the descriptor internal.
    #[must_use]
    pub fn internal(mut self) -> Self {
        self.internal = true;
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the default value.
    #[must_use]
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_plain() {
        let d = SettingDescriptor::new("dbms.active_database");
        assert_eq!(d.name, "dbms.active_database");
        assert!(!d.deprecated);
        assert!(!d.internal);
        assert!(d.description.is_none());
    }

    #[test]
    fn test_builders() {
        let d = SettingDescriptor::new("unsupported.dbms.x")
            .internal()
            .deprecated()
            .with_description("Something")
            .with_default("42");
        assert!(d.internal);
        assert!(d.deprecated);
        assert_eq!(d.description.as_deref(), Some("Something"));
        assert_eq!(d.default_value.as_deref(), Some("42"));
    }
}
