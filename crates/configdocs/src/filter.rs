//! Setting filter built from the option map.
//!
//! Every recognized option key contributes zero or more [`Condition`]s; a
//! descriptor passes the filter when it satisfies all of them. Unless the
//! `unsupported` key is present, a final `internal == false` condition is
//! appended, whatever the `internal` key itself said.

use std::fmt;

use tracing::{debug, trace};

use crate::descriptor::SettingDescriptor;
use crate::options::{
    OptionMap, DEPRECATED, DEPRECATED_ONLY, INTERNAL, NAME, NAMES, PREFIX, UNSUPPORTED,
};

/// One conjunct of a [`SettingFilter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// The setting must not be deprecated.
    NotDeprecated,
    /// The setting must be deprecated.
    DeprecatedOnly,
    /// The setting must not be internal.
    NotInternal,
    /// The setting name must equal this exactly.
    Name(String),
    /// The setting name must be one of these.
    Names(Vec<String>),
    /// The setting name must start with this.
    Prefix(String),
}

impl Condition {
    /// Evaluate the condition against a descriptor.
    #[must_use]
    pub fn matches(&self, setting: &SettingDescriptor) -> bool {
        match self {
            Self::NotDeprecated => !setting.deprecated,
            Self::DeprecatedOnly => setting.deprecated,
            Self::NotInternal => !setting.internal,
            Self::Name(name) => setting.name == *name,
            Self::Names(names) => names.iter().any(|n| *n == setting.name),
            Self::Prefix(prefix) => setting.name.starts_with(prefix.as_str()),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotDeprecated => f.write_str("not deprecated"),
            Self::DeprecatedOnly => f.write_str("deprecated"),
            Self::NotInternal => f.write_str("not internal"),
            Self::Name(name) => write!(f, "name == {name:?}"),
            Self::Names(names) => write!(f, "name in {names:?}"),
            Self::Prefix(prefix) => write!(f, "name starts with {prefix:?}"),
        }
    }
}

/// Combined inclusion test over setting descriptors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingFilter {
    conditions: Vec<Condition>,
}

impl SettingFilter {
    /// A filter that accepts every setting.
    #[must_use]
    pub fn accept_all() -> Self {
        Self::default()
    }

    /// Build the filter from the recognized keys of an option map.
    ///
    /// Unrecognized keys are ignored.
    #[must_use]
    pub fn from_options(options: &OptionMap) -> Self {
        let mut filter = Self::accept_all();

        for (key, value) in options.iter() {
            let added = conditions_for(key, value);
            if added.is_empty() {
                trace!(key, "Option adds no filter condition");
            }
            for condition in added {
                debug!(key, condition = %condition, "Adding filter condition");
                filter = filter.and(condition);
            }
        }

        if !options.has(UNSUPPORTED) {
            filter = filter.and(Condition::NotInternal);
        }
        filter
    }

    /// Conjoin another condition.
    #[must_use]
    pub fn and(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Check whether a setting passes every condition.
    #[must_use]
    pub fn accepts(&self, setting: &SettingDescriptor) -> bool {
        self.conditions.iter().all(|c| c.matches(setting))
    }

    /// The conditions, in the order they were added.
    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }
}

impl fmt::Display for SettingFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conditions.is_empty() {
            return f.write_str("any setting");
        }
        for (i, condition) in self.conditions.iter().enumerate() {
            if i > 0 {
                f.write_str(" and ")?;
            }
            write!(f, "{condition}")?;
        }
        Ok(())
    }
}

/// `None` or a case-insensitive "true" means "include", so no condition.
fn includes(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.eq_ignore_ascii_case("true"))
}

fn conditions_for(key: &str, value: Option<&str>) -> Vec<Condition> {
    match key {
        DEPRECATED if !includes(value) => vec![Condition::NotDeprecated],
        DEPRECATED_ONLY => vec![Condition::DeprecatedOnly],
        INTERNAL if !includes(value) => vec![Condition::NotInternal],
        NAME => vec![Condition::Name(value.unwrap_or_default().to_string())],
        NAMES => {
            let names = value
                .unwrap_or_default()
                .split(',')
                .map(str::to_string)
                .collect();
            vec![Condition::Names(names)]
        }
        PREFIX => vec![Condition::Prefix(value.unwrap_or_default().to_string())],
        _ => Vec::new(),
    }
}
