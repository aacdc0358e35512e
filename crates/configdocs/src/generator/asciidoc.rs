//! AsciiDoc rendering of a settings catalog.

use std::fmt::Write;

use tracing::{debug, info};

use super::{Catalog, DocumentGenerator};
use crate::descriptor::SettingDescriptor;
use crate::error::{Error, Result};
use crate::filter::SettingFilter;

const NO_DESCRIPTION: &str = "No description available.";

/// Renders a summary table followed by one details table per setting.
#[derive(Debug, Clone, Default)]
pub struct AsciiDocGenerator {
    catalog: Catalog,
}

impl AsciiDocGenerator {
    /// Create a generator over a catalog.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    fn selected<'a>(&'a self, filter: &SettingFilter) -> Vec<&'a SettingDescriptor> {
        let mut settings: Vec<_> = self
            .catalog
            .settings()
            .iter()
            .filter(|s| filter.accepts(s))
            .collect();
        settings.sort_by(|a, b| a.name.cmp(&b.name));
        settings
    }
}

impl DocumentGenerator for AsciiDocGenerator {
    fn render(
        &self,
        filter: &SettingFilter,
        id: &str,
        title: &str,
        id_prefix: &str,
    ) -> Result<String> {
        let settings = self.selected(filter);
        if settings.is_empty() {
            return Err(Error::no_matching_element(filter.to_string()));
        }
        info!(
            selected = settings.len(),
            total = self.catalog.len(),
            "Rendering settings"
        );

        let mut doc = String::new();
        summary(&mut doc, &settings, id, title, id_prefix);
        for setting in &settings {
            debug!(name = %setting.name, "Rendering setting details");
            details(&mut doc, setting, id_prefix);
        }
        Ok(doc)
    }
}

/// Escape characters that would break an AsciiDoc table cell.
fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// First sentence of the description, for the summary table.
fn short_description(setting: &SettingDescriptor) -> String {
    let description = setting.description.as_deref().unwrap_or(NO_DESCRIPTION);
    let short = match description.find(". ") {
        Some(end) => &description[..=end],
        None => description,
    };
    cell(short.trim())
}

// Writing to a String cannot fail.
fn summary(
    doc: &mut String,
    settings: &[&SettingDescriptor],
    id: &str,
    title: &str,
    id_prefix: &str,
) {
    let _ = writeln!(doc, "[[{id}]]");
    let _ = writeln!(doc, ".{title}");
    let _ = writeln!(doc, "[options=\"header\",cols=\"<1m,<2\"]");
    let _ = writeln!(doc, "|===");
    let _ = writeln!(doc, "|Name|Description");
    for setting in settings {
        let name = &setting.name;
        let _ = writeln!(
            doc,
            "|<<{id_prefix}{name},{name}>>|{}",
            short_description(setting)
        );
    }
    let _ = writeln!(doc, "|===");
    let _ = writeln!(doc);
}

fn details(doc: &mut String, setting: &SettingDescriptor, id_prefix: &str) {
    let name = &setting.name;
    let description = setting.description.as_deref().unwrap_or(NO_DESCRIPTION);

    let _ = writeln!(doc, "[[{id_prefix}{name}]]");
    let _ = writeln!(doc, ".{name}");
    let _ = writeln!(doc, "[cols=\"<1s,<4\"]");
    let _ = writeln!(doc, "|===");
    let _ = writeln!(doc, "|Description");
    let _ = writeln!(doc, "a|{}", cell(description));
    if let Some(valid) = &setting.valid_values {
        let _ = writeln!(doc, "|Valid values");
        let _ = writeln!(doc, "a|{}", cell(valid));
    }
    if let Some(default) = &setting.default_value {
        let _ = writeln!(doc, "|Default value");
        let _ = writeln!(doc, "m|{}", cell(default));
    }
    if setting.dynamic {
        let _ = writeln!(doc, "|Dynamic");
        let _ = writeln!(doc, "a|true");
    }
    if setting.deprecated {
        let _ = writeln!(doc, "|Deprecated");
        match &setting.replaced_by {
            Some(replacement) => {
                let _ = writeln!(
                    doc,
                    "a|The `{name}` configuration setting has been deprecated, \
                     please use <<{id_prefix}{replacement},{replacement}>> instead."
                );
            }
            None => {
                let _ = writeln!(
                    doc,
                    "a|The `{name}` configuration setting has been deprecated."
                );
            }
        }
    }
    if setting.internal {
        let _ = writeln!(doc, "|Internal");
        let _ = writeln!(doc, "a|This setting is internal and not supported.");
    }
    let _ = writeln!(doc, "|===");
    let _ = writeln!(doc);
}
