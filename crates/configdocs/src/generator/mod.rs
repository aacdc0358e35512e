//! Document generation.
//!
//! The resolver only needs something that can turn a filter plus three
//! display strings into text; that seam is [`DocumentGenerator`]. The bundled
//! implementation renders AsciiDoc from a [`Catalog`] of settings loaded from
//! a TOML file.
//!
//! # Example
//!
//! ```
//! use configdocs::generator::{AsciiDocGenerator, Catalog, DocumentGenerator};
//! use configdocs::{SettingDescriptor, SettingFilter};
//!
//! let catalog = Catalog::new(vec![SettingDescriptor::new("dbms.mode")]);
//! let generator = AsciiDocGenerator::new(catalog);
//!
//! let doc = generator
//!     .render(&SettingFilter::accept_all(), "settings", "Settings", "config_")
//!     .unwrap();
//! assert!(doc.contains("[[config_dbms.mode]]"));
//! ```

mod asciidoc;
mod catalog;

pub use asciidoc::AsciiDocGenerator;
pub use catalog::Catalog;

use crate::error::Result;
use crate::filter::SettingFilter;

/// Renders documentation for the settings a filter accepts.
pub trait DocumentGenerator {
    /// Render the document.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoMatchingElement`] when nothing required for
    /// the document can be found.
    fn render(
        &self,
        filter: &SettingFilter,
        id: &str,
        title: &str,
        id_prefix: &str,
    ) -> Result<String>;
}
