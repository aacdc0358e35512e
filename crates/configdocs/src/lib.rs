//! `configdocs` - Filter and render configuration setting reference docs
//!
//! This library resolves display options and a setting filter from a flat
//! option map, and hands them to a [`generator::DocumentGenerator`] that
//! renders AsciiDoc for the settings the filter accepts.
//!
//! ```
//! use configdocs::{resolve, CapturedOutput, OptionMap, SettingDescriptor};
//!
//! let mut options = OptionMap::new();
//! options.insert("prefix", "dbms.");
//!
//! let mut out = CapturedOutput::new();
//! let resolved = resolve(&options, None, &mut out);
//!
//! assert_eq!(resolved.id, "settings-reference");
//! assert!(resolved.filter.accepts(&SettingDescriptor::new("dbms.mode")));
//! assert!(!resolved.filter.accepts(&SettingDescriptor::new("dbms.secret").internal()));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod filter;
pub mod generator;
pub mod logging;
pub mod options;
pub mod output;
pub mod resolve;
pub mod write;

pub use config::Config;
pub use descriptor::SettingDescriptor;
pub use error::{Error, Result};
pub use filter::{Condition, SettingFilter};
pub use logging::init_logging;
pub use options::OptionMap;
pub use output::{print_usage, CapturedOutput, Console, OutputSink};
pub use resolve::{resolve, OutputTarget, ResolvedConfig};
pub use write::{run, write_document};
