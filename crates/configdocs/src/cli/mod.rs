//! Command-line interface for configdocs.
//!
//! Parsing is done by clap; [`Cli::option_map`] then flattens the parsed
//! flags into the [`OptionMap`] the resolver works on.

mod args;

use std::path::PathBuf;

use clap::Parser;

pub use args::{DocArgs, FilterArgs};

use crate::options::{
    OptionMap, DEPRECATED, DEPRECATED_ONLY, ID, ID_PREFIX, INTERNAL, NAME, NAMES, PREFIX, TITLE,
    UNSUPPORTED,
};

/// configdocs - Generate configuration settings reference docs
///
/// Renders AsciiDoc documentation for the settings in a catalog, filtered
/// by name, prefix and deprecated/internal flags.
#[derive(Debug, Parser)]
#[command(name = "configdocs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Settings catalog to document (overrides catalog.path)
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    pub quiet: bool,

    #[command(flatten)]
    pub doc: DocArgs,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Output file; prints to stdout when omitted
    #[arg(value_name = "OUT_FILE")]
    pub out_file: Option<PathBuf>,
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }

    /// Collect the document and filter flags into an option map.
    ///
    /// Only flags that were given on the command line appear in the map.
    #[must_use]
    pub fn option_map(&self) -> OptionMap {
        let mut options = OptionMap::new();

        let valued = [
            (ID, &self.doc.id),
            (TITLE, &self.doc.title),
            (ID_PREFIX, &self.doc.id_prefix),
            (NAME, &self.filters.name),
            (NAMES, &self.filters.names),
            (PREFIX, &self.filters.prefix),
        ];
        for (key, value) in valued {
            if let Some(value) = value {
                options.insert(key, value.as_str());
            }
        }

        for (key, value) in [
            (DEPRECATED, &self.filters.deprecated),
            (INTERNAL, &self.filters.internal),
        ] {
            match value {
                Some(Some(value)) => options.insert(key, value.as_str()),
                Some(None) => options.insert_flag(key),
                None => {}
            }
        }

        if self.filters.deprecated_only {
            options.insert_flag(DEPRECATED_ONLY);
        }
        if self.filters.unsupported {
            options.insert_flag(UNSUPPORTED);
        }
        options
    }
}
