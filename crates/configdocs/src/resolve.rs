//! Option resolution: turns an option map into a [`ResolvedConfig`].

use std::path::PathBuf;

use tracing::debug;

use crate::filter::SettingFilter;
use crate::options::{OptionMap, ID, ID_PREFIX, TITLE};
use crate::output::OutputSink;

/// Default ID of the settings summary.
pub const DEFAULT_ID: &str = "settings-reference";

/// Default title of the settings summary.
pub const DEFAULT_TITLE: &str = "Settings reference";

/// Default prefix for per-setting IDs.
pub const DEFAULT_ID_PREFIX: &str = "config_";

/// Where the rendered document goes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    /// Standard output.
    #[default]
    Stdout,
    /// A file; missing parent directories are created.
    File(PathBuf),
}

/// Everything needed to render and write one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// ID of the settings summary.
    pub id: String,
    /// Title of the settings summary.
    pub title: String,
    /// Prefix for per-setting IDs.
    pub id_prefix: String,
    /// Which settings to document.
    pub filter: SettingFilter,
    /// Where to write the result.
    pub output: OutputTarget,
}

/// Resolve display options and the setting filter.
///
/// Each of `id`, `title` and `id-prefix` that is absent from `options` gets
/// an advisory line on `sink` and falls back to its default. A present value
/// is used verbatim, an empty string included.
pub fn resolve(
    options: &OptionMap,
    out_file: Option<PathBuf>,
    sink: &mut dyn OutputSink,
) -> ResolvedConfig {
    let id = scalar(options, sink, ID, "ID", "--id=my-id", DEFAULT_ID);
    let title = scalar(
        options,
        sink,
        TITLE,
        "title",
        "--title=my-title",
        DEFAULT_TITLE,
    );
    let id_prefix = scalar(
        options,
        sink,
        ID_PREFIX,
        "ID prefix",
        "--id-prefix=my-id-prefix",
        DEFAULT_ID_PREFIX,
    );

    let filter = SettingFilter::from_options(options);
    debug!(%filter, "Resolved setting filter");

    ResolvedConfig {
        id,
        title,
        id_prefix,
        filter,
        output: out_file.map_or(OutputTarget::Stdout, OutputTarget::File),
    }
}

fn scalar(
    options: &OptionMap,
    sink: &mut dyn OutputSink,
    key: &str,
    label: &str,
    example: &str,
    default: &str,
) -> String {
    if options.has(key) {
        return options.get(key).unwrap_or_default().to_string();
    }
    sink.line(&format!(
        "    [x] No {label} provided ({example}), using default: '{default}'"
    ));
    default.to_string()
}
