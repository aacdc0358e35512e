//! CLI argument groups.

use clap::Args;

/// Display options for the generated document.
#[derive(Debug, Default, Args)]
#[command(next_help_heading = "Options")]
pub struct DocArgs {
    /// ID to use for settings summary [default: settings-reference]
    #[arg(long, value_name = "ID")]
    pub id: Option<String>,

    /// Title to use for settings summary [default: Settings reference]
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,

    /// ID to prepend to generated ID for each setting details [default: config_]
    #[arg(long, value_name = "PREFIX")]
    pub id_prefix: Option<String>,
}

/// Options selecting which settings are documented.
#[derive(Debug, Default, Args)]
#[command(next_help_heading = "Filter options")]
pub struct FilterArgs {
    /// Include deprecated settings; any value but "true" excludes them
    #[arg(long, num_args = 0..=1, require_equals = true, value_name = "BOOL")]
    pub deprecated: Option<Option<String>>,

    /// Include only deprecated settings
    #[arg(long)]
    pub deprecated_only: bool,

    /// Include internal settings; any value but "true" excludes them
    #[arg(long, num_args = 0..=1, require_equals = true, value_name = "BOOL")]
    pub internal: Option<Option<String>>,

    /// Single setting by name
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Multiple settings by name
    #[arg(long, value_name = "NAME1,NAME2")]
    pub names: Option<String>,

    /// All settings whose namespace match <PREFIX>
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Include internal/unsupported settings
    #[arg(long)]
    pub unsupported: bool,
}
