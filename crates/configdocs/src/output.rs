//! Console output behind an injectable sink.
//!
//! Usage text, missing-option advisories and the rendered document all go
//! through an [`OutputSink`], so tests can capture them with
//! [`CapturedOutput`] instead of writing to the real console.

use std::io::Write;

use crate::resolve::{DEFAULT_ID, DEFAULT_ID_PREFIX, DEFAULT_TITLE};

/// Destination for user-facing console lines.
pub trait OutputSink {
    /// Write one line of text.
    fn line(&mut self, text: &str);
}

/// Sink that writes to standard output.
#[derive(Debug, Default)]
pub struct Console;

impl Console {
    /// Create a console sink.
    #[must_use]
    pub fn stdout() -> Self {
        Self
    }
}

impl OutputSink for Console {
    fn line(&mut self, text: &str) {
        let mut out = std::io::stdout().lock();
        // A closed stdout (e.g. `| head`) is not worth aborting over.
        let _ = writeln!(out, "{text}");
    }
}

/// Sink that records lines in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    lines: Vec<String>,
}

impl CapturedOutput {
    /// Create an empty capture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured lines, in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Captured lines joined with newlines.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl OutputSink for CapturedOutput {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}

fn option_line(sink: &mut dyn OutputSink, flag: &str, help: &str, default: &str) {
    sink.line(&format!("    {flag:<30}{help} [{default}]"));
}

/// Print the usage and options summary.
pub fn print_usage(sink: &mut dyn OutputSink) {
    sink.line("Usage: configdocs [--options] <out_file>");
    sink.line(
        "    No options are mandatory but in most cases user will want to set --id, --id-prefix and --title.",
    );
    sink.line("    If no <out-file> is given prints to stdout.");
    sink.line("Options:");
    option_line(sink, "--id", "ID to use for settings summary", DEFAULT_ID);
    option_line(
        sink,
        "--id-prefix",
        "ID to prepend to generated ID for each setting details",
        DEFAULT_ID_PREFIX,
    );
    option_line(sink, "--title", "Title to use for settings summary", DEFAULT_TITLE);
    sink.line("Filter options:");
    option_line(sink, "--deprecated", "Include deprecated settings", "true");
    option_line(
        sink,
        "--deprecated-only",
        "Include only deprecated settings",
        "false",
    );
    option_line(sink, "--name=<name>", "Single setting by name", "");
    option_line(
        sink,
        "--names=<name1>,<name2>",
        "Multiple settings by name",
        "",
    );
    option_line(
        sink,
        "--prefix=<prefix>",
        "All settings whose namespace match <prefix>",
        "",
    );
    option_line(
        sink,
        "--unsupported",
        "Include internal/unsupported settings",
        "false",
    );
}
