//! Writing the rendered document to its target.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::generator::DocumentGenerator;
use crate::output::OutputSink;
use crate::resolve::{OutputTarget, ResolvedConfig};

/// Render the document for `resolved` and write it to its target.
///
/// Nothing is written unless rendering succeeds.
///
/// # Errors
///
/// Propagates generator failures, and fails with [`Error::FileNotFound`]
/// when the output path cannot be created.
pub fn run(
    resolved: &ResolvedConfig,
    generator: &dyn DocumentGenerator,
    sink: &mut dyn OutputSink,
) -> Result<()> {
    let doc = generator.render(
        &resolved.filter,
        &resolved.id,
        &resolved.title,
        &resolved.id_prefix,
    )?;
    write_document(&doc, &resolved.output, sink)
}

/// Write a document to stdout (through `sink`) or to a file.
///
/// Missing parent directories of a file target are created first.
///
/// # Errors
///
/// Returns [`Error::FileNotFound`] if a path component is missing and cannot
/// be created, [`Error::DirectoryCreate`] or [`Error::Io`] for other
/// file system failures.
pub fn write_document(doc: &str, target: &OutputTarget, sink: &mut dyn OutputSink) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            sink.line(doc);
            Ok(())
        }
        OutputTarget::File(path) => {
            create_parent(path)?;
            sink.line(&format!(
                "Saving docs in '{}'.",
                absolute(path)?.display()
            ));
            fs::write(path, doc).map_err(|e| io_error(path, e))?;
            info!(path = %path.display(), bytes = doc.len(), "Wrote settings docs");
            Ok(())
        }
    }
}

fn create_parent(path: &Path) -> Result<()> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    if parent.exists() {
        return Ok(());
    }

    debug!(dir = %parent.display(), "Creating output directory");
    fs::create_dir_all(parent).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            Error::file_not_found(parent)
        } else {
            Error::DirectoryCreate {
                path: parent.to_path_buf(),
                source,
            }
        }
    })
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

fn io_error(path: &Path, err: std::io::Error) -> Error {
    if err.kind() == ErrorKind::NotFound {
        Error::file_not_found(path)
    } else {
        Error::Io(err)
    }
}
