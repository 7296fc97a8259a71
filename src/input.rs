//! File boundary for the section updater.
//!
//! Reading treats a missing file as an empty document. Writing goes through a uniquely
//! named temporary file next to the real target followed by a rename, so a target is
//! either fully rewritten or left untouched. Relative paths are resolved against an explicit base
//! directory rather than the process working directory.

use crate::error::{Error, Result};
use crate::report::Report;
use crate::update::{self, UpdateRequest};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

#[must_use]
/// Resolve `path` against `base` unless it is already absolute.
pub fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Read a document, returning `None` if the file does not exist.
///
/// # Errors
///
/// Returns [`Error::NotUtf8`] if the file is not valid UTF-8, or [`Error::Io`] for any
/// other failure except a missing file.
pub fn read_document(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) if e.kind() == io::ErrorKind::InvalidData => Err(Error::NotUtf8 {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Replace the contents of `path` with `text` atomically.
///
/// Symlinks are followed so the link survives and its target receives the update.
/// Existing permissions are carried over to the new file. The temporary file gets a
/// unique name, so concurrent writers never share it, and is removed on any failure.
///
/// # Errors
///
/// Returns [`Error::Io`] if the temporary file cannot be written or renamed.
pub fn write_document(path: &Path, text: &str) -> Result<()> {
    let target = match fs::canonicalize(path) {
        Ok(real) => real,
        Err(e) if e.kind() == io::ErrorKind::NotFound => path.to_path_buf(),
        Err(e) => return Err(Error::io(path, e)),
    };
    if target.file_name().is_none() {
        return Err(Error::io(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
        ));
    }
    let parent = match target.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| Error::io(parent, e))?;
    tmp.write_all(text.as_bytes())
        .map_err(|e| Error::io(tmp.path(), e))?;

    if let Ok(meta) = fs::metadata(&target) {
        fs::set_permissions(tmp.path(), meta.permissions())
            .map_err(|e| Error::io(tmp.path(), e))?;
    }

    tmp.persist(&target)
        .map_err(|e| Error::io(&target, e.error))?;

    debug!(path = %target.display(), bytes = text.len(), "wrote document");
    Ok(())
}

/// Apply a single request to its target file, resolved against `base`.
///
/// The file is written only when the update changes it and `dry_run` is false, so an
/// unchanged document keeps its modification time.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read or written, or [`Error::Format`] if
/// a heading anchor cannot be resolved.
pub fn update_file(base: &Path, request: &UpdateRequest, dry_run: bool) -> Result<Report> {
    let path = resolve_path(base, request.target_file());
    let existing = read_document(&path)?;
    let created_file = existing.is_none();
    if created_file {
        debug!(path = %path.display(), "target file does not exist yet");
    }

    let update = update::apply(existing.as_deref().unwrap_or_default(), request)?;
    let written = update.changed() && !dry_run;
    if written {
        write_document(&path, &update.text)?;
    }

    info!(
        path = %path.display(),
        section = %request.section_id(),
        outcome = %update.outcome.message(),
        written,
        "section update"
    );

    Ok(Report {
        file: path,
        section_id: request.section_id().to_string(),
        outcome: update.outcome,
        created_file,
        written,
    })
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
