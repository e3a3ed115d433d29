// src/file.rs

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::config::options::{ExportOptions, Query};
use crate::csv::table_to_string;
use crate::data::NormalizedTable;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Write `table` according to `export` (path, headers policy, delimiter).
/// Returns the final path written to.
pub fn export_table(
    export: &ExportOptions,
    query: &Query,
    table: &NormalizedTable,
) -> Result<PathBuf, ExportError> {
    let path = export.out_path(query);
    let contents = table_to_string(table, export.include_headers, export.format.delim());
    write_text(&path, &contents)?;
    logf!("Export: {} rows → {}", table.len(), path.display());
    Ok(path)
}

/// Create missing parent directories, then create/truncate `path`.
pub fn write_text(path: &Path, contents: &str) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents).map_err(|source| ExportError::Io { path: path.to_path_buf(), source })
}

/// A user-typed output target: directories (existing, or spelled with a
/// trailing separator) get `default_filename` appended.
pub fn resolve_out_path(user_o: &str, default_filename: &str) -> PathBuf {
    if user_o.is_empty() { return PathBuf::from(default_filename); }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(user_o) || p.is_dir() {
        p.join(default_filename)
    } else {
        p
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| ExportError::Io { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}

fn looks_like_dir_hint(s: &str) -> bool {
    s.ends_with('/') || s.ends_with('\\')
}
