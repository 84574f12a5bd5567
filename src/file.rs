// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::config::options::ExportFormat;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("{path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("serialize: {0}")]
    Json(#[from] serde_json::Error),
    #[error("path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Write one value (a record, an error object) to `path`.
/// Json → pretty printed. Text → a single compact line.
pub fn write_value<T: Serialize>(path: &Path, value: &T, format: ExportFormat) -> Result<PathBuf, ExportError> {
    let contents = match format {
        ExportFormat::Json => serde_json::to_string_pretty(value)?,
        ExportFormat::Text => serde_json::to_string(value)?,
    };
    write_file(path, contents.as_bytes())
}

/// Write a list. Json → one pretty array. Text → one compact object per line.
pub fn write_list<T: Serialize>(path: &Path, items: &[T], format: ExportFormat) -> Result<PathBuf, ExportError> {
    match format {
        ExportFormat::Json => {
            let contents = serde_json::to_string_pretty(items)?;
            write_file(path, contents.as_bytes())
        }
        ExportFormat::Text => {
            prepare_parent(path)?;
            let file = File::create(path).map_err(|e| io_err(path, e))?;
            let mut out = BufWriter::new(file);
            for item in items {
                serde_json::to_writer(&mut out, item)?;
                out.write_all(b"\n").map_err(|e| io_err(path, e))?;
            }
            out.flush().map_err(|e| io_err(path, e))?;
            debug!(path = %path.display(), lines = items.len(), "wrote lines");
            Ok(path.to_path_buf())
        }
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<PathBuf, ExportError> {
    prepare_parent(path)?;
    fs::write(path, bytes).map_err(|e| io_err(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote file");
    Ok(path.to_path_buf())
}

fn prepare_parent(path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
    }
    Ok(())
}

fn io_err(path: &Path, source: io::Error) -> ExportError {
    ExportError::Io { path: path.to_path_buf(), source }
}
