// src/file.rs

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::deal::{DealRecord, COLUMNS};
use crate::error::ScanError;

/// Write all deals as one CSV file, header first, overwriting any previous run.
/// The parent directory is created if missing. The file is opened once and
/// written in full; nothing is streamed while the scan is still running.
pub fn write_deals(path: &Path, deals: &[DealRecord]) -> Result<PathBuf, ScanError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(|e| ScanError::write(parent, e))?;
        }
    }

    let mut out = csv::Writer::from_path(path).map_err(|e| ScanError::write(path, e))?;
    if deals.is_empty() {
        // serialize() emits the header with the first row; an empty set still gets one
        out.write_record(COLUMNS).map_err(|e| ScanError::write(path, e))?;
    }
    for deal in deals {
        out.serialize(deal).map_err(|e| ScanError::write(path, e))?;
    }
    out.flush().map_err(|e| ScanError::write(path, e))?;

    info!(path = %path.display(), rows = deals.len(), "deals written");
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
