// Atomic JSON writing for merged catalogs and reports
use crate::{Result, StorageError};
use atomicwrites::{AllowOverwrite, AtomicFile};
use charmerge_core::MergeReport;
use serde::Serialize;
use serde_json::Value;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Write records as pretty-printed JSON (2-space indent).
///
/// Non-ASCII text is written as-is and object keys keep their order. The
/// target is replaced atomically; parent directories are created.
pub fn write_catalog<P: AsRef<Path>>(path: P, records: &[Value]) -> Result<()> {
    write_json(path.as_ref(), records)?;
    debug!("Wrote {} records to {:?}", records.len(), path.as_ref());
    Ok(())
}

/// Write a merge report next to the catalog
pub fn write_report<P: AsRef<Path>>(path: P, report: &MergeReport) -> Result<()> {
    write_json(path.as_ref(), report)
}

/// Write any serializable value the same way as [`write_catalog`]
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let data = serde_json::to_vec_pretty(value)?;

    // Bare file names get an explicit directory so the temp file lands next to them.
    let path = match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Path::new(".").join(path),
        _ => path.to_path_buf(),
    };
    let path = path.as_path();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| StorageError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    AtomicFile::new(path, AllowOverwrite)
        .write(|file| file.write_all(&data))
        .map_err(|e| StorageError::Write {
            path: path.to_path_buf(),
            source: match e {
                atomicwrites::Error::Internal(e) | atomicwrites::Error::User(e) => e,
            },
        })
}
