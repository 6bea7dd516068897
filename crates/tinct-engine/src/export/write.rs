use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GradientError, Result};

/// Writes `bytes` to `path` so readers never see a partial file.
///
/// The bytes go to a hidden sibling first and are renamed over `path`. On any
/// failure the sibling is removed and `path` is left as it was.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let fail = |e: std::io::Error| GradientError::ExportWriteFailure {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let temp = temp_sibling(path);
    if let Err(e) = fs::write(&temp, bytes) {
        let _ = fs::remove_file(&temp);
        return Err(fail(e));
    }
    if let Err(e) = fs::rename(&temp, path) {
        let _ = fs::remove_file(&temp);
        return Err(fail(e));
    }
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "export".to_string());
    path.with_file_name(format!(".{name}.{}.tmp", std::process::id()))
}
