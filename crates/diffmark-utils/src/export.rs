//! Export text to a file in a target directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while exporting.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Invalid export file name '{0}'")]
    InvalidFileName(String),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn io_error(path: &Path, source: io::Error) -> ExportError {
    ExportError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn validate_file_name(file_name: &str) -> Result<(), ExportError> {
    let invalid = file_name.is_empty()
        || file_name == "."
        || file_name == ".."
        || file_name.contains(['/', '\\'])
        || file_name.contains('\0');
    if invalid {
        return Err(ExportError::InvalidFileName(file_name.to_string()));
    }
    Ok(())
}

/// Write `data` to `dir/file_name` and return the final path.
///
/// The content goes to a `.part` file first and is renamed into place, so a
/// failed export never leaves a truncated file under the requested name.
/// An existing file with the same name is replaced.
pub fn export_file(data: &str, file_name: &str, dir: &Path) -> Result<PathBuf, ExportError> {
    validate_file_name(file_name)?;

    let target = dir.join(file_name);
    let partial = dir.join(format!(".{}.part", file_name));

    fs::create_dir_all(dir).map_err(|e| io_error(dir, e))?;

    if let Err(e) = fs::write(&partial, data) {
        let _ = fs::remove_file(&partial);
        return Err(io_error(&partial, e));
    }

    if let Err(e) = fs::rename(&partial, &target) {
        let _ = fs::remove_file(&partial);
        return Err(io_error(&target, e));
    }

    log::info!("Exported {} bytes to {}", data.len(), target.display());
    Ok(target)
}
