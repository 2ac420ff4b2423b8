//! File system helpers for the application layer.
//!
//! Validates the expression file given on the command line and opens the
//! tree-details log. Uses the verbose logging macros from the parent `app` module.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Error as IoError};
use std::path::Path;
// Use super:: for macros defined in app/mod.rs
use super::error::AppError;
use super::verbose_eprintln;

/// Checks that `input_file` exists and is a regular file.
///
/// # Errors
/// Returns `AppError::InvalidPath` if the path is missing or is not a file.
pub fn validate_input_file(input_file: &Path, quiet_mode: bool) -> Result<(), AppError> {
    if !input_file.exists() {
        let error_msg = format!("File not found: {}", input_file.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    if !input_file.is_file() {
        let error_msg = format!("Path is not a file: {}", input_file.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    Ok(())
}

/// Opens the tree-details log for writing.
///
/// The file is truncated so it only ever describes the current run. The
/// returned `BufWriter` flushes when dropped; callers that need the content on
/// disk earlier flush it themselves.
pub fn init_details_log_writer(file_path: &Path) -> Result<BufWriter<File>, IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true) // Overwrite details log each run.
        .open(file_path)?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn accepts_existing_files_only() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("input.txt");
        std::fs::write(&file_path, "^N$").unwrap();

        assert!(validate_input_file(&file_path, true).is_ok());
        assert!(matches!(
            validate_input_file(&dir.path().join("absent.txt"), true),
            Err(AppError::InvalidPath(_))
        ));
        assert!(matches!(
            validate_input_file(dir.path(), true),
            Err(AppError::InvalidPath(_))
        ));
    }

    #[test]
    fn details_log_is_truncated_on_open() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("details.log");
        std::fs::write(&log_path, "stale content from an older run").unwrap();

        let mut writer = init_details_log_writer(&log_path).unwrap();
        write!(writer, "fresh").unwrap();
        writer.flush().unwrap();

        assert_eq!(std::fs::read_to_string(&log_path).unwrap(), "fresh");
    }
}
