use std::fs;
use std::path::{Path, PathBuf};

use crate::error::JournalError;

/// File name offered for the journal download.
pub const EXPORT_FILE_NAME: &str = "growth_journal.csv";
/// MIME type of the journal download.
pub const EXPORT_MIME: &str = "text/csv";

/// A rendered journal download, ready to be handed to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalExport {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl JournalExport {
    #[must_use]
    pub fn csv(bytes: Vec<u8>) -> Self {
        Self {
            file_name: EXPORT_FILE_NAME,
            mime: EXPORT_MIME,
            bytes,
        }
    }

    /// Writes the export into `dir`, creating the directory if needed, and
    /// returns the full path. An existing file with the same name is replaced.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Io` if the directory or file cannot be written.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, JournalError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name);
        fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}
