use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::RecordStoreError;

/// The all-time record, kept as a bare decimal number in a text file.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<u32, RecordStoreError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                RecordStoreError::Missing {
                    path: self.path.clone(),
                }
            } else {
                RecordStoreError::Io {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;
        contents
            .trim()
            .parse()
            .map_err(|_| RecordStoreError::Corrupt {
                path: self.path.clone(),
                contents,
            })
    }

    /// A missing or unreadable record starts the player at zero.
    pub fn load_or_default(&self) -> u32 {
        match self.load() {
            Ok(record) => {
                log::info!("Record {} loaded from {}", record, self.path.display());
                record
            }
            Err(err) => {
                log::warn!("{err}; starting with record 0");
                0
            }
        }
    }

    /// Overwrites the file with `record`, no trailing newline.
    pub fn save(&self, record: u32) -> Result<(), RecordStoreError> {
        fs::write(&self.path, record.to_string()).map_err(|source| RecordStoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
