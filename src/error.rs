use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure to read or write the persisted record file.
#[derive(Debug)]
pub enum RecordStoreError {
    Missing { path: PathBuf },
    Io { path: PathBuf, source: io::Error },
    Corrupt { path: PathBuf, contents: String },
}

impl fmt::Display for RecordStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { path } => write!(f, "record file {} does not exist", path.display()),
            Self::Io { path, source } => {
                write!(f, "record file {}: {source}", path.display())
            }
            Self::Corrupt { path, contents } => write!(
                f,
                "record file {} does not hold a score: {contents:?}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for RecordStoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Failure to load the optional settings override file.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read settings {}: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse settings {}: {source}", path.display())
            }
            Self::Invalid { field, reason } => write!(f, "invalid setting `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid { .. } => None,
        }
    }
}
