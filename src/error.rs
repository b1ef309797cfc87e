use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BootfigError {
    #[error("Could not read config file {path}: {source}")]
    SourceUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not decode {path}: {source}")]
    DecodeFailed {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Unknown key '{key}' in {path} (line {line})")]
    UnknownKey {
        key: String,
        path: PathBuf,
        line: usize,
    },

    #[error("Unknown keys in config file:\n{}", list(.0))]
    UnknownKeys(Vec<BootfigError>),

    #[error("Incomplete configuration in {path}: {source}")]
    IncompleteConfig {
        path: PathBuf,
        source: confique::Error,
    },

    #[error("Missing environment variable: {name} (referenced by '{key}')")]
    MissingEnvironmentBinding { name: String, key: String },

    #[error("Configuration tree could not be rebuilt: {reason}")]
    TreeShape { reason: String },

    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn list(errors: &[BootfigError]) -> String {
    errors
        .iter()
        .map(|e| format!("  {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Coarse classification of a [`BootfigError`], as reported to operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    SourceUnreadable,
    DecodeFailed,
    MissingEnvironmentBinding,
    Internal,
}

impl BootfigError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BootfigError::SourceUnreadable { .. } => ErrorKind::SourceUnreadable,
            BootfigError::DecodeFailed { .. }
            | BootfigError::UnknownKey { .. }
            | BootfigError::UnknownKeys(_)
            | BootfigError::IncompleteConfig { .. } => ErrorKind::DecodeFailed,
            BootfigError::MissingEnvironmentBinding { .. } => {
                ErrorKind::MissingEnvironmentBinding
            }
            BootfigError::TreeShape { .. } | BootfigError::WriteFailed { .. } => {
                ErrorKind::Internal
            }
        }
    }
}

impl ErrorKind {
    /// Stable label for log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::SourceUnreadable => "source_unreadable",
            ErrorKind::DecodeFailed => "decode_failed",
            ErrorKind::MissingEnvironmentBinding => "missing_environment_binding",
            ErrorKind::Internal => "internal",
        }
    }
}
