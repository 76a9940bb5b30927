//! Error types for the matterfmt library
//!
//! Every fallible operation in the crate returns [`Result`]. The
//! normalizer itself is total; errors only come from reading, parsing
//! and writing documents, or from a batch run started without input.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Placeholder used when a document is parsed without a backing file
pub const UNKNOWN_PATH: &str = "<input>";

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum MatterFmtError {
    /// I/O errors that carry no path information
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Source file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Source file exists but could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Destination file could not be written
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Front matter data lines are not a YAML mapping
    #[error("Malformed front matter in {path}: {reason}")]
    MalformedFrontMatter { path: PathBuf, reason: String },

    /// Batch driver started without piped input
    #[error("No input: pipe file paths on stdin or pass them as arguments")]
    NoInput,

    /// Invalid command-line or configuration value
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, MatterFmtError>;

impl MatterFmtError {
    /// Create a new file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a new read error
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a new write error
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Create a new malformed front matter error
    pub fn malformed_front_matter(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedFrontMatter {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a new invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Attach the source path to an error raised while parsing in memory.
    ///
    /// Only front matter errors still carrying [`UNKNOWN_PATH`] are
    /// rewritten; everything else is returned unchanged.
    pub fn with_path(self, path: &Path) -> Self {
        match self {
            Self::MalformedFrontMatter { path: old, reason } if old == Path::new(UNKNOWN_PATH) => {
                Self::MalformedFrontMatter {
                    path: path.to_path_buf(),
                    reason,
                }
            }
            other => other,
        }
    }

    /// Whether the error came from the filesystem rather than the content
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Self::Io(_) | Self::FileNotFound { .. } | Self::Read { .. } | Self::Write { .. }
        )
    }
}
