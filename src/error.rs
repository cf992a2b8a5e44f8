//! Error type shared by every stage of the build.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictError {
    /// A line in `LANGUAGES.tsv` or a data file has the wrong shape.
    #[error("while processing line {line} of {}: {reason}", .file.display())]
    Parse {
        file: PathBuf,
        line: usize,
        reason: String,
    },

    /// An input file is not valid UTF-8.
    #[error("{} is not valid UTF-8", .file.display())]
    Decode { file: PathBuf },

    /// A requested code has no row in the language table.
    #[error("unknown language code: {0}")]
    UnknownLanguage(String),

    /// A requested build target is not one we know how to build.
    #[error("unsupported build target: {0}")]
    UnsupportedTarget(String),

    #[error("invalid build config {}: {source}", .file.display())]
    Config {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize build report: {0}")]
    Report(#[source] serde_json::Error),

    /// The underlying `io::Error` is kept as-is in `source`.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DictError {
    /// For `map_err` at filesystem call sites.
    pub fn io(path: &Path) -> impl FnOnce(io::Error) -> DictError + '_ {
        move |source| DictError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DictError>;
