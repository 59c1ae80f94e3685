use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unsupported archive format: {0:?}")]
    UnsupportedFormat(String),

    #[error("entry with absolute filename {0:?}")]
    AbsolutePath(String),

    #[error("entry {0:?} escapes the target directory")]
    PathEscape(String),

    #[error("vimball: strange preamble")]
    StrangePreamble,

    #[error("vimball: missing line count for {name:?}")]
    MissingLineCount { name: String },

    #[error("vimball: while parsing line count for {name:?}: {source}")]
    InvalidLineCount {
        name:   String,
        source: ParseIntError,
    },

    #[error("vimball: got negative line count for {name:?}: {count}")]
    NegativeLineCount { name: String, count: i64 },

    #[error("vimball: unexpected end of archive in {name:?}: expected {expected} lines, got {read}")]
    Truncated {
        name:     String,
        expected: usize,
        read:     usize,
    },

    #[error("archive is corrupted: {0}")]
    Corrupted(String),

    #[error("failed to extract '{path}': {source}")]
    ExtractionFailed { path: PathBuf, source: io::Error },

    #[error("failed to create directory: {path}: {source}")]
    DirectoryCreationFailed { path: PathBuf, source: io::Error },

    #[error("suffix {0:?} must start with '.'")]
    InvalidSuffix(String),

    #[error("suffix {0:?} is already registered")]
    DuplicateSuffix(String),

    #[error("suffix {suffix:?} would never match: {shadowed_by:?} is registered before it")]
    ShadowedSuffix { suffix: String, shadowed_by: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
