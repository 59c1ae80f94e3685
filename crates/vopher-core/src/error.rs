use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop the whole run before any plugin is touched.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read plugin list {path:?}: {source}")]
    ReadList { path: PathBuf, source: io::Error },

    #[error("empty plugin-file {0:?}")]
    EmptyList(PathBuf),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("unknown ui {0:?}, expected one of: oneline, simple, quiet")]
    UnknownUi(String),

    #[error("'clean' needs the --force flag")]
    CleanNeedsForce,
}

pub type Result<T> = std::result::Result<T, Error>;

/// A malformed line in a plugin list.
#[derive(Debug, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error("invalid url {url:?}: {source}")]
    InvalidUrl {
        url:    String,
        source: url::ParseError,
    },

    #[error("unsupported url scheme {0:?}, expected http or https")]
    UnsupportedScheme(String),

    #[error("can't derive a plugin name from {0:?}")]
    MissingName(String),

    #[error("invalid plugin name {0:?}")]
    InvalidName(String),

    #[error("plugin {0:?} is listed more than once")]
    DuplicateName(String),

    #[error("invalid strip count {0:?}")]
    InvalidStrip(String),

    #[error(transparent)]
    InvalidChecksum(#[from] vopher_verify::VerifyError),

    #[error("unknown option {0:?}")]
    UnknownOption(String),

    #[error("expected `URL`, `NAME URL` or `NAME URL OPTION...`")]
    MissingUrl,
}

/// Why a single plugin could not be acquired. Never fatal to sibling plugins.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] vopher_fetch::FetchError),

    #[error(transparent)]
    Archive(#[from] vopher_archive::Error),

    #[error("{url:?}: {filename:?} is not a supported archive")]
    NotAnArchive { url: String, filename: String },

    #[error("failed to stage download: {0}")]
    Io(#[from] io::Error),

    #[error("acquisition task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
