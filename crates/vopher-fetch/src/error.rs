//! Error types for vopher-fetch.

use std::io;

use thiserror::Error;
use vopher_verify::VerifyError;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{status} for {url:?}")]
    Status { status: u16, url: String },

    #[error(transparent)]
    Checksum(#[from] VerifyError),

    #[error("network error: {0}")]
    Network(String),

    #[error("can't detect filetype of {0:?}")]
    MissingContentDisposition(String),

    #[error("invalid 'Content-Disposition' header for {url:?}: {header:?}")]
    InvalidContentDisposition { url: String, header: String },

    #[error("file I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, FetchError>;
