//! HTTP downloading with streaming verification.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - `data` - Response shapes handed over by an [`HttpClient`]
//! - `core` - Pure header parsing
//! - `effects` - I/O operations behind the [`HttpClient`] abstraction
//!
//! Bodies are streamed straight into the caller's sink; when a checksum is
//! supplied the same pass feeds the hasher.

mod core;
mod data;
mod effects;
mod error;

pub use self::core::{content_disposition_filename, is_success};
pub use self::data::{Head, Response};
pub use self::effects::{BoxStream, Fetcher, HttpClient};

#[cfg(feature = "reqwest")]
pub use self::effects::ReqwestClient;

pub use self::error::{FetchError, Result};
