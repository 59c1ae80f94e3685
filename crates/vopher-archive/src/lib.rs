//! Listing and extraction of plugin archives.
//!
//! # Architecture
//!
//! - `format.rs` - The `ArchiveFormat` and `StreamArchive` capabilities
//! - `codec.rs` - Decompressing stream decorators (`Compressed<F>`)
//! - `extract/` - Per-format readers (tar, zip, vimball)
//! - `sanitize.rs` - Strip-count handling and path normalization
//! - `registry.rs` - Suffix to format mapping

pub use codec::{Compressed, Compression, Decoder};
pub use error::{Error, Result};
pub use extract::{TarArchive, VimballArchive, ZipArchive};
pub use format::{ArchiveFormat, ReadSeek, StreamArchive};
pub use registry::FormatRegistry;
pub use sanitize::{clean, strip_entry};

mod codec;
mod error;
pub mod extract;
mod format;
mod registry;
mod sanitize;
