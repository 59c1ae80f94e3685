//! Content verification primitives for downloaded archives.
//!
//! Digests are computed incrementally while bytes stream through, so a
//! download is hashed in the same pass that writes it to disk.
//!
//! # Example
//!
//! ```
//! use vopher_verify::{Checksum, Hasher};
//!
//! let checksum: Checksum = "sha1:2aae6c35c94fcfb415dbe95f408b9ce91ee846ed".parse().unwrap();
//! let mut hasher = checksum.hasher();
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//!
//! checksum.verify(&hasher.finalize()).unwrap();
//! ```

pub use self::checksum::{Algorithm, Checksum, ChecksumHasher};
pub use self::error::{Result, VerifyError};
pub use self::hasher::{DigestHasher, Hasher, Sha1Hasher, Sha256Hasher};

mod checksum;
mod error;
mod hasher;
