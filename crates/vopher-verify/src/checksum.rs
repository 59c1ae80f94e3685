use std::fmt;
use std::str::FromStr;

use crate::hasher::{Hasher, Sha1Hasher, Sha256Hasher};
use crate::{Result, VerifyError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Sha1,
    Sha256,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
        }
    }

    fn digest_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha256 => 32,
        }
    }
}

impl FromStr for Algorithm {
    type Err = VerifyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            _ => Err(VerifyError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// An expected digest together with the algorithm that produces it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Checksum {
    algorithm: Algorithm,
    digest:    Vec<u8>,
}

impl Checksum {
    pub fn new(algorithm: Algorithm, hex_digest: &str) -> Result<Self> {
        let hex_digest = hex_digest.trim();
        let digest = hex::decode(hex_digest)
            .map_err(|_| VerifyError::InvalidChecksum(hex_digest.to_string()))?;
        if digest.len() != algorithm.digest_len() {
            return Err(VerifyError::InvalidChecksum(hex_digest.to_string()));
        }
        Ok(Self { algorithm, digest })
    }

    pub fn algorithm(&self) -> Algorithm { self.algorithm }

    pub fn hasher(&self) -> ChecksumHasher {
        match self.algorithm {
            Algorithm::Sha1 => ChecksumHasher::Sha1(Sha1Hasher::new()),
            Algorithm::Sha256 => ChecksumHasher::Sha256(Sha256Hasher::new()),
        }
    }

    /// Compare a computed digest against the expected one.
    pub fn verify(&self, actual: &[u8]) -> Result<()> {
        if actual == self.digest.as_slice() {
            Ok(())
        } else {
            Err(VerifyError::Mismatch {
                algorithm: self.algorithm.name(),
                expected:  hex::encode(&self.digest),
                actual:    hex::encode(actual),
            })
        }
    }
}

/// Accepts `sha1:HEX`, `sha256:HEX`, or a bare hex digest whose length
/// selects the algorithm.
impl FromStr for Checksum {
    type Err = VerifyError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some((algorithm, digest)) = s.split_once(':') {
            return Self::new(algorithm.parse()?, digest);
        }
        match s.len() {
            40 => Self::new(Algorithm::Sha1, s),
            64 => Self::new(Algorithm::Sha256, s),
            _ => Err(VerifyError::InvalidChecksum(s.to_string())),
        }
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm.name(), hex::encode(&self.digest))
    }
}

/// Hasher matching the algorithm of a [`Checksum`].
pub enum ChecksumHasher {
    Sha1(Sha1Hasher),
    Sha256(Sha256Hasher),
}

impl Hasher for ChecksumHasher {
    fn update(&mut self, data: &[u8]) {
        match self {
            Self::Sha1(h) => h.update(data),
            Self::Sha256(h) => h.update(data),
        }
    }

    fn finalize(self) -> Vec<u8> {
        match self {
            Self::Sha1(h) => h.finalize(),
            Self::Sha256(h) => h.finalize(),
        }
    }
}
