#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("{algorithm} does not match: got {actual}, expected {expected}")]
    Mismatch {
        algorithm: &'static str,
        expected:  String,
        actual:    String,
    },

    #[error("invalid checksum {0:?}: expected 40 (sha1) or 64 (sha256) hex digits")]
    InvalidChecksum(String),

    #[error("unknown checksum algorithm {0:?}")]
    UnknownAlgorithm(String),
}

pub type Result<T> = std::result::Result<T, VerifyError>;
