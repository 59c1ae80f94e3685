use std::fmt;

use bytes::Bytes;

use crate::effects::BoxStream;

/// Status and streaming body of a GET request.
pub struct Response<E> {
    pub status: u16,
    pub body:   BoxStream<'static, std::result::Result<Bytes, E>>,
}

impl<E> fmt::Debug for Response<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// The parts of a HEAD response the filename lookup reads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Head {
    pub status:              u16,
    pub content_disposition: Option<String>,
}
