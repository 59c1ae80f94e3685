use futures_util::StreamExt;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use vopher_verify::{Checksum, Hasher};

use crate::core::{content_disposition_filename, is_success};
use crate::effects::http::HttpClient;
use crate::error::{FetchError, Result};

/// Downloads resources through an [`HttpClient`].
pub struct Fetcher<C: HttpClient> {
    client: C,
}

impl<C: HttpClient> Fetcher<C> {
    pub fn new(client: C) -> Self { Self { client } }

    /// Stream the body of `url` into `sink`, returning the number of bytes
    /// written.
    ///
    /// With a `checksum` the bytes are hashed on the way through and the
    /// digest is compared once the body is exhausted. The sink is not rolled
    /// back on a mismatch; whatever was written stays written.
    pub async fn fetch<W>(&self, url: &str, checksum: Option<&Checksum>, sink: &mut W) -> Result<u64>
    where
        W: AsyncWrite + Unpin + Send + ?Sized,
    {
        tracing::debug!(url, "fetching");

        let response = self
            .client
            .get(url)
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !is_success(response.status) {
            return Err(FetchError::Status {
                status: response.status,
                url:    url.to_string(),
            });
        }

        let mut hasher = checksum.map(Checksum::hasher);
        let mut body = response.body;
        let mut written = 0u64;

        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(|e| FetchError::Network(e.to_string()))?;
            if let Some(hasher) = hasher.as_mut() {
                hasher.update(&chunk);
            }
            sink.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        sink.flush().await?;

        if let (Some(checksum), Some(hasher)) = (checksum, hasher) {
            checksum.verify(&hasher.finalize())?;
        }

        tracing::debug!(url, bytes = written, "fetched");
        Ok(written)
    }

    /// Ask the server which filename it would give `url`.
    ///
    /// Issues a HEAD request and reads `Content-Disposition: ...; filename=...`.
    /// The answer is advisory; callers use it only when the URL itself does
    /// not name an archive.
    pub async fn detect_remote_filename(&self, url: &str) -> Result<String> {
        let head = self
            .client
            .head(url)
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let header = head
            .content_disposition
            .ok_or_else(|| FetchError::MissingContentDisposition(url.to_string()))?;

        let name = content_disposition_filename(&header).map(str::to_string);
        name.ok_or_else(|| FetchError::InvalidContentDisposition {
            url: url.to_string(),
            header,
        })
    }
}
