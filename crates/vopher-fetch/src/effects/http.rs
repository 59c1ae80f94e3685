use std::future::Future;
use std::pin::Pin;

use futures_util::Stream;

use crate::data::{Head, Response};

/// A boxed stream type for HTTP response bodies.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + 'a>>;

/// Asynchronous HTTP client abstraction.
///
/// This trait provides the minimal interface needed for fetching plugin
/// archives. Implementations follow redirects themselves and report the
/// final status; they do not turn error statuses into `Err`.
///
/// # Implementations
///
/// - [`ReqwestClient`]: Production implementation using `reqwest`
/// - In-memory implementations for testing
pub trait HttpClient: Send + Sync {
    /// Error type for transport failures.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Issue a GET request and hand back the status and a streaming body.
    fn get(
        &self,
        url: &str,
    ) -> impl Future<Output = std::result::Result<Response<Self::Error>, Self::Error>> + Send;

    /// Issue a HEAD request, exposing the `Content-Disposition` header.
    fn head(&self, url: &str) -> impl Future<Output = std::result::Result<Head, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use futures_util::StreamExt;

    use super::*;
    use crate::error::{FetchError, Result};

    const USER_AGENT: &str = concat!("vopher/", env!("CARGO_PKG_VERSION"));

    /// Production HTTP client implementation using reqwest.
    #[derive(Clone, Debug)]
    pub struct ReqwestClient {
        client: reqwest::Client,
    }

    impl ReqwestClient {
        /// Create a new ReqwestClient with a `vopher/<version>` user agent.
        pub fn new() -> Result<Self> {
            let client = reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .map_err(|e| FetchError::Network(e.to_string()))?;
            Ok(Self { client })
        }

        pub fn from_client(client: reqwest::Client) -> Self { Self { client } }
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        async fn get(&self, url: &str) -> std::result::Result<Response<Self::Error>, Self::Error> {
            let response = self.client.get(url).send().await?;
            let status = response.status().as_u16();
            let body = response.bytes_stream().boxed();

            Ok(Response { status, body })
        }

        async fn head(&self, url: &str) -> std::result::Result<Head, Self::Error> {
            let response = self.client.head(url).send().await?;
            let content_disposition = response
                .headers()
                .get(reqwest::header::CONTENT_DISPOSITION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);

            Ok(Head {
                status: response.status().as_u16(),
                content_disposition,
            })
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;
