//! [`HttpClient`] over reqwest.

use async_trait::async_trait;
use std::time::Duration;
use tracing::trace;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// Production transport used by [`PokeApiClient`](super::PokeApiClient).
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// use pokedex::adapters::ReqwestHttpClient;
///
/// let http = ReqwestHttpClient::with_timeout(Duration::from_secs(30))?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Client whose requests give up after `timeout`, connect included.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map(Self::with_client)
            .map_err(classify)
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn classify(err: reqwest::Error) -> HttpError {
    let message = err.to_string();
    if err.is_timeout() {
        HttpError::Timeout(message)
    } else if err.is_connect() {
        HttpError::ConnectionFailed(message)
    } else if err.is_builder() {
        HttpError::InvalidUrl(message)
    } else {
        HttpError::Other(message)
    }
}

fn collect_headers(map: &reqwest::header::HeaderMap) -> Headers {
    map.iter()
        .filter_map(|(name, value)| Some((name.to_string(), value.to_str().ok()?.to_string())))
        .collect()
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        let request = headers
            .iter()
            .fold(self.client.get(url), |request, (name, value)| {
                request.header(name.as_str(), value.as_str())
            });

        let reply = request.send().await.map_err(classify)?;
        let status = reply.status().as_u16();
        let reply_headers = collect_headers(reply.headers());
        let body = reply.bytes().await.map_err(classify)?;
        trace!("GET {} -> {} ({} bytes)", url, status, body.len());

        Ok(Response {
            status,
            headers: reply_headers,
            body,
        })
    }
}
