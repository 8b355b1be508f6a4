//! Canned-response [`HttpClient`] for adapter tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A GET seen by [`MockHttpClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Headers,
}

/// What [`MockHttpClient`] answers for a URL.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Any status, including errors
    Success(Response),
    /// No response at all
    Error(HttpError),
}

#[derive(Debug, Default)]
struct Routes {
    by_url: HashMap<String, MockResponse>,
    fallback: Option<MockResponse>,
}

impl Routes {
    /// Exact URL, else the longest registered prefix, else the fallback.
    fn resolve(&self, url: &str) -> Option<MockResponse> {
        self.by_url
            .get(url)
            .or_else(|| {
                self.by_url
                    .iter()
                    .filter(|(pattern, _)| url.starts_with(pattern.as_str()))
                    .max_by_key(|(pattern, _)| pattern.len())
                    .map(|(_, response)| response)
            })
            .or(self.fallback.as_ref())
            .cloned()
    }
}

/// Mock HTTP client. Clones share routes and the request log.
///
/// # Example
///
/// ```ignore
/// use pokedex::adapters::mock::http::MockResponse;
/// use pokedex::adapters::MockHttpClient;
/// use pokedex::traits::Response;
///
/// let http = MockHttpClient::new();
/// http.set_response(
///     "https://pokeapi.co/api/v2/pokemon/25",
///     MockResponse::Success(Response::json_body(r#"{"id":25}"#)),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    routes: Arc<Mutex<Routes>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url`, and any URL it prefixes, with `response`.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        self.routes
            .lock()
            .unwrap()
            .by_url
            .insert(url.to_string(), response);
    }

    /// Answer every unmatched URL with `response`.
    pub fn set_default_response(&self, response: MockResponse) {
        self.routes.lock().unwrap().fallback = Some(response);
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
        });

        let resolved = self.routes.lock().unwrap().resolve(url);
        match resolved {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("no mock route for {}", url))),
        }
    }
}
