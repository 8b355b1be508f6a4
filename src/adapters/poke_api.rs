//! PokeAPI data source.
//!
//! Talks to `https://pokeapi.co/api/v2` (or any server with the same shape)
//! through an injected [`HttpClient`].

use async_trait::async_trait;
use rand::Rng;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::adapters::ReqwestHttpClient;
use crate::config::PokedexConfig;
use crate::error::{DataSourceError, DataSourceResult};
use crate::models::{
    capitalize, PokemonDetail, PokemonDetailResponse, PokemonListResponse, PokemonSummary,
};
use crate::traits::{Headers, HttpClient, HttpError, PokemonDataSource};

pub const POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Highest id the home screen draws from (the national dex through generation 8).
pub const MAX_RANDOM_POKEMON_ID: u32 = 898;

/// PokeAPI client implementing [`PokemonDataSource`].
///
/// # Example
///
/// ```ignore
/// use pokedex::adapters::PokeApiClient;
/// use pokedex::traits::PokemonDataSource;
///
/// let client = PokeApiClient::new();
/// let first_page = client.fetch_page(0, 20).await?;
/// let pikachu = client.fetch_by_name("pikachu").await?;
/// ```
#[derive(Debug, Clone)]
pub struct PokeApiClient<C: HttpClient = ReqwestHttpClient> {
    base_url: String,
    client: C,
}

impl PokeApiClient<ReqwestHttpClient> {
    /// Client for the public PokeAPI with reqwest defaults.
    pub fn new() -> Self {
        Self::with_client(POKEAPI_BASE_URL, ReqwestHttpClient::new())
    }

    /// Client using the configured base URL and request timeout.
    pub fn from_config(config: &PokedexConfig) -> DataSourceResult<Self> {
        let http = ReqwestHttpClient::with_timeout(config.request_timeout)
            .map_err(|e| DataSourceError::NetworkError(e.to_string()))?;
        Ok(Self::with_client(config.base_url.clone(), http))
    }
}

impl Default for PokeApiClient<ReqwestHttpClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: HttpClient> PokeApiClient<C> {
    /// Client for `base_url` using a caller-supplied HTTP client.
    pub fn with_client(base_url: impl Into<String>, client: C) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build `{base_url}/{path}`, rejecting base URLs that are not http(s).
    fn endpoint(&self, path: &str) -> DataSourceResult<String> {
        let lower = self.base_url.to_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://")) {
            return Err(DataSourceError::InvalidUrl(self.base_url.clone()));
        }
        Ok(format!("{}/{}", self.base_url, path))
    }

    fn default_headers() -> Headers {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers
    }

    /// GET `url` and decode the body as `T`.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> DataSourceResult<T> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url, &Self::default_headers())
            .await
            .map_err(|e| match e {
                HttpError::InvalidUrl(msg) => DataSourceError::InvalidUrl(msg),
                other => DataSourceError::NetworkError(other.to_string()),
            })?;

        if !response.is_success() {
            let body = response.text();
            let err = DataSourceError::from_status(response.status, &body);
            debug!("GET {} failed: {}", url, err);
            return Err(err);
        }

        if response.body.iter().all(u8::is_ascii_whitespace) {
            return Err(DataSourceError::NoData);
        }

        response.json::<T>().map_err(|e| {
            warn!("Failed to decode response from {}: {}", url, e);
            DataSourceError::DecodingError(e.to_string())
        })
    }

    async fn get_pokemon(&self, name_or_id: &str) -> DataSourceResult<PokemonDetailResponse> {
        let url = self.endpoint(&format!("pokemon/{}", urlencoding::encode(name_or_id)))?;
        self.get_json(&url).await
    }
}

#[async_trait]
impl<C: HttpClient> PokemonDataSource for PokeApiClient<C> {
    async fn fetch_page(&self, offset: u32, limit: u32) -> DataSourceResult<Vec<PokemonSummary>> {
        let url = self.endpoint(&format!("pokemon?offset={}&limit={}", offset, limit))?;
        let page: PokemonListResponse = self.get_json(&url).await?;
        Ok(page.into_summaries())
    }

    async fn fetch_by_name(&self, name: &str) -> DataSourceResult<PokemonSummary> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DataSourceError::InvalidUrl(
                "cannot look up an empty name".to_string(),
            ));
        }
        let response = self.get_pokemon(name).await?;
        Ok(response.to_summary())
    }

    async fn fetch_detail(&self, id: u32) -> DataSourceResult<PokemonDetail> {
        let response = self.get_pokemon(&id.to_string()).await?;
        Ok(response.into_detail())
    }

    async fn fetch_random(&self) -> DataSourceResult<PokemonSummary> {
        let id = rand::rng().random_range(1..=MAX_RANDOM_POKEMON_ID);
        debug!("Picked random Pokémon #{}", id);

        let response = self.get_pokemon(&id.to_string()).await?;
        let mut summary = response.to_summary();
        summary.name = capitalize(&summary.name);
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::http::MockResponse;
    use crate::adapters::MockHttpClient;
    use crate::traits::Response;
    use bytes::Bytes;

    const BASE: &str = "https://pokeapi.test/api/v2";

    fn client_with(mock: &MockHttpClient) -> PokeApiClient<MockHttpClient> {
        PokeApiClient::with_client(BASE, mock.clone())
    }

    #[test]
    fn test_with_client_trims_trailing_slash() {
        let client = PokeApiClient::with_client("https://pokeapi.test/api/v2/", MockHttpClient::new());
        assert_eq!(client.base_url(), BASE);
    }

    #[tokio::test]
    async fn test_fetch_page_builds_query_and_parses() {
        let mock = MockHttpClient::new();
        mock.set_response(
            &format!("{}/pokemon?offset=20&limit=2", BASE),
            MockResponse::Success(Response::json_body(
                r#"{"count": 1302, "next": null, "previous": null, "results": [
                    {"name": "spearow", "url": "https://pokeapi.co/api/v2/pokemon/21/"},
                    {"name": "fearow", "url": "https://pokeapi.co/api/v2/pokemon/22/"}
                ]}"#,
            )),
        );

        let page = client_with(&mock).fetch_page(20, 2).await.unwrap();

        assert_eq!(page.len(), 2);
        assert_eq!(page[0].id, 21);
        assert_eq!(page[1].name, "fearow");

        let requests = mock.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].headers.get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[tokio::test]
    async fn test_fetch_by_name_not_found() {
        let mock = MockHttpClient::new();
        mock.set_response(
            &format!("{}/pokemon/zzz", BASE),
            MockResponse::Success(Response::new(404, Bytes::from("Not Found"))),
        );

        let err = client_with(&mock).fetch_by_name("zzz").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_fetch_by_name_encodes_path() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(404, Bytes::new())));

        let _ = client_with(&mock).fetch_by_name("mr mime").await;
        assert_eq!(mock.get_requests()[0].url, format!("{}/pokemon/mr%20mime", BASE));
    }

    #[tokio::test]
    async fn test_fetch_by_name_rejects_empty() {
        let mock = MockHttpClient::new();
        let err = client_with(&mock).fetch_by_name("   ").await.unwrap_err();
        assert!(matches!(err, DataSourceError::InvalidUrl(_)));
        assert!(mock.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_empty_body_is_no_data() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(200, Bytes::new())));

        let err = client_with(&mock).fetch_detail(1).await.unwrap_err();
        assert_eq!(err, DataSourceError::NoData);
    }

    #[tokio::test]
    async fn test_bad_json_is_decoding_error() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::json_body("{\"id\": ")));

        let err = client_with(&mock).fetch_page(0, 20).await.unwrap_err();
        assert!(matches!(err, DataSourceError::DecodingError(_)));
    }

    #[tokio::test]
    async fn test_transport_error_is_network_error() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".to_string(),
        )));

        let err = client_with(&mock).fetch_page(0, 20).await.unwrap_err();
        assert_eq!(
            err,
            DataSourceError::NetworkError("Connection failed: refused".to_string())
        );
    }

    #[tokio::test]
    async fn test_invalid_base_url() {
        let client = PokeApiClient::with_client("ftp://pokeapi.test", MockHttpClient::new());
        let err = client.fetch_page(0, 20).await.unwrap_err();
        assert!(matches!(err, DataSourceError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_fetch_random_capitalizes_and_stays_in_range() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::json_body(
            r#"{"id": 133, "name": "eevee", "height": 3, "weight": 65,
                "sprites": {"front_default": null}}"#,
        )));

        let pokemon = client_with(&mock).fetch_random().await.unwrap();
        assert_eq!(pokemon.name, "Eevee");

        let url = &mock.get_requests()[0].url;
        let id: u32 = url.rsplit('/').next().unwrap().parse().unwrap();
        assert!((1..=MAX_RANDOM_POKEMON_ID).contains(&id));
    }
}
