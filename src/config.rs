//! Runtime configuration.
//!
//! Defaults target the public PokeAPI. Each field can be overridden from the
//! environment ([`PokedexConfig::from_env`]) and then by CLI flags.

use std::time::Duration;
use tracing::warn;

use crate::adapters::POKEAPI_BASE_URL;
use crate::browser::BrowserConfig;

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_MAX_DUPLICATE_PAGES: u32 = 5;

pub const ENV_BASE_URL: &str = "POKEDEX_BASE_URL";
pub const ENV_PAGE_SIZE: &str = "POKEDEX_PAGE_SIZE";
pub const ENV_TIMEOUT_SECS: &str = "POKEDEX_TIMEOUT_SECS";
pub const ENV_MAX_DUPLICATE_PAGES: &str = "POKEDEX_MAX_DUPLICATE_PAGES";

/// Configuration for the data source and the list browser.
///
/// # Example
///
/// ```
/// use pokedex::config::PokedexConfig;
///
/// let config = PokedexConfig::default()
///     .with_page_size(151)
///     .with_base_url("http://localhost:8080/api/v2");
/// assert_eq!(config.browser_config().page_size, 151);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokedexConfig {
    /// API root, without trailing slash
    pub base_url: String,
    /// Items requested per page
    pub page_size: u32,
    /// Per-request timeout applied by the HTTP client
    pub request_timeout: Duration,
    /// Consecutive all-duplicate pages tolerated before `load_more` gives up
    pub max_duplicate_pages: u32,
}

impl Default for PokedexConfig {
    fn default() -> Self {
        Self {
            base_url: POKEAPI_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            max_duplicate_pages: DEFAULT_MAX_DUPLICATE_PAGES,
        }
    }
}

impl PokedexConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the page size. Zero is ignored.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        if page_size > 0 {
            self.page_size = page_size;
        }
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the duplicate-page retry cap. Zero is ignored.
    pub fn with_max_duplicate_pages(mut self, pages: u32) -> Self {
        if pages > 0 {
            self.max_duplicate_pages = pages;
        }
        self
    }

    /// Defaults overridden by `POKEDEX_*` environment variables.
    ///
    /// Numeric values that are missing, unparseable or zero keep their default.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(ENV_BASE_URL) {
            if !url.trim().is_empty() {
                config = config.with_base_url(url.trim());
            }
        }
        if let Some(size) = positive_env(ENV_PAGE_SIZE) {
            config.page_size = size;
        }
        if let Some(secs) = positive_env(ENV_TIMEOUT_SECS) {
            config.request_timeout = Duration::from_secs(u64::from(secs));
        }
        if let Some(pages) = positive_env(ENV_MAX_DUPLICATE_PAGES) {
            config.max_duplicate_pages = pages;
        }

        config
    }

    pub fn browser_config(&self) -> BrowserConfig {
        BrowserConfig {
            page_size: self.page_size,
            max_duplicate_pages: self.max_duplicate_pages,
        }
    }
}

fn positive_env(name: &str) -> Option<u32> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => Some(value),
        _ => {
            warn!("Ignoring {}={:?}: expected a positive integer", name, raw);
            None
        }
    }
}
