//! Handlers for each subcommand.
//!
//! Handlers write their report to any [`Write`] so they can be exercised
//! against a mock data source and a buffer.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::browser::{BrowserConfig, PokemonBrowser};
use crate::models::{PokemonDetail, PokemonSummary};
use crate::traits::{BrowserObserver, PokemonDataSource};

/// Observer that forwards browser notifications to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl BrowserObserver for LogObserver {
    fn on_list_loaded(&self) {
        debug!("first page loaded");
    }

    fn on_more_loaded(&self) {
        debug!("next page loaded");
    }

    fn on_list_updated(&self) {
        debug!("visible list updated");
    }

    fn on_load_failed(&self, message: &str) {
        warn!("load failed: {}", message);
    }
}

/// Load up to `pages` pages into `browser`, stopping early at the end of the list.
async fn load_pages(browser: &mut PokemonBrowser, pages: u32) -> Result<()> {
    browser.load_initial();
    browser.settle().await;
    if let Some(err) = browser.last_error() {
        return Err(err.clone()).wrap_err("Failed to load the Pokédex");
    }

    for _ in 1..pages {
        if !browser.can_load_more() {
            break;
        }
        browser.load_more();
        browser.settle().await;
        if let Some(err) = browser.last_error() {
            // keep what was already loaded
            warn!("Stopped paging at offset {}: {}", browser.offset(), err);
            break;
        }
    }

    info!("{} Pokémon loaded", browser.items().len());
    Ok(())
}

fn write_summaries(out: &mut impl Write, items: &[PokemonSummary]) -> Result<()> {
    for pokemon in items {
        writeln!(out, "#{:<4} {}", pokemon.id, pokemon.name)?;
    }
    Ok(())
}

fn write_detail(out: &mut impl Write, detail: &PokemonDetail) -> Result<()> {
    writeln!(out, "#{} {}", detail.id, detail.name)?;
    writeln!(out, "Types:  {}", detail.types.join(", "))?;
    writeln!(out, "Height: {:.1} m", f64::from(detail.height) / 10.0)?;
    writeln!(out, "Weight: {:.1} kg", f64::from(detail.weight) / 10.0)?;
    for stat in &detail.stats {
        writeln!(out, "  {:<16} {:>3}", stat.name, stat.value)?;
    }
    writeln!(out, "Sprite: {}", detail.image_url)?;
    Ok(())
}

/// `pokedex list`
pub async fn list(
    source: Arc<dyn PokemonDataSource>,
    config: BrowserConfig,
    pages: u32,
    out: &mut impl Write,
) -> Result<()> {
    let mut browser = PokemonBrowser::new(source, Arc::new(LogObserver), config);
    load_pages(&mut browser, pages).await?;
    write_summaries(out, browser.visible_items())
}

/// `pokedex search`
pub async fn search(
    source: Arc<dyn PokemonDataSource>,
    config: BrowserConfig,
    query: &str,
    pages: u32,
    out: &mut impl Write,
) -> Result<()> {
    let mut browser = PokemonBrowser::new(source, Arc::new(LogObserver), config);
    load_pages(&mut browser, pages).await?;

    browser.search(query.trim());
    browser.settle().await;

    if browser.visible_items().is_empty() {
        writeln!(out, "No Pokémon matching '{}'", query.trim())?;
        return Ok(());
    }
    write_summaries(out, browser.visible_items())
}

/// `pokedex show`: accepts a Pokédex number or a name.
pub async fn show(
    source: Arc<dyn PokemonDataSource>,
    pokemon: &str,
    out: &mut impl Write,
) -> Result<()> {
    let id = match pokemon.trim().parse::<u32>() {
        Ok(id) => id,
        Err(_) => {
            source
                .fetch_by_name(&pokemon.trim().to_lowercase())
                .await
                .wrap_err_with(|| format!("No Pokémon named '{}'", pokemon.trim()))?
                .id
        }
    };

    let detail = source
        .fetch_detail(id)
        .await
        .wrap_err_with(|| format!("Failed to load Pokémon #{}", id))?;
    write_detail(out, &detail)
}

/// `pokedex random`
pub async fn random(source: Arc<dyn PokemonDataSource>, out: &mut impl Write) -> Result<()> {
    let pokemon = source
        .fetch_random()
        .await
        .wrap_err("Failed to pick a random Pokémon")?;
    writeln!(out, "#{} {}", pokemon.id, pokemon.name)?;
    writeln!(out, "Sprite: {}", pokemon.image_url)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockDataSource;
    use crate::error::DataSourceError;
    use crate::models::PokemonStat;

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[tokio::test]
    async fn test_list_loads_requested_pages() {
        let source = Arc::new(MockDataSource::new());
        source.set_page(0, MockDataSource::summaries(1..=2));
        source.set_page(2, MockDataSource::summaries(3..=4));
        let mut out = Vec::new();

        list(source.clone(), BrowserConfig::with_page_size(2), 2, &mut out)
            .await
            .unwrap();

        let text = output(out);
        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("#1    pokemon-1\n"));
        assert_eq!(source.page_requests(), vec![(0, 2), (2, 2)]);
    }

    #[tokio::test]
    async fn test_list_stops_at_end_of_list() {
        let source = Arc::new(MockDataSource::new());
        source.set_page(0, MockDataSource::summaries(1..=1));
        let mut out = Vec::new();

        list(source.clone(), BrowserConfig::with_page_size(2), 5, &mut out)
            .await
            .unwrap();

        assert_eq!(source.page_requests().len(), 1);
    }

    #[tokio::test]
    async fn test_list_reports_initial_failure() {
        let source = Arc::new(MockDataSource::new());
        source.set_page_error(0, DataSourceError::ServerError("500".to_string()));
        let mut out = Vec::new();

        let err = list(source, BrowserConfig::default(), 1, &mut out)
            .await
            .unwrap_err();

        assert!(err.chain().any(|cause| cause.to_string() == "Server error: 500"));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_search_falls_back_to_local_filter() {
        let source = Arc::new(MockDataSource::new());
        source.set_page(0, MockDataSource::summaries(1..=12));
        let mut out = Vec::new();

        search(source, BrowserConfig::with_page_size(12), "mon-1", 1, &mut out)
            .await
            .unwrap();

        let text = output(out);
        let ids: Vec<&str> = text.lines().map(|l| l.split_whitespace().next().unwrap()).collect();
        assert_eq!(ids, vec!["#1", "#10", "#11", "#12"]);
    }

    #[tokio::test]
    async fn test_search_without_match() {
        let source = Arc::new(MockDataSource::new());
        source.set_page(0, MockDataSource::summaries(1..=3));
        let mut out = Vec::new();

        search(source, BrowserConfig::default(), "zzz", 1, &mut out)
            .await
            .unwrap();

        assert_eq!(output(out), "No Pokémon matching 'zzz'\n");
    }

    #[tokio::test]
    async fn test_show_by_name() {
        let source = Arc::new(MockDataSource::new());
        source.set_name("pikachu", PokemonSummary::with_default_sprite(25, "pikachu"));
        source.set_detail(PokemonDetail {
            id: 25,
            name: "Pikachu".to_string(),
            height: 4,
            weight: 60,
            image_url: "sprite.png".to_string(),
            types: vec!["electric".to_string()],
            stats: vec![PokemonStat {
                name: "speed".to_string(),
                value: 90,
            }],
        });
        let mut out = Vec::new();

        show(source, "Pikachu", &mut out).await.unwrap();

        let text = output(out);
        assert!(text.starts_with("#25 Pikachu\n"));
        assert!(text.contains("Types:  electric"));
        assert!(text.contains("Height: 0.4 m"));
        assert!(text.contains("Weight: 6.0 kg"));
        assert!(text.contains("speed"));
    }

    #[tokio::test]
    async fn test_show_unknown_id() {
        let source = Arc::new(MockDataSource::new());
        let mut out = Vec::new();

        let err = show(source, "9999", &mut out).await.unwrap_err();
        assert!(err.to_string().contains("#9999"));
    }

    #[tokio::test]
    async fn test_random() {
        let source = Arc::new(MockDataSource::new());
        source.set_random(PokemonSummary::with_default_sprite(151, "Mew"));
        let mut out = Vec::new();

        random(source, &mut out).await.unwrap();

        assert!(output(out).starts_with("#151 Mew\n"));
    }
}
