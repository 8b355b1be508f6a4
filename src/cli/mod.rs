//! Command-line interface.
//!
//! [`Cli`] is parsed in `main`; [`run_cli_command`] builds the data source
//! from the resolved configuration and dispatches to a handler in
//! [`commands`].

pub mod args;
pub mod commands;

pub use args::{Cli, CliCommand};
pub use commands::LogObserver;

use color_eyre::Result;
use std::io::Write;
use std::sync::Arc;

use crate::adapters::PokeApiClient;
use crate::config::PokedexConfig;
use crate::traits::PokemonDataSource;

/// Run `command` against the PokeAPI described by `config`.
pub async fn run_cli_command(
    command: CliCommand,
    config: &PokedexConfig,
    out: &mut impl Write,
) -> Result<()> {
    let source: Arc<dyn PokemonDataSource> = Arc::new(PokeApiClient::from_config(config)?);
    run_with_source(command, source, config, out).await
}

/// Run `command` against an arbitrary data source.
pub async fn run_with_source(
    command: CliCommand,
    source: Arc<dyn PokemonDataSource>,
    config: &PokedexConfig,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        CliCommand::List { pages } => {
            commands::list(source, config.browser_config(), pages, out).await
        }
        CliCommand::Search { query, pages } => {
            commands::search(source, config.browser_config(), &query, pages, out).await
        }
        CliCommand::Show { pokemon } => commands::show(source, &pokemon, out).await,
        CliCommand::Random => commands::random(source, out).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockDataSource;
    use crate::models::PokemonSummary;

    #[tokio::test]
    async fn test_dispatch_random() {
        let source = Arc::new(MockDataSource::new());
        source.set_random(PokemonSummary::with_default_sprite(7, "Squirtle"));
        let mut out = Vec::new();

        run_with_source(CliCommand::Random, source, &PokedexConfig::default(), &mut out)
            .await
            .unwrap();

        assert!(String::from_utf8(out).unwrap().contains("Squirtle"));
    }

    #[tokio::test]
    async fn test_invalid_base_url_is_rejected() {
        let config = PokedexConfig::default().with_base_url("ftp://example.com");
        let mut out = Vec::new();

        let result = run_cli_command(CliCommand::Random, &config, &mut out).await;
        assert!(result.is_err());
    }
}
