//! Command-line argument parsing for the `pokedex` binary.

use clap::{Parser, Subcommand};

use crate::config::PokedexConfig;

/// Browse the Pokédex from the terminal.
#[derive(Debug, Parser)]
#[command(name = "pokedex", version, about)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// API root (overrides POKEDEX_BASE_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Pokémon per page (overrides POKEDEX_PAGE_SIZE)
    #[arg(long, global = true, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum CliCommand {
    /// List Pokémon page by page
    List {
        /// Number of pages to load
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        pages: u32,
    },
    /// Look a Pokémon up by name, falling back to the loaded list
    Search {
        query: String,
        /// Pages to load before searching
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        pages: u32,
    },
    /// Show one Pokémon in detail
    Show {
        /// Pokédex number or name
        pokemon: String,
    },
    /// Show a random Pokémon
    Random,
}

impl Cli {
    /// Apply CLI overrides on top of `config`.
    pub fn apply_overrides(&self, mut config: PokedexConfig) -> PokedexConfig {
        if let Some(ref url) = self.base_url {
            config = config.with_base_url(url.as_str());
        }
        if let Some(size) = self.page_size {
            config = config.with_page_size(size);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("pokedex").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_list_defaults() {
        let cli = parse(&["list"]).unwrap();
        assert_eq!(cli.command, CliCommand::List { pages: 1 });
        assert!(!cli.verbose);
        assert!(cli.base_url.is_none());
    }

    #[test]
    fn test_parse_list_pages() {
        let cli = parse(&["list", "--pages", "3"]).unwrap();
        assert_eq!(cli.command, CliCommand::List { pages: 3 });
    }

    #[test]
    fn test_parse_search() {
        let cli = parse(&["search", "pika", "-p", "2"]).unwrap();
        assert_eq!(
            cli.command,
            CliCommand::Search {
                query: "pika".to_string(),
                pages: 2
            }
        );
    }

    #[test]
    fn test_parse_show_and_random() {
        let cli = parse(&["show", "25"]).unwrap();
        assert_eq!(
            cli.command,
            CliCommand::Show {
                pokemon: "25".to_string()
            }
        );
        assert_eq!(parse(&["random"]).unwrap().command, CliCommand::Random);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["list", "--verbose", "--page-size", "50", "--base-url", "http://localhost:1"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.page_size, Some(50));
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:1"));
    }

    #[test]
    fn test_rejects_zero_pages() {
        assert!(parse(&["list", "--pages", "0"]).is_err());
        assert!(parse(&["--page-size", "0", "list"]).is_err());
    }

    #[test]
    fn test_requires_subcommand() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let cli = parse(&["--page-size", "10", "--base-url", "http://localhost:8080/api/v2/", "random"]).unwrap();
        let config = cli.apply_overrides(PokedexConfig::default());
        assert_eq!(config.page_size, 10);
        assert_eq!(config.base_url, "http://localhost:8080/api/v2");
    }
}
