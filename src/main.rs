use clap::Parser;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use pokedex::cli::{run_cli_command, Cli};
use pokedex::config::PokedexConfig;

/// Log to stderr so command output on stdout stays clean.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects debug for this
/// crate and warnings elsewhere.
fn init_tracing(verbose: bool) {
    let default = if verbose { "warn,pokedex=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.apply_overrides(PokedexConfig::from_env());
    tracing::debug!("Using {:?}", config);

    let runtime = tokio::runtime::Runtime::new()?;
    let mut stdout = std::io::stdout().lock();
    runtime.block_on(run_cli_command(cli.command, &config, &mut stdout))
}
