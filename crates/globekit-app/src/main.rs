mod cli;
mod commands;

use std::process::ExitCode;

use globekit_config::GlobekitConfig;
use tracing_subscriber::EnvFilter;

/// `--log-level` wins over `RUST_LOG`, which wins over `[logging] level`.
fn env_filter(cli_level: Option<&str>, config_level: &str) -> EnvFilter {
    if let Some(level) = cli_level {
        return EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(config_level));
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config_level))
}

fn load_config(args: &cli::Args) -> GlobekitConfig {
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    globekit_config::load_config_from(args.config.as_deref()).unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        GlobekitConfig::default()
    })
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config loading logs through a temporary subscriber; the final one
    // depends on the level the config asks for.
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(env_filter(args.log_level.as_deref(), "warn"))
        .with_writer(std::io::stderr)
        .finish();
    let config = tracing::subscriber::with_default(bootstrap, || load_config(&args));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(
            args.log_level.as_deref(),
            config.logging.level.as_directive(),
        ))
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("globekit v{} starting", env!("CARGO_PKG_VERSION"));

    match commands::dispatch(args.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
