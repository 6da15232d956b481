//! `photocat` dashboard server.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use photocat::options::Options;
use photocat::Dashboard;

/// Photocatalyst chemical-space explorer.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// TOML options file; built-in defaults when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Verbose logging and detailed error responses.
    #[arg(long)]
    debug: bool,
    /// Listen address, overriding the options file.
    #[arg(long)]
    bind: Option<String>,
}

fn load_options(cli: &Cli) -> Result<Options, photocat::DashboardError> {
    let mut options = match &cli.config {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    if cli.debug {
        options.server.debug = true;
    }
    if let Some(bind) = &cli.bind {
        options.server.bind.clone_from(bind);
    }
    Ok(options)
}

fn main() {
    let cli = Cli::parse();
    let default_filter = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter),
    )
    .init();

    let options = match load_options(&cli) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let dashboard = match Dashboard::from_options(options) {
        Ok(dashboard) => Arc::new(dashboard),
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = photocat::server::serve(dashboard) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
