// src/main.rs — WeatherDeck entry point

use std::sync::Arc;

use clap::Parser;

use weatherdeck::api::HttpBackend;
use weatherdeck::cli::{Cli, Commands};
use weatherdeck::core::Controller;
use weatherdeck::infra::config::Config;
use weatherdeck::infra::{logger, paths};
use weatherdeck::session::FileTokenStore;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config (falls back to defaults if no config.toml)
    let mut config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };
    if let Some(ref url) = cli.api_url {
        config.backend.base_url = url.clone();
        config.validate()?;
    }

    let interactive = matches!(cli.command, None | Some(Commands::Dashboard));
    if interactive {
        // The dashboard owns the terminal; logs go to a file (respects RUST_LOG)
        logger::init_file_logging(&config.logging.level, &config.log_file())?;
    } else {
        logger::init_logging(&config.logging.level);
    }

    paths::ensure_dirs().await?;
    let backend = HttpBackend::new(&config.backend)?;
    tracing::debug!(base_url = backend.base_url(), "gateway configured");

    match cli.command {
        None | Some(Commands::Dashboard) => {
            let store = FileTokenStore::default_location();
            let controller = Controller::new(config, Arc::new(backend), Box::new(store));
            weatherdeck::tui::run_dashboard(controller).await
        }
        Some(Commands::Login { email }) => {
            weatherdeck::cli::account::run_login(&config, &backend, email.as_deref()).await
        }
        Some(Commands::Register { email, name }) => {
            weatherdeck::cli::account::run_register(&backend, email.as_deref(), name.as_deref())
                .await
        }
        Some(Commands::Logout) => weatherdeck::cli::account::run_logout(),
        Some(Commands::Whoami) => weatherdeck::cli::account::run_whoami(&backend).await,
        Some(Commands::Weather { city, json }) => {
            weatherdeck::cli::weather::run_weather(&config, &backend, &city.join(" "), json).await
        }
        Some(Commands::Status) => weatherdeck::cli::status::show_status(&config, &backend).await,
    }
}
