// src/cli/status.rs — Configuration, session and gateway status

use crate::api::Backend;
use crate::infra::config::Config;
use crate::infra::paths;
use crate::session::{FileTokenStore, TokenStore};

/// Display status. Never fails on an unreachable gateway; that is reported.
pub async fn show_status(config: &Config, backend: &dyn Backend) -> anyhow::Result<()> {
    let config_path = paths::config_file_path();
    let store = FileTokenStore::default_location();

    println!("weatherdeck v{}", env!("CARGO_PKG_VERSION"));
    println!();

    if config_path.exists() {
        println!("  Config:     {} (loaded)", config_path.display());
    } else {
        println!("  Config:     (using defaults)");
    }
    println!("  Gateway:    {}", config.backend.base_url);
    println!("  Videos:     {}", config.assets.video_base);
    println!("  Log file:   {}", config.log_file().display());

    match store.load() {
        Ok(Some(_)) => println!("  Session:    token stored ({})", store.path().display()),
        Ok(None) => println!("  Session:    not signed in"),
        Err(e) => println!("  Session:    unreadable ({e})"),
    }

    match backend.health().await {
        Ok(h) => {
            let service = h.service.as_deref().unwrap_or("gateway");
            println!("  Health:     {} ({service})", h.status);
        }
        Err(e) => {
            tracing::debug!("health check failed: {e}");
            println!("  Health:     unreachable ({e})");
        }
    }
    Ok(())
}
