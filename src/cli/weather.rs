// src/cli/weather.rs — One-shot weather lookup

use crate::api::Backend;
use crate::infra::config::Config;
use crate::infra::errors::DeckError;
use crate::session::{FileTokenStore, TokenStore};
use crate::weather::render::{compass_point, DashboardModel};
use crate::weather::{validate_city, SearchOutcome, WeatherPanel};

pub async fn run_weather(
    config: &Config,
    backend: &dyn Backend,
    city: &str,
    json: bool,
) -> anyhow::Result<()> {
    let city = validate_city(city).map_err(|e| anyhow::anyhow!(e.alert_text()))?;
    let token = FileTokenStore::default_location()
        .load()?
        .ok_or_else(|| anyhow::anyhow!(DeckError::NotAuthenticated.alert_text()))?;

    let mut panel = WeatherPanel::new();
    let ticket = panel.begin(city, &token);
    let completion = ticket.run(backend).await;
    match panel.apply(completion) {
        SearchOutcome::Updated { .. } => {}
        SearchOutcome::Failed(e) => anyhow::bail!(e.alert_text()),
        SearchOutcome::Stale => return Ok(()),
    }

    let Some(report) = panel.report() else {
        return Ok(());
    };
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print_report(&DashboardModel::build(report, &config.assets.icon_host));
    }
    Ok(())
}

fn print_report(model: &DashboardModel) {
    println!("{}", model.header);
    println!("  {} {}  {}", model.main_icon, model.main_temp, model.description);
    println!();
    println!("  Feels like:     {}", model.feels_like);
    println!("  Precipitation:  {}", model.precipitation);
    println!("  Visibility:     {}", model.visibility);
    println!("  Humidity:       {}", model.humidity);
    println!("  {}", model.dew_point);
    println!("  UV index:       {}", model.uv_index);
    println!(
        "  Wind:           {} mph {} (gusts {} mph)",
        model.wind_speed,
        compass_point(model.wind_rotation),
        model.gust_speed
    );

    if !model.hourly.is_empty() {
        println!();
        let row: Vec<String> = model
            .hourly
            .iter()
            .map(|t| format!("{} {} {}", t.label, t.icon, t.temp))
            .collect();
        println!("  Hourly: {}", row.join("  "));
    }

    if !model.daily.is_empty() {
        println!();
        for tile in &model.daily {
            println!("  {:<8} {:<10} {} {}", tile.label, tile.date, tile.icon, tile.temp);
        }
    }
}
