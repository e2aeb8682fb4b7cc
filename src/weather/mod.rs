// src/weather/mod.rs — Weather panel: city search and the current report.
//
// Searches are numbered. Only the completion of the most recently issued
// search is applied; an older one that finishes late is dropped so it cannot
// overwrite fresher results or re-enable the search control early.

pub mod render;

use crate::api::{Backend, WeatherReport};
use crate::infra::errors::DeckError;
pub use render::DashboardModel;

pub const SEARCH_LABEL: &str = "Search";
pub const LOADING_LABEL: &str = "Loading...";

/// Trimmed city name, or the validation error shown for blank input.
pub fn validate_city(input: &str) -> Result<String, DeckError> {
    let city = input.trim();
    if city.is_empty() {
        return Err(DeckError::Validation("Enter a city".into()));
    }
    Ok(city.to_string())
}

#[derive(Debug, Clone)]
pub struct SearchTicket {
    pub seq: u64,
    pub city: String,
    pub token: String,
}

#[derive(Debug)]
pub struct SearchCompletion {
    pub seq: u64,
    pub city: String,
    pub result: Result<WeatherReport, DeckError>,
}

impl SearchTicket {
    pub async fn run(self, backend: &dyn Backend) -> SearchCompletion {
        let result = backend.weather(&self.token, &self.city).await;
        SearchCompletion {
            seq: self.seq,
            city: self.city,
            result,
        }
    }
}

#[derive(Debug)]
pub enum SearchOutcome {
    /// The report was replaced; carries its background condition.
    Updated { condition: String },
    Failed(DeckError),
    Stale,
}

#[derive(Debug, Default)]
pub struct WeatherPanel {
    input: String,
    latest_seq: u64,
    loading: bool,
    report: Option<WeatherReport>,
}

impl WeatherPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: &str) {
        self.input = value.to_string();
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn search_enabled(&self) -> bool {
        !self.loading
    }

    pub fn button_label(&self) -> &'static str {
        if self.loading {
            LOADING_LABEL
        } else {
            SEARCH_LABEL
        }
    }

    pub fn report(&self) -> Option<&WeatherReport> {
        self.report.as_ref()
    }

    /// The content grid is shown once any search succeeded.
    pub fn content_visible(&self) -> bool {
        self.report.is_some()
    }

    pub fn model(&self, icon_host: &str) -> Option<DashboardModel> {
        self.report
            .as_ref()
            .map(|r| DashboardModel::build(r, icon_host))
    }

    /// Issue a search for an already-validated city.
    pub fn begin(&mut self, city: String, token: &str) -> SearchTicket {
        self.latest_seq += 1;
        self.loading = true;
        tracing::debug!(seq = self.latest_seq, %city, "weather search issued");
        SearchTicket {
            seq: self.latest_seq,
            city,
            token: token.to_string(),
        }
    }

    pub fn apply(&mut self, completion: SearchCompletion) -> SearchOutcome {
        if completion.seq != self.latest_seq {
            tracing::debug!(
                seq = completion.seq,
                latest = self.latest_seq,
                city = %completion.city,
                "discarding stale weather response"
            );
            return SearchOutcome::Stale;
        }

        self.loading = false;
        match completion.result {
            Ok(report) => {
                tracing::info!(city = %report.city, condition = %report.condition, "weather updated");
                let condition = report.condition.clone();
                self.report = Some(report);
                SearchOutcome::Updated { condition }
            }
            Err(e) => {
                tracing::info!(city = %completion.city, "weather search failed: {e}");
                SearchOutcome::Failed(e)
            }
        }
    }
}
