// src/api/mod.rs — Weather gateway API client
//
// The gateway is an external collaborator: weatherdeck only consumes it.
// Everything above this module talks to the `Backend` trait so the session
// and weather logic can be driven by a scripted backend in tests.

pub mod http;
pub mod types;

use async_trait::async_trait;

use crate::infra::errors::DeckError;
pub use http::HttpBackend;
pub use types::{
    DailyEntry, HealthResponse, HourlyEntry, LoginResponse, RegisterResponse, UserInfo,
    VerifyResponse, WeatherReport,
};

/// Fallback alert text when a login rejection carries no server message.
pub const LOGIN_FALLBACK: &str = "Login failed";
/// Fallback alert text when a weather rejection carries no server message.
pub const WEATHER_FALLBACK: &str = "Failed to get weather";
pub const REGISTER_FALLBACK: &str = "Registration failed";
pub const VERIFY_FALLBACK: &str = "Invalid token";

/// Operations offered by the weather gateway.
///
/// Every method maps a non-2xx response to `DeckError::Backend` (carrying the
/// server's `error` field or the matching fallback), a failed request to
/// `DeckError::Transport`, and an unreadable 2xx body to `DeckError::Decode`.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, DeckError>;

    async fn verify(&self, token: &str) -> Result<VerifyResponse, DeckError>;

    async fn weather(&self, token: &str, city: &str) -> Result<WeatherReport, DeckError>;

    async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<RegisterResponse, DeckError>;

    async fn health(&self) -> Result<HealthResponse, DeckError>;
}
