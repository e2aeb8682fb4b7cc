// src/api/http.rs — reqwest implementation of the gateway Backend

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::types::{ErrorBody, LoginRequest, RegisterRequest};
use super::{
    Backend, HealthResponse, LoginResponse, RegisterResponse, VerifyResponse, WeatherReport,
    LOGIN_FALLBACK, REGISTER_FALLBACK, VERIFY_FALLBACK, WEATHER_FALLBACK,
};
use crate::infra::config::BackendConfig;
use crate::infra::errors::DeckError;

pub struct HttpBackend {
    base_url: url::Url,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Result<Self, DeckError> {
        let base_url = url::Url::parse(&config.base_url)
            .map_err(|e| DeckError::Config(format!("backend.base_url: {e}")))?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| DeckError::Config(format!("HTTP client: {e}")))?;
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// `<base_url>/<path>`, keeping any path prefix (e.g. `/api`) of the base.
    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Health lives at the gateway root, outside the API prefix.
    fn health_url(&self) -> String {
        self.base_url
            .join("/health")
            .map(|u| u.to_string())
            .unwrap_or_else(|_| self.endpoint("health"))
    }

    async fn read<T: DeserializeOwned>(
        response: reqwest::Response,
        fallback: &str,
    ) -> Result<T, DeckError> {
        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| DeckError::Decode(e.to_string()));
        }

        let body: ErrorBody = response.json().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), error = ?body.error, "gateway rejected request");
        Err(DeckError::backend(status.as_u16(), body.error, fallback))
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, DeckError> {
        let response = self
            .client
            .post(self.endpoint("auth/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await?;
        Self::read(response, LOGIN_FALLBACK).await
    }

    async fn verify(&self, token: &str) -> Result<VerifyResponse, DeckError> {
        let response = self
            .client
            .get(self.endpoint("auth/verify"))
            .bearer_auth(token)
            .send()
            .await?;
        Self::read(response, VERIFY_FALLBACK).await
    }

    async fn weather(&self, token: &str, city: &str) -> Result<WeatherReport, DeckError> {
        let response = self
            .client
            .get(self.endpoint("weather"))
            .query(&[("city", city)])
            .bearer_auth(token)
            .send()
            .await?;
        Self::read(response, WEATHER_FALLBACK).await
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<RegisterResponse, DeckError> {
        let response = self
            .client
            .post(self.endpoint("auth/register"))
            .json(&RegisterRequest {
                email,
                password,
                name,
            })
            .send()
            .await?;
        Self::read(response, REGISTER_FALLBACK).await
    }

    async fn health(&self) -> Result<HealthResponse, DeckError> {
        let response = self.client.get(self.health_url()).send().await?;
        Self::read(response, "Gateway unhealthy").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(base: &str) -> HttpBackend {
        HttpBackend::new(&BackendConfig {
            base_url: base.into(),
            timeout_seconds: 1,
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_keeps_api_prefix() {
        let b = backend("http://localhost:5000/api");
        assert_eq!(b.endpoint("auth/login"), "http://localhost:5000/api/auth/login");
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let b = backend("http://localhost:5000/api/");
        assert_eq!(b.endpoint("/weather"), "http://localhost:5000/api/weather");
    }

    #[test]
    fn test_health_url_is_at_root() {
        let b = backend("http://localhost:5000/api");
        assert_eq!(b.health_url(), "http://localhost:5000/health");
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        let result = HttpBackend::new(&BackendConfig {
            base_url: "::nope::".into(),
            timeout_seconds: 1,
        });
        assert!(matches!(result, Err(DeckError::Config(_))));
    }
}
