// tests/common/mod.rs — Scripted gateway backend shared by integration tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use weatherdeck::api::{
    Backend, DailyEntry, HealthResponse, HourlyEntry, LoginResponse, RegisterResponse, UserInfo,
    VerifyResponse, WeatherReport,
};
use weatherdeck::core::Controller;
use weatherdeck::infra::config::Config;
use weatherdeck::infra::errors::DeckError;
use weatherdeck::session::MemoryTokenStore;

/// Backend that answers from per-endpoint queues without any network calls.
/// An unscripted call fails with a transport error.
#[derive(Default)]
pub struct FakeBackend {
    logins: Mutex<VecDeque<Result<LoginResponse, DeckError>>>,
    verifies: Mutex<VecDeque<Result<VerifyResponse, DeckError>>>,
    weathers: Mutex<VecDeque<Result<WeatherReport, DeckError>>>,
    calls: Mutex<Vec<String>>,
}

impl FakeBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_login(&self, result: Result<LoginResponse, DeckError>) {
        self.logins.lock().unwrap().push_back(result);
    }

    pub fn push_verify(&self, result: Result<VerifyResponse, DeckError>) {
        self.verifies.lock().unwrap().push_back(result);
    }

    pub fn push_weather(&self, result: Result<WeatherReport, DeckError>) {
        self.weathers.lock().unwrap().push_back(result);
    }

    /// Calls made so far, as `"<endpoint> <arg>"`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, endpoint: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.split(' ').next() == Some(endpoint))
            .count()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn next<T>(queue: &Mutex<VecDeque<Result<T, DeckError>>>) -> Result<T, DeckError> {
        queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(DeckError::Transport("unscripted call".into())))
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn login(&self, email: &str, _password: &str) -> Result<LoginResponse, DeckError> {
        self.record(format!("login {email}"));
        Self::next(&self.logins)
    }

    async fn verify(&self, token: &str) -> Result<VerifyResponse, DeckError> {
        self.record(format!("verify {token}"));
        Self::next(&self.verifies)
    }

    async fn weather(&self, token: &str, city: &str) -> Result<WeatherReport, DeckError> {
        self.record(format!("weather {city} {token}"));
        Self::next(&self.weathers)
    }

    async fn register(
        &self,
        email: &str,
        _password: &str,
        name: &str,
    ) -> Result<RegisterResponse, DeckError> {
        self.record(format!("register {email} {name}"));
        Ok(RegisterResponse {
            message: Some("User created".into()),
            email: email.to_string(),
        })
    }

    async fn health(&self) -> Result<HealthResponse, DeckError> {
        self.record("health".into());
        Ok(HealthResponse {
            status: "healthy".into(),
            service: Some("fake".into()),
        })
    }
}

pub fn login_ok(token: &str, email: &str, name: Option<&str>) -> Result<LoginResponse, DeckError> {
    Ok(LoginResponse {
        token: token.to_string(),
        user: UserInfo {
            email: email.to_string(),
            name: name.map(str::to_string),
        },
    })
}

pub fn rejected(status: u16, message: &str) -> DeckError {
    DeckError::Backend {
        status,
        message: message.to_string(),
    }
}

pub fn report(city: &str, condition: &str) -> WeatherReport {
    WeatherReport {
        city: city.to_string(),
        country: "GB".into(),
        temp: 57.0,
        feels_like: 55.4,
        description: "light rain".into(),
        icon: "10d".into(),
        precipitation: 0.2,
        visibility: 6.2,
        humidity: 81.0,
        uv_index: 2.0,
        wind_speed: 12.0,
        wind_deg: 225.0,
        condition: condition.to_string(),
        hourly: vec![
            HourlyEntry {
                time: "14:00".into(),
                temp: 57.0,
                icon: "10d".into(),
            },
            HourlyEntry {
                time: "15:00".into(),
                temp: 58.0,
                icon: "04d".into(),
            },
        ],
        daily: vec![
            DailyEntry {
                day: "Mon".into(),
                date: "Oct 12".into(),
                temp: 59.0,
                icon: "10d".into(),
            },
            DailyEntry {
                day: "Tue".into(),
                date: "Oct 13".into(),
                temp: 61.0,
                icon: "01d".into(),
            },
        ],
    }
}

/// Controller over a fake backend and an in-memory token slot.
pub fn controller(backend: &Arc<FakeBackend>, store: MemoryTokenStore) -> Controller {
    let config = Config::default();
    let backend: Arc<dyn Backend> = backend.clone();
    Controller::new(config, backend, Box::new(store))
}
