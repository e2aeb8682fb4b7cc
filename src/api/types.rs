// src/api/types.rs — Request/response types for the weather gateway API.

use serde::{Deserialize, Serialize};

/// Request body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Request body for `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub name: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub email: String,
    #[serde(default)]
    pub valid: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
}

/// Error body shared by every endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Weather report as returned by `GET /weather`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String,
    #[serde(default)]
    pub country: String,
    pub temp: f64,
    pub feels_like: f64,
    pub description: String,
    pub icon: String,
    pub precipitation: f64,
    pub visibility: f64,
    pub humidity: f64,
    pub uv_index: f64,
    pub wind_speed: f64,
    pub wind_deg: f64,
    /// Coarse category used only to pick the background scene.
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub hourly: Vec<HourlyEntry>,
    #[serde(default)]
    pub daily: Vec<DailyEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyEntry {
    pub time: String,
    pub temp: f64,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEntry {
    pub day: String,
    pub date: String,
    pub temp: f64,
    pub icon: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const GATEWAY_REPORT: &str = r#"{
        "city": "London", "country": "United Kingdom",
        "temp": 12, "feels_like": 10, "description": "Rain",
        "humidity": 81, "visibility": 10, "wind_speed": 9, "wind_deg": 230,
        "precipitation": 0.02, "icon": "10d", "condition": "rain", "uv_index": 3,
        "hourly": [{"time": "14:00", "temp": 12, "icon": "10d"},
                   {"time": "15:00", "temp": 13, "icon": "09d"}],
        "daily": [{"day": "Mon", "date": "06/01", "temp": 13, "icon": "10d"}]
    }"#;

    #[test]
    fn test_weather_report_parses_gateway_shape() {
        let r: WeatherReport = serde_json::from_str(GATEWAY_REPORT).unwrap();
        assert_eq!(r.city, "London");
        assert_eq!(r.condition, "rain");
        assert_eq!(r.hourly.len(), 2);
        assert_eq!(r.daily[0].day, "Mon");
        assert!((r.precipitation - 0.02).abs() < f64::EPSILON);
    }

    #[test]
    fn test_weather_report_optional_fields_default() {
        let json = r#"{
            "city": "Nowhere", "temp": 1, "feels_like": 0, "description": "Clear",
            "humidity": 50, "visibility": 10, "wind_speed": 0, "wind_deg": 0,
            "precipitation": 0, "icon": "01d", "uv_index": 0
        }"#;
        let r: WeatherReport = serde_json::from_str(json).unwrap();
        assert_eq!(r.country, "");
        assert_eq!(r.condition, "");
        assert!(r.hourly.is_empty());
        assert!(r.daily.is_empty());
    }

    #[test]
    fn test_login_response_parses() {
        let json = r#"{"token": "T", "user": {"email": "a@b.c", "name": "Admin User"}}"#;
        let r: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(r.token, "T");
        assert_eq!(r.user.name.as_deref(), Some("Admin User"));
    }

    #[test]
    fn test_error_body_tolerates_missing_field() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.error.is_none());
        let body: ErrorBody = serde_json::from_str(r#"{"error": "City not found"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("City not found"));
    }
}
