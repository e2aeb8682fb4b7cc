// src/infra/errors.rs — Error types for weatherdeck

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    // Client-side rejections (no request was made)
    #[error("{0}")]
    Validation(String),

    #[error("Please login first")]
    NotAuthenticated,

    // Backend answered with a non-2xx status
    #[error("{message}")]
    Backend { status: u16, message: String },

    // Request never completed or the body was unreadable
    #[error("Error: {0}")]
    Transport(String),

    #[error("Error: {0}")]
    Decode(String),

    // Infra
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DeckError {
    /// Build a backend error from an optional server message, using
    /// `fallback` when the server did not say anything useful.
    pub fn backend(status: u16, message: Option<String>, fallback: &str) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        DeckError::Backend { status, message }
    }

    /// Text shown in the blocking alert for this error.
    pub fn alert_text(&self) -> String {
        self.to_string()
    }

    /// Whether the backend rejected the request outright, as opposed to the
    /// request failing to complete.
    pub fn is_rejection(&self) -> bool {
        matches!(self, DeckError::Backend { .. })
    }
}

impl From<reqwest::Error> for DeckError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            DeckError::Decode(e.to_string())
        } else {
            DeckError::Transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_uses_server_message() {
        let e = DeckError::backend(401, Some("bad credentials".into()), "Login failed");
        assert_eq!(e.alert_text(), "bad credentials");
        assert!(e.is_rejection());
    }

    #[test]
    fn test_backend_falls_back_on_missing_message() {
        let e = DeckError::backend(500, None, "Login failed");
        assert_eq!(e.alert_text(), "Login failed");
    }

    #[test]
    fn test_backend_falls_back_on_blank_message() {
        let e = DeckError::backend(500, Some("  ".into()), "Failed to get weather");
        assert_eq!(e.alert_text(), "Failed to get weather");
    }

    #[test]
    fn test_transport_is_prefixed() {
        let e = DeckError::Transport("connection refused".into());
        assert_eq!(e.alert_text(), "Error: connection refused");
        assert!(!e.is_rejection());
    }

    #[test]
    fn test_not_authenticated_text() {
        assert_eq!(DeckError::NotAuthenticated.alert_text(), "Please login first");
    }
}
