// src/session/store.rs — Durable slot for the auth token
//
// A single value: the bearer token of the signed-in user. Persisted as
// ~/.weatherdeck/session.json with the same atomic write + chmod 600 dance
// used for any credential file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::infra::errors::DeckError;
use crate::infra::paths;

/// Durable storage for the auth token.
pub trait TokenStore: Send {
    fn load(&self) -> Result<Option<String>, DeckError>;
    fn save(&mut self, token: &str) -> Result<(), DeckError>;
    fn clear(&mut self) -> Result<(), DeckError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    token: String,
}

/// Token slot backed by a JSON file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the default location under the config directory.
    pub fn default_location() -> Self {
        Self::new(paths::session_file_path())
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, DeckError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str::<SessionFile>(&content) {
            Ok(file) if !file.token.is_empty() => Ok(Some(file.token)),
            Ok(_) => Ok(None),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "ignoring unreadable session file: {e}");
                Ok(None)
            }
        }
    }

    fn save(&mut self, token: &str) -> Result<(), DeckError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&SessionFile {
            token: token.to_string(),
        })
        .map_err(anyhow::Error::from)?;

        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, &json)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
        }

        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DeckError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process token slot. Clones share the same slot, so a test can keep a
/// handle and inspect what the session wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        *store.lock() = Some(token.to_string());
        store
    }

    pub fn get(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(|p| p.into_inner())
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, DeckError> {
        Ok(self.get())
    }

    fn save(&mut self, token: &str) -> Result<(), DeckError> {
        *self.lock() = Some(token.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DeckError> {
        *self.lock() = None;
        Ok(())
    }
}
