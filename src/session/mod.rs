// src/session/mod.rs — Session manager: token, identity, persistence.
//
// The session is a single object owned by the controller. Requests are split
// into a ticket (issued synchronously, carries everything the request needs)
// and a completion (applied synchronously when the request finishes), so the
// network call itself never borrows session state. Completions that no
// longer match the current session are discarded.

pub mod store;

use tokio::sync::watch;

use crate::api::{Backend, LoginResponse, VerifyResponse};
use crate::infra::errors::DeckError;
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore};

/// Who is signed in. Only the email is canonical; the display name is
/// computed whenever it is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub email: String,
    /// Name reported by the gateway at login, if any.
    pub name: Option<String>,
}

impl UserIdentity {
    pub fn from_email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => self.email.split('@').next().unwrap_or(&self.email),
        }
    }
}

/// Credentials of the current session. A user can only exist alongside a
/// token; it stays `None` until the token has been verified or came from a
/// fresh login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auth {
    pub token: String,
    pub user: Option<UserIdentity>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub auth: Option<Auth>,
}

impl Session {
    pub fn token(&self) -> Option<&str> {
        self.auth.as_ref().map(|a| a.token.as_str())
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        self.auth.as_ref().and_then(|a| a.user.as_ref())
    }
}

// ─── Tickets and completions ────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct VerifyTicket {
    pub token: String,
}

#[derive(Debug)]
pub struct VerifyCompletion {
    pub token: String,
    pub result: Result<VerifyResponse, DeckError>,
}

impl VerifyTicket {
    pub async fn run(self, backend: &dyn Backend) -> VerifyCompletion {
        let result = backend.verify(&self.token).await;
        VerifyCompletion {
            token: self.token,
            result,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoginTicket {
    pub seq: u64,
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginCompletion {
    pub seq: u64,
    pub result: Result<LoginResponse, DeckError>,
}

impl LoginTicket {
    pub async fn run(self, backend: &dyn Backend) -> LoginCompletion {
        let result = backend.login(&self.email, &self.password).await;
        LoginCompletion {
            seq: self.seq,
            result,
        }
    }
}

#[derive(Debug)]
pub enum VerifyOutcome {
    Verified(UserIdentity),
    /// The gateway rejected the token; it has been forgotten.
    Revoked,
    /// The check could not be completed; the session is left as it was.
    Unchanged,
    /// The token changed while the check was in flight.
    Stale,
}

#[derive(Debug)]
pub enum LoginOutcome {
    Authenticated(UserIdentity),
    Rejected(DeckError),
    /// A newer login was issued after this one.
    Stale,
}

// ─── Manager ────────────────────────────────────────────────────────────────

pub struct SessionManager {
    store: Box<dyn TokenStore>,
    session: Session,
    login_seq: u64,
    notifier: watch::Sender<Session>,
}

impl SessionManager {
    pub fn new(store: Box<dyn TokenStore>) -> Self {
        let (notifier, _) = watch::channel(Session::default());
        Self {
            store,
            session: Session::default(),
            login_seq: 0,
            notifier,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        self.session.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.auth.is_some()
    }

    /// Receive every session change. The receiver starts at the current state.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.notifier.subscribe()
    }

    fn set(&mut self, session: Session) {
        self.session = session;
        self.notifier.send_replace(self.session.clone());
    }

    /// Load the durable token. When one exists it becomes the current
    /// session and a verification ticket is returned for it.
    pub fn restore(&mut self) -> Result<Option<VerifyTicket>, DeckError> {
        let Some(token) = self.store.load()? else {
            tracing::debug!("no stored session");
            return Ok(None);
        };
        tracing::debug!("restored stored session; verifying");
        self.set(Session {
            auth: Some(Auth {
                token: token.clone(),
                user: None,
            }),
        });
        Ok(Some(VerifyTicket { token }))
    }

    pub fn apply_verify(&mut self, completion: VerifyCompletion) -> VerifyOutcome {
        if self.token() != Some(completion.token.as_str()) {
            tracing::debug!("discarding verification of a replaced token");
            return VerifyOutcome::Stale;
        }

        match completion.result {
            Ok(resp) => {
                // Keep a gateway-provided name if it belongs to the same account.
                let name = self
                    .user()
                    .filter(|u| u.email == resp.email)
                    .and_then(|u| u.name.clone());
                let user = UserIdentity {
                    email: resp.email,
                    name,
                };
                tracing::info!(email = %user.email, "session verified");
                self.set(Session {
                    auth: Some(Auth {
                        token: completion.token,
                        user: Some(user.clone()),
                    }),
                });
                VerifyOutcome::Verified(user)
            }
            Err(e) if e.is_rejection() => {
                tracing::info!("stored token rejected: {e}");
                if let Err(e) = self.store.clear() {
                    tracing::warn!("failed to clear stored token: {e}");
                }
                self.set(Session::default());
                VerifyOutcome::Revoked
            }
            Err(e) => {
                tracing::warn!("Verify failed: {e}");
                VerifyOutcome::Unchanged
            }
        }
    }

    /// Verify `token` against the gateway and apply the result.
    pub async fn verify(&mut self, backend: &dyn Backend, token: String) -> VerifyOutcome {
        let completion = VerifyTicket { token }.run(backend).await;
        self.apply_verify(completion)
    }

    pub fn begin_login(&mut self, email: &str, password: &str) -> LoginTicket {
        self.login_seq += 1;
        LoginTicket {
            seq: self.login_seq,
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    pub fn apply_login(&mut self, completion: LoginCompletion) -> LoginOutcome {
        if completion.seq == 0 || completion.seq != self.login_seq {
            tracing::debug!(
                seq = completion.seq,
                latest = self.login_seq,
                "discarding stale login response"
            );
            return LoginOutcome::Stale;
        }

        match completion.result {
            Ok(resp) => {
                if let Err(e) = self.store.save(&resp.token) {
                    tracing::warn!("failed to persist token, session will not survive restart: {e}");
                }
                let user = UserIdentity {
                    email: resp.user.email,
                    name: resp.user.name,
                };
                tracing::info!(email = %user.email, "logged in");
                self.set(Session {
                    auth: Some(Auth {
                        token: resp.token,
                        user: Some(user.clone()),
                    }),
                });
                LoginOutcome::Authenticated(user)
            }
            Err(e) => {
                tracing::info!("login rejected: {e}");
                LoginOutcome::Rejected(e)
            }
        }
    }

    /// Log in against the gateway and apply the result.
    pub async fn login(
        &mut self,
        backend: &dyn Backend,
        email: &str,
        password: &str,
    ) -> LoginOutcome {
        let ticket = self.begin_login(email, password);
        let completion = ticket.run(backend).await;
        self.apply_login(completion)
    }

    /// Forget the session, durably and in memory. Logins still in flight
    /// become stale.
    pub fn logout(&mut self) -> Result<(), DeckError> {
        self.login_seq += 1;
        self.store.clear()?;
        self.set(Session::default());
        tracing::info!("logged out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::UserInfo;

    fn manager_with(store: &MemoryTokenStore) -> SessionManager {
        SessionManager::new(Box::new(store.clone()))
    }

    fn login_ok(seq: u64, token: &str) -> LoginCompletion {
        LoginCompletion {
            seq,
            result: Ok(LoginResponse {
                token: token.into(),
                user: UserInfo {
                    email: "admin@weather.com".into(),
                    name: Some("Admin User".into()),
                },
            }),
        }
    }

    #[test]
    fn test_display_name_from_email() {
        let u = UserIdentity::from_email("jane.doe@example.com");
        assert_eq!(u.display_name(), "jane.doe");
    }

    #[test]
    fn test_display_name_prefers_reported_name() {
        let u = UserIdentity {
            email: "admin@weather.com".into(),
            name: Some("Admin User".into()),
        };
        assert_eq!(u.display_name(), "Admin User");
    }

    #[test]
    fn test_display_name_without_at_sign() {
        let u = UserIdentity::from_email("localuser");
        assert_eq!(u.display_name(), "localuser");
    }

    #[test]
    fn test_restore_without_token() {
        let store = MemoryTokenStore::new();
        let mut m = manager_with(&store);
        assert!(m.restore().unwrap().is_none());
        assert!(!m.is_authenticated());
    }

    #[test]
    fn test_restore_sets_token_without_user() {
        let store = MemoryTokenStore::with_token("T");
        let mut m = manager_with(&store);
        let ticket = m.restore().unwrap().unwrap();
        assert_eq!(ticket.token, "T");
        assert_eq!(m.token(), Some("T"));
        assert!(m.user().is_none());
    }

    #[test]
    fn test_verify_success_derives_user() {
        let store = MemoryTokenStore::with_token("T");
        let mut m = manager_with(&store);
        m.restore().unwrap();
        let outcome = m.apply_verify(VerifyCompletion {
            token: "T".into(),
            result: Ok(VerifyResponse {
                email: "sam@example.com".into(),
                valid: Some(true),
            }),
        });
        assert!(matches!(outcome, VerifyOutcome::Verified(_)));
        assert_eq!(m.user().unwrap().display_name(), "sam");
    }

    #[test]
    fn test_verify_rejection_clears_everything() {
        let store = MemoryTokenStore::with_token("T");
        let mut m = manager_with(&store);
        m.restore().unwrap();
        let outcome = m.apply_verify(VerifyCompletion {
            token: "T".into(),
            result: Err(DeckError::backend(401, Some("Invalid token".into()), "x")),
        });
        assert!(matches!(outcome, VerifyOutcome::Revoked));
        assert!(!m.is_authenticated());
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_verify_transport_failure_keeps_state() {
        let store = MemoryTokenStore::with_token("T");
        let mut m = manager_with(&store);
        m.restore().unwrap();
        let outcome = m.apply_verify(VerifyCompletion {
            token: "T".into(),
            result: Err(DeckError::Transport("connection refused".into())),
        });
        assert!(matches!(outcome, VerifyOutcome::Unchanged));
        assert_eq!(m.token(), Some("T"));
        assert_eq!(store.get().as_deref(), Some("T"));
    }

    #[test]
    fn test_verify_for_replaced_token_is_stale() {
        let store = MemoryTokenStore::with_token("OLD");
        let mut m = manager_with(&store);
        m.restore().unwrap();
        let ticket = m.begin_login("admin@weather.com", "pw");
        m.apply_login(login_ok(ticket.seq, "NEW"));

        let outcome = m.apply_verify(VerifyCompletion {
            token: "OLD".into(),
            result: Err(DeckError::backend(401, None, "Invalid token")),
        });
        assert!(matches!(outcome, VerifyOutcome::Stale));
        assert_eq!(m.token(), Some("NEW"));
        assert_eq!(store.get().as_deref(), Some("NEW"));
    }

    #[test]
    fn test_login_success_persists_and_sets_user() {
        let store = MemoryTokenStore::new();
        let mut m = manager_with(&store);
        let ticket = m.begin_login("admin@weather.com", "admin123");
        let outcome = m.apply_login(login_ok(ticket.seq, "T"));
        assert!(matches!(outcome, LoginOutcome::Authenticated(_)));
        assert_eq!(store.get().as_deref(), Some("T"));
        assert_eq!(m.token(), Some("T"));
        assert_eq!(m.user().unwrap().email, "admin@weather.com");
    }

    #[test]
    fn test_login_rejection_leaves_store_untouched() {
        let store = MemoryTokenStore::with_token("PREV");
        let mut m = manager_with(&store);
        let ticket = m.begin_login("admin@weather.com", "wrong");
        let outcome = m.apply_login(LoginCompletion {
            seq: ticket.seq,
            result: Err(DeckError::backend(401, Some("bad credentials".into()), "Login failed")),
        });
        match outcome {
            LoginOutcome::Rejected(e) => assert_eq!(e.alert_text(), "bad credentials"),
            other => panic!("expected rejection, got {other:?}"),
        }
        assert_eq!(store.get().as_deref(), Some("PREV"));
    }

    #[test]
    fn test_older_login_is_discarded() {
        let store = MemoryTokenStore::new();
        let mut m = manager_with(&store);
        let first = m.begin_login("a@x.com", "1");
        let second = m.begin_login("b@x.com", "2");
        assert!(matches!(
            m.apply_login(login_ok(first.seq, "FIRST")),
            LoginOutcome::Stale
        ));
        assert!(!m.is_authenticated());
        assert!(matches!(
            m.apply_login(login_ok(second.seq, "SECOND")),
            LoginOutcome::Authenticated(_)
        ));
        assert_eq!(store.get().as_deref(), Some("SECOND"));
    }

    #[test]
    fn test_logout_clears_store_and_memory() {
        let store = MemoryTokenStore::with_token("T");
        let mut m = manager_with(&store);
        m.restore().unwrap();
        m.logout().unwrap();
        assert!(!m.is_authenticated());
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_login_in_flight_at_logout_is_discarded() {
        let store = MemoryTokenStore::with_token("T");
        let mut m = manager_with(&store);
        m.restore().unwrap();

        let ticket = m.begin_login("admin@weather.com", "admin123");
        m.logout().unwrap();

        let outcome = m.apply_login(login_ok(ticket.seq, "NEW"));
        assert!(matches!(outcome, LoginOutcome::Stale));
        assert_eq!(store.get(), None);
        assert!(m.token().is_none());
    }

    #[test]
    fn test_subscribers_see_changes() {
        let store = MemoryTokenStore::new();
        let mut m = manager_with(&store);
        let mut rx = m.subscribe();
        assert!(!rx.has_changed().unwrap());

        let ticket = m.begin_login("admin@weather.com", "admin123");
        m.apply_login(login_ok(ticket.seq, "T"));
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().token(), Some("T"));

        m.logout().unwrap();
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().auth.is_none());
    }
}
