// src/core/controller.rs — Dashboard controller
//
// Owns the session, the view router, the weather panel, the background
// scene and the alert queue, and is the only thing that mutates them.
// Network work is handed out as `Request`s; whoever runs the event loop
// executes them (inline or on a spawned task) and feeds the resulting
// `Completion` back through `apply`.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::watch;

use crate::api::Backend;
use crate::infra::config::Config;
use crate::infra::errors::DeckError;
use crate::session::{
    LoginCompletion, LoginOutcome, LoginTicket, Session, SessionManager, TokenStore,
    UserIdentity, VerifyCompletion, VerifyOutcome, VerifyTicket,
};
use crate::view::{AuthForm, BackgroundVideo, Condition, ViewRouter, ViewState};
use crate::weather::{
    self, DashboardModel, SearchCompletion, SearchOutcome, SearchTicket, WeatherPanel,
};

/// A blocking message the user has to acknowledge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
}

#[derive(Debug, Clone)]
pub enum Request {
    Verify(VerifyTicket),
    Login(LoginTicket),
    Search(SearchTicket),
}

#[derive(Debug)]
pub enum Completion {
    Verify(VerifyCompletion),
    Login(LoginCompletion),
    Search(SearchCompletion),
}

impl Request {
    pub async fn run(self, backend: &dyn Backend) -> Completion {
        match self {
            Request::Verify(t) => Completion::Verify(t.run(backend).await),
            Request::Login(t) => Completion::Login(t.run(backend).await),
            Request::Search(t) => Completion::Search(t.run(backend).await),
        }
    }
}

pub struct Controller {
    backend: Arc<dyn Backend>,
    config: Config,
    session: SessionManager,
    session_rx: watch::Receiver<Session>,
    signed_in: Option<UserIdentity>,
    router: ViewRouter,
    panel: WeatherPanel,
    video: BackgroundVideo,
    alerts: VecDeque<Alert>,
}

impl Controller {
    pub fn new(config: Config, backend: Arc<dyn Backend>, store: Box<dyn TokenStore>) -> Self {
        let session = SessionManager::new(store);
        let session_rx = session.subscribe();
        Self {
            router: ViewRouter::new(config.transitions.greeting_fade()),
            panel: WeatherPanel::new(),
            video: Self::fresh_video(&config),
            backend,
            config,
            session,
            session_rx,
            signed_in: None,
            alerts: VecDeque::new(),
        }
    }

    fn fresh_video(config: &Config) -> BackgroundVideo {
        BackgroundVideo::new(
            &config.assets.video_base,
            Condition::resolve(&config.assets.initial_condition),
            config.transitions.video_fade(),
        )
    }

    // ── Accessors ────────────────────────────────────────────────

    pub fn backend(&self) -> Arc<dyn Backend> {
        Arc::clone(&self.backend)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    pub fn view(&self) -> &ViewState {
        self.router.state()
    }

    pub fn panel(&self) -> &WeatherPanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut WeatherPanel {
        &mut self.panel
    }

    pub fn video(&self) -> &BackgroundVideo {
        &self.video
    }

    pub fn auth_form_mut(&mut self) -> Option<&mut AuthForm> {
        self.router.auth_form_mut()
    }

    /// Identity shown in the dashboard header, tracked from session changes.
    pub fn signed_in(&self) -> Option<&UserIdentity> {
        self.signed_in.as_ref()
    }

    pub fn dashboard_model(&self) -> Option<DashboardModel> {
        self.panel.model(&self.config.assets.icon_host)
    }

    // ── Alerts ───────────────────────────────────────────────────

    pub fn alert(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%message, "alert");
        self.alerts.push_back(Alert { message });
    }

    pub fn current_alert(&self) -> Option<&Alert> {
        self.alerts.front()
    }

    pub fn dismiss_alert(&mut self) -> Option<Alert> {
        self.alerts.pop_front()
    }

    // ── Session ──────────────────────────────────────────────────

    /// Restore a stored session. Returns the verification to run, if any.
    pub fn startup(&mut self) -> Option<Request> {
        let ticket = match self.session.restore() {
            Ok(ticket) => ticket,
            Err(e) => {
                tracing::warn!("could not read stored session: {e}");
                None
            }
        };
        self.sync_session();
        ticket.map(Request::Verify)
    }

    fn sync_session(&mut self) {
        if self.session_rx.has_changed().unwrap_or(false) {
            self.signed_in = self.session_rx.borrow_and_update().user().cloned();
        }
    }

    /// Forget the session and start over from the greeting, as a full
    /// reload would.
    pub fn logout(&mut self) {
        if let Err(e) = self.session.logout() {
            tracing::warn!("logout could not clear stored token: {e}");
        }
        self.router = ViewRouter::new(self.config.transitions.greeting_fade());
        self.panel = WeatherPanel::new();
        self.video = Self::fresh_video(&self.config);
        self.alerts.clear();
        self.sync_session();
    }

    // ── View actions ─────────────────────────────────────────────

    pub fn get_started(&mut self, now: Instant) {
        let has_token = self.session.is_authenticated();
        let hint = self.config.auth.hint().map(str::to_string);
        self.router.get_started(has_token, now, hint);
    }

    pub fn open_auth(&mut self) {
        self.router.open_auth(self.config.auth.hint().map(str::to_string));
    }

    pub fn close_auth(&mut self) -> bool {
        self.router.close_auth()
    }

    /// Submit the open login form.
    pub fn submit_login(&mut self) -> Option<Request> {
        let form = self.router.auth_form_mut()?;
        form.submitting = true;
        let (email, password) = (form.email.clone(), form.password.clone());
        Some(Request::Login(self.session.begin_login(&email, &password)))
    }

    /// Search for the city currently typed into the search box.
    pub fn begin_search(&mut self) -> Option<Request> {
        let city = match weather::validate_city(self.panel.input()) {
            Ok(city) => city,
            Err(e) => {
                self.alert(e.alert_text());
                return None;
            }
        };
        let Some(token) = self.session.token().map(str::to_string) else {
            self.alert(DeckError::NotAuthenticated.alert_text());
            self.open_auth();
            return None;
        };
        Some(Request::Search(self.panel.begin(city, &token)))
    }

    // ── Completions and time ─────────────────────────────────────

    pub fn apply(&mut self, completion: Completion, now: Instant) {
        match completion {
            Completion::Verify(c) => {
                if let VerifyOutcome::Revoked = self.session.apply_verify(c) {
                    tracing::info!("stored session expired; login required");
                }
            }
            Completion::Login(c) => match self.session.apply_login(c) {
                LoginOutcome::Authenticated(_) => {
                    self.router.close_auth();
                    self.router.show_dashboard(now);
                }
                LoginOutcome::Rejected(e) => {
                    if let Some(form) = self.router.auth_form_mut() {
                        form.submitting = false;
                    }
                    self.alert(e.alert_text());
                }
                LoginOutcome::Stale => {}
            },
            Completion::Search(c) => match self.panel.apply(c) {
                SearchOutcome::Updated { condition } => {
                    self.video.request(&condition, now);
                }
                SearchOutcome::Failed(e) => self.alert(e.alert_text()),
                SearchOutcome::Stale => {}
            },
        }
        self.sync_session();
    }

    /// Advance transition timers.
    pub fn tick(&mut self, now: Instant) {
        if self.router.tick(now) {
            self.video.reveal();
        }
        self.video.tick(now);
        self.sync_session();
    }

    /// Run a request to completion on the current task and apply it.
    pub async fn execute(&mut self, request: Request) {
        let backend = self.backend();
        let completion = request.run(backend.as_ref()).await;
        self.apply(completion, Instant::now());
    }

    // ── Convenience flows ────────────────────────────────────────

    /// Restore and verify the stored session.
    pub async fn restore(&mut self) {
        if let Some(request) = self.startup() {
            self.execute(request).await;
        }
    }

    /// Fill in the login form (opening it if needed) and submit it.
    pub async fn login(&mut self, email: &str, password: &str) {
        self.open_auth();
        if let Some(form) = self.router.auth_form_mut() {
            form.email = email.to_string();
            form.password = password.to_string();
        }
        if let Some(request) = self.submit_login() {
            self.execute(request).await;
        }
    }

    pub async fn search(&mut self, city: &str) {
        self.panel.set_input(city);
        if let Some(request) = self.begin_search() {
            self.execute(request).await;
        }
    }
}
