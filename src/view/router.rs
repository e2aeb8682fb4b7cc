// src/view/router.rs — Which screen is showing, and the greeting cross-fade.

use std::time::{Duration, Instant};

use super::auth::AuthForm;
use super::timer::TimerSlot;

/// Page underneath an auth prompt overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Greeting,
    Dashboard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Landing screen. `fading` is set once the dashboard transition began.
    Greeting { fading: bool },
    /// Login overlay drawn over `over`.
    AuthPrompt { form: AuthForm, over: Page },
    Dashboard,
}

impl ViewState {
    pub fn page(&self) -> Page {
        match self {
            ViewState::Greeting { .. } => Page::Greeting,
            ViewState::AuthPrompt { over, .. } => *over,
            ViewState::Dashboard => Page::Dashboard,
        }
    }
}

#[derive(Debug)]
pub struct ViewRouter {
    state: ViewState,
    reveal: TimerSlot<()>,
    fade: Duration,
}

impl ViewRouter {
    pub fn new(fade: Duration) -> Self {
        Self {
            state: ViewState::Greeting { fading: false },
            reveal: TimerSlot::new(),
            fade,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_transitioning(&self) -> bool {
        self.reveal.is_pending()
    }

    pub fn auth_form(&self) -> Option<&AuthForm> {
        match &self.state {
            ViewState::AuthPrompt { form, .. } => Some(form),
            _ => None,
        }
    }

    pub fn auth_form_mut(&mut self) -> Option<&mut AuthForm> {
        match &mut self.state {
            ViewState::AuthPrompt { form, .. } => Some(form),
            _ => None,
        }
    }

    /// The "get started" action on the greeting screen.
    pub fn get_started(&mut self, has_token: bool, now: Instant, hint: Option<String>) {
        if self.state != (ViewState::Greeting { fading: false }) {
            return;
        }
        if has_token {
            self.show_dashboard(now);
        } else {
            self.open_auth(hint);
        }
    }

    /// Open the login overlay with an empty form. At most one is open.
    pub fn open_auth(&mut self, hint: Option<String>) {
        if matches!(self.state, ViewState::AuthPrompt { .. }) {
            return;
        }
        let over = match self.state {
            ViewState::Greeting { .. } if self.reveal.is_pending() => Page::Dashboard,
            _ => self.state.page(),
        };
        self.state = ViewState::AuthPrompt {
            form: AuthForm::new(hint),
            over,
        };
    }

    /// Dismiss the login overlay, discarding its input. Returns whether an
    /// overlay was open.
    pub fn close_auth(&mut self) -> bool {
        let over = match &self.state {
            ViewState::AuthPrompt { over, .. } => *over,
            _ => return false,
        };
        self.state = match over {
            Page::Greeting => ViewState::Greeting {
                fading: self.reveal.is_pending(),
            },
            Page::Dashboard if self.reveal.is_pending() => ViewState::Greeting { fading: true },
            Page::Dashboard => ViewState::Dashboard,
        };
        true
    }

    /// Begin the fade from the greeting to the dashboard. Rescheduling while a
    /// fade is pending restarts it rather than queueing a second reveal.
    pub fn show_dashboard(&mut self, now: Instant) {
        match self.state {
            ViewState::Dashboard => {}
            ViewState::AuthPrompt { .. } => {
                self.close_auth();
                self.show_dashboard(now);
            }
            ViewState::Greeting { .. } => {
                self.state = ViewState::Greeting { fading: true };
                if self.reveal.schedule(now, self.fade, ()).is_some() {
                    tracing::debug!("restarted pending dashboard transition");
                }
            }
        }
    }

    /// Advance timers. Returns true when the dashboard was revealed by this
    /// tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.reveal.poll(now).is_none() {
            return false;
        }
        match &mut self.state {
            ViewState::AuthPrompt { over, .. } => *over = Page::Dashboard,
            state => *state = ViewState::Dashboard,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FADE: Duration = Duration::from_millis(800);

    #[test]
    fn test_starts_on_greeting() {
        let r = ViewRouter::new(FADE);
        assert_eq!(r.state(), &ViewState::Greeting { fading: false });
    }

    #[test]
    fn test_get_started_with_token_fades_to_dashboard() {
        let t0 = Instant::now();
        let mut r = ViewRouter::new(FADE);
        r.get_started(true, t0, None);
        assert_eq!(r.state(), &ViewState::Greeting { fading: true });
        assert!(!r.tick(t0 + Duration::from_millis(799)));
        assert!(r.tick(t0 + FADE));
        assert_eq!(r.state(), &ViewState::Dashboard);
    }

    #[test]
    fn test_get_started_without_token_opens_auth() {
        let mut r = ViewRouter::new(FADE);
        r.get_started(false, Instant::now(), Some("hint".into()));
        match r.state() {
            ViewState::AuthPrompt { form, over } => {
                assert_eq!(*over, Page::Greeting);
                assert_eq!(form.hint.as_deref(), Some("hint"));
            }
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn test_get_started_ignored_while_fading() {
        let t0 = Instant::now();
        let mut r = ViewRouter::new(FADE);
        r.get_started(true, t0, None);
        r.get_started(true, t0 + Duration::from_millis(500), None);
        // Still the first deadline.
        assert!(r.tick(t0 + FADE));
    }

    #[test]
    fn test_close_auth_discards_form() {
        let mut r = ViewRouter::new(FADE);
        r.open_auth(None);
        r.auth_form_mut().unwrap().insert_char('x');
        assert!(r.close_auth());
        assert_eq!(r.state(), &ViewState::Greeting { fading: false });
        r.open_auth(None);
        assert_eq!(r.auth_form().unwrap().email, "");
    }

    #[test]
    fn test_close_auth_without_overlay_is_noop() {
        let mut r = ViewRouter::new(FADE);
        assert!(!r.close_auth());
    }

    #[test]
    fn test_open_auth_twice_keeps_single_form() {
        let mut r = ViewRouter::new(FADE);
        r.open_auth(None);
        r.auth_form_mut().unwrap().insert_char('a');
        r.open_auth(None);
        assert_eq!(r.auth_form().unwrap().email, "a");
    }

    #[test]
    fn test_auth_over_dashboard_returns_to_dashboard() {
        let t0 = Instant::now();
        let mut r = ViewRouter::new(FADE);
        r.show_dashboard(t0);
        r.tick(t0 + FADE);
        r.open_auth(None);
        assert_eq!(r.state().page(), Page::Dashboard);
        r.close_auth();
        assert_eq!(r.state(), &ViewState::Dashboard);
    }

    #[test]
    fn test_show_dashboard_from_auth_closes_overlay() {
        let t0 = Instant::now();
        let mut r = ViewRouter::new(FADE);
        r.open_auth(None);
        r.show_dashboard(t0);
        assert_eq!(r.state(), &ViewState::Greeting { fading: true });
        assert!(r.tick(t0 + FADE));
        assert_eq!(r.state(), &ViewState::Dashboard);
    }

    #[test]
    fn test_dashboard_is_terminal() {
        let t0 = Instant::now();
        let mut r = ViewRouter::new(FADE);
        r.show_dashboard(t0);
        r.tick(t0 + FADE);
        r.get_started(false, t0 + FADE, None);
        assert_eq!(r.state(), &ViewState::Dashboard);
        r.show_dashboard(t0 + FADE * 2);
        assert!(!r.is_transitioning());
    }
}
