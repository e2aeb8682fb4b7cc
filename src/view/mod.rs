// src/view/mod.rs — View state: screens, login form, background scene, timers.
//
// Nothing in here draws; the TUI renders whatever these types say.

pub mod auth;
pub mod router;
pub mod timer;
pub mod video;

pub use auth::{AuthField, AuthForm};
pub use router::{Page, ViewRouter, ViewState};
pub use timer::TimerSlot;
pub use video::{BackgroundVideo, Condition};
