// src/tui/mod.rs — Terminal dashboard.
//
// Renders the controller's view state with ratatui and feeds it key presses,
// timer ticks and request completions. Launch via `weatherdeck dashboard`
// (or no subcommand at all).

pub mod app;
pub mod theme;
pub mod widgets;

pub use app::run_dashboard;
