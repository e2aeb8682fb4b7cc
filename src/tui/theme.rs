// src/tui/theme.rs — Color scheme and style definitions for the dashboard.

use ratatui::style::{Color, Modifier, Style};

use crate::view::Condition;

/// Sky-inspired color palette.
pub struct Theme;

impl Theme {
    // ── Base colors ──────────────────────────────────────────────
    pub const SKY_ORANGE: Color = Color::Rgb(255, 160, 60);
    pub const SKY_WHITE: Color = Color::Rgb(240, 240, 240);
    pub const SKY_NIGHT: Color = Color::Rgb(12, 14, 24);
    pub const SKY_BLUE: Color = Color::Rgb(70, 130, 220);
    pub const SKY_GREEN: Color = Color::Rgb(80, 200, 120);
    pub const SKY_RED: Color = Color::Rgb(230, 80, 80);
    pub const SKY_YELLOW: Color = Color::Rgb(230, 200, 60);
    pub const SKY_GRAY: Color = Color::Rgb(120, 120, 140);
    pub const SKY_DIM: Color = Color::Rgb(80, 80, 100);
    pub const SKY_CYAN: Color = Color::Rgb(80, 200, 220);

    // ── Scene backdrops ──────────────────────────────────────────
    pub const SCENE_CLEAR: Color = Color::Rgb(24, 58, 104);
    pub const SCENE_CLOUDS: Color = Color::Rgb(52, 58, 70);
    pub const SCENE_RAIN: Color = Color::Rgb(22, 36, 56);
    pub const SCENE_THUNDERSTORM: Color = Color::Rgb(30, 22, 48);
    pub const SCENE_SNOW: Color = Color::Rgb(70, 84, 100);
    pub const SCENE_MIST: Color = Color::Rgb(60, 66, 72);

    // ── Semantic styles ──────────────────────────────────────────

    /// Main title / header bar.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::SKY_ORANGE)
            .add_modifier(Modifier::BOLD)
    }

    /// Block border (normal).
    pub fn border() -> Style {
        Style::default().fg(Theme::SKY_DIM)
    }

    /// Block border (focused input / modal).
    pub fn border_focus() -> Style {
        Style::default().fg(Theme::SKY_ORANGE)
    }

    /// Normal body text.
    pub fn text() -> Style {
        Style::default().fg(Theme::SKY_WHITE)
    }

    /// Dimmed / secondary text.
    pub fn text_dim() -> Style {
        Style::default().fg(Theme::SKY_GRAY)
    }

    pub fn success() -> Style {
        Style::default().fg(Theme::SKY_GREEN)
    }

    pub fn warning() -> Style {
        Style::default().fg(Theme::SKY_YELLOW)
    }

    pub fn error() -> Style {
        Style::default().fg(Theme::SKY_RED)
    }

    pub fn info() -> Style {
        Style::default().fg(Theme::SKY_BLUE)
    }

    /// Large figures (main temperature).
    pub fn highlight() -> Style {
        Style::default()
            .fg(Theme::SKY_CYAN)
            .add_modifier(Modifier::BOLD)
    }

    /// Key hint in the footer.
    pub fn key_hint() -> Style {
        Style::default().fg(Theme::SKY_ORANGE)
    }

    /// Description next to key hint.
    pub fn key_desc() -> Style {
        Style::default().fg(Theme::SKY_GRAY)
    }

    /// Search button; greyed out while a search is in flight.
    pub fn button(enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(Theme::SKY_NIGHT)
                .bg(Theme::SKY_ORANGE)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::SKY_GRAY).bg(Theme::SKY_DIM)
        }
    }

    /// Backdrop color for a background scene.
    pub fn scene(condition: Condition) -> Color {
        match condition {
            Condition::Clear => Theme::SCENE_CLEAR,
            Condition::Clouds => Theme::SCENE_CLOUDS,
            Condition::Rain => Theme::SCENE_RAIN,
            Condition::Thunderstorm => Theme::SCENE_THUNDERSTORM,
            Condition::Snow => Theme::SCENE_SNOW,
            Condition::Mist => Theme::SCENE_MIST,
        }
    }

    /// Backdrop style; a faded-out scene is plain night.
    pub fn backdrop(condition: Condition, opacity: f32) -> Style {
        let bg = if opacity > 0.0 {
            Theme::scene(condition)
        } else {
            Theme::SKY_NIGHT
        };
        Style::default().bg(bg)
    }

    /// Style for a UV index value (color-coded by exposure band).
    pub fn uv(value: f64) -> Style {
        if value < 3.0 {
            Style::default().fg(Theme::SKY_GREEN)
        } else if value < 6.0 {
            Style::default().fg(Theme::SKY_YELLOW)
        } else {
            Style::default().fg(Theme::SKY_RED)
        }
    }
}
