// src/tui/widgets/mod.rs — Widget sub-modules, one per screen element.

pub mod alert;
pub mod auth;
pub mod dashboard;
pub mod greeting;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// A `width_pct` wide, `height` rows tall rectangle centered in `area`.
pub fn centered_rect(width_pct: u16, height: u16, area: Rect) -> Rect {
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_pct.min(100)) / 2),
            Constraint::Percentage(width_pct.min(100)),
            Constraint::Percentage((100 - width_pct.min(100)) / 2),
        ])
        .split(vertical[1])[1]
}
