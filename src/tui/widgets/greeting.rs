// src/tui/widgets/greeting.rs — Landing screen.

use chrono::Timelike;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::centered_rect;
use crate::tui::theme::Theme;

/// Salutation for an hour of the day (0-23).
pub fn salutation(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}

pub fn render(f: &mut Frame, area: Rect, fading: bool) {
    let hour = chrono::Local::now().hour();
    let (title_style, body_style) = if fading {
        (Theme::text_dim(), Theme::text_dim())
    } else {
        (Theme::header(), Theme::text())
    };

    let lines = vec![
        Line::from(Span::styled("weatherdeck", title_style)),
        Line::from(""),
        Line::from(Span::styled(salutation(hour), body_style)),
        Line::from(Span::styled(
            "Check the sky anywhere, right from your terminal.",
            Theme::text_dim(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter]", Theme::key_hint()),
            Span::styled(" Get started", body_style),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if fading { Theme::border() } else { Theme::border_focus() });

    let p = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(p, centered_rect(60, 9, area));
}
