// src/tui/widgets/alert.rs — Blocking alert popup.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::centered_rect;
use crate::core::Alert;
use crate::tui::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, alert: &Alert) {
    let popup = centered_rect(50, 7, area);
    f.render_widget(Clear, popup);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(alert.message.as_str(), Theme::text())),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter]", Theme::key_hint()),
            Span::styled(" OK", Theme::key_desc()),
        ]),
    ];

    let p = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::warning()),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(p, popup);
}
