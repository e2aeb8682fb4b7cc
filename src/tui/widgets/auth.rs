// src/tui/widgets/auth.rs — Login overlay.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;
use crate::tui::theme::Theme;
use crate::view::{AuthField, AuthForm};

pub fn render(f: &mut Frame, area: Rect, form: &AuthForm) {
    let popup = centered_rect(50, 12, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(Span::styled(" Login ", Theme::header()))
        .borders(Borders::ALL)
        .border_style(Theme::border_focus());
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // email
            Constraint::Length(3), // password
            Constraint::Length(1), // hint
            Constraint::Min(1),    // status / keys
        ])
        .split(inner);

    render_field(f, rows[0], "Email", &form.email, form.focus == AuthField::Email);
    render_field(
        f,
        rows[1],
        "Password",
        &form.masked_password(),
        form.focus == AuthField::Password,
    );

    if let Some(hint) = &form.hint {
        f.render_widget(
            Paragraph::new(Span::styled(hint.as_str(), Theme::text_dim())),
            rows[2],
        );
    }

    let status = if form.submitting {
        Line::from(Span::styled("Signing in...", Theme::info()))
    } else {
        Line::from(vec![
            Span::styled("Enter", Theme::key_hint()),
            Span::styled(" login  ", Theme::key_desc()),
            Span::styled("Tab", Theme::key_hint()),
            Span::styled(" switch  ", Theme::key_desc()),
            Span::styled("Esc", Theme::key_hint()),
            Span::styled(" close", Theme::key_desc()),
        ])
    };
    f.render_widget(Paragraph::new(status), rows[3]);
}

fn render_field(f: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(if focused {
            Theme::border_focus()
        } else {
            Theme::border()
        });
    let cursor = if focused { "\u{258f}" } else { "" };
    let p = Paragraph::new(Line::from(vec![
        Span::styled(value.to_string(), Theme::text()),
        Span::styled(cursor, Theme::key_hint()),
    ]))
    .block(block);
    f.render_widget(p, area);
}
