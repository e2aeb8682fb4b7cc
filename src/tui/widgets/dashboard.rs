// src/tui/widgets/dashboard.rs — Main weather dashboard.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::tui::theme::Theme;
use crate::weather::render::{compass_arrow, compass_point, UV_SCALE_MAX};
use crate::weather::DashboardModel;

pub struct DashboardProps<'a> {
    pub user: Option<&'a str>,
    pub input: &'a str,
    pub button_label: &'a str,
    pub search_enabled: bool,
    pub model: Option<&'a DashboardModel>,
}

pub fn render(f: &mut Frame, area: Rect, props: &DashboardProps) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // user bar
            Constraint::Length(3), // search
            Constraint::Min(10),   // content
        ])
        .split(area);

    render_user_bar(f, chunks[0], props.user);
    render_search(f, chunks[1], props);

    match props.model {
        Some(model) => render_content(f, chunks[2], model),
        None => {
            let p = Paragraph::new(Span::styled(
                "  Type a city and press Enter.",
                Theme::text_dim(),
            ));
            f.render_widget(p, chunks[2]);
        }
    }
}

fn render_user_bar(f: &mut Frame, area: Rect, user: Option<&str>) {
    let line = match user {
        Some(name) => Line::from(vec![
            Span::styled(" \u{25cf} ", Theme::success()),
            Span::styled(name.to_string(), Theme::text()),
        ]),
        None => Line::from(Span::styled(" not signed in", Theme::text_dim())),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn render_search(f: &mut Frame, area: Rect, props: &DashboardProps) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(14)])
        .split(area);

    let input = Paragraph::new(Line::from(vec![
        Span::styled(props.input.to_string(), Theme::text()),
        Span::styled("\u{258f}", Theme::key_hint()),
    ]))
    .block(
        Block::default()
            .title(" City ")
            .borders(Borders::ALL)
            .border_style(Theme::border_focus()),
    );
    f.render_widget(input, cols[0]);

    let button = Paragraph::new(Span::styled(
        format!(" {} ", props.button_label),
        Theme::button(props.search_enabled),
    ))
    .block(Block::default().borders(Borders::ALL).border_style(Theme::border()));
    f.render_widget(button, cols[1]);
}

fn render_content(f: &mut Frame, area: Rect, model: &DashboardModel) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // current + details
            Constraint::Length(5), // hourly
            Constraint::Length(6), // daily
            Constraint::Length(5), // uv + wind
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    render_current(f, top[0], model);
    render_details(f, top[1], model);

    render_hourly(f, rows[1], model);
    render_daily(f, rows[2], model);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[3]);
    render_uv(f, bottom[0], model);
    render_wind(f, bottom[1], model);
}

fn render_current(f: &mut Frame, area: Rect, model: &DashboardModel) {
    let block = Block::default()
        .title(Span::styled(format!(" {} ", model.header), Theme::header()))
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", model.main_icon), Theme::highlight()),
            Span::styled(model.main_temp.as_str(), Theme::highlight()),
        ]),
        Line::from(Span::styled(model.description.as_str(), Theme::text())),
        Line::from(""),
        Line::from(Span::styled(model.note.as_str(), Theme::text_dim())),
        Line::from(Span::styled(model.main_icon_url.as_str(), Theme::text_dim())),
    ];
    let p = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(p, area);
}

fn render_details(f: &mut Frame, area: Rect, model: &DashboardModel) {
    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let row = |label: &'static str, value: &str| {
        Line::from(vec![
            Span::styled(label, Theme::text_dim()),
            Span::styled(value.to_string(), Theme::text()),
        ])
    };

    let lines = vec![
        row("Feels like:     ", &model.feels_like),
        row("Precipitation:  ", &model.precipitation),
        row("Visibility:     ", &model.visibility),
        row("Humidity:       ", &model.humidity),
        Line::from(Span::styled(model.dew_point.as_str(), Theme::text_dim())),
    ];
    let p = Paragraph::new(lines).block(block);
    f.render_widget(p, area);
}

fn strip_columns(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let constraints = vec![Constraint::Ratio(1, count as u32); count];
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

fn render_hourly(f: &mut Frame, area: Rect, model: &DashboardModel) {
    let block = Block::default()
        .title(" Hourly ")
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    f.render_widget(block, area);

    for (tile, cell) in model.hourly.iter().zip(strip_columns(inner, model.hourly.len())) {
        let lines = vec![
            Line::from(Span::styled(tile.label.as_str(), Theme::text_dim())),
            Line::from(Span::styled(tile.icon.to_string(), Theme::info())),
            Line::from(Span::styled(tile.temp.as_str(), Theme::text())),
        ];
        f.render_widget(Paragraph::new(lines).centered(), cell);
    }
}

fn render_daily(f: &mut Frame, area: Rect, model: &DashboardModel) {
    let block = Block::default()
        .title(" Daily ")
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    f.render_widget(block, area);

    for (tile, cell) in model.daily.iter().zip(strip_columns(inner, model.daily.len())) {
        let lines = vec![
            Line::from(Span::styled(tile.label.as_str(), Theme::text())),
            Line::from(Span::styled(tile.date.as_str(), Theme::text_dim())),
            Line::from(Span::styled(tile.icon.to_string(), Theme::info())),
            Line::from(Span::styled(tile.temp.as_str(), Theme::highlight())),
        ];
        f.render_widget(Paragraph::new(lines).centered(), cell);
    }
}

fn render_uv(f: &mut Frame, area: Rect, model: &DashboardModel) {
    let style = Theme::uv(model.uv_position * UV_SCALE_MAX);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" UV index ")
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        )
        .gauge_style(style)
        .ratio(model.uv_position.clamp(0.0, 1.0))
        .label(Span::styled(model.uv_index.as_str(), Theme::text()));
    f.render_widget(gauge, area);
}

fn render_wind(f: &mut Frame, area: Rect, model: &DashboardModel) {
    let block = Block::default()
        .title(" Wind ")
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", compass_arrow(model.wind_rotation)), Theme::highlight()),
            Span::styled(
                format!("{} ({}°)", compass_point(model.wind_rotation), model.wind_rotation),
                Theme::text(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Wind: ", Theme::text_dim()),
            Span::styled(format!("{} mph", model.wind_speed), Theme::text()),
            Span::styled("   Gusts: ", Theme::text_dim()),
            Span::styled(format!("{} mph", model.gust_speed), Theme::text()),
        ]),
    ];
    f.render_widget(Paragraph::new(lines).block(block), area);
}
