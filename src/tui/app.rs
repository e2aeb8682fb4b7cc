// src/tui/app.rs — Event loop, key handling and top-level rendering.

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use crate::core::{Completion, Controller, Request};
use crate::view::{Page, ViewState};

use super::theme::Theme;
use super::widgets::{self, dashboard::DashboardProps};

/// How long to wait for input before advancing timers and completions.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug)]
pub enum KeyAction {
    None,
    Quit,
    Spawn(Request),
}

// ── Public entry point ───────────────────────────────────────────

/// Launch the dashboard. Blocks until the user quits (Esc / Ctrl-C).
pub async fn run_dashboard(mut controller: Controller) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Completion>();

    // Verification runs in the background while the greeting shows.
    if let Some(request) = controller.startup() {
        spawn_request(&controller, request, &tx);
    }

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, &mut controller, &tx, &mut rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn spawn_request(controller: &Controller, request: Request, tx: &mpsc::UnboundedSender<Completion>) {
    let backend = controller.backend();
    let tx = tx.clone();
    tokio::spawn(async move {
        let completion = request.run(backend.as_ref()).await;
        if tx.send(completion).is_err() {
            tracing::debug!("dashboard closed before request completed");
        }
    });
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut Controller,
    tx: &mpsc::UnboundedSender<Completion>,
    rx: &mut mpsc::UnboundedReceiver<Completion>,
) -> anyhow::Result<()> {
    loop {
        while let Ok(completion) = rx.try_recv() {
            controller.apply(completion, Instant::now());
        }
        controller.tick(Instant::now());

        terminal.draw(|f| render(f, controller))?;

        let ready = tokio::task::block_in_place(|| event::poll(POLL_INTERVAL))?;
        if ready {
            if let Event::Key(key) = event::read()? {
                match handle_key(controller, key, Instant::now()) {
                    KeyAction::Quit => return Ok(()),
                    KeyAction::Spawn(request) => spawn_request(controller, request, tx),
                    KeyAction::None => {}
                }
            }
        }
        tokio::task::yield_now().await;
    }
}

// ── Input ────────────────────────────────────────────────────────

#[derive(Clone, Copy)]
enum Screen {
    Greeting,
    Auth,
    Dashboard,
}

pub fn handle_key(controller: &mut Controller, key: KeyEvent, now: Instant) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    // An open alert swallows everything until acknowledged.
    if controller.current_alert().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            controller.dismiss_alert();
        }
        return KeyAction::None;
    }

    let screen = match controller.view() {
        ViewState::Greeting { .. } => Screen::Greeting,
        ViewState::AuthPrompt { .. } => Screen::Auth,
        ViewState::Dashboard => Screen::Dashboard,
    };

    match screen {
        Screen::Greeting => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => controller.get_started(now),
            KeyCode::Esc | KeyCode::Char('q') => return KeyAction::Quit,
            _ => {}
        },
        Screen::Auth => match key.code {
            KeyCode::Esc => {
                controller.close_auth();
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                if let Some(form) = controller.auth_form_mut() {
                    form.toggle_focus();
                }
            }
            KeyCode::Enter => {
                let busy = controller.auth_form_mut().map_or(true, |f| f.submitting);
                if !busy {
                    if let Some(request) = controller.submit_login() {
                        return KeyAction::Spawn(request);
                    }
                }
            }
            KeyCode::Backspace => {
                if let Some(form) = controller.auth_form_mut() {
                    form.backspace();
                }
            }
            KeyCode::Char(c) if !ctrl => {
                if let Some(form) = controller.auth_form_mut() {
                    form.insert_char(c);
                }
            }
            _ => {}
        },
        Screen::Dashboard => match key.code {
            KeyCode::Esc => return KeyAction::Quit,
            KeyCode::Char('l') if ctrl => controller.logout(),
            KeyCode::Enter => {
                if let Some(request) = controller.begin_search() {
                    return KeyAction::Spawn(request);
                }
            }
            KeyCode::Backspace => controller.panel_mut().backspace(),
            KeyCode::Char(c) if !ctrl => controller.panel_mut().push_char(c),
            _ => {}
        },
    }
    KeyAction::None
}

// ── Rendering ────────────────────────────────────────────────────

fn render(f: &mut Frame, controller: &Controller) {
    let size = f.area();

    // Background scene fills the whole frame.
    let video = controller.video();
    f.render_widget(
        Block::default().style(Theme::backdrop(video.condition(), video.opacity())),
        size,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Main content
            Constraint::Length(1), // Footer / key hints
        ])
        .split(size);

    match controller.view() {
        ViewState::Greeting { fading } => widgets::greeting::render(f, chunks[0], *fading),
        ViewState::AuthPrompt { form, over } => {
            match over {
                Page::Greeting => widgets::greeting::render(f, chunks[0], false),
                Page::Dashboard => render_dashboard(f, chunks[0], controller),
            }
            widgets::auth::render(f, chunks[0], form);
        }
        ViewState::Dashboard => render_dashboard(f, chunks[0], controller),
    }

    if let Some(alert) = controller.current_alert() {
        widgets::alert::render(f, chunks[0], alert);
    }

    render_footer(f, chunks[1], controller);
}

fn render_dashboard(f: &mut Frame, area: Rect, controller: &Controller) {
    let model = controller.dashboard_model();
    let panel = controller.panel();
    let props = DashboardProps {
        user: controller.signed_in().map(|u| u.display_name()),
        input: panel.input(),
        button_label: panel.button_label(),
        search_enabled: panel.search_enabled(),
        model: model.as_ref(),
    };
    widgets::dashboard::render(f, area, &props);
}

fn render_footer(f: &mut Frame, area: Rect, controller: &Controller) {
    let mut spans = match controller.view() {
        ViewState::Dashboard => vec![
            Span::styled(" Esc", Theme::key_hint()),
            Span::styled(" quit  ", Theme::key_desc()),
            Span::styled("Enter", Theme::key_hint()),
            Span::styled(" search  ", Theme::key_desc()),
            Span::styled("Ctrl-L", Theme::key_hint()),
            Span::styled(" logout  ", Theme::key_desc()),
        ],
        _ => vec![
            Span::styled(" Ctrl-C", Theme::key_hint()),
            Span::styled(" quit  ", Theme::key_desc()),
        ],
    };

    let video = controller.video();
    if video.opacity() > 0.0 {
        spans.push(Span::styled(
            format!("\u{25b6} {}", video.source()),
            Theme::text_dim(),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
