//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the page,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Request Flow
//!
//! ```text
//! Enter ──▶ Action::Submit ──▶ update() ──▶ Effect::SpawnRequest(ticket)
//!                                                   │
//!                              tokio::spawn(controller.request(ticket))
//!                                                   │
//! update() ◀── Action::Completed ◀── mpsc channel ◀─┘
//! ```
//!
//! The form stays editable while a request is in flight, so a second
//! submission can overlap the first. The controller's overlap policy
//! decides which completion is shown.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Otherwise**: sleeps up to 500ms and only redraws on events.

mod component;
pub mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::api::HttpLyricsService;
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::controller::Ticket;
use crate::core::state::App;
use crate::core::view::UiState;
use crate::tui::component::EventHandler;
use crate::tui::components::{FormEvent, QueryForm, ResultsState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub query_form: QueryForm,
    pub results: ResultsState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            query_form: QueryForm::new(),
            results: ResultsState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock, // Non-blinking: continuous redraws reset the blink timer
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let service = Arc::new(HttpLyricsService::new(
        Some(config.base_url.clone()),
        Some(config.endpoint.clone()),
    ));
    let mut app = App::new(service, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();
    let result = event_loop(&mut terminal, &mut app, &mut tui);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    // Channel for actions from request tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, app, tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout)?;

        // Process first event + drain all pending events before next draw
        let mut should_quit = false;
        let mut next = first_event;
        while let Some(event) = next {
            needs_redraw |= dispatch(app, tui, &event, &tx, &mut should_quit);
            if should_quit {
                break;
            }
            next = poll_event_immediate()?;
        }

        if should_quit {
            break;
        }

        // Completions from request tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            apply(app, tui, action, &tx);
        }
    }

    info!("Shutting down");
    Ok(())
}

/// Routes one terminal event. Returns whether the screen needs a redraw.
fn dispatch(
    app: &mut App,
    tui: &mut TuiState,
    event: &TuiEvent,
    tx: &mpsc::Sender<Action>,
    should_quit: &mut bool,
) -> bool {
    match event {
        TuiEvent::Resize => true,
        TuiEvent::Quit => {
            *should_quit = update(app, Action::Quit) == Effect::Quit;
            false
        }
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => tui.results.handle_event(event).is_some(),
        _ => match tui.query_form.handle_event(event) {
            Some(FormEvent::Submit(text)) => {
                apply(app, tui, Action::Submit(text), tx);
                true
            }
            Some(FormEvent::ContentChanged) => true,
            None => false,
        },
    }
}

/// Runs `update` and performs the resulting effect.
fn apply(app: &mut App, tui: &mut TuiState, action: Action, tx: &mpsc::Sender<Action>) {
    let before = app.page.ui_state();
    match update(app, action) {
        Effect::SpawnRequest(ticket) => spawn_request(app, ticket, tx.clone()),
        Effect::Quit | Effect::None => {}
    }
    if before != UiState::Results && app.page.ui_state() == UiState::Results {
        tui.results.scroll_to_top();
    }
}

fn spawn_request(app: &App, ticket: Ticket, tx: mpsc::Sender<Action>) {
    info!("Spawning request #{}", ticket.generation);
    let request = app.controller.request(ticket);
    tokio::spawn(async move {
        let completion = request.await;
        debug!("Request #{} finished", completion.generation);
        if tx.send(Action::Completed(completion)).is_err() {
            warn!("Failed to send completion: receiver dropped");
        }
    });
}
