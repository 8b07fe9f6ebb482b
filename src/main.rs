// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Melodex TUI.
//!
//! A terminal client for the Melodex audio processing service: upload tracks
//! or links for metadata extraction, organise them into sessions and
//! generate lyrics.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * A **Task Worker** performs every backend and identity provider request
//!   so the UI never blocks on the network.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern so the
//! terminal state is restored even when the run fails. The UI sends
//! [`AppTask`]s to the worker and receives results as [`AppEvent`]s, both
//! over `std::sync::mpsc` channels.

mod api;
mod auth;
mod commander;
mod components;
mod config;
mod error;
mod events;
mod identity;
mod logging;
mod model;
mod render;
mod routes;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    collections::VecDeque,
    io,
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    api::HttpBackend,
    auth::AuthContext,
    commander::Commander,
    components::{
        CallbackView, Dialog, HomeView, LyricsView, MetadataPopup, ProfileView,
        SessionDetailView, SessionPicker, SessionsView, SignInView, SignUpView, UploadView,
    },
    config::AppConfig,
    events::{AppEvent, Notice, process_events},
    identity::{IdentityProvider, SessionStore, SupabaseIdentity},
    routes::Route,
    tasks::{AppTask, spawn_task_worker},
    theme::Theme,
};

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub route: Route,
    pub auth: AuthContext,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub commander: Commander,

    pub sign_in_view: SignInView,
    pub sign_up_view: SignUpView,
    pub callback_view: CallbackView,
    pub home_view: HomeView,
    pub upload_view: UploadView,
    pub sessions_view: SessionsView,
    pub session_detail_view: SessionDetailView,
    pub profile_view: ProfileView,

    pub metadata_popup: Option<MetadataPopup>,
    pub session_picker: Option<SessionPicker>,
    pub lyrics_view: Option<LyricsView>,
    pub dialogs: VecDeque<Dialog>,

    pub notice: Option<Notice>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            config,
            theme: Theme::default(),
            route: Route::Landing,
            auth: AuthContext::new(),
            event_tx,
            event_rx,
            task_tx,
            commander: Commander::new(),
            sign_in_view: SignInView::new(),
            sign_up_view: SignUpView::new(),
            callback_view: CallbackView::new(),
            home_view: HomeView::new(),
            upload_view: UploadView::new(),
            sessions_view: SessionsView::new(),
            session_detail_view: SessionDetailView::new(),
            profile_view: ProfileView::new(),
            metadata_popup: None,
            session_picker: None,
            lyrics_view: None,
            dialogs: VecDeque::new(),
            notice: None,
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration, starts logging, builds the backend clients and
/// then runs the TUI until the user quits.
fn main() -> Result<()> {
    let config = config::load_config();

    logging::init(&config.log_path())?;
    tracing::info!(api = %config.api_base_url, "Starting Melodex");

    let backend = HttpBackend::new(&config).context("Failed to create backend client")?;
    let store = SessionStore::new().context("Failed to locate session storage")?;
    let mut identity =
        SupabaseIdentity::new(&config, store).context("Failed to create identity client")?;

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx);

    // Session changes reach the UI like any other event
    let auth_event_tx = app.event_tx.clone();
    identity.on_auth_state_change(Box::new(move |e| {
        auth_event_tx.send(AppEvent::Auth(e.clone())).ok();
    }));

    spawn_task_worker(
        &app.config,
        task_rx,
        app.event_tx.clone(),
        Box::new(backend),
        Box::new(identity),
    );

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    if let Err(e) = &res {
        tracing::error!("{:#}", e);
    }

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
/// * Enables bracketed paste so pasted paths and links arrive whole.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex).ok();
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`] and makes the cursor
/// visible again. It is best-effort and does not return a result.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads and enters the main event loop.
///
/// The task worker is already running, so the first task restores any
/// stored session before the loop starts drawing.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(event::Event::Key(key)) => AppEvent::Key(key),
                Ok(event::Event::Paste(text)) => AppEvent::Paste(text),
                Ok(event::Event::Resize(_, _)) => AppEvent::Tick,
                Ok(_) => continue,
                Err(e) => {
                    tracing::error!("Failed to read terminal input: {}", e);
                    break;
                }
            };

            if tx_input.send(event).is_err() {
                break;
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(Duration::from_millis(250));
        }
    });

    app.task_tx
        .send(AppTask::RestoreSession)
        .context("Task worker is not running")?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
