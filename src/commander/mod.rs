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

//! Command-line input logic and state management.
//!
//! This module implements the `:` command line. It manages a text input
//! component and, when a command is submitted, dispatches the corresponding
//! application event or background task.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{events::AppEvent, routes::Route, tasks::AppTask};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Quit,
    Navigate(Route),
    Logout,
    Link(String),
}

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Offers an event to the command line, returning whether it was
    /// consumed. A closed command line only opens on `:` when `can_open`.
    pub(crate) fn handle_event(
        &mut self,
        event: &Event,
        can_open: bool,
        task_tx: &Sender<AppTask>,
        event_tx: &Sender<AppEvent>,
    ) -> Result<bool> {
        if !self.active {
            return Ok(match event {
                Event::Key(key) if can_open && key.kind != KeyEventKind::Release => {
                    if key.code == KeyCode::Char(':') {
                        self.active = true;
                        true
                    } else {
                        false
                    }
                }
                _ => false,
            });
        }

        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
                KeyCode::Esc => self.close(),

                KeyCode::Enter => {
                    let buffer = self.input.value().trim().to_string();
                    self.close();
                    if !buffer.is_empty() {
                        self.run_command(&buffer, task_tx, event_tx)?;
                    }
                }

                KeyCode::Backspace if self.input.value().is_empty() => self.close(),

                _ => {
                    // Delegate all other key events to the managed input component.
                    self.input.handle_event(event);
                }
            },

            Event::Paste(text) => {
                self.input = Input::new(format!("{}{}", self.input.value(), text.trim()));
            }

            _ => return Ok(false),
        }

        Ok(true)
    }

    fn close(&mut self) {
        self.active = false;
        self.input.reset();
    }

    fn run_command(
        &self,
        buffer: &str,
        task_tx: &Sender<AppTask>,
        event_tx: &Sender<AppEvent>,
    ) -> Result<()> {
        tracing::debug!(command = buffer, "Running command");

        match parse_command(buffer) {
            Ok(Command::Quit) => event_tx.send(AppEvent::ExitApplication)?,
            Ok(Command::Navigate(route)) => event_tx.send(AppEvent::Navigate(route))?,
            Ok(Command::Logout) => task_tx.send(AppTask::SignOut)?,
            Ok(Command::Link(url)) => event_tx.send(AppEvent::UploadLinkEntered(url))?,
            Err(message) => event_tx.send(AppEvent::Notice(message))?,
        }

        Ok(())
    }
}

pub(crate) fn parse_command(buffer: &str) -> Result<Command, String> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let command = match parts.as_slice() {
        ["q"] | ["quit"] => Command::Quit,

        ["go", path] => match Route::parse(path) {
            Some(route) => Command::Navigate(route),
            None => return Err(format!("Unknown route: {}", path)),
        },

        ["home"] => Command::Navigate(Route::Home),
        ["upload"] => Command::Navigate(Route::Upload),
        ["sessions"] => Command::Navigate(Route::Sessions),
        ["session", id] => Command::Navigate(Route::SessionDetail(id.to_string())),
        ["profile"] => Command::Navigate(Route::Profile),
        ["signin"] => Command::Navigate(Route::SignIn),
        ["signup"] => Command::Navigate(Route::SignUp),

        ["logout"] => Command::Logout,

        ["link", url] => Command::Link(url.to_string()),

        [] => return Err("No command entered".to_string()),

        [cmd, ..] => return Err(format!("Unknown command: {}", cmd)),
    };

    Ok(command)
}
