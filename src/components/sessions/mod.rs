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

//! The session listing.
//!
//! Sessions are created by name through a small modal and deleted straight
//! from the list. Both operations are followed by a refetch; a delete is
//! also applied to the displayed list immediately.

mod event;
mod render;

use ratatui::widgets::TableState;
use tui_input::Input;

use crate::{model::Session, util::format::count_label};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SessionsAction {
    Open(String),
    Create(String),
    Delete(String),
    Refresh,
}

/// The "new session" modal.
pub(crate) struct CreateSession {
    pub(crate) name: Input,
    pub(crate) submitting: bool,
}

pub(crate) struct SessionsView {
    pub(crate) sessions: Vec<Session>,
    pub(crate) loading: bool,
    pub(crate) create: Option<CreateSession>,
    pub(crate) table_state: TableState,
}

impl SessionsView {
    pub(crate) fn new() -> Self {
        Self {
            sessions: vec![],
            loading: false,
            create: None,
            table_state: TableState::default(),
        }
    }

    pub(crate) fn set_sessions(&mut self, sessions: Vec<Session>) {
        let selected = self
            .table_state
            .selected()
            .map(|i| i.min(sessions.len().saturating_sub(1)));

        self.sessions = sessions;
        self.loading = false;
        self.table_state.select(if self.sessions.is_empty() {
            None
        } else {
            selected.or(Some(0))
        });
    }

    /// Drops a session from the displayed list ahead of the refetch.
    pub(crate) fn remove(&mut self, session_id: &str) {
        let sessions = self
            .sessions
            .iter()
            .filter(|s| s.id != session_id)
            .cloned()
            .collect();
        self.set_sessions(sessions);
    }

    pub(crate) fn summary(&self) -> String {
        count_label(self.sessions.len(), "active session")
    }

    pub(crate) fn selected(&self) -> Option<&Session> {
        self.sessions.get(self.table_state.selected()?)
    }

    pub(crate) fn open_create(&mut self) {
        self.create = Some(CreateSession {
            name: Input::default(),
            submitting: false,
        });
    }

    pub(crate) fn session_created(&mut self) {
        self.create = None;
    }

    pub(crate) fn create_failed(&mut self) {
        if let Some(create) = self.create.as_mut() {
            create.submitting = false;
        }
    }

    pub(crate) fn captures_text(&self) -> bool {
        self.create.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::session_fixture;

    #[test]
    fn test_summary() {
        let mut view = SessionsView::new();
        assert_eq!(view.summary(), "0 active sessions");

        view.set_sessions(vec![session_fixture("s1", "Demos")]);
        assert_eq!(view.summary(), "1 active session");
    }

    #[test]
    fn test_remove_keeps_selection_in_range() {
        let mut view = SessionsView::new();
        view.set_sessions(vec![
            session_fixture("s1", "Demos"),
            session_fixture("s2", "Live"),
        ]);
        view.table_state.select(Some(1));

        view.remove("s2");
        assert_eq!(view.sessions.len(), 1);
        assert_eq!(view.selected().map(|s| s.id.as_str()), Some("s1"));

        view.remove("s1");
        assert!(view.selected().is_none());
    }
}
