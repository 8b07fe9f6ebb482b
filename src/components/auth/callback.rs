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

use crossterm::event::{Event, KeyCode, KeyModifiers};
use ratatui::{Frame, layout::Rect};

use crate::{
    components::{
        auth::draw_auth_form,
        form::{Form, FormAction, FormField},
    },
    render::Render,
    theme::Theme,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CallbackAction {
    Complete(String),
    Reopen,
    Cancel,
}

/// Completes an OAuth sign-in from the redirect URL the browser ends up on.
pub(crate) struct CallbackView {
    form: Form,
    pub(crate) pending: bool,
    pub(crate) error: Option<String>,
}

impl CallbackView {
    pub(crate) fn new() -> Self {
        Self {
            form: Form::new(vec![FormField::text("Callback URL")]),
            pending: false,
            error: None,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.form.clear();
        self.pending = false;
        self.error = None;
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.pending = false;
        self.error = Some(message);
    }

    pub(crate) fn process_event(&mut self, event: &Event) -> Option<CallbackAction> {
        if self.pending {
            return None;
        }

        if let Event::Key(key) = event {
            if key.code == KeyCode::Esc {
                return Some(CallbackAction::Cancel);
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return match key.code {
                    KeyCode::Char('o') => Some(CallbackAction::Reopen),
                    _ => None,
                };
            }
        }

        match self.form.process_event(event)? {
            FormAction::Submit => {
                let url = self.form.value(0);
                if url.is_empty() {
                    return None;
                }

                self.pending = true;
                self.error = None;
                Some(CallbackAction::Complete(url.to_string()))
            }
        }
    }
}

impl Render for CallbackView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let error = self
            .error
            .as_ref()
            .map(|e| format!("Authentication failed: {}", e));

        let status = if self.pending {
            Some("Completing sign in...")
        } else {
            error.as_deref()
        };

        draw_auth_form(
            f,
            area,
            theme,
            "Finish signing in: paste the address your browser was sent to",
            &self.form,
            status,
            "Enter: Continue   Ctrl-O: Open browser again   Esc: Cancel",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    #[test]
    fn test_pasted_url_is_submitted_once() {
        let mut view = CallbackView::new();
        view.process_event(&Event::Paste(
            "http://localhost:5173/auth/callback#access_token=abc".into(),
        ));

        let enter = Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(
            view.process_event(&enter),
            Some(CallbackAction::Complete(
                "http://localhost:5173/auth/callback#access_token=abc".into()
            ))
        );
        assert_eq!(view.process_event(&enter), None);

        view.fail("No session found in callback URL".into());
        assert!(!view.pending);
        assert_eq!(view.error.as_deref(), Some("No session found in callback URL"));
    }
}
