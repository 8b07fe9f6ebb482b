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

const EMAIL: usize = 0;
const PASSWORD: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SignInAction {
    Submit { email: String, password: String },
    Invalid(&'static str),
    OAuth,
    SignUp,
}

pub(crate) struct SignInView {
    form: Form,
    pub(crate) submitting: bool,
}

impl SignInView {
    pub(crate) fn new() -> Self {
        Self {
            form: Form::new(vec![FormField::text("Email"), FormField::secret("Password")]),
            submitting: false,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.form.clear();
        self.submitting = false;
    }

    pub(crate) fn process_event(&mut self, event: &Event) -> Option<SignInAction> {
        if self.submitting {
            return None;
        }

        if let Event::Key(key) = event {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return match key.code {
                    KeyCode::Char('o') => Some(SignInAction::OAuth),
                    KeyCode::Char('n') => Some(SignInAction::SignUp),
                    _ => None,
                };
            }
        }

        match self.form.process_event(event)? {
            FormAction::Submit => {
                let email = self.form.value(EMAIL);
                let password = self.form.raw_value(PASSWORD);

                if email.is_empty() || password.is_empty() {
                    return Some(SignInAction::Invalid("Please enter your email and password"));
                }

                self.submitting = true;
                Some(SignInAction::Submit {
                    email: email.to_string(),
                    password: password.to_string(),
                })
            }
        }
    }
}

impl Render for SignInView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let status = self.submitting.then_some("Signing in...");
        draw_auth_form(
            f,
            area,
            theme,
            "Sign in to Melodex",
            &self.form,
            status,
            "Enter: Sign in   Ctrl-O: Continue with Google   Ctrl-N: Create account",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(view: &mut SignInView, text: &str) {
        for c in text.chars() {
            view.process_event(&key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_submit_requires_both_fields() {
        let mut view = SignInView::new();
        type_text(&mut view, "alex@melodex.com");

        assert_eq!(
            view.process_event(&key(KeyCode::Enter)),
            Some(SignInAction::Invalid("Please enter your email and password"))
        );
        assert!(!view.submitting);
    }

    #[test]
    fn test_submit_and_ignore_while_submitting() {
        let mut view = SignInView::new();
        type_text(&mut view, "alex@melodex.com");
        view.process_event(&key(KeyCode::Tab));
        type_text(&mut view, "secret");

        assert_eq!(
            view.process_event(&key(KeyCode::Enter)),
            Some(SignInAction::Submit {
                email: "alex@melodex.com".into(),
                password: "secret".into()
            })
        );
        assert!(view.submitting);
        assert_eq!(view.process_event(&key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_shortcuts() {
        let mut view = SignInView::new();
        let ctrl_o = Event::Key(KeyEvent::new(KeyCode::Char('o'), KeyModifiers::CONTROL));
        assert_eq!(view.process_event(&ctrl_o), Some(SignInAction::OAuth));
    }
}
