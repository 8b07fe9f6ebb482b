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
    api::SignUpRequest,
    components::{
        auth::draw_auth_form,
        form::{Form, FormAction, FormField},
    },
    render::Render,
    theme::Theme,
};

const FULL_NAME: usize = 0;
const USER_NAME: usize = 1;
const EMAIL: usize = 2;
const PASSWORD: usize = 3;
const CONFIRM_PASSWORD: usize = 4;
const GENDER: usize = 5;
const COUNTRY: usize = 6;
const ACCEPT_TERMS: usize = 7;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SignUpAction {
    Submit(SignUpRequest),
    Invalid(&'static str),
    SignIn,
}

pub(crate) struct SignUpView {
    form: Form,
    pub(crate) submitting: bool,
}

impl SignUpView {
    pub(crate) fn new() -> Self {
        Self {
            form: Form::new(vec![
                FormField::text("Full name"),
                FormField::text("Username"),
                FormField::text("Email"),
                FormField::secret("Password"),
                FormField::secret("Confirm password"),
                FormField::text("Gender"),
                FormField::text("Country"),
                FormField::toggle("I accept the Terms of Service and Privacy Policy (Space)"),
            ]),
            submitting: false,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.form.clear();
        self.submitting = false;
    }

    fn validate(&self) -> Result<SignUpRequest, &'static str> {
        let form = &self.form;

        if form.value(EMAIL).is_empty() || form.raw_value(PASSWORD).is_empty() {
            return Err("Please enter an email and password");
        }
        if form.raw_value(PASSWORD) != form.raw_value(CONFIRM_PASSWORD) {
            return Err("Passwords do not match!");
        }
        if !form.is_checked(ACCEPT_TERMS) {
            return Err("Please accept the Terms of Service and Privacy Policy");
        }

        Ok(SignUpRequest {
            full_name: form.value(FULL_NAME).to_string(),
            user_name: form.value(USER_NAME).to_string(),
            email: form.value(EMAIL).to_string(),
            password: form.raw_value(PASSWORD).to_string(),
            gender: form.value(GENDER).to_string(),
            country: form.value(COUNTRY).to_string(),
        })
    }

    pub(crate) fn process_event(&mut self, event: &Event) -> Option<SignUpAction> {
        if self.submitting {
            return None;
        }

        if let Event::Key(key) = event {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return match key.code {
                    KeyCode::Char('l') => Some(SignUpAction::SignIn),
                    _ => None,
                };
            }
        }

        match self.form.process_event(event)? {
            FormAction::Submit => match self.validate() {
                Ok(request) => {
                    self.submitting = true;
                    Some(SignUpAction::Submit(request))
                }
                Err(reason) => Some(SignUpAction::Invalid(reason)),
            },
        }
    }
}

impl Render for SignUpView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let status = self.submitting.then_some("Creating your account...");
        draw_auth_form(
            f,
            area,
            theme,
            "Create your Melodex account",
            &self.form,
            status,
            "Tab: Next field   Enter: Sign up   Ctrl-L: Back to sign in",
        );
    }
}
