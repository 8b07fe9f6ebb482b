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

use crossterm::event::{Event, KeyCode, KeyEventKind};

use crate::components::{
    form::FormAction,
    profile::{ProfileAction, ProfileView},
};

impl ProfileView {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<ProfileAction> {
        if self.saving {
            return None;
        }

        if let Some(form) = self.editing.as_mut() {
            if let Event::Key(key) = event {
                if key.code == KeyCode::Esc && key.kind != KeyEventKind::Release {
                    self.cancel_edit();
                    return None;
                }
            }

            return match form.process_event(event)? {
                FormAction::Submit => match ProfileView::update_from(form) {
                    Ok(update) => {
                        self.saving = true;
                        Some(ProfileAction::Save(update))
                    }
                    Err(message) => Some(ProfileAction::Invalid(message)),
                },
            };
        }

        let Event::Key(key) = event else {
            return None;
        };
        if key.kind == KeyEventKind::Release {
            return None;
        }

        match key.code {
            KeyCode::Char('e') => {
                self.start_edit();
                None
            }
            KeyCode::Char('o') => Some(ProfileAction::Logout),
            _ => None,
        }
    }
}
