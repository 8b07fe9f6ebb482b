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
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::components::sessions::{SessionsAction, SessionsView};

impl SessionsView {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<SessionsAction> {
        if let Some(create) = self.create.as_mut() {
            if create.submitting {
                return None;
            }

            match event {
                Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
                    KeyCode::Esc => self.create = None,
                    KeyCode::Enter => {
                        let name = create.name.value().trim().to_string();
                        if !name.is_empty() {
                            create.submitting = true;
                            return Some(SessionsAction::Create(name));
                        }
                    }
                    _ => {
                        create.name.handle_event(event);
                    }
                },
                Event::Paste(text) => {
                    create.name = Input::new(format!("{}{}", create.name.value(), text.trim()));
                }
                _ => {}
            }

            return None;
        }

        let Event::Key(key) = event else {
            return None;
        };
        if key.kind == KeyEventKind::Release {
            return None;
        }

        let len = self.sessions.len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if let Some(i) = self.table_state.selected() {
                    self.table_state.select(Some((i + 1).min(len.saturating_sub(1))));
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if let Some(i) = self.table_state.selected() {
                    self.table_state.select(Some(i.saturating_sub(1)));
                }
            }
            KeyCode::Char('n') => self.open_create(),
            KeyCode::Char('r') if !self.loading => return Some(SessionsAction::Refresh),
            KeyCode::Enter => {
                return self.selected().map(|s| SessionsAction::Open(s.id.clone()));
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                return self.selected().map(|s| SessionsAction::Delete(s.id.clone()));
            }
            _ => {}
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::session_fixture;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_create_requires_a_name() {
        let mut view = SessionsView::new();
        view.process_event(&key(KeyCode::Char('n')));
        assert!(view.captures_text());

        for c in "  ".chars() {
            view.process_event(&key(KeyCode::Char(c)));
        }
        assert_eq!(view.process_event(&key(KeyCode::Enter)), None);

        for c in "Demos ".chars() {
            view.process_event(&key(KeyCode::Char(c)));
        }
        assert_eq!(
            view.process_event(&key(KeyCode::Enter)),
            Some(SessionsAction::Create("Demos".into()))
        );

        assert_eq!(view.process_event(&key(KeyCode::Enter)), None);
        view.session_created();
        assert!(!view.captures_text());
    }

    #[test]
    fn test_escape_closes_modal() {
        let mut view = SessionsView::new();
        view.open_create();
        view.process_event(&key(KeyCode::Esc));
        assert!(view.create.is_none());
    }

    #[test]
    fn test_open_and_delete_selected() {
        let mut view = SessionsView::new();
        view.set_sessions(vec![
            session_fixture("s1", "Demos"),
            session_fixture("s2", "Live"),
        ]);

        view.process_event(&key(KeyCode::Char('j')));
        assert_eq!(
            view.process_event(&key(KeyCode::Enter)),
            Some(SessionsAction::Open("s2".into()))
        );
        assert_eq!(
            view.process_event(&key(KeyCode::Char('d'))),
            Some(SessionsAction::Delete("s2".into()))
        );
    }
}
