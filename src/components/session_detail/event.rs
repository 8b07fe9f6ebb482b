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

use crate::components::session_detail::{SessionDetailAction, SessionDetailView};

impl SessionDetailView {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<SessionDetailAction> {
        let Event::Key(key) = event else {
            return None;
        };
        if key.kind == KeyEventKind::Release {
            return None;
        }

        let len = self.tracks.len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if let Some(i) = self.table_state.selected() {
                    self.table_state.select(Some((i + 1).min(len.saturating_sub(1))));
                }
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if let Some(i) = self.table_state.selected() {
                    self.table_state.select(Some(i.saturating_sub(1)));
                }
                None
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                self.selected().map(|track| SessionDetailAction::ConfirmDelete {
                    track_id: track.id.clone(),
                    title: track.display_title().to_string(),
                })
            }
            KeyCode::Char('x') => self.reextract_selected(),
            KeyCode::Char('l') | KeyCode::Enter => self.lyrics_for_selected(),
            KeyCode::Char('u') => Some(SessionDetailAction::Upload),
            KeyCode::Char('r') if !self.loading => Some(SessionDetailAction::Refresh),
            KeyCode::Esc | KeyCode::Backspace => Some(SessionDetailAction::Back),
            _ => None,
        }
    }
}
