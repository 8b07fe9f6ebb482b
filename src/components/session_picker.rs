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

//! Choosing the session that confirmed metadata is saved into.

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::{
    model::Session,
    render::{Render, popup_area, popup_block},
    theme::Theme,
    util::format::count_label,
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PickerState {
    Loading,
    Failed(String),
    Loaded(Vec<Session>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SessionPickerAction {
    Select(String),
    Close,
}

pub(crate) struct SessionPicker {
    pub(crate) state: PickerState,
    pub(crate) saving: bool,
    list_state: ListState,
}

impl SessionPicker {
    pub(crate) fn new() -> Self {
        Self {
            state: PickerState::Loading,
            saving: false,
            list_state: ListState::default(),
        }
    }

    pub(crate) fn set_sessions(&mut self, result: Result<Vec<Session>, String>) {
        self.state = match result {
            Ok(sessions) => {
                self.list_state
                    .select(if sessions.is_empty() { None } else { Some(0) });
                PickerState::Loaded(sessions)
            }
            Err(message) => PickerState::Failed(message),
        };
    }

    fn sessions(&self) -> &[Session] {
        match &self.state {
            PickerState::Loaded(sessions) => sessions,
            _ => &[],
        }
    }

    pub(crate) fn selected(&self) -> Option<&Session> {
        self.sessions().get(self.list_state.selected()?)
    }

    pub(crate) fn process_event(&mut self, event: &Event) -> Option<SessionPickerAction> {
        let Event::Key(key) = event else {
            return None;
        };
        if key.kind == KeyEventKind::Release || self.saving {
            return None;
        }

        let len = self.sessions().len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if let Some(i) = self.list_state.selected() {
                    self.list_state.select(Some((i + 1).min(len.saturating_sub(1))));
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if let Some(i) = self.list_state.selected() {
                    self.list_state.select(Some(i.saturating_sub(1)));
                }
            }
            KeyCode::Enter => {
                return self
                    .selected()
                    .map(|session| SessionPickerAction::Select(session.id.clone()));
            }
            KeyCode::Esc => return Some(SessionPickerAction::Close),
            _ => {}
        }

        None
    }
}

impl Render for SessionPicker {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = popup_area(area, area.width.clamp(30, 60), area.height.clamp(8, 18));
        f.render_widget(Clear, popup);

        let block = popup_block("Save to Session", theme);
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let [body, footer] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)])
            .margin(1)
            .areas(inner);

        let hint = if self.saving {
            Span::styled("Saving…", Style::default().fg(theme.warning_colour))
        } else {
            Span::styled("Enter: Save here   Esc: Cancel", Style::default().fg(theme.muted_colour))
        };
        f.render_widget(Paragraph::new(Line::from(hint)), footer);

        let message = match &self.state {
            PickerState::Loading => Some(("Loading sessions...".to_string(), theme.muted_colour)),
            PickerState::Failed(message) => Some((message.clone(), theme.error_colour)),
            PickerState::Loaded(sessions) if sessions.is_empty() => Some((
                "No sessions found. Create one first.".to_string(),
                theme.muted_colour,
            )),
            PickerState::Loaded(_) => None,
        };

        if let Some((text, colour)) = message {
            f.render_widget(
                Paragraph::new(text)
                    .style(Style::default().fg(colour))
                    .wrap(Wrap { trim: true }),
                body,
            );
            return;
        }

        let items: Vec<ListItem> = self
            .sessions()
            .iter()
            .map(|session| {
                ListItem::new(Line::from(vec![
                    Span::styled(session.name.clone(), Style::default().fg(theme.text_colour)),
                    Span::styled(
                        format!("  {}", count_label(session.track_count, "track")),
                        Style::default().fg(theme.muted_colour),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).highlight_style(
            Style::default()
                .bg(theme.selection_colour)
                .add_modifier(Modifier::BOLD),
        );

        f.render_stateful_widget(list, body, &mut self.list_state);
    }
}
