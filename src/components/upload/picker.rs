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

//! A popup listing the local media files of one type.

use std::path::PathBuf;

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, Paragraph},
};

use crate::{
    model::MediaType,
    render::{popup_area, popup_block},
    theme::Theme,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PickerAction {
    Select(PathBuf),
    Close,
}

pub(crate) struct FilePicker {
    pub(crate) media_type: MediaType,
    /// `None` until the media folders have been scanned.
    files: Option<Vec<PathBuf>>,
    state: ListState,
}

impl FilePicker {
    pub(crate) fn new(media_type: MediaType) -> Self {
        Self {
            media_type,
            files: None,
            state: ListState::default(),
        }
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.files.is_none()
    }

    pub(crate) fn set_files(&mut self, files: Vec<PathBuf>) {
        self.state.select(if files.is_empty() { None } else { Some(0) });
        self.files = Some(files);
    }

    pub(crate) fn selected(&self) -> Option<&PathBuf> {
        self.files.as_ref()?.get(self.state.selected()?)
    }

    fn len(&self) -> usize {
        self.files.as_ref().map_or(0, Vec::len)
    }

    fn goto_next(&mut self) {
        if let Some(i) = self.state.selected() {
            self.state.select(Some((i + 1).min(self.len().saturating_sub(1))));
        }
    }

    fn goto_previous(&mut self) {
        if let Some(i) = self.state.selected() {
            self.state.select(Some(i.saturating_sub(1)));
        }
    }

    pub(crate) fn process_event(&mut self, event: &Event) -> Option<PickerAction> {
        let Event::Key(key) = event else {
            return None;
        };
        if key.kind == KeyEventKind::Release {
            return None;
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.goto_next(),
            KeyCode::Char('k') | KeyCode::Up => self.goto_previous(),
            KeyCode::Char('g') | KeyCode::Home => {
                if self.len() > 0 {
                    self.state.select(Some(0));
                }
            }
            KeyCode::Char('G') | KeyCode::End => {
                if self.len() > 0 {
                    self.state.select(Some(self.len() - 1));
                }
            }
            KeyCode::Enter => return self.selected().cloned().map(PickerAction::Select),
            KeyCode::Esc => return Some(PickerAction::Close),
            _ => {}
        }

        None
    }

    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = popup_area(area, area.width.saturating_sub(8).min(90), area.height.saturating_sub(4));
        f.render_widget(Clear, popup);

        let block = popup_block(&format!("Choose {} File", self.media_type.label()), theme);
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let [body, footer] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        f.render_widget(
            Paragraph::new(Line::from("Enter: Select   Esc: Cancel"))
                .style(Style::default().fg(theme.muted_colour)),
            footer,
        );

        if self.is_loading() {
            f.render_widget(
                Paragraph::new("Scanning media folders...")
                    .style(Style::default().fg(theme.muted_colour)),
                body,
            );
            return;
        }
        let files = self.files.as_deref().unwrap_or_default();

        if files.is_empty() {
            f.render_widget(
                Paragraph::new(format!(
                    "No {} files found in the configured media folders.",
                    self.media_type.label().to_lowercase()
                ))
                .style(Style::default().fg(theme.muted_colour)),
                body,
            );
            return;
        }

        let items: Vec<ListItem> = files
            .iter()
            .map(|path| {
                ListItem::new(Span::styled(
                    path.display().to_string(),
                    Style::default().fg(theme.text_colour),
                ))
            })
            .collect();

        let list = List::new(items).highlight_style(
            Style::default()
                .bg(theme.selection_colour)
                .add_modifier(Modifier::BOLD),
        );

        f.render_stateful_widget(list, body, &mut self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_loading_then_empty() {
        let mut picker = FilePicker::new(MediaType::Audio);
        assert!(picker.is_loading());
        assert_eq!(picker.process_event(&key(KeyCode::Enter)), None);

        picker.set_files(vec![]);
        assert!(!picker.is_loading());
        assert_eq!(picker.process_event(&key(KeyCode::Enter)), None);
        assert_eq!(picker.process_event(&key(KeyCode::Esc)), Some(PickerAction::Close));
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut picker = FilePicker::new(MediaType::Audio);
        picker.set_files(vec!["/m/a.mp3".into(), "/m/b.mp3".into()]);

        picker.process_event(&key(KeyCode::Char('k')));
        assert_eq!(picker.selected(), Some(&PathBuf::from("/m/a.mp3")));

        picker.process_event(&key(KeyCode::Char('j')));
        picker.process_event(&key(KeyCode::Char('j')));
        assert_eq!(
            picker.process_event(&key(KeyCode::Enter)),
            Some(PickerAction::Select("/m/b.mp3".into()))
        );
    }
}
