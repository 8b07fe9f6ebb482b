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

//! Confirmation of the metadata extracted from an upload.

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::{
    model::TrackMetadata,
    render::{Render, popup_area, popup_block},
    theme::Theme,
    util::{external::SearchProvider, format::format_optional_duration},
};

const MISSING: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MetadataAction {
    Save,
    Search(SearchProvider),
    Close,
}

pub(crate) struct MetadataPopup {
    pub(crate) metadata: TrackMetadata,
    pub(crate) saving: bool,
}

impl MetadataPopup {
    pub(crate) fn new(metadata: TrackMetadata) -> Self {
        Self {
            metadata,
            saving: false,
        }
    }

    /// The rows shown to the user, in display order.
    pub(crate) fn fields(&self) -> Vec<(&'static str, String)> {
        let text = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(MISSING)
                .to_string()
        };

        vec![
            ("Title", text(&self.metadata.title)),
            ("Artist", text(&self.metadata.artist)),
            ("Album", text(&self.metadata.album)),
            ("Duration", format_optional_duration(self.metadata.duration)),
            ("Genre", text(&self.metadata.genre)),
            ("Art URL", text(&self.metadata.image)),
        ]
    }

    /// Title and artist used for third-party searches.
    pub(crate) fn search_terms(&self) -> (&str, &str) {
        (
            self.metadata.title.as_deref().unwrap_or_default(),
            self.metadata.artist.as_deref().unwrap_or_default(),
        )
    }

    pub(crate) fn process_event(&mut self, event: &Event) -> Option<MetadataAction> {
        let Event::Key(key) = event else {
            return None;
        };
        if key.kind == KeyEventKind::Release || self.saving {
            return None;
        }

        match key.code {
            KeyCode::Char('s') | KeyCode::Enter => Some(MetadataAction::Save),
            KeyCode::Char('p') => Some(MetadataAction::Search(SearchProvider::Spotify)),
            KeyCode::Char('y') => Some(MetadataAction::Search(SearchProvider::YouTube)),
            KeyCode::Esc => Some(MetadataAction::Close),
            _ => None,
        }
    }
}

impl Render for MetadataPopup {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let fields = self.fields();
        let popup = popup_area(area, area.width.clamp(30, 72), fields.len() as u16 + 7);

        f.render_widget(Clear, popup);
        let block = popup_block("Extracted Metadata", theme);
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let [body, footer] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)])
            .margin(1)
            .areas(inner);

        let lines: Vec<Line> = fields
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{:<10}", label), Style::default().fg(theme.muted_colour)),
                    Span::styled(
                        value,
                        Style::default()
                            .fg(theme.text_colour)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            })
            .collect();

        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body);

        let hint = if self.saving {
            Line::from(Span::styled("Saving…", Style::default().fg(theme.warning_colour)))
        } else {
            Line::from(Span::styled(
                format!(
                    "s: Save to session   p: Search on {}   y: Search on {}   Esc: Close",
                    SearchProvider::Spotify.label(),
                    SearchProvider::YouTube.label()
                ),
                Style::default().fg(theme.muted_colour),
            ))
        };
        f.render_widget(Paragraph::new(hint), footer);
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
    fn test_fields_render_missing_values() {
        let popup = MetadataPopup::new(TrackMetadata {
            title: Some("Summer Vibes".into()),
            artist: Some("  ".into()),
            duration: Some(222_000),
            ..Default::default()
        });

        assert_eq!(
            popup.fields(),
            vec![
                ("Title", "Summer Vibes".to_string()),
                ("Artist", "—".to_string()),
                ("Album", "—".to_string()),
                ("Duration", "03:42".to_string()),
                ("Genre", "—".to_string()),
                ("Art URL", "—".to_string()),
            ]
        );
    }

    #[test]
    fn test_absent_duration() {
        let popup = MetadataPopup::new(TrackMetadata::default());
        assert_eq!(popup.fields()[3], ("Duration", "00:00".to_string()));
    }

    #[test]
    fn test_actions_disabled_while_saving() {
        let mut popup = MetadataPopup::new(TrackMetadata::default());
        assert_eq!(
            popup.process_event(&key(KeyCode::Char('y'))),
            Some(MetadataAction::Search(SearchProvider::YouTube))
        );

        popup.saving = true;
        assert_eq!(popup.process_event(&key(KeyCode::Char('s'))), None);
        assert_eq!(popup.process_event(&key(KeyCode::Esc)), None);
    }
}
