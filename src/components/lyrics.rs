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

//! A scrollable popup showing a track's lyrics.

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Clear, Paragraph},
};

use crate::{
    render::{Render, popup_area, popup_block},
    theme::Theme,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LyricsAction {
    Close,
}

pub(crate) struct LyricsView {
    pub(crate) title: String,
    pub(crate) lines: Vec<String>,
    scroll: usize,
}

impl LyricsView {
    /// Lines are trimmed and blank lines dropped.
    pub(crate) fn new(title: &str, lyrics: &str) -> Self {
        Self {
            title: title.to_string(),
            lines: lyrics
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
            scroll: 0,
        }
    }

    pub(crate) fn process_event(&mut self, event: &Event) -> Option<LyricsAction> {
        let Event::Key(key) = event else {
            return None;
        };
        if key.kind == KeyEventKind::Release {
            return None;
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll = (self.scroll + 1).min(self.lines.len().saturating_sub(1));
            }
            KeyCode::Char('k') | KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Char('g') | KeyCode::Home => self.scroll = 0,
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => return Some(LyricsAction::Close),
            _ => {}
        }

        None
    }
}

impl Render for LyricsView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = popup_area(
            area,
            area.width.clamp(30, 70),
            area.height.saturating_sub(4).max(8),
        );
        f.render_widget(Clear, popup);

        let block = popup_block(&self.title, theme);
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let [body, footer] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)])
            .margin(1)
            .areas(inner);

        let lines: Vec<Line> = self
            .lines
            .iter()
            .map(|line| Line::from(line.as_str()))
            .collect();

        f.render_widget(
            Paragraph::new(lines)
                .style(Style::default().fg(theme.text_colour))
                .scroll((self.scroll as u16, 0)),
            body,
        );
        f.render_widget(
            Paragraph::new("j/k: Scroll   Esc: Close").style(Style::default().fg(theme.muted_colour)),
            footer,
        );
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
    fn test_lines_are_trimmed_and_blank_lines_dropped() {
        let view = LyricsView::new("Song", "  First line \n\n   \nSecond line\r\n");
        assert_eq!(view.lines, vec!["First line", "Second line"]);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut view = LyricsView::new("Song", "a\nb");
        view.process_event(&key(KeyCode::Char('k')));
        assert_eq!(view.scroll, 0);

        for _ in 0..5 {
            view.process_event(&key(KeyCode::Char('j')));
        }
        assert_eq!(view.scroll, 1);
        assert_eq!(view.process_event(&key(KeyCode::Esc)), Some(LyricsAction::Close));
    }
}
