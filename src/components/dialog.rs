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

//! Blocking alert and confirmation dialogs.
//!
//! While a dialog is showing it receives every key press; nothing else in
//! the application reacts until it is dismissed.

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Clear, Paragraph, Wrap},
};

use crate::{
    render::{Render, popup_area, popup_block},
    theme::Theme,
};

/// What a confirmation dialog is asking permission for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConfirmTarget {
    DeleteTrack(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Dialog {
    Alert(String),
    Confirm {
        message: String,
        target: ConfirmTarget,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DialogAction {
    Dismiss,
    Confirmed(ConfirmTarget),
}

impl Dialog {
    pub(crate) fn message(&self) -> &str {
        match self {
            Dialog::Alert(message) => message,
            Dialog::Confirm { message, .. } => message,
        }
    }

    pub(crate) fn process_event(&self, event: &Event) -> Option<DialogAction> {
        let Event::Key(key) = event else {
            return None;
        };
        if key.kind == KeyEventKind::Release {
            return None;
        }

        match self {
            Dialog::Alert(_) => match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(DialogAction::Dismiss),
                _ => None,
            },

            Dialog::Confirm { target, .. } => match key.code {
                KeyCode::Char('y') | KeyCode::Enter => {
                    Some(DialogAction::Confirmed(target.clone()))
                }
                KeyCode::Char('n') | KeyCode::Esc => Some(DialogAction::Dismiss),
                _ => None,
            },
        }
    }
}

impl Render for Dialog {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let (title, hint) = match self {
            Dialog::Alert(_) => ("Melodex", "Enter: OK"),
            Dialog::Confirm { .. } => ("Confirm", "y: Yes   n: No"),
        };

        let width = area.width.clamp(20, 60);
        let lines = (self.message().chars().count() as u16 / width.saturating_sub(4).max(1)) + 1;
        let popup = popup_area(area, width, lines + 5);

        f.render_widget(Clear, popup);
        let block = popup_block(title, theme);
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let [body, footer] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)])
            .margin(1)
            .areas(inner);

        f.render_widget(
            Paragraph::new(self.message())
                .style(Style::default().fg(theme.text_colour))
                .wrap(Wrap { trim: true }),
            body,
        );
        f.render_widget(
            Paragraph::new(Line::from(hint).style(Style::default().fg(theme.muted_colour)))
                .alignment(Alignment::Right),
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
    fn test_alert_dismissal() {
        let dialog = Dialog::Alert("Upload failed".into());
        assert_eq!(dialog.process_event(&key(KeyCode::Char('x'))), None);
        assert_eq!(dialog.process_event(&key(KeyCode::Enter)), Some(DialogAction::Dismiss));
    }

    #[test]
    fn test_confirmation() {
        let dialog = Dialog::Confirm {
            message: "Delete demo.mp3?".into(),
            target: ConfirmTarget::DeleteTrack("t1".into()),
        };

        assert_eq!(
            dialog.process_event(&key(KeyCode::Char('y'))),
            Some(DialogAction::Confirmed(ConfirmTarget::DeleteTrack("t1".into())))
        );
        assert_eq!(dialog.process_event(&key(KeyCode::Esc)), Some(DialogAction::Dismiss));
    }
}
