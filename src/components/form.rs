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

//! Keyboard-driven forms.
//!
//! A [`Form`] is a vertical stack of labelled fields, each text field backed
//! by a `tui_input::Input`. Tab and the arrow keys move focus, Enter submits
//! and Space flips a toggle field.

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::theme::Theme;

const FIELD_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldKind {
    Text,
    Secret,
    Toggle,
}

#[derive(Debug, Clone)]
pub(crate) struct FormField {
    pub(crate) label: &'static str,
    pub(crate) input: Input,
    pub(crate) kind: FieldKind,
    pub(crate) checked: bool,
}

impl FormField {
    pub(crate) fn text(label: &'static str) -> Self {
        Self::new(label, FieldKind::Text)
    }

    pub(crate) fn secret(label: &'static str) -> Self {
        Self::new(label, FieldKind::Secret)
    }

    pub(crate) fn toggle(label: &'static str) -> Self {
        Self::new(label, FieldKind::Toggle)
    }

    fn new(label: &'static str, kind: FieldKind) -> Self {
        Self {
            label,
            input: Input::default(),
            kind,
            checked: false,
        }
    }

    pub(crate) fn with_value(mut self, value: &str) -> Self {
        self.input = Input::new(value.to_string());
        self
    }

    fn display_value(&self) -> String {
        match self.kind {
            FieldKind::Text => self.input.value().to_string(),
            FieldKind::Secret => "•".repeat(self.input.value().chars().count()),
            FieldKind::Toggle => {
                if self.checked {
                    "[x]".to_string()
                } else {
                    "[ ]".to_string()
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormAction {
    Submit,
}

#[derive(Debug, Clone)]
pub(crate) struct Form {
    pub(crate) fields: Vec<FormField>,
    pub(crate) focus: usize,
}

impl Form {
    pub(crate) fn new(fields: Vec<FormField>) -> Self {
        Self { fields, focus: 0 }
    }

    /// Trimmed value of the field at `index`.
    pub(crate) fn value(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .map(|f| f.input.value().trim())
            .unwrap_or("")
    }

    /// Untrimmed value, for secrets.
    pub(crate) fn raw_value(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .map(|f| f.input.value())
            .unwrap_or("")
    }

    pub(crate) fn is_checked(&self, index: usize) -> bool {
        self.fields.get(index).is_some_and(|f| f.checked)
    }

    #[cfg(test)]
    pub(crate) fn set_value(&mut self, index: usize, value: &str) {
        if let Some(field) = self.fields.get_mut(index) {
            field.input = Input::new(value.to_string());
        }
    }

    pub(crate) fn clear(&mut self) {
        for field in self.fields.iter_mut() {
            field.input.reset();
            field.checked = false;
        }
        self.focus = 0;
    }

    /// Height needed to draw every field.
    pub(crate) fn height(&self) -> u16 {
        self.fields.len() as u16 * FIELD_HEIGHT
    }

    fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    fn focus_previous(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub(crate) fn process_event(&mut self, event: &Event) -> Option<FormAction> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
                KeyCode::Tab | KeyCode::Down => self.focus_next(),
                KeyCode::BackTab | KeyCode::Up => self.focus_previous(),
                KeyCode::Enter => return Some(FormAction::Submit),
                _ => {
                    let field = self.fields.get_mut(self.focus)?;
                    match field.kind {
                        FieldKind::Toggle => {
                            if key.code == KeyCode::Char(' ') {
                                field.checked = !field.checked;
                            }
                        }
                        FieldKind::Text | FieldKind::Secret => {
                            field.input.handle_event(event);
                        }
                    }
                }
            },

            Event::Paste(text) => {
                let field = self.fields.get_mut(self.focus)?;
                if field.kind != FieldKind::Toggle {
                    let value = format!("{}{}", field.input.value(), text.trim_end());
                    field.input = Input::new(value);
                }
            }

            _ => {}
        }

        None
    }

    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme, active: bool) {
        let rows = Layout::vertical(
            self.fields
                .iter()
                .map(|_| Constraint::Length(FIELD_HEIGHT)),
        )
        .split(area);

        for (index, (field, row)) in self.fields.iter().zip(rows.iter()).enumerate() {
            let focused = active && index == self.focus;

            let border_style = if focused {
                Style::default().fg(theme.accent_colour)
            } else {
                Style::default().fg(theme.border_colour)
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(Span::styled(
                    field.label,
                    Style::default().fg(theme.muted_colour),
                ));

            let value = Line::from(field.display_value()).style(
                Style::default()
                    .fg(theme.text_colour)
                    .add_modifier(if focused { Modifier::BOLD } else { Modifier::empty() }),
            );

            f.render_widget(Paragraph::new(value).block(block), *row);

            if focused && field.kind != FieldKind::Toggle {
                let width = row.width.saturating_sub(2) as usize;
                let scroll = field.input.visual_scroll(width);
                let x = row.x + 1 + (field.input.visual_cursor().saturating_sub(scroll)) as u16;
                f.set_cursor_position((x, row.y + 1));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(form: &mut Form, text: &str) {
        for c in text.chars() {
            form.process_event(&key(KeyCode::Char(c)));
        }
    }

    fn sample() -> Form {
        Form::new(vec![
            FormField::text("Email"),
            FormField::secret("Password"),
            FormField::toggle("Remember me"),
        ])
    }

    #[test]
    fn test_typing_and_focus() {
        let mut form = sample();
        type_text(&mut form, " alex@melodex.com ");
        form.process_event(&key(KeyCode::Tab));
        type_text(&mut form, "pass word");

        assert_eq!(form.value(0), "alex@melodex.com");
        assert_eq!(form.raw_value(1), "pass word");
        assert_eq!(form.fields[1].display_value(), "•••••••••");
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = sample();
        form.process_event(&key(KeyCode::Up));
        assert_eq!(form.focus, 2);
        form.process_event(&key(KeyCode::Down));
        assert_eq!(form.focus, 0);
    }

    #[test]
    fn test_toggle_and_submit() {
        let mut form = sample();
        form.focus = 2;
        assert_eq!(form.process_event(&key(KeyCode::Char(' '))), None);
        assert!(form.is_checked(2));
        assert_eq!(form.process_event(&key(KeyCode::Enter)), Some(FormAction::Submit));

        form.clear();
        assert!(!form.is_checked(2));
        assert_eq!(form.focus, 0);
    }

    #[test]
    fn test_paste_appends_to_focused_field() {
        let mut form = sample();
        type_text(&mut form, "http://");
        form.process_event(&Event::Paste("localhost/cb#access_token=a\n".into()));
        assert_eq!(form.value(0), "http://localhost/cb#access_token=a");
    }
}
