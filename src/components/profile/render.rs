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

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{components::profile::ProfileView, render::Render, theme::Theme};

const PANEL_WIDTH: u16 = 60;

impl Render for ProfileView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let [column] = Layout::horizontal([Constraint::Length(PANEL_WIDTH)])
            .flex(Flex::Center)
            .areas(area);

        let body_height = match &self.editing {
            Some(form) => form.height(),
            None => self.rows().len() as u16 * 2 + 2,
        };

        let [heading, body, hints] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(body_height),
            Constraint::Length(2),
        ])
        .flex(Flex::Center)
        .areas(column);

        let (name, handle) = self
            .identity
            .as_ref()
            .map(|i| (i.display_name().to_string(), format!("@{}", i.handle())))
            .unwrap_or_default();

        f.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(
                    name,
                    Style::default()
                        .fg(theme.text_colour)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(handle, Style::default().fg(theme.commander_colour))),
            ]),
            heading,
        );

        let hint = match (&self.editing, self.saving) {
            (_, true) => "Saving…",
            (Some(_), false) => "Enter: Save   Tab: Next field   Esc: Cancel",
            (None, false) => "e: Edit profile   o: Log out",
        };
        f.render_widget(
            Paragraph::new(hint).style(Style::default().fg(theme.muted_colour)),
            hints,
        );

        if let Some(form) = &self.editing {
            form.draw(f, body, theme, !self.saving);
            return;
        }

        let mut lines = vec![];
        for (label, value) in self.rows() {
            lines.push(Line::from(Span::styled(label, Style::default().fg(theme.muted_colour))));
            lines.push(Line::from(Span::styled(value, Style::default().fg(theme.text_colour))));
        }

        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border_colour))
                    .padding(Padding::horizontal(1))
                    .title(Span::styled(" Account ", Style::default().fg(theme.muted_colour))),
            ),
            body,
        );
    }
}
