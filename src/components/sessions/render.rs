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

use chrono::Local;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
};

use crate::{
    components::sessions::{CreateSession, SessionsView},
    render::{Render, popup_area, popup_block},
    theme::Theme,
    util::format::{count_label, format_created},
};

impl Render for SessionsView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let [heading, table, hints] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .horizontal_margin(2)
        .areas(area);

        f.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(
                    "Sessions",
                    Style::default()
                        .fg(theme.text_colour)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(self.summary(), Style::default().fg(theme.muted_colour))),
            ]),
            heading,
        );

        f.render_widget(
            Paragraph::new("Enter: Open   n: New session   d: Delete   r: Refresh")
                .style(Style::default().fg(theme.muted_colour)),
            hints,
        );

        self.draw_table(f, table, theme);

        if let Some(create) = &self.create {
            draw_create(f, area, theme, create);
        }
    }
}

impl SessionsView {
    fn draw_table(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border_colour));

        let placeholder = if self.loading {
            Some("Loading sessions...")
        } else if self.sessions.is_empty() {
            Some("No sessions yet. Press n to create one.")
        } else {
            None
        };

        if let Some(text) = placeholder {
            f.render_widget(
                Paragraph::new(text)
                    .style(Style::default().fg(theme.muted_colour))
                    .block(block),
                area,
            );
            return;
        }

        let today = Local::now().date_naive();
        let header = Row::new(vec!["Name", "Tracks", "Created"])
            .style(Style::default().fg(theme.muted_colour));

        let rows = self.sessions.iter().map(|session| {
            let created = session
                .created_at
                .map(|c| format_created(c.with_timezone(&Local), today))
                .unwrap_or_default();

            Row::new(vec![
                Cell::from(session.name.clone()).style(Style::default().fg(theme.text_colour)),
                Cell::from(count_label(session.track_count, "track")),
                Cell::from(created),
            ])
            .style(Style::default().fg(theme.muted_colour))
        });

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(50),
                Constraint::Length(12),
                Constraint::Min(20),
            ],
        )
        .header(header)
        .block(block)
        .row_highlight_style(
            Style::default()
                .bg(theme.selection_colour)
                .add_modifier(Modifier::BOLD),
        );

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}

fn draw_create(f: &mut Frame, area: Rect, theme: &Theme, create: &CreateSession) {
    let popup = popup_area(area, area.width.clamp(30, 50), 7);
    f.render_widget(Clear, popup);

    let block = popup_block("New Session", theme);
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let [field, hint] = Layout::vertical([Constraint::Length(3), Constraint::Length(1)])
        .horizontal_margin(1)
        .areas(inner);

    let field_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent_colour))
        .title(Span::styled("Session name", Style::default().fg(theme.muted_colour)));

    let width = field.width.saturating_sub(2) as usize;
    let scroll = create.name.visual_scroll(width);

    f.render_widget(
        Paragraph::new(create.name.value())
            .style(Style::default().fg(theme.text_colour))
            .scroll((0, scroll as u16))
            .block(field_block),
        field,
    );

    let hint_text = if create.submitting {
        "Creating…"
    } else {
        "Enter: Create   Esc: Cancel"
    };
    f.render_widget(
        Paragraph::new(hint_text).style(Style::default().fg(theme.muted_colour)),
        hint,
    );

    if !create.submitting {
        let x = field.x + 1 + create.name.visual_cursor().saturating_sub(scroll) as u16;
        f.set_cursor_position((x, field.y + 1));
    }
}
