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
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::{
    components::session_detail::SessionDetailView,
    render::{
        Render,
        icons::{ICON_LYRICS, status_icon},
    },
    theme::Theme,
    util::format::{count_label, format_optional_duration},
};

impl Render for SessionDetailView {
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
                    self.name.clone(),
                    Style::default()
                        .fg(theme.text_colour)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    count_label(self.tracks.len(), "track"),
                    Style::default().fg(theme.muted_colour),
                )),
            ]),
            heading,
        );

        f.render_widget(
            Paragraph::new(
                "l: Lyrics   x: Re-extract   d: Delete   u: Upload   r: Refresh   Esc: Back",
            )
            .style(Style::default().fg(theme.muted_colour)),
            hints,
        );

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border_colour));

        let placeholder = if self.loading && self.tracks.is_empty() {
            Some("Loading tracks...")
        } else if self.tracks.is_empty() {
            Some("This session has no tracks yet. Press u to upload one.")
        } else {
            None
        };

        if let Some(text) = placeholder {
            f.render_widget(
                Paragraph::new(text)
                    .style(Style::default().fg(theme.muted_colour))
                    .block(block),
                table,
            );
            return;
        }

        let header = Row::new(vec!["Title", "Artist", "Album", "Genre", "Duration", "Lyrics", "Status"])
            .style(Style::default().fg(theme.muted_colour));

        let rows = self.tracks.iter().map(|track| {
            let muted = Style::default().fg(theme.muted_colour);
            Row::new(vec![
                Cell::from(track.display_title().to_string())
                    .style(Style::default().fg(theme.text_colour)),
                Cell::from(track.artist.clone().unwrap_or_default()).style(muted),
                Cell::from(track.album.clone().unwrap_or_default()).style(muted),
                Cell::from(track.genre.clone().unwrap_or_default()).style(muted),
                Cell::from(format_optional_duration(track.duration)).style(muted),
                Cell::from(if track.has_lyrics() { ICON_LYRICS } else { "" }).style(muted),
                Cell::from(format!("{} {}", status_icon(track.status), track.status.label()))
                    .style(Style::default().fg(theme.status_colour(track.status))),
            ])
        });

        let table_widget = Table::new(
            rows,
            [
                Constraint::Percentage(28),
                Constraint::Percentage(18),
                Constraint::Percentage(16),
                Constraint::Percentage(10),
                Constraint::Length(9),
                Constraint::Length(7),
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

        f.render_stateful_widget(table_widget, table, &mut self.table_state);
    }
}
