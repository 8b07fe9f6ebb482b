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
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::{
    components::HomeView,
    render::{Render, icons::status_icon},
    theme::Theme,
    util::format::format_created,
};

impl Render for HomeView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let [welcome, stats, actions, recent] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .horizontal_margin(2)
        .areas(area);

        self.draw_welcome(f, welcome, theme);
        self.draw_stats(f, stats, theme);
        draw_actions(f, actions, theme);
        self.draw_recent(f, recent, theme);
    }
}

impl HomeView {
    fn draw_welcome(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let text = vec![
            Line::from(Span::styled(
                format!("Welcome back, {}", self.user_name),
                Style::default()
                    .fg(theme.text_colour)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Ready to analyze some music?",
                Style::default().fg(theme.muted_colour),
            )),
        ];
        f.render_widget(Paragraph::new(text), area);
    }

    fn draw_stats(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let stats = self.stats(Local::now().date_naive());
        let cells = [
            ("Total Tracks", stats.total),
            ("Processed", stats.processed),
            ("Processing", stats.processing),
            ("This Month", stats.this_month),
        ];

        let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).spacing(1).split(area);

        for ((label, value), column) in cells.iter().zip(columns.iter()) {
            let value = if self.loading {
                "…".to_string()
            } else {
                value.to_string()
            };

            let text = vec![
                Line::from(Span::styled(*label, Style::default().fg(theme.muted_colour))),
                Line::from(Span::styled(
                    value,
                    Style::default()
                        .fg(theme.text_colour)
                        .add_modifier(Modifier::BOLD),
                )),
            ];

            f.render_widget(
                Paragraph::new(text).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(theme.accent_colour)),
                ),
                *column,
            );
        }
    }

    fn draw_recent(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border_colour))
            .title(Span::styled(
                " Recent Tracks ",
                Style::default()
                    .fg(theme.text_colour)
                    .add_modifier(Modifier::BOLD),
            ));

        if self.loading {
            f.render_widget(
                Paragraph::new("Loading tracks...")
                    .style(Style::default().fg(theme.muted_colour))
                    .block(block),
                area,
            );
            return;
        }

        let recent = self.recent();
        if recent.is_empty() {
            f.render_widget(
                Paragraph::new("No tracks yet. Press u to upload your first one.")
                    .style(Style::default().fg(theme.muted_colour))
                    .block(block),
                area,
            );
            return;
        }

        let today = Local::now().date_naive();
        let rows = recent.iter().map(|track| {
            let created = track
                .created_at
                .map(|c| format_created(c.with_timezone(&Local), today))
                .unwrap_or_default();

            Row::new(vec![
                Cell::from(track.display_title().to_string())
                    .style(Style::default().fg(theme.text_colour)),
                Cell::from(created).style(Style::default().fg(theme.muted_colour)),
                Cell::from(track.size.clone().unwrap_or_default())
                    .style(Style::default().fg(theme.muted_colour)),
                Cell::from(
                    Line::from(format!("{} {}", status_icon(track.status), track.status.label()))
                        .alignment(Alignment::Right),
                )
                    .style(Style::default().fg(theme.status_colour(track.status))),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(45),
                Constraint::Percentage(25),
                Constraint::Length(10),
                Constraint::Min(20),
            ],
        )
        .block(block);

        f.render_widget(table, area);
    }
}

fn draw_actions(f: &mut Frame, area: Rect, theme: &Theme) {
    let key = Style::default()
        .fg(theme.commander_colour)
        .add_modifier(Modifier::BOLD);
    let label = Style::default().fg(theme.muted_colour);

    let line = Line::from(vec![
        Span::styled("Quick Actions  ", Style::default().fg(theme.text_colour)),
        Span::styled("u", key),
        Span::styled(" Upload New Track   ", label),
        Span::styled("s", key),
        Span::styled(" Browse Sessions   ", label),
        Span::styled("r", key),
        Span::styled(" Refresh", label),
    ]);

    f.render_widget(Paragraph::new(line).block(Block::default().borders(Borders::NONE)), area);
}
