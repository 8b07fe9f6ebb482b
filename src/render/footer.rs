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

//! Render the footer line.
//!
//! The footer shows the command line while it is open, otherwise the latest
//! notice, otherwise the global key hints.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::App;

pub(crate) fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let commander = &app.commander;
    let theme = &app.theme;

    let [container] = Layout::horizontal([Constraint::Min(1)])
        .horizontal_margin(1)
        .areas(area);

    if commander.active() {
        let text = format!(":{}", commander.input.value());
        f.render_widget(
            Paragraph::new(text).style(
                Style::default()
                    .fg(theme.commander_colour)
                    .bg(theme.surface_colour),
            ),
            container,
        );

        let cursor_x = container.x + 1 + commander.input.visual_cursor() as u16;
        f.set_cursor_position((cursor_x, container.y));
        return;
    }

    let (text, colour) = match &app.notice {
        Some(notice) => (notice.text.as_str(), theme.warning_colour),
        None if app.auth.is_signed_in() => (
            "F1 Home  F2 Upload  F3 Sessions  F4 Profile  : Command  Ctrl-C Quit",
            theme.muted_colour,
        ),
        None => (": Command  Ctrl-C Quit", theme.muted_colour),
    };

    f.render_widget(Paragraph::new(text).style(Style::default().fg(colour)), container);
}
