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

//! Render the navigation header.
//!
//! Signed-in users see the function-key navigation with the current view
//! highlighted and their name on the right. Public views only show the
//! application name and the view title.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    App,
    render::icons::{ICON_APP, ICON_USER},
    routes::Route,
};

const NAV_ITEMS: [(&str, &str, Route); 4] = [
    ("F1", "Home", Route::Home),
    ("F2", "Upload", Route::Upload),
    ("F3", "Sessions", Route::Sessions),
    ("F4", "Profile", Route::Profile),
];

pub(crate) fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(32)]).areas(inner);

    let mut spans = vec![Span::styled(
        format!("{} Melodex", ICON_APP),
        Style::default()
            .fg(theme.commander_colour)
            .add_modifier(Modifier::BOLD),
    )];

    match app.auth.user() {
        Some(user) => {
            spans.push(Span::raw("   "));
            for (key, label, route) in NAV_ITEMS.iter() {
                let active = is_section(&app.route, route);
                let style = if active {
                    Style::default()
                        .fg(theme.text_colour)
                        .bg(theme.accent_colour)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.muted_colour)
                };

                spans.push(Span::styled(format!(" {} {} ", key, label), style));
                spans.push(Span::raw(" "));
            }

            f.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(
                        user.display_name().to_string(),
                        Style::default().fg(theme.text_colour),
                    ),
                    Span::styled(format!(" {}", ICON_USER), Style::default().fg(theme.success_colour)),
                ]))
                .alignment(Alignment::Right),
                right,
            );
        }
        None => {
            spans.push(Span::styled(
                format!("  {}", app.route.title()),
                Style::default().fg(theme.muted_colour),
            ));
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)), left);
}

/// Session details belong to the sessions section.
fn is_section(current: &Route, section: &Route) -> bool {
    match (current, section) {
        (Route::SessionDetail(_), Route::Sessions) => true,
        _ => current == section,
    }
}
