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

//! The public landing view.

use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LandingAction {
    GetStarted,
    SignIn,
    SignUp,
}

pub(crate) fn process_event(event: &Event) -> Option<LandingAction> {
    match event {
        Event::Key(key) => match key.code {
            KeyCode::Enter => Some(LandingAction::GetStarted),
            KeyCode::Char('s') => Some(LandingAction::SignIn),
            KeyCode::Char('u') => Some(LandingAction::SignUp),
            _ => None,
        },
        _ => None,
    }
}

pub(crate) fn draw_landing(f: &mut Frame, area: Rect, theme: &Theme, signed_in: bool) {
    let [_, content, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Fill(1),
    ])
    .areas(area);

    let start = if signed_in {
        "Enter: Go to your dashboard"
    } else {
        "Enter: Get started   s: Sign in   u: Sign up"
    };

    let text = vec![
        Line::from(Span::styled(
            "MELODEX",
            Style::default()
                .fg(theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Upload your music. Extract the metadata. Generate the lyrics.",
            Style::default().fg(theme.text_colour),
        )),
        Line::from(Span::styled(
            "Organise every track into sessions.",
            Style::default().fg(theme.muted_colour),
        )),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(start, Style::default().fg(theme.commander_colour))),
    ];

    f.render_widget(Paragraph::new(text).alignment(Alignment::Center), content);
}
