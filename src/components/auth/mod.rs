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

//! Sign-in, sign-up and OAuth callback views.

mod callback;
mod signin;
mod signup;

pub(crate) use callback::{CallbackAction, CallbackView};
pub(crate) use signin::{SignInAction, SignInView};
pub(crate) use signup::{SignUpAction, SignUpView};

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{components::form::Form, theme::Theme};

const FORM_WIDTH: u16 = 56;

/// Lays out a centred auth form with a heading above it and key hints
/// below.
fn draw_auth_form(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    heading: &str,
    form: &Form,
    status: Option<&str>,
    hints: &str,
) {
    let [column] = Layout::horizontal([Constraint::Length(FORM_WIDTH)])
        .flex(Flex::Center)
        .areas(area);

    let [title, fields, status_area, hint_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(form.height()),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .areas(column);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            heading.to_string(),
            Style::default()
                .fg(theme.text_colour)
                .add_modifier(Modifier::BOLD),
        ))),
        title,
    );

    form.draw(f, fields, theme, status.is_none());

    if let Some(status) = status {
        f.render_widget(
            Paragraph::new(status.to_string()).style(Style::default().fg(theme.warning_colour)),
            status_area,
        );
    }

    f.render_widget(
        Paragraph::new(hints.to_string()).style(Style::default().fg(theme.muted_colour)),
        hint_area,
    );
}
