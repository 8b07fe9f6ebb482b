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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event. It draws the header, the view for the current
//! route, the footer and finally any overlays, topmost last.

mod footer;
mod header;
pub(crate) mod icons;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::{
    App,
    components::landing::draw_landing,
    render::{footer::draw_footer, header::draw_header},
    routes::{Access, Route, guard},
    theme::Theme,
};

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// A `width` x `height` rectangle centred in `area`, clamped to fit.
pub(crate) fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);

    popup
}

/// The frame shared by every overlay.
pub(crate) fn popup_block(title: &str, theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent_colour))
        .style(Style::default().bg(theme.surface_colour))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(theme.text_colour)
                .add_modifier(Modifier::BOLD),
        ))
}

/// Renders the user interface to the terminal frame.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the UI
///   to reflect changes and update internal view state (like table scroll
///   positions).
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    let theme = app.theme;

    f.render_widget(
        Block::default().style(Style::default().bg(theme.background_colour)),
        area,
    );

    let [header, body, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    draw_header(f, header, app);
    draw_body(f, body, app);
    draw_footer(f, footer, app);

    if let Some(popup) = app.metadata_popup.as_mut() {
        popup.draw(f, body, &theme);
    }
    if let Some(picker) = app.session_picker.as_mut() {
        picker.draw(f, body, &theme);
    }
    if let Some(lyrics) = app.lyrics_view.as_mut() {
        lyrics.draw(f, body, &theme);
    }
    if let Some(dialog) = app.dialogs.front_mut() {
        dialog.draw(f, area, &theme);
    }
}

fn draw_body(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme;

    if guard(&app.route, &app.auth) != Access::Granted {
        f.render_widget(
            Paragraph::new("Loading...")
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.muted_colour)),
            popup_area(area, area.width, 1),
        );
        return;
    }

    match app.route {
        Route::Landing => draw_landing(f, area, &theme, app.auth.is_signed_in()),
        Route::SignIn => app.sign_in_view.draw(f, area, &theme),
        Route::SignUp => app.sign_up_view.draw(f, area, &theme),
        Route::AuthCallback => app.callback_view.draw(f, area, &theme),
        Route::Home => app.home_view.draw(f, area, &theme),
        Route::Upload => app.upload_view.draw(f, area, &theme),
        Route::Sessions => app.sessions_view.draw(f, area, &theme),
        Route::SessionDetail(_) => app.session_detail_view.draw(f, area, &theme),
        Route::Profile => app.profile_view.draw(f, area, &theme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_area_is_centred() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(popup_area(area, 60, 10), Rect::new(20, 15, 60, 10));
    }

    #[test]
    fn test_popup_area_is_clamped() {
        let area = Rect::new(5, 5, 30, 8);
        assert_eq!(popup_area(area, 60, 20), area);
    }
}
