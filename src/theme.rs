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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.

use ratatui::style::Color;

use crate::model::TrackStatus;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) surface_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) selection_colour: Color,

    pub(crate) text_colour: Color,
    pub(crate) muted_colour: Color,
    pub(crate) commander_colour: Color,

    pub(crate) success_colour: Color,
    pub(crate) warning_colour: Color,
    pub(crate) error_colour: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(18, 17, 24),
            surface_colour: Color::Rgb(30, 29, 36),
            accent_colour: Color::Rgb(59, 25, 230),
            border_colour: Color::Rgb(75, 85, 99),
            selection_colour: Color::Rgb(42, 39, 49),

            text_colour: Color::Rgb(255, 255, 255),
            muted_colour: Color::Rgb(156, 163, 175),
            commander_colour: Color::Rgb(196, 181, 253),

            success_colour: Color::Rgb(74, 222, 128),
            warning_colour: Color::Rgb(250, 204, 21),
            error_colour: Color::Rgb(248, 113, 113),
        }
    }

    pub(crate) fn status_colour(&self, status: TrackStatus) -> Color {
        match status {
            TrackStatus::Pending => self.muted_colour,
            TrackStatus::Processing => self.warning_colour,
            TrackStatus::Completed => self.success_colour,
            TrackStatus::Failed => self.error_colour,
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences. Only `Rgb` colours have a hexadecimal form.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex() {
        let theme = Theme::default();
        assert_eq!(Theme::to_hex(theme.background_colour).as_deref(), Some("#121118"));
        assert_eq!(Theme::to_hex(theme.accent_colour).as_deref(), Some("#3b19e6"));
        assert_eq!(Theme::to_hex(Color::Blue), None);
    }
}
