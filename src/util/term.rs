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

//! Terminal emulator styling.
//!
//! This module paints the terminal emulator's background in the theme colour
//! using OSC (Operating System Command) escape sequences, so the alternate
//! screen has no mismatched border around the TUI.
//!
//! # Compatibility
//!
//! The sequences are understood by most modern terminals (XTerm, iTerm2,
//! Alacritty, Kitty, WezTerm). Terminals that do not support OSC 11/111
//! ignore them.

use std::io::{self, Write};

/// Sets the terminal background colour using an OSC 11 escape sequence.
///
/// # Arguments
///
/// * `hex_colour` - The colour as a CSS-style hex string, e.g. `"#121118"`.
///
/// # Errors
///
/// Returns an error if `stdout` cannot be written to or flushed.
///
/// # Note
///
/// `stdout` is flushed immediately so the colour applies before the first
/// frame is drawn.
pub(crate) fn set_terminal_bg(hex_colour: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]11;{}\x07", hex_colour)?;
    stdout.flush()
}

/// Resets the terminal background to its default colour.
///
/// This sends the OSC 111 escape sequence, which reverts the background to
/// the user's own terminal configuration.
///
/// # Errors
///
/// Returns an error if `stdout` cannot be written to or flushed.
///
/// # Note
///
/// Called during teardown, where failures are ignored.
pub(crate) fn reset_terminal_bg() -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]111\x07")?;
    stdout.flush()
}
