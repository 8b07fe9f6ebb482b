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

//! Unicode symbols for the TUI.
//!
//! These are selected for compatibility with most modern terminal emulators
//! and fonts.

use crate::model::TrackStatus;

pub(crate) const ICON_APP: &str = "\u{266B}";
pub(crate) const ICON_USER: &str = "\u{25CF}";
pub(crate) const ICON_LYRICS: &str = "\u{266A}";

// Text-style variants (using Variation Selector-15 [\u{FE0E}]), this forces
// terminals to render the icons as monochrome text rather than colorful
// emojis, ensuring they respect the TUI's color styling.
pub(crate) const ICON_PENDING: &str = "\u{25CB}";
pub(crate) const ICON_PROCESSING: &str = "\u{23F3}\u{FE0E}";
pub(crate) const ICON_COMPLETED: &str = "\u{2714}\u{FE0E}";
pub(crate) const ICON_FAILED: &str = "\u{2716}\u{FE0E}";

pub(crate) fn status_icon(status: TrackStatus) -> &'static str {
    match status {
        TrackStatus::Pending => ICON_PENDING,
        TrackStatus::Processing => ICON_PROCESSING,
        TrackStatus::Completed => ICON_COMPLETED,
        TrackStatus::Failed => ICON_FAILED,
    }
}
