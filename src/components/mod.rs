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

//! Interactive views and overlays.
//!
//! Each component owns its presentation state, turns key presses into a
//! component-specific action enum and draws itself. Acting on those actions
//! (sending tasks, switching routes) is left to the event handlers.

pub(crate) mod auth;
pub(crate) mod dialog;
pub(crate) mod form;
pub(crate) mod landing;
pub(crate) mod lyrics;
pub(crate) mod metadata;
pub(crate) mod session_picker;

mod home;
mod profile;
mod session_detail;
mod sessions;
mod upload;

pub(crate) use auth::{
    CallbackAction, CallbackView, SignInAction, SignInView, SignUpAction, SignUpView,
};
pub(crate) use dialog::{ConfirmTarget, Dialog, DialogAction};
pub(crate) use home::{HomeAction, HomeView};
pub(crate) use lyrics::{LyricsAction, LyricsView};
pub(crate) use metadata::{MetadataAction, MetadataPopup};
pub(crate) use profile::{ProfileAction, ProfileView};
pub(crate) use session_detail::{SessionDetailAction, SessionDetailView};
pub(crate) use session_picker::{SessionPicker, SessionPickerAction};
pub(crate) use sessions::{SessionsAction, SessionsView};
pub(crate) use upload::{Submission, UploadAction, UploadView};
