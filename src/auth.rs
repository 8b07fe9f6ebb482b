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

//! Authentication state as seen by the UI.

use crate::{identity::AuthEvent, model::Identity};

/// The current user and whether the initial session lookup is still
/// outstanding.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AuthContext {
    user: Option<Identity>,
    loading: bool,
}

impl AuthContext {
    pub(crate) fn new() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    pub(crate) fn user(&self) -> Option<&Identity> {
        self.user.as_ref()
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.loading
    }

    pub(crate) fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Folds a provider session change into the context. Any event ends the
    /// loading phase.
    pub(crate) fn apply(&mut self, event: &AuthEvent) {
        match event {
            AuthEvent::InitialSession(user) => self.user = user.clone(),
            AuthEvent::SignedIn(user) | AuthEvent::UserUpdated(user) => {
                self.user = Some(user.clone())
            }
            AuthEvent::SignedOut => self.user = None,
            AuthEvent::TokenRefreshed => {}
        }
        self.loading = false;
    }
}
