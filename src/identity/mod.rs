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

//! Identity provider integration.
//!
//! Authentication is delegated to a hosted GoTrue-compatible service. The
//! [`IdentityProvider`] trait exposes the handful of calls the client makes
//! and a session-change subscription; [`SupabaseIdentity`] implements it over
//! blocking HTTP and keeps the session on disk between runs.

mod callback;
mod store;
mod supabase;

pub(crate) use callback::parse_callback;
pub(crate) use store::SessionStore;
pub(crate) use supabase::SupabaseIdentity;

use serde::{Deserialize, Serialize};

use crate::{
    api::Credentials,
    error::ApiError,
    model::{Identity, ProfileUpdate},
};

/// Seconds before expiry at which an access token is refreshed.
pub(crate) const REFRESH_MARGIN_SECS: i64 = 60;

/// Session changes broadcast to subscribers.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AuthEvent {
    InitialSession(Option<Identity>),
    SignedIn(Identity),
    SignedOut,
    TokenRefreshed,
    UserUpdated(Identity),
}

pub(crate) type AuthListener = Box<dyn Fn(&AuthEvent) + Send>;

/// An authenticated session as issued by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct AuthSession {
    pub(crate) access_token: String,
    pub(crate) refresh_token: String,
    /// Unix time, in seconds, at which the access token expires.
    pub(crate) expires_at: i64,
    pub(crate) user: Identity,
}

impl AuthSession {
    pub(crate) fn is_expiring(&self, now: i64) -> bool {
        self.expires_at - now <= REFRESH_MARGIN_SECS
    }

    pub(crate) fn credentials(&self) -> Credentials {
        Credentials {
            access_token: self.access_token.clone(),
            user_id: self.user.id.clone(),
        }
    }
}

pub(crate) trait IdentityProvider: Send {
    /// Loads any persisted session and announces it with
    /// [`AuthEvent::InitialSession`].
    fn restore(&mut self) -> Result<Option<Identity>, ApiError>;

    fn sign_in_with_password(&mut self, email: &str, password: &str)
    -> Result<Identity, ApiError>;

    /// The provider page that starts an OAuth sign-in.
    fn authorize_url(&self) -> Result<String, ApiError>;

    /// Exchanges the tokens carried by an OAuth redirect URL for a session.
    fn complete_oauth(&mut self, callback_url: &str) -> Result<Identity, ApiError>;

    /// Credentials for a backend call, refreshing the token first when it is
    /// close to expiry.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotAuthenticated`] when there is no session.
    fn credentials(&mut self) -> Result<Credentials, ApiError>;

    fn update_user(&mut self, update: &ProfileUpdate) -> Result<Identity, ApiError>;

    fn sign_out(&mut self) -> Result<(), ApiError>;

    fn on_auth_state_change(&mut self, listener: AuthListener);
}
