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

use std::time::Duration;

use reqwest::{
    Method,
    blocking::{Client, RequestBuilder},
};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    api::{Credentials, send, send_empty},
    config::AppConfig,
    error::ApiError,
    identity::{
        AuthEvent, AuthListener, AuthSession, IdentityProvider, SessionStore, parse_callback,
    },
    model::{Identity, ProfileUpdate},
};

/// Lifetime assumed for a token issued without any expiry information.
const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 3600;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: Identity,
}

impl TokenResponse {
    fn into_session(self, now: i64) -> AuthSession {
        let expires_at = self
            .expires_at
            .or_else(|| self.expires_in.map(|secs| now + secs))
            .unwrap_or(now + DEFAULT_TOKEN_LIFETIME_SECS);

        AuthSession {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user,
        }
    }
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RefreshGrant<'a> {
    refresh_token: &'a str,
}

#[derive(Serialize)]
struct UserUpdateRequest<'a> {
    data: &'a ProfileUpdate,
}

/// GoTrue client holding the current session.
pub(crate) struct SupabaseIdentity {
    client: Client,
    auth_url: String,
    anon_key: String,
    provider: String,
    redirect_url: String,
    store: SessionStore,
    session: Option<AuthSession>,
    listeners: Vec<AuthListener>,
}

impl SupabaseIdentity {
    pub(crate) fn new(config: &AppConfig, store: SessionStore) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            auth_url: config.auth_url.trim_end_matches('/').to_string(),
            anon_key: config.auth_anon_key.clone(),
            provider: config.oauth_provider.clone(),
            redirect_url: config.oauth_redirect_url.clone(),
            store,
            session: None,
            listeners: vec![],
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.auth_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, self.endpoint(path))
            .header("apikey", &self.anon_key)
    }

    fn notify(&self, event: AuthEvent) {
        tracing::debug!(?event, "Auth state changed");
        for listener in &self.listeners {
            listener(&event);
        }
    }

    fn establish(&mut self, session: AuthSession) -> Result<Identity, ApiError> {
        self.store.save(&session)?;
        let user = session.user.clone();
        self.session = Some(session);
        Ok(user)
    }

    fn refresh(&mut self, refresh_token: &str) -> Result<AuthSession, ApiError> {
        let request = self
            .request(Method::POST, "token?grant_type=refresh_token")
            .json(&RefreshGrant { refresh_token });

        let response: TokenResponse = send(request)?;
        Ok(response.into_session(now()))
    }

    fn drop_session(&mut self) {
        self.session = None;
        if let Err(e) = self.store.clear() {
            tracing::warn!("Failed to clear stored session: {}", e);
        }
    }
}

impl IdentityProvider for SupabaseIdentity {
    fn restore(&mut self) -> Result<Option<Identity>, ApiError> {
        let mut session = self.store.load()?;

        if let Some(stored) = session.take_if(|s| s.is_expiring(now())) {
            match self.refresh(&stored.refresh_token) {
                Ok(refreshed) => session = Some(refreshed),
                Err(e) => tracing::info!("Stored session could not be refreshed: {}", e),
            }
        }

        let user = match session {
            Some(session) => Some(self.establish(session)?),
            None => {
                self.drop_session();
                None
            }
        };

        tracing::info!(signed_in = user.is_some(), "Session restored");
        self.notify(AuthEvent::InitialSession(user.clone()));

        Ok(user)
    }

    fn sign_in_with_password(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<Identity, ApiError> {
        let request = self
            .request(Method::POST, "token?grant_type=password")
            .json(&PasswordGrant { email, password });

        let response: TokenResponse = send(request)?;
        let user = self.establish(response.into_session(now()))?;

        tracing::info!(user_id = %user.id, "Signed in with password");
        self.notify(AuthEvent::SignedIn(user.clone()));

        Ok(user)
    }

    fn authorize_url(&self) -> Result<String, ApiError> {
        let url = Url::parse_with_params(
            &self.endpoint("authorize"),
            &[
                ("provider", self.provider.as_str()),
                ("redirect_to", self.redirect_url.as_str()),
            ],
        )?;

        Ok(url.into())
    }

    fn complete_oauth(&mut self, callback_url: &str) -> Result<Identity, ApiError> {
        let tokens = parse_callback(callback_url, now())?;

        let request = self
            .request(Method::GET, "user")
            .bearer_auth(&tokens.access_token);
        let user: Identity = send(request)?;

        let user = self.establish(AuthSession {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            expires_at: tokens.expires_at,
            user,
        })?;

        tracing::info!(user_id = %user.id, "Signed in with OAuth");
        self.notify(AuthEvent::SignedIn(user.clone()));

        Ok(user)
    }

    fn credentials(&mut self) -> Result<Credentials, ApiError> {
        let session = self.session.as_ref().ok_or(ApiError::NotAuthenticated)?;

        if !session.is_expiring(now()) {
            return Ok(session.credentials());
        }

        let refresh_token = session.refresh_token.clone();
        match self.refresh(&refresh_token) {
            Ok(refreshed) => {
                let creds = refreshed.credentials();
                self.establish(refreshed)?;
                self.notify(AuthEvent::TokenRefreshed);
                Ok(creds)
            }
            Err(e) => {
                tracing::warn!("Token refresh failed: {}", e);
                self.drop_session();
                self.notify(AuthEvent::SignedOut);
                Err(ApiError::NotAuthenticated)
            }
        }
    }

    fn update_user(&mut self, update: &ProfileUpdate) -> Result<Identity, ApiError> {
        let creds = self.credentials()?;

        let request = self
            .request(Method::PUT, "user")
            .bearer_auth(&creds.access_token)
            .json(&UserUpdateRequest { data: update });
        let user: Identity = send(request)?;

        if let Some(mut session) = self.session.take() {
            session.user = user.clone();
            self.establish(session)?;
        }

        self.notify(AuthEvent::UserUpdated(user.clone()));

        Ok(user)
    }

    fn sign_out(&mut self) -> Result<(), ApiError> {
        if let Some(session) = &self.session {
            let request = self
                .request(Method::POST, "logout")
                .bearer_auth(&session.access_token);

            if let Err(e) = send_empty(request) {
                tracing::warn!("Provider sign-out failed: {}", e);
            }
        }

        self.drop_session();
        tracing::info!("Signed out");
        self.notify(AuthEvent::SignedOut);

        Ok(())
    }

    fn on_auth_state_change(&mut self, listener: AuthListener) {
        self.listeners.push(listener);
    }
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}
