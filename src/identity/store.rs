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

//! On-disk persistence of the authenticated session.
//!
//! The session lives beside the application configuration, in the location
//! `confy` resolves for the `session` configuration name. It is written as
//! JSON because user metadata is free-form.

use std::{
    fs,
    io::ErrorKind,
    path::PathBuf,
};

use crate::{config::CONFIG_NAME, error::ApiError, identity::AuthSession};

const SESSION_CONFIG_NAME: &str = "session";

pub(crate) struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub(crate) fn new() -> Result<Self, ApiError> {
        let path = confy::get_configuration_file_path(CONFIG_NAME, Some(SESSION_CONFIG_NAME))?
            .with_extension("json");

        Ok(Self::at(path))
    }

    pub(crate) fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the persisted session. A missing or unreadable file means there
    /// is no session.
    pub(crate) fn load(&self) -> Result<Option<AuthSession>, ApiError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&text) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "Discarding unreadable session: {}", e);
                Ok(None)
            }
        }
    }

    pub(crate) fn save(&self, session: &AuthSession) -> Result<(), ApiError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let text = serde_json::to_string_pretty(session)
            .map_err(|e| ApiError::MalformedBody(e.to_string()))?;
        fs::write(&self.path, text)?;

        Ok(())
    }

    pub(crate) fn clear(&self) -> Result<(), ApiError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::identity_fixture;
    use tempfile::tempdir;

    fn sample() -> AuthSession {
        let mut user = identity_fixture("u1");
        user.user_metadata.full_name = Some("Alex Chen".into());
        user.user_metadata
            .extra
            .insert("avatar_url".into(), serde_json::Value::Null);

        AuthSession {
            access_token: "access".into(),
            refresh_token: "refresh".into(),
            expires_at: 1_700_000_000,
            user,
        }
    }

    #[test]
    fn test_missing_file_is_no_session() {
        let dir = tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("session.json"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_load_and_clear() {
        let dir = tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("nested").join("session.json"));

        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample()));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        store.clear().unwrap();
    }

    #[test]
    fn test_corrupt_file_is_discarded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();
        let store = SessionStore::at(path);

        assert_eq!(store.load().unwrap(), None);
    }
}
