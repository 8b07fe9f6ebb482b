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

use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the identity provider.
///
/// Only the fields the client displays or edits are modelled; unknown
/// metadata keys are carried in `extra` so that nothing is lost when the
/// object is persisted with the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Identity {
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) email: Option<String>,
    #[serde(default)]
    pub(crate) user_metadata: UserMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct UserMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) country: Option<String>,
    #[serde(
        default,
        rename = "dob",
        alias = "date_of_birth",
        skip_serializing_if = "Option::is_none"
    )]
    pub(crate) date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) gender: Option<String>,
    #[serde(flatten)]
    pub(crate) extra: serde_json::Map<String, serde_json::Value>,
}

impl Identity {
    /// Name shown in the header: full name, else e-mail, else `User`.
    pub(crate) fn display_name(&self) -> &str {
        non_empty(self.user_metadata.full_name.as_deref())
            .or(non_empty(self.email.as_deref()))
            .unwrap_or("User")
    }

    /// Short handle: username, else e-mail, else `guest`.
    pub(crate) fn handle(&self) -> &str {
        non_empty(self.user_metadata.username.as_deref())
            .or(non_empty(self.email.as_deref()))
            .unwrap_or("guest")
    }
}

/// Editable profile fields sent to the identity provider's user update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub(crate) struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) country: Option<String>,
    #[serde(rename = "dob", skip_serializing_if = "Option::is_none")]
    pub(crate) date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) gender: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
pub(crate) fn identity_fixture(id: &str) -> Identity {
    Identity {
        id: id.to_string(),
        email: Some(format!("{}@melodex.test", id)),
        user_metadata: UserMetadata::default(),
    }
}
