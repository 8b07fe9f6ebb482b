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

//! Domain models and core data structures.
//!
//! This module defines the entities exchanged with the Melodex backend and
//! the identity provider: sessions, tracks, extracted metadata and the
//! signed-in user. The backend is not strict about its JSON shapes (ids are
//! sometimes numbers, timestamps sometimes malformed) so deserialization is
//! deliberately lenient.

mod identity;
mod session;
mod track;

pub(crate) use identity::{Identity, ProfileUpdate};
pub(crate) use session::Session;
pub(crate) use track::{Track, TrackPatch, TrackStatus};

#[cfg(test)]
pub(crate) use identity::identity_fixture;
#[cfg(test)]
pub(crate) use session::session_fixture;
#[cfg(test)]
pub(crate) use track::track_fixture;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum MediaType {
    #[default]
    Audio,
    Video,
}

impl MediaType {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            MediaType::Audio => "Audio",
            MediaType::Video => "Video",
        }
    }
}

/// Metadata extracted by the backend from an uploaded file or link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct TrackMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) album: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) genre: Option<String>,
    #[serde(deserialize_with = "lenient_millis", skip_serializing_if = "Option::is_none")]
    pub(crate) duration: Option<u64>,
    #[serde(alias = "artUrl", alias = "art_url", skip_serializing_if = "Option::is_none")]
    pub(crate) image: Option<String>,
    #[serde(alias = "file_url", skip_serializing_if = "Option::is_none")]
    pub(crate) file_url: Option<String>,
    #[serde(alias = "file_type", skip_serializing_if = "Option::is_none")]
    pub(crate) file_type: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdValue {
    Text(String),
    Number(i64),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberValue {
    Integer(u64),
    Float(f64),
    Text(String),
}

/// Accepts an identifier encoded as either a JSON string or number.
pub(crate) fn id_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match IdValue::deserialize(deserializer)? {
        IdValue::Text(s) => s,
        IdValue::Number(n) => n.to_string(),
    })
}

/// Accepts a millisecond count encoded as an integer, float or numeric string.
pub(crate) fn lenient_millis<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<NumberValue>::deserialize(deserializer)?.and_then(|value| match value {
            NumberValue::Integer(n) => Some(n),
            NumberValue::Float(f) if f.is_finite() && f >= 0.0 => Some(f.round() as u64),
            NumberValue::Float(_) => None,
            NumberValue::Text(s) => s.trim().parse().ok(),
        }),
    )
}

/// Parses an RFC 3339 timestamp, treating anything unparseable as missing.
pub(crate) fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
        .map(|dt| dt.with_timezone(&Utc)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_accepts_alternate_field_names() {
        let json = r#"{
            "title": "Summer Vibes",
            "artist": "The Midnight Collective",
            "duration": 222000.4,
            "artUrl": "https://cdn.example.com/art.jpg",
            "file_url": "https://cdn.example.com/track.mp3",
            "fileType": "audio"
        }"#;

        let metadata: TrackMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.title.as_deref(), Some("Summer Vibes"));
        assert_eq!(metadata.duration, Some(222000));
        assert_eq!(metadata.image.as_deref(), Some("https://cdn.example.com/art.jpg"));
        assert_eq!(metadata.file_url.as_deref(), Some("https://cdn.example.com/track.mp3"));
        assert_eq!(metadata.album, None);
    }

    #[test]
    fn test_metadata_serializes_camel_case_without_nulls() {
        let metadata = TrackMetadata {
            title: Some("Intro".into()),
            file_url: Some("https://cdn.example.com/intro.mp3".into()),
            ..Default::default()
        };

        let value = serde_json::to_value(&metadata).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "title": "Intro",
                "fileUrl": "https://cdn.example.com/intro.mp3"
            })
        );
    }
}
