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

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::model::{id_text, lenient_timestamp};

/// A user-defined named grouping of tracks.
///
/// `track_count` is derived from whatever aggregate the backend includes and
/// is only ever used for display.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "SessionRecord")]
pub(crate) struct Session {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) created_at: Option<DateTime<Utc>>,
    pub(crate) track_count: usize,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionRecord {
    #[serde(deserialize_with = "id_text")]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default, alias = "created_at", deserialize_with = "lenient_timestamp")]
    created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "_count")]
    count: Option<SessionCount>,
    #[serde(default)]
    tracks: Option<Vec<serde_json::Value>>,
}

#[derive(Deserialize)]
struct SessionCount {
    #[serde(default)]
    tracks: usize,
}

impl From<SessionRecord> for Session {
    fn from(record: SessionRecord) -> Self {
        let track_count = record
            .count
            .map(|c| c.tracks)
            .or_else(|| record.tracks.as_ref().map(Vec::len))
            .unwrap_or(0);

        Self {
            id: record.id,
            name: record.name,
            created_at: record.created_at,
            track_count,
        }
    }
}

#[cfg(test)]
pub(crate) fn session_fixture(id: &str, name: &str) -> Session {
    Session {
        id: id.to_string(),
        name: name.to_string(),
        created_at: None,
        track_count: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_count_from_aggregate() {
        let json = r#"{"id":"s1","name":"Demos","createdAt":"2026-03-14T10:00:00.000Z","_count":{"tracks":3}}"#;

        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.id, "s1");
        assert_eq!(session.name, "Demos");
        assert_eq!(session.track_count, 3);
        assert!(session.created_at.is_some());
    }

    #[test]
    fn test_track_count_from_embedded_tracks() {
        let json = r#"{"id":7,"name":"Live","tracks":[{"id":1},{"id":2}]}"#;

        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.id, "7");
        assert_eq!(session.track_count, 2);
    }

    #[test]
    fn test_track_count_defaults_to_zero() {
        let sessions: Vec<Session> =
            serde_json::from_str(r#"[{"id":"a","name":"A"},{"id":"b","name":"B"}]"#).unwrap();

        assert_eq!(sessions.len(), 2);
        assert!(sessions.iter().all(|s| s.track_count == 0));
    }
}
