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
use serde::{Deserialize, Deserializer, Serialize};

use crate::model::{MediaType, id_text, lenient_millis, lenient_timestamp};

/// Processing status of a track as observed by the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum TrackStatus {
    #[default]
    Pending,
    Processing,
    #[serde(alias = "processed")]
    Completed,
    Failed,
}

impl TrackStatus {
    /// Whether the client may move a track from this status to `next`.
    ///
    /// `completed -> processing` covers both re-extraction and lyrics
    /// generation; `processing -> completed` also covers reverting a failed
    /// lyrics request.
    pub(crate) fn can_transition_to(self, next: TrackStatus) -> bool {
        use TrackStatus::*;

        matches!(
            (self, next),
            (Pending, Processing)
                | (Processing, Completed)
                | (Processing, Failed)
                | (Completed, Processing)
        )
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            TrackStatus::Pending => "Pending",
            TrackStatus::Processing => "Processing...",
            TrackStatus::Completed => "Extraction Complete",
            TrackStatus::Failed => "Failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Track {
    #[serde(deserialize_with = "id_text")]
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) filename: Option<String>,
    #[serde(default)]
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) artist: Option<String>,
    #[serde(default)]
    pub(crate) album: Option<String>,
    #[serde(default)]
    pub(crate) genre: Option<String>,
    #[serde(default, deserialize_with = "lenient_millis")]
    pub(crate) duration: Option<u64>,
    #[serde(default, deserialize_with = "size_text")]
    pub(crate) size: Option<String>,
    #[serde(default, rename = "type")]
    pub(crate) media_type: MediaType,
    #[serde(default)]
    pub(crate) status: TrackStatus,
    #[serde(default)]
    pub(crate) lyrics: Option<String>,
    #[serde(default, alias = "file_url")]
    pub(crate) file_url: Option<String>,
    #[serde(default, alias = "created_at", deserialize_with = "lenient_timestamp")]
    pub(crate) created_at: Option<DateTime<Utc>>,
}

impl Track {
    pub(crate) fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.filename.as_deref())
            .unwrap_or("Untitled")
    }

    pub(crate) fn has_lyrics(&self) -> bool {
        self.lyrics.as_deref().is_some_and(|l| !l.trim().is_empty())
    }

    /// Moves the track to `next` if the transition is allowed, returning
    /// whether the status changed.
    pub(crate) fn transition(&mut self, next: TrackStatus) -> bool {
        if self.status.can_transition_to(next) {
            self.status = next;
            true
        } else {
            false
        }
    }
}

/// Partial update sent with `PATCH /tracks/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub(crate) struct TrackPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) status: Option<TrackStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) lyrics: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SizeValue {
    Bytes(u64),
    Text(String),
}

/// Sizes arrive either as a byte count or as pre-formatted text.
fn size_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<SizeValue>::deserialize(deserializer)?.map(|value| match value {
            SizeValue::Bytes(n) => crate::util::format::format_size(n),
            SizeValue::Text(s) => s,
        }),
    )
}

#[cfg(test)]
pub(crate) fn track_fixture(id: &str, status: TrackStatus) -> Track {
    Track {
        id: id.to_string(),
        filename: Some(format!("{}.mp3", id)),
        title: Some(format!("Title {}", id)),
        artist: Some("Artist".to_string()),
        album: None,
        genre: None,
        duration: Some(200_000),
        size: None,
        media_type: MediaType::Audio,
        status,
        lyrics: None,
        file_url: None,
        created_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_transitions() {
        use TrackStatus::*;

        assert!(Pending.can_transition_to(Processing));
        assert!(Processing.can_transition_to(Completed));
        assert!(Processing.can_transition_to(Failed));
        assert!(Completed.can_transition_to(Processing));
    }

    #[test]
    fn test_refused_transitions() {
        use TrackStatus::*;

        assert!(!Pending.can_transition_to(Completed));
        assert!(!Pending.can_transition_to(Failed));
        assert!(!Completed.can_transition_to(Failed));
        assert!(!Failed.can_transition_to(Processing));
        assert!(!Failed.can_transition_to(Completed));
    }

    #[test]
    fn test_transition_leaves_status_on_refusal() {
        let mut track = track_fixture("1", TrackStatus::Pending);
        assert!(!track.transition(TrackStatus::Completed));
        assert_eq!(track.status, TrackStatus::Pending);

        assert!(track.transition(TrackStatus::Processing));
        assert_eq!(track.status, TrackStatus::Processing);
    }

    #[test]
    fn test_deserialize_backend_track() {
        let json = r#"{
            "id": 42,
            "filename": "summer_vibes_final.mp3",
            "title": "",
            "size": 8598323,
            "type": "audio",
            "status": "processed",
            "created_at": "2026-03-14T10:00:00Z"
        }"#;

        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.id, "42");
        assert_eq!(track.display_title(), "summer_vibes_final.mp3");
        assert_eq!(track.size.as_deref(), Some("8.2 MB"));
        assert_eq!(track.status, TrackStatus::Completed);
        assert!(track.created_at.is_some());
        assert!(!track.has_lyrics());
    }

    #[test]
    fn test_deserialize_tolerates_bad_timestamp_and_text_size() {
        let json = r#"{"id":"t1","size":"3.0 MB","createdAt":"yesterday","type":"video"}"#;

        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.size.as_deref(), Some("3.0 MB"));
        assert_eq!(track.created_at, None);
        assert_eq!(track.media_type, MediaType::Video);
        assert_eq!(track.status, TrackStatus::Pending);
    }

    #[test]
    fn test_patch_omits_unset_fields() {
        let patch = TrackPatch {
            status: Some(TrackStatus::Completed),
            lyrics: Some("la la".into()),
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            serde_json::json!({"status": "completed", "lyrics": "la la"})
        );

        let empty = TrackPatch::default();
        assert_eq!(serde_json::to_value(&empty).unwrap(), serde_json::json!({}));
    }
}
