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

//! The tracks of one session, with delete, re-extract and lyrics actions.
//!
//! Re-extraction and lyrics generation update the track's status locally
//! before the request is sent so the table reflects the work in progress.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::model::{Track, TrackStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SessionDetailAction {
    ConfirmDelete { track_id: String, title: String },
    Reextract(String),
    GenerateLyrics {
        track_id: String,
        title: String,
        artist: String,
    },
    ViewLyrics(String),
    Notice(&'static str),
    Upload,
    Refresh,
    Back,
}

pub(crate) struct SessionDetailView {
    pub(crate) session_id: Option<String>,
    pub(crate) name: String,
    pub(crate) tracks: Vec<Track>,
    pub(crate) loading: bool,
    pub(crate) table_state: TableState,
}

impl SessionDetailView {
    pub(crate) fn new() -> Self {
        Self {
            session_id: None,
            name: String::new(),
            tracks: vec![],
            loading: false,
            table_state: TableState::default(),
        }
    }

    /// Switches to another session, discarding the tracks of the previous
    /// one.
    pub(crate) fn open(&mut self, session_id: &str, name: Option<&str>) {
        if self.session_id.as_deref() != Some(session_id) {
            self.tracks.clear();
            self.table_state.select(None);
        }

        self.session_id = Some(session_id.to_string());
        self.name = name.unwrap_or("Session").to_string();
        self.loading = true;
    }

    /// Replaces the track list, ignoring results for a session that is no
    /// longer shown. Returns whether the tracks were applied.
    pub(crate) fn set_tracks(&mut self, session_id: &str, tracks: Vec<Track>) -> bool {
        if self.session_id.as_deref() != Some(session_id) {
            return false;
        }

        let selected = self
            .table_state
            .selected()
            .map(|i| i.min(tracks.len().saturating_sub(1)));

        self.tracks = tracks;
        self.loading = false;
        self.table_state.select(if self.tracks.is_empty() {
            None
        } else {
            selected.or(Some(0))
        });

        true
    }

    pub(crate) fn selected(&self) -> Option<&Track> {
        self.tracks.get(self.table_state.selected()?)
    }

    pub(crate) fn track_mut(&mut self, track_id: &str) -> Option<&mut Track> {
        self.tracks.iter_mut().find(|t| t.id == track_id)
    }

    pub(crate) fn remove_track(&mut self, track_id: &str) {
        let Some(session_id) = self.session_id.clone() else {
            return;
        };

        let tracks = self
            .tracks
            .iter()
            .filter(|t| t.id != track_id)
            .cloned()
            .collect();
        self.set_tracks(&session_id, tracks);
    }

    pub(crate) fn finish_lyrics(&mut self, track_id: &str, lyrics: String) {
        if let Some(track) = self.track_mut(track_id) {
            track.lyrics = Some(lyrics);
            track.transition(TrackStatus::Completed);
        }
    }

    /// Undoes the local `processing` status of a lyrics or re-extract
    /// request that failed.
    pub(crate) fn revert_processing(&mut self, track_id: &str) {
        if let Some(track) = self.track_mut(track_id) {
            if track.status == TrackStatus::Processing {
                track.transition(TrackStatus::Completed);
            }
        }
    }

    /// Starts a re-extraction of the selected track.
    pub(crate) fn reextract_selected(&mut self) -> Option<SessionDetailAction> {
        let index = self.table_state.selected()?;
        let track = self.tracks.get_mut(index)?;

        match track.status {
            TrackStatus::Processing => None,
            TrackStatus::Completed => {
                track.transition(TrackStatus::Processing);
                Some(SessionDetailAction::Reextract(track.id.clone()))
            }
            TrackStatus::Pending | TrackStatus::Failed => Some(SessionDetailAction::Notice(
                "Only extracted tracks can be re-extracted",
            )),
        }
    }

    /// Opens the lyrics of the selected track, or asks for them to be
    /// generated when it has none.
    pub(crate) fn lyrics_for_selected(&mut self) -> Option<SessionDetailAction> {
        let index = self.table_state.selected()?;
        let track = self.tracks.get_mut(index)?;

        if track.has_lyrics() {
            return Some(SessionDetailAction::ViewLyrics(track.id.clone()));
        }

        match track.status {
            TrackStatus::Processing => None,
            TrackStatus::Completed => {
                track.transition(TrackStatus::Processing);
                Some(SessionDetailAction::GenerateLyrics {
                    track_id: track.id.clone(),
                    title: track.display_title().to_string(),
                    artist: track.artist.clone().unwrap_or_default(),
                })
            }
            TrackStatus::Pending | TrackStatus::Failed => Some(SessionDetailAction::Notice(
                "Lyrics can be generated once extraction completes",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::track_fixture;

    fn detail(tracks: Vec<Track>) -> SessionDetailView {
        let mut view = SessionDetailView::new();
        view.open("s1", Some("Demos"));
        view.set_tracks("s1", tracks);
        view
    }

    #[test]
    fn test_late_tracks_for_other_session_are_ignored() {
        let mut view = detail(vec![track_fixture("t1", TrackStatus::Completed)]);
        view.open("s2", None);

        assert!(!view.set_tracks("s1", vec![]));
        assert!(view.loading);
        assert!(view.tracks.is_empty());
    }

    #[test]
    fn test_lyrics_generation_lifecycle() {
        let mut view = detail(vec![track_fixture("t1", TrackStatus::Completed)]);

        assert_eq!(
            view.lyrics_for_selected(),
            Some(SessionDetailAction::GenerateLyrics {
                track_id: "t1".into(),
                title: "Title t1".into(),
                artist: "Artist".into(),
            })
        );
        assert_eq!(view.tracks[0].status, TrackStatus::Processing);

        // A second request while the first is outstanding is ignored.
        assert_eq!(view.lyrics_for_selected(), None);

        view.finish_lyrics("t1", "Line one\nLine two".into());
        assert_eq!(view.tracks[0].status, TrackStatus::Completed);
        assert!(view.tracks[0].has_lyrics());

        assert_eq!(
            view.lyrics_for_selected(),
            Some(SessionDetailAction::ViewLyrics("t1".into()))
        );
    }

    #[test]
    fn test_failed_lyrics_reverts_status() {
        let mut view = detail(vec![track_fixture("t1", TrackStatus::Completed)]);
        view.lyrics_for_selected();

        view.revert_processing("t1");
        assert_eq!(view.tracks[0].status, TrackStatus::Completed);
        assert!(!view.tracks[0].has_lyrics());
    }

    #[test]
    fn test_reextract_requires_completed_track() {
        let mut view = detail(vec![track_fixture("t1", TrackStatus::Failed)]);
        assert!(matches!(
            view.reextract_selected(),
            Some(SessionDetailAction::Notice(_))
        ));
        assert_eq!(view.tracks[0].status, TrackStatus::Failed);

        let mut view = detail(vec![track_fixture("t2", TrackStatus::Completed)]);
        assert_eq!(
            view.reextract_selected(),
            Some(SessionDetailAction::Reextract("t2".into()))
        );
        assert_eq!(view.tracks[0].status, TrackStatus::Processing);
    }

    #[test]
    fn test_pending_track_cannot_be_processed() {
        let mut view = detail(vec![track_fixture("t1", TrackStatus::Pending)]);

        assert!(matches!(
            view.reextract_selected(),
            Some(SessionDetailAction::Notice(_))
        ));
        assert!(matches!(
            view.lyrics_for_selected(),
            Some(SessionDetailAction::Notice(_))
        ));
        assert_eq!(view.tracks[0].status, TrackStatus::Pending);

        view.revert_processing("t1");
        assert_eq!(view.tracks[0].status, TrackStatus::Pending);
    }

    #[test]
    fn test_failed_reextract_reverts_status() {
        let mut view = detail(vec![track_fixture("t1", TrackStatus::Completed)]);
        view.reextract_selected();
        assert_eq!(view.tracks[0].status, TrackStatus::Processing);

        view.revert_processing("t1");
        assert_eq!(view.tracks[0].status, TrackStatus::Completed);
        assert!(matches!(
            view.reextract_selected(),
            Some(SessionDetailAction::Reextract(_))
        ));
    }

    #[test]
    fn test_remove_track() {
        let mut view = detail(vec![
            track_fixture("t1", TrackStatus::Completed),
            track_fixture("t2", TrackStatus::Pending),
        ]);

        view.remove_track("t1");
        assert_eq!(view.tracks.len(), 1);
        assert_eq!(view.selected().map(|t| t.id.as_str()), Some("t2"));
    }
}
