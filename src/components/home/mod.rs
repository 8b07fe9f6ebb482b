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

//! The signed-in dashboard: totals across every track the user owns and
//! the most recent uploads.

mod event;
mod render;

use chrono::{Datelike, Local, NaiveDate};

use crate::model::{Track, TrackStatus};

const RECENT_TRACKS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HomeAction {
    Upload,
    Sessions,
    Refresh,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct HomeStats {
    pub(crate) total: usize,
    pub(crate) processed: usize,
    pub(crate) processing: usize,
    pub(crate) this_month: usize,
}

pub(crate) struct HomeView {
    pub(crate) tracks: Vec<Track>,
    pub(crate) loading: bool,
    pub(crate) user_name: String,
}

impl HomeView {
    pub(crate) fn new() -> Self {
        Self {
            tracks: vec![],
            loading: false,
            user_name: String::new(),
        }
    }

    pub(crate) fn set_tracks(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
        self.loading = false;
    }

    pub(crate) fn stats(&self, today: NaiveDate) -> HomeStats {
        let count = |status: TrackStatus| self.tracks.iter().filter(|t| t.status == status).count();

        let this_month = self
            .tracks
            .iter()
            .filter_map(|t| t.created_at)
            .map(|created| created.with_timezone(&Local).date_naive())
            .filter(|date| date.year() == today.year() && date.month() == today.month())
            .count();

        HomeStats {
            total: self.tracks.len(),
            processed: count(TrackStatus::Completed),
            processing: count(TrackStatus::Processing),
            this_month,
        }
    }

    /// Newest tracks first; tracks without a creation time sort last.
    pub(crate) fn recent(&self) -> Vec<&Track> {
        let mut tracks: Vec<&Track> = self.tracks.iter().collect();
        tracks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        tracks.truncate(RECENT_TRACKS);
        tracks
    }
}
