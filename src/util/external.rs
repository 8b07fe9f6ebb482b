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

//! Third-party search links and the system browser.

use anyhow::{Context, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchProvider {
    Spotify,
    YouTube,
}

impl SearchProvider {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            SearchProvider::Spotify => "Spotify",
            SearchProvider::YouTube => "YouTube",
        }
    }
}

/// Builds the search URL for a track on the given provider.
///
/// The query is the title and artist joined by a space; missing parts are
/// left out rather than rendered as placeholders.
pub(crate) fn search_url(provider: SearchProvider, title: &str, artist: &str) -> String {
    let query = format!("{} {}", title.trim(), artist.trim());
    let query = urlencoding::encode(query.trim());

    match provider {
        SearchProvider::Spotify => format!("https://open.spotify.com/search/{}", query),
        SearchProvider::YouTube => {
            format!("https://www.youtube.com/results?search_query={}", query)
        }
    }
}

/// Opens a URL in the user's browser without waiting for it to exit.
pub(crate) fn open_in_browser(url: &str) -> Result<()> {
    tracing::info!(url, "Opening external link");
    open::that_detached(url).with_context(|| format!("Failed to open {}", url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spotify_search_url() {
        let url = search_url(SearchProvider::Spotify, "Summer Vibes", "The Midnight");
        assert_eq!(url, "https://open.spotify.com/search/Summer%20Vibes%20The%20Midnight");
    }

    #[test]
    fn test_youtube_search_url_encodes_reserved_characters() {
        let url = search_url(SearchProvider::YouTube, "Rock & Roll", "AC/DC");
        assert_eq!(
            url,
            "https://www.youtube.com/results?search_query=Rock%20%26%20Roll%20AC%2FDC"
        );
    }

    #[test]
    fn test_provider_labels() {
        assert_eq!(SearchProvider::Spotify.label(), "Spotify");
        assert_eq!(SearchProvider::YouTube.label(), "YouTube");
    }

    #[test]
    fn test_search_url_without_artist() {
        let url = search_url(SearchProvider::Spotify, "Intro", "");
        assert_eq!(url, "https://open.spotify.com/search/Intro");
    }
}
