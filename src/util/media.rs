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

//! Local media discovery for the upload surface.
//!
//! Media files are found with `WalkDir` and filtered by extension. A selected
//! file is probed with `Lofty` so the upload view can preview its size,
//! duration and tags before anything is sent to the backend. Probing is
//! best-effort: files that carry no readable tags (most video containers)
//! still yield their size.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use lofty::{prelude::*, probe::Probe};
use walkdir::WalkDir;

use crate::{model::MediaType, util::format::format_size};

/// Largest file the backend accepts for a single upload.
pub(crate) const MAX_UPLOAD_BYTES: u64 = 100 * 1024 * 1024;

const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "flac", "aac", "ogg", "m4a"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov", "mkv", "wmv", "flv", "webm"];

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LocalMedia {
    pub(crate) path: PathBuf,
    pub(crate) media_type: MediaType,
    pub(crate) size_bytes: u64,
    pub(crate) duration_ms: Option<u64>,
    pub(crate) title: Option<String>,
    pub(crate) artist: Option<String>,
}

impl LocalMedia {
    pub(crate) fn exceeds_upload_limit(&self) -> bool {
        self.size_bytes > MAX_UPLOAD_BYTES
    }
}

/// The final component of `path`, or the whole path when it has none.
pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// The alert shown when a file is over [`MAX_UPLOAD_BYTES`].
pub(crate) fn upload_limit_message(path: &Path, size_bytes: u64) -> String {
    format!(
        "{} is {}. The maximum file size is {}.",
        file_name(path),
        format_size(size_bytes),
        format_size(MAX_UPLOAD_BYTES)
    )
}

/// Refuses a file over the upload limit before any request is made.
///
/// A file that cannot be read is let through so the upload itself reports
/// the failure.
///
/// # Errors
///
/// Returns the message to show when the file is too large.
pub(crate) fn check_upload_size(path: &Path) -> Result<(), String> {
    match fs::metadata(path) {
        Ok(meta) if meta.len() > MAX_UPLOAD_BYTES => Err(upload_limit_message(path, meta.len())),
        _ => Ok(()),
    }
}

/// Classifies a path by its (case-insensitive) extension.
pub(crate) fn media_type_of(path: &Path) -> Option<MediaType> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();

    if AUDIO_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaType::Audio)
    } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaType::Video)
    } else {
        None
    }
}

/// The lower-case extensions accepted for `media_type`, without dots.
pub(crate) fn supported_extensions(media_type: MediaType) -> &'static [&'static str] {
    match media_type {
        MediaType::Audio => AUDIO_EXTENSIONS,
        MediaType::Video => VIDEO_EXTENSIONS,
    }
}

/// Recursively lists the files of one media type under each root, sorted by
/// path. Unreadable entries are skipped.
///
/// # Arguments
///
/// * `roots` - The directories to walk, usually the configured media folders.
/// * `media_type` - Which extensions to keep.
///
/// # Note
///
/// This walks the file system synchronously and is only called from the task
/// worker.
pub(crate) fn list_media_files(roots: &[PathBuf], media_type: MediaType) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = roots
        .iter()
        .flat_map(|root| {
            WalkDir::new(root)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
                .filter(|e| media_type_of(e.path()) == Some(media_type))
                .map(|e| e.into_path())
        })
        .collect();

    files.sort();
    files.dedup();
    files
}

/// Reads the size and, where possible, the duration and tags of a file.
///
/// # Errors
///
/// Returns an error if the file cannot be accessed or its extension is not a
/// supported audio or video format.
pub(crate) fn probe(path: &Path) -> Result<LocalMedia> {
    let media_type =
        media_type_of(path).ok_or_else(|| anyhow!("Unsupported file type: {}", path.display()))?;

    let size_bytes = fs::metadata(path)
        .with_context(|| format!("Failed to read {}", path.display()))?
        .len();

    let mut media = LocalMedia {
        path: path.to_path_buf(),
        media_type,
        size_bytes,
        duration_ms: None,
        title: None,
        artist: None,
    };

    match Probe::open(path).and_then(|p| p.read()) {
        Ok(tagged_file) => {
            let duration = tagged_file.properties().duration().as_millis() as u64;
            media.duration_ms = Some(duration).filter(|d| *d > 0);

            if let Some(tag) = tagged_file.primary_tag().or_else(|| tagged_file.first_tag()) {
                media.title = tag.title().map(|s| s.to_string());
                media.artist = tag.artist().map(|s| s.to_string());
            }
        }
        Err(e) => tracing::debug!(path = %path.display(), "No tag data: {}", e),
    }

    Ok(media)
}
