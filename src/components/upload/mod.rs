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

//! The upload surface.
//!
//! A track is uploaded from exactly one source: an audio file, a video file
//! or a link. Populating one source disables the other two until the upload
//! is cleared. Files are chosen from a picker listing the configured media
//! folders, or by pasting (dropping) a path into a focused file field.

mod event;
mod picker;
mod render;

pub(crate) use picker::{FilePicker, PickerAction};

use std::path::{Path, PathBuf};

use tui_input::Input;

use crate::{
    model::MediaType,
    util::media::{self, LocalMedia},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UploadInput {
    Audio,
    Video,
    Link,
}

impl UploadInput {
    const ALL: [UploadInput; 3] = [UploadInput::Audio, UploadInput::Video, UploadInput::Link];

    pub(crate) fn media_type(self) -> Option<MediaType> {
        match self {
            UploadInput::Audio => Some(MediaType::Audio),
            UploadInput::Video => Some(MediaType::Video),
            UploadInput::Link => None,
        }
    }

    fn for_media_type(media_type: MediaType) -> Self {
        match media_type {
            MediaType::Audio => UploadInput::Audio,
            MediaType::Video => UploadInput::Video,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SelectedFile {
    pub(crate) path: PathBuf,
    pub(crate) media_type: MediaType,
    pub(crate) preview: Option<LocalMedia>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Submission {
    File(PathBuf),
    Link(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum UploadAction {
    OpenPicker(MediaType),
    Probe(PathBuf),
    Submit(Submission),
    Rejected(String),
}

pub(crate) struct UploadView {
    pub(crate) focus: UploadInput,
    pub(crate) file: Option<SelectedFile>,
    pub(crate) link: Input,
    pub(crate) picker: Option<FilePicker>,
    pub(crate) uploading: bool,
}

impl UploadView {
    pub(crate) fn new() -> Self {
        Self {
            focus: UploadInput::Audio,
            file: None,
            link: Input::default(),
            picker: None,
            uploading: false,
        }
    }

    /// The source currently populated, if any.
    pub(crate) fn active_input(&self) -> Option<UploadInput> {
        if let Some(file) = &self.file {
            Some(UploadInput::for_media_type(file.media_type))
        } else if !self.link.value().trim().is_empty() {
            Some(UploadInput::Link)
        } else {
            None
        }
    }

    pub(crate) fn is_disabled(&self, input: UploadInput) -> bool {
        self.active_input().is_some_and(|active| active != input)
    }

    /// Whether key presses should go to the link text field.
    pub(crate) fn captures_text(&self) -> bool {
        self.picker.is_none() && self.focus == UploadInput::Link && !self.uploading
    }

    /// Selects a local file for `input`.
    ///
    /// # Errors
    ///
    /// Returns the message to show when the input is disabled or the file is
    /// not of the input's media type.
    pub(crate) fn select_file(&mut self, input: UploadInput, path: &Path) -> Result<(), String> {
        let Some(expected) = input.media_type() else {
            return Err("Links cannot be selected as files".to_string());
        };

        if self.is_disabled(input) {
            return Err("Clear the current upload before choosing another source".to_string());
        }

        if media::media_type_of(path) != Some(expected) {
            return Err(format!(
                "Please choose a supported {} file ({})",
                expected.label().to_lowercase(),
                media::supported_extensions(expected).join(", ")
            ));
        }

        self.file = Some(SelectedFile {
            path: path.to_path_buf(),
            media_type: expected,
            preview: None,
        });
        self.focus = input;

        Ok(())
    }

    /// Attaches probe results to the selected file.
    ///
    /// # Errors
    ///
    /// Files over the upload limit are deselected and an explanation is
    /// returned.
    pub(crate) fn set_preview(&mut self, local: LocalMedia) -> Result<(), String> {
        let Some(file) = self.file.as_mut().filter(|f| f.path == local.path) else {
            return Ok(());
        };

        if local.exceeds_upload_limit() {
            let message = media::upload_limit_message(&local.path, local.size_bytes);
            self.file = None;
            return Err(message);
        }

        file.preview = Some(local);
        Ok(())
    }

    pub(crate) fn set_link(&mut self, url: &str) -> Result<(), String> {
        if self.is_disabled(UploadInput::Link) {
            return Err("Clear the current upload before choosing another source".to_string());
        }

        self.link = Input::new(url.trim().to_string());
        self.focus = UploadInput::Link;
        Ok(())
    }

    /// Resets every input and re-enables all sources.
    pub(crate) fn clear(&mut self) {
        if self.uploading {
            return;
        }

        self.file = None;
        self.link.reset();
        self.picker = None;
    }

    pub(crate) fn submission(&self) -> Result<Submission, &'static str> {
        if let Some(file) = &self.file {
            return Ok(Submission::File(file.path.clone()));
        }

        let link = self.link.value().trim();
        if !link.is_empty() {
            return Ok(Submission::Link(link.to_string()));
        }

        Err("Please select a file")
    }

    /// Starts an upload unless one is already in flight.
    pub(crate) fn submit(&mut self) -> Option<UploadAction> {
        if self.uploading {
            return None;
        }

        match self.submission() {
            Ok(submission) => {
                self.uploading = true;
                Some(UploadAction::Submit(submission))
            }
            Err(message) => Some(UploadAction::Rejected(message.to_string())),
        }
    }

    pub(crate) fn finish_upload(&mut self, succeeded: bool) {
        self.uploading = false;
        if succeeded {
            self.clear();
        }
    }

    pub(crate) fn open_picker(&mut self, media_type: MediaType) -> UploadAction {
        self.picker = Some(FilePicker::new(media_type));
        UploadAction::OpenPicker(media_type)
    }

    pub(crate) fn set_picker_files(&mut self, media_type: MediaType, files: Vec<PathBuf>) {
        if let Some(picker) = self.picker.as_mut().filter(|p| p.media_type == media_type) {
            picker.set_files(files);
        }
    }

    fn enabled_inputs(&self) -> Vec<UploadInput> {
        UploadInput::ALL
            .into_iter()
            .filter(|input| !self.is_disabled(*input))
            .collect()
    }

    fn focus_step(&mut self, forward: bool) {
        let enabled = self.enabled_inputs();
        let Some(current) = enabled.iter().position(|i| *i == self.focus) else {
            if let Some(first) = enabled.first() {
                self.focus = *first;
            }
            return;
        };

        let len = enabled.len();
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.focus = enabled[next];
    }
}
