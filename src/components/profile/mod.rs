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

//! The signed-in user's profile.
//!
//! Profile details live in the identity provider's user metadata. The view
//! shows them read-only until edit mode is entered; saving sends the whole
//! form through the provider's user update.

mod event;
mod render;

use chrono::NaiveDate;

use crate::{
    components::form::{Form, FormField},
    model::{Identity, ProfileUpdate},
};

const USERNAME: usize = 0;
const FULL_NAME: usize = 1;
const COUNTRY: usize = 2;
const DATE_OF_BIRTH: usize = 3;
const GENDER: usize = 4;

const NOT_SET: &str = "Not set";

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ProfileAction {
    Save(ProfileUpdate),
    Invalid(&'static str),
    Logout,
}

pub(crate) struct ProfileView {
    pub(crate) identity: Option<Identity>,
    pub(crate) editing: Option<Form>,
    pub(crate) saving: bool,
}

impl ProfileView {
    pub(crate) fn new() -> Self {
        Self {
            identity: None,
            editing: None,
            saving: false,
        }
    }

    pub(crate) fn set_identity(&mut self, identity: Option<Identity>) {
        self.identity = identity;
    }

    /// Labelled values shown in view mode.
    pub(crate) fn rows(&self) -> Vec<(&'static str, String)> {
        let Some(identity) = &self.identity else {
            return vec![];
        };

        let metadata = &identity.user_metadata;
        let text = |value: Option<&str>| {
            value
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(NOT_SET)
                .to_string()
        };

        vec![
            ("Username", text(metadata.username.as_deref())),
            ("Full name", text(metadata.full_name.as_deref())),
            ("Email", text(identity.email.as_deref())),
            ("Country", text(metadata.country.as_deref())),
            ("Date of birth", text(metadata.date_of_birth.as_deref())),
            ("Gender", text(metadata.gender.as_deref())),
        ]
    }

    pub(crate) fn start_edit(&mut self) {
        let Some(identity) = &self.identity else {
            return;
        };

        let metadata = &identity.user_metadata;
        let value = |v: &Option<String>| v.clone().unwrap_or_default();

        self.editing = Some(Form::new(vec![
            FormField::text("Username").with_value(&value(&metadata.username)),
            FormField::text("Full name").with_value(&value(&metadata.full_name)),
            FormField::text("Country").with_value(&value(&metadata.country)),
            FormField::text("Date of birth (YYYY-MM-DD)").with_value(&value(&metadata.date_of_birth)),
            FormField::text("Gender").with_value(&value(&metadata.gender)),
        ]));
    }

    pub(crate) fn cancel_edit(&mut self) {
        if !self.saving {
            self.editing = None;
        }
    }

    pub(crate) fn saved(&mut self, identity: Option<Identity>) {
        if identity.is_some() {
            self.identity = identity;
        }
        self.editing = None;
        self.saving = false;
    }

    pub(crate) fn save_failed(&mut self) {
        self.saving = false;
    }

    pub(crate) fn captures_text(&self) -> bool {
        self.editing.is_some()
    }

    fn update_from(form: &Form) -> Result<ProfileUpdate, &'static str> {
        let date_of_birth = form.value(DATE_OF_BIRTH);
        if !date_of_birth.is_empty()
            && NaiveDate::parse_from_str(date_of_birth, "%Y-%m-%d").is_err()
        {
            return Err("Date of birth must be in the form YYYY-MM-DD");
        }

        let value = |index: usize| Some(form.value(index).to_string());

        Ok(ProfileUpdate {
            full_name: value(FULL_NAME),
            username: value(USERNAME),
            country: value(COUNTRY),
            date_of_birth: value(DATE_OF_BIRTH),
            gender: value(GENDER),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::identity_fixture;

    fn view() -> ProfileView {
        let mut identity = identity_fixture("alex");
        identity.user_metadata.full_name = Some("Alex Chen".into());
        identity.user_metadata.username = Some("audiophile42".into());

        let mut view = ProfileView::new();
        view.set_identity(Some(identity));
        view
    }

    #[test]
    fn test_rows() {
        let rows = view().rows();
        assert_eq!(rows[0], ("Username", "audiophile42".to_string()));
        assert_eq!(rows[2], ("Email", "alex@melodex.test".to_string()));
        assert_eq!(rows[3], ("Country", "Not set".to_string()));
    }

    #[test]
    fn test_edit_form_is_prefilled() {
        let mut view = view();
        view.start_edit();

        let form = view.editing.as_ref().unwrap();
        assert_eq!(form.value(USERNAME), "audiophile42");
        assert_eq!(form.value(FULL_NAME), "Alex Chen");
        assert_eq!(form.value(COUNTRY), "");
    }

    #[test]
    fn test_invalid_date_of_birth() {
        let mut view = view();
        view.start_edit();

        let form = view.editing.as_mut().unwrap();
        form.set_value(DATE_OF_BIRTH, "15/05/1990");
        assert!(ProfileView::update_from(form).is_err());

        form.set_value(DATE_OF_BIRTH, "1990-05-15");
        let update = ProfileView::update_from(form).unwrap();
        assert_eq!(update.date_of_birth.as_deref(), Some("1990-05-15"));
        assert_eq!(update.full_name.as_deref(), Some("Alex Chen"));
    }

    #[test]
    fn test_saved_leaves_edit_mode() {
        let mut view = view();
        view.start_edit();
        view.saving = true;

        view.cancel_edit();
        assert!(view.editing.is_some());

        view.saved(None);
        assert!(view.editing.is_none());
        assert!(!view.saving);
        assert!(view.identity.is_some());
    }
}
