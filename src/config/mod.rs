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

//! Application configuration.
//!
//! This module manages the application configuration file. Endpoint settings
//! can also be supplied through `MELODEX_*` environment variables, which take
//! precedence over the file.

use std::{env, path::PathBuf};

use serde::{Deserialize, Serialize};

pub(crate) const CONFIG_NAME: &str = "melodex";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub api_base_url: String,
    pub auth_url: String,
    pub auth_anon_key: String,
    pub oauth_provider: String,
    pub oauth_redirect_url: String,
    pub media_dirs: Vec<String>,
    pub request_timeout_secs: u64,
    pub log_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            api_base_url: "http://localhost:3000".to_string(),
            auth_url: String::new(),
            auth_anon_key: String::new(),
            oauth_provider: "google".to_string(),
            oauth_redirect_url: "http://localhost:5173/auth/callback".to_string(),
            media_dirs: vec![],
            request_timeout_secs: 60,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Applies environment overrides, `lookup` being the variable source.
    pub(crate) fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_empty("MELODEX_API_BASE_URL") {
            self.api_base_url = url;
        }
        if let Some(url) = non_empty("MELODEX_AUTH_URL") {
            self.auth_url = url;
        }
        if let Some(key) = non_empty("MELODEX_AUTH_ANON_KEY") {
            self.auth_anon_key = key;
        }

        self
    }

    /// Directories offered by the upload file picker, defaulting to the
    /// current directory when none are configured.
    pub(crate) fn media_roots(&self) -> Vec<PathBuf> {
        if self.media_dirs.is_empty() {
            env::current_dir().map(|dir| vec![dir]).unwrap_or_default()
        } else {
            self.media_dirs.iter().map(PathBuf::from).collect()
        }
    }

    /// Where log output goes, next to the configuration file unless
    /// overridden.
    pub(crate) fn log_path(&self) -> PathBuf {
        if let Some(path) = &self.log_file {
            return PathBuf::from(path);
        }

        confy::get_configuration_file_path(CONFIG_NAME, None)
            .ok()
            .and_then(|path| path.parent().map(|dir| dir.join("melodex.log")))
            .unwrap_or_else(|| env::temp_dir().join("melodex.log"))
    }
}

pub fn load_config() -> AppConfig {
    let config: AppConfig = confy::load(CONFIG_NAME, None).unwrap_or_default();
    config.with_overrides(|key| env::var(key).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_overrides_replace_file_values() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("MELODEX_API_BASE_URL", "https://api.melodex.test"),
            ("MELODEX_AUTH_ANON_KEY", "anon"),
            ("MELODEX_AUTH_URL", "  "),
        ]);

        let config = AppConfig::default().with_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.api_base_url, "https://api.melodex.test");
        assert_eq!(config.auth_anon_key, "anon");
        assert_eq!(config.auth_url, "");
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let config: AppConfig = partial_config(r#"{"api_base_url":"http://10.0.0.2:3000"}"#);
        assert_eq!(config.api_base_url, "http://10.0.0.2:3000");
        assert_eq!(config.oauth_provider, "google");
        assert_eq!(config.request_timeout_secs, 60);
    }

    #[test]
    fn test_media_roots_uses_configured_dirs() {
        let config = AppConfig {
            media_dirs: vec!["/music".into(), "/videos".into()],
            ..Default::default()
        };
        assert_eq!(config.media_roots(), vec![PathBuf::from("/music"), PathBuf::from("/videos")]);
    }

    #[test]
    fn test_explicit_log_file() {
        let config = AppConfig {
            log_file: Some("/tmp/melodex-test.log".into()),
            ..Default::default()
        };
        assert_eq!(config.log_path(), PathBuf::from("/tmp/melodex-test.log"));
    }

    fn partial_config(json: &str) -> AppConfig {
        serde_json::from_str(json).unwrap()
    }
}
