use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::catalog::Collection;
use crate::error::{PlacementError, Result};

pub const CATALOG_ENV: &str = "PLACEMENT_CATALOG";
pub const LOG_ENV: &str = "PLACEMENT_LOG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog file; the bundled seed data is used when unset.
    pub catalog_path: Option<PathBuf>,
    pub log_level: String,
    pub scan_delay_ms: u64,
    pub default_collection: Collection,
    pub preferences: Preferences,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            log_level: "warn".to_string(),
            scan_delay_ms: 3000,
            default_collection: Collection::Jobs,
            preferences: Preferences::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub notifications: Notifications,
    pub accessibility: Accessibility,
    pub security: Security,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notifications {
    pub email: bool,
    pub push: bool,
    pub job_alerts: bool,
    pub course_reminders: bool,
    pub event_updates: bool,
    pub messages: bool,
}

impl Default for Notifications {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            job_alerts: true,
            course_reminders: true,
            event_updates: false,
            messages: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Accessibility {
    pub high_contrast: bool,
    pub large_text: bool,
    pub reduced_motion: bool,
    pub screen_reader: bool,
}

/// Account security toggles. Passwords are not handled here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Security {
    pub two_factor: bool,
    pub login_alerts: bool,
    pub session_timeout_minutes: u32,
}

impl Default for Security {
    fn default() -> Self {
        Self {
            two_factor: false,
            login_alerts: true,
            session_timeout_minutes: 30,
        }
    }
}

impl Config {
    pub fn default_path() -> PathBuf {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "placement") {
            proj_dirs.config_dir().join("config.json")
        } else {
            PathBuf::from("placement.json")
        }
    }

    /// Loads the config file at the default location, then applies
    /// environment overrides. A missing file means defaults.
    pub fn load() -> Result<Self> {
        let config = Self::load_from(&Self::default_path())?;
        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path).map_err(|source| PlacementError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| PlacementError::ConfigFormat {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup(CATALOG_ENV).filter(|p| !p.trim().is_empty()) {
            self.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(level) = lookup(LOG_ENV).filter(|l| !l.trim().is_empty()) {
            self.log_level = level;
        }
        self
    }

    pub fn scan_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.scan_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.scan_delay().as_millis(), 3000);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"scan_delay_ms": 10, "default_collection": "courses",
                "preferences": {{"accessibility": {{"reduced_motion": true}}}}}}"#
        )
        .unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.scan_delay_ms, 10);
        assert_eq!(config.default_collection, Collection::Courses);
        assert!(config.preferences.accessibility.reduced_motion);
        assert!(config.preferences.notifications.email);
        assert_eq!(config.preferences.security, Security::default());
        assert_eq!(config.preferences.security.session_timeout_minutes, 30);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, PlacementError::ConfigFormat { .. }));
    }

    #[test]
    fn environment_overrides_file() {
        let config = Config::default().with_overrides(|key| match key {
            CATALOG_ENV => Some("/tmp/catalog.json".to_string()),
            LOG_ENV => Some("debug".to_string()),
            _ => None,
        });
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.json")));
        assert_eq!(config.log_level, "debug");

        let untouched = Config::default().with_overrides(|_| Some("  ".to_string()));
        assert_eq!(untouched, Config::default());
    }
}
