//! User settings, persisted as JSON in the OS config directory.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::LayoutMetrics;
use crate::model::seed;

const SETTINGS_FILE: &str = "settings.json";

/// Narrowest day column a settings file may ask for, in points.
pub const MIN_DAY_WIDTH: f32 = 1.0;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// First day shown at startup. `None` opens the sample week.
    pub week_start: Option<NaiveDate>,
    pub day_width: f32,
    pub row_height: f32,
    pub row_gap: f32,
    pub row_offset: f32,
    /// Maximum undo depth, `0` for unbounded.
    pub history_limit: usize,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        let metrics = LayoutMetrics::default();
        Self {
            week_start: None,
            day_width: metrics.day_width,
            row_height: metrics.row_height,
            row_gap: metrics.row_gap,
            row_offset: metrics.row_offset,
            history_limit: 100,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Where the settings file lives on this machine.
    pub fn default_path() -> PathBuf {
        match directories::ProjectDirs::from("", "", "WeekLanes") {
            Some(dirs) => dirs.config_dir().join(SETTINGS_FILE),
            None => PathBuf::from(".").join(SETTINGS_FILE),
        }
    }

    /// Load `path`, never failing: a missing file is created with the
    /// defaults, and an unreadable one falls back to them. The problem, if
    /// any, is handed back so it can be reported once logging is up.
    pub fn load_or_init(path: &Path) -> (Self, Option<SettingsError>) {
        if !path.exists() {
            let settings = Self::default();
            let problem = settings.save_to(path).err();
            return (settings, problem);
        }
        match Self::load_from(path) {
            Ok(settings) => (settings, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Log a problem returned by [`Settings::load_or_init`].
    pub fn report_problem(path: &Path, problem: &SettingsError) {
        warn!("settings {}: {}; using defaults", path.display(), problem);
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str::<Self>(&json)?.sanitized())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Replace out-of-range or non-finite sizes with their defaults.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let fix = |value: &mut f32, fallback: f32, min: f32| {
            if !value.is_finite() || *value < min {
                *value = fallback;
            }
        };
        fix(&mut self.day_width, defaults.day_width, MIN_DAY_WIDTH);
        fix(&mut self.row_height, defaults.row_height, f32::MIN_POSITIVE);
        fix(&mut self.row_gap, defaults.row_gap, 0.0);
        fix(&mut self.row_offset, defaults.row_offset, 0.0);
        self
    }

    pub fn metrics(&self) -> LayoutMetrics {
        LayoutMetrics {
            day_width: self.day_width,
            row_height: self.row_height,
            row_gap: self.row_gap,
            row_offset: self.row_offset,
        }
    }

    pub fn initial_week_start(&self) -> NaiveDate {
        self.week_start.unwrap_or_else(seed::seed_week_start)
    }
}
