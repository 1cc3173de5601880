//! Bot settings loaded from `config.toml`.
//!
//! Every key is optional. A missing file means "run with defaults", which is
//! what a fresh checkout does; a file that exists but is malformed is an error.

use crate::errors::{Error, Result};
use chrono::{FixedOffset, NaiveTime};
use serde::Deserialize;
use std::{path::Path, time::Duration};

/// Raw pretty-derby dataset document.
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/wrrwrr111/pretty-derby/master/src/assert/db.json";

/// Prefix for entity thumbnails.
pub const DEFAULT_IMAGE_BASE_URL: &str =
    "https://github.com/wrrwrr111/pretty-derby/blob/master/public";

/// Settings file as written by the operator.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// URL of the JSON dataset feed
    pub data_url: String,
    /// Daily refresh time (`HH:MM`) in the reference time zone
    pub refresh_time: String,
    /// Reference time zone as a whole-hour offset from UTC
    pub utc_offset_hours: i32,
    /// Seconds between scheduler ticks
    pub poll_interval_secs: u64,
    /// Optional limit on a single feed download; unset means wait forever
    pub fetch_timeout_secs: Option<u64>,
    /// JSON file holding the per-guild tags
    pub tag_path: String,
    /// Prefix joined with an entity's `imgUrl` to build thumbnail links
    pub image_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            refresh_time: "11:45".to_string(),
            utc_offset_hours: 9,
            poll_interval_secs: 60,
            fetch_timeout_secs: None,
            tag_path: "tag_data.json".to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
        }
    }
}

/// Validated schedule derived from [`Settings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshSchedule {
    /// Minute of day that triggers the daily refresh
    pub trigger: NaiveTime,
    /// Reference time zone
    pub offset: FixedOffset,
    /// Tick interval
    pub poll_interval: Duration,
}

impl Settings {
    /// Parses and validates the scheduling keys.
    ///
    /// # Errors
    /// Returns `Error::Config` if the trigger is not `HH:MM`, the offset is out
    /// of range, or the poll interval is zero.
    pub fn schedule(&self) -> Result<RefreshSchedule> {
        let trigger = NaiveTime::parse_from_str(self.refresh_time.trim(), "%H:%M").map_err(|e| {
            Error::Config {
                message: format!("refresh_time {:?} is not HH:MM: {e}", self.refresh_time),
            }
        })?;

        let offset = self
            .utc_offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| Error::Config {
                message: format!("utc_offset_hours {} is out of range", self.utc_offset_hours),
            })?;

        if self.poll_interval_secs == 0 {
            return Err(Error::Config {
                message: "poll_interval_secs must be greater than zero".to_string(),
            });
        }

        Ok(RefreshSchedule {
            trigger,
            offset,
            poll_interval: Duration::from_secs(self.poll_interval_secs),
        })
    }

    /// Feed download limit, if the operator configured one.
    #[must_use]
    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_secs.map(Duration::from_secs)
    }
}

/// Loads settings from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read, the TOML is invalid, or the
/// scheduling keys fail validation.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load settings from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;
    parse_settings(&contents)
}

/// Loads settings from `BOT_CONFIG_PATH` (or `./config.toml`), falling back to
/// defaults when the file does not exist.
///
/// # Errors
/// Returns an error if the file exists but is invalid.
pub fn load_default_settings() -> Result<Settings> {
    let path = std::env::var("BOT_CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if !Path::new(&path).exists() {
        tracing::info!("No settings file at {}, using defaults", path);
        return Ok(Settings::default());
    }
    load_settings(&path)
}

fn parse_settings(contents: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;
    settings.schedule()?;
    Ok(settings)
}
