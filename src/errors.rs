//! Unified error types and result handling.

use thiserror::Error;

/// Every failure the bot can produce.
///
/// Feed errors (`Fetch`, `Parse`) stay inside the refresh scheduler. `Pattern`
/// is reported back to the user who typed the search. Everything else is
/// logged by the framework error hook.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or unreadable settings.
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong with the configuration
        message: String,
    },

    /// Transport failure or non-success status while downloading the feed.
    #[error("Failed to fetch dataset: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The feed body was not a well-formed dataset document.
    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// A user-supplied search pattern that does not compile.
    #[error("Invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Reading or writing the tag file failed.
    #[error("Tag storage error: {message}")]
    TagStorage {
        /// Underlying cause
        message: String,
    },

    /// Missing environment variable.
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Serenity/Poise failure.
    #[error("Serenity/Poise framework error: {0}")]
    #[allow(clippy::enum_variant_names)]
    FrameworkError(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::FrameworkError(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
