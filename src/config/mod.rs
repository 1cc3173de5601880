/// Settings file loading and schedule validation
pub mod settings;

pub use settings::{RefreshSchedule, Settings, load_default_settings, load_settings};
