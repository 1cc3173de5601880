//! Discord interaction handlers
//!
//! This module provides handlers for Discord interactions that are not slash
//! command invocations: autocomplete and selection menu picks.

/// Autocomplete handlers for tag keys
pub mod autocomplete;
/// Selection menu callbacks
pub mod menu;
