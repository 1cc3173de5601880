//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Event lookup command
pub mod event;

/// General utility commands
pub mod general;

/// Skill lookup command
pub mod skill;

/// Tag commands
pub mod tag;

use crate::errors::Error;

/// Reply used while the first dataset download has not finished.
pub(crate) const DATA_LOADING: &str = "データを読み込み中です。しばらくしてからもう一度お試しください";

/// Reply for a pattern the matcher could not compile.
pub(crate) fn search_failed(pattern: &str, error: &Error) -> String {
    format!("`{pattern}` では検索できませんでした: {error}")
}

// Export commands
pub use event::*;
pub use general::*;
pub use skill::*;
pub use tag::*;
