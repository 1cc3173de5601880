//! Core layer - framework-agnostic reference data logic.
//!
//! Nothing in here knows about Discord. The bot layer reads the store, calls
//! the resolvers and matcher, and renders whatever comes back.

/// Presentation-neutral display strings (rarity, durations, effect names)
pub mod format;
/// Dataset sources: the trait seam and the HTTP feed
pub mod feed;
/// Name matching and pagination
pub mod matcher;
/// Background refresh loop
pub mod refresh;
/// Snapshot type and the atomically swapped store
pub mod store;
/// File-backed guild tags
pub mod tags;
/// Cross-references between characters, support cards, skills and events
pub mod xref;

pub use feed::{DatasetSource, HttpFeed};
pub use matcher::{Lookup, PAGE_SIZE, Pattern};
pub use refresh::RefreshScheduler;
pub use store::{DatasetStore, Snapshot};
pub use tags::TagStore;
