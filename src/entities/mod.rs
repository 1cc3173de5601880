//! Entity module - typed records of the reference dataset feed.
//!
//! Shapes are validated once, when the feed is parsed, so lookups and
//! cross-references can work with plain fields. `id` and `name` are required
//! on every record; list fields default to empty.

pub mod event;
pub mod lenient;
pub mod player;
pub mod skill;
pub mod support;

pub use event::{Choice, Event};
pub use player::Character;
pub use skill::{Ability, Skill};
pub use support::SupportCard;
