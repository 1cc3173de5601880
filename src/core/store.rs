//! Dataset store - the current generation of reference data.
//!
//! A [`Snapshot`] is immutable once built. The store only ever swaps the whole
//! `Arc<Snapshot>` under a short write lock, so a reader that has called
//! [`DatasetStore::snapshot`] keeps a consistent generation for as long as it
//! holds the `Arc`, no matter how many refreshes happen meanwhile.

use crate::{
    entities::{Character, Event, Skill, SupportCard},
    errors::Result,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// One complete generation of the feed's eight collections.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Snapshot {
    /// Playable characters
    pub players: Vec<Character>,
    /// Support cards
    pub supports: Vec<SupportCard>,
    /// Skills
    pub skills: Vec<Skill>,
    /// Update history, carried through untouched
    #[serde(rename = "updateTime")]
    pub update_time: Value,
    /// Race calendar, carried through untouched
    pub races: Value,
    /// Buff table, carried through untouched
    pub buffs: Value,
    /// Effect table, carried through untouched
    pub effects: Value,
    /// Story events
    pub events: Vec<Event>,
}

impl Snapshot {
    /// Parses a feed document. All eight top-level keys are required.
    ///
    /// # Errors
    /// Returns `Error::Parse` on malformed JSON, a missing collection or an
    /// entity missing a required field.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(Into::into)
    }

    /// Finds a skill by id.
    #[must_use]
    pub fn skill(&self, id: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == id)
    }

    /// Finds an event by id.
    #[must_use]
    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }
}

#[derive(Debug, Default)]
struct Generation {
    number: u64,
    snapshot: Arc<Snapshot>,
}

/// Holds the active [`Snapshot`] and replaces it atomically.
#[derive(Debug, Default)]
pub struct DatasetStore {
    current: RwLock<Generation>,
}

impl DatasetStore {
    /// Creates an empty store (generation 0).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the active snapshot.
    pub async fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current.read().await.snapshot)
    }

    /// Installs `snapshot` as the new generation and returns its number.
    pub async fn replace(&self, snapshot: Snapshot) -> u64 {
        let snapshot = Arc::new(snapshot);
        let mut current = self.current.write().await;
        current.number += 1;
        current.snapshot = snapshot;
        info!(
            "Dataset generation {} installed: {} players, {} supports, {} skills, {} events",
            current.number,
            current.snapshot.players.len(),
            current.snapshot.supports.len(),
            current.snapshot.skills.len(),
            current.snapshot.events.len(),
        );
        current.number
    }

    /// Number of successful replacements so far.
    pub async fn generation(&self) -> u64 {
        self.current.read().await.number
    }

    /// True until the first successful replacement.
    pub async fn is_empty(&self) -> bool {
        self.generation().await == 0
    }
}
