//! Cross-reference resolver.
//!
//! Relationships between collections are not stored in the feed; they are
//! discovered by scanning list-valued fields for shared ids. Id spaces are
//! independent per collection, so every function here searches exactly one
//! collection and never assumes an id is globally unique.

use crate::{
    core::{format, store::Snapshot},
    entities::{Character, Event, SupportCard},
};

/// Ids of the events that can award `skill_id`.
#[must_use]
pub fn skill_events<'a>(snapshot: &'a Snapshot, skill_id: &str) -> Vec<&'a str> {
    snapshot
        .events
        .iter()
        .filter(|event| event.skills.iter().any(|id| id == skill_id))
        .map(|event| event.id.as_str())
        .collect()
}

/// Characters that own `skill_id` from the start.
#[must_use]
pub fn characters_with_skill<'a>(snapshot: &'a Snapshot, skill_id: &str) -> Vec<&'a Character> {
    snapshot
        .players
        .iter()
        .filter(|player| player.skill_list.iter().any(|id| id == skill_id))
        .collect()
}

/// Characters with at least one event that awards `skill_id`.
///
/// Each character appears once even if several of its events match.
#[must_use]
pub fn characters_via_event<'a>(snapshot: &'a Snapshot, skill_id: &str) -> Vec<&'a Character> {
    let events = skill_events(snapshot, skill_id);
    if events.is_empty() {
        return Vec::new();
    }
    snapshot
        .players
        .iter()
        .filter(|player| {
            player
                .event_list
                .iter()
                .any(|id| events.contains(&id.as_str()))
        })
        .collect()
}

/// Support cards that teach `skill_id` as a training hint.
#[must_use]
pub fn support_cards_via_training<'a>(
    snapshot: &'a Snapshot,
    skill_id: &str,
) -> Vec<&'a SupportCard> {
    snapshot
        .supports
        .iter()
        .filter(|support| support.possession_skill.iter().any(|id| id == skill_id))
        .collect()
}

/// Support cards whose events award `skill_id`.
#[must_use]
pub fn support_cards_via_event<'a>(
    snapshot: &'a Snapshot,
    skill_id: &str,
) -> Vec<&'a SupportCard> {
    snapshot
        .supports
        .iter()
        .filter(|support| {
            support
                .training_event_skill
                .iter()
                .any(|id| id == skill_id)
        })
        .collect()
}

/// Everything that can give a player one skill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCrossRefs<'a> {
    /// Characters that start with the skill
    pub owned_by: Vec<&'a Character>,
    /// Characters that can get it from an event
    pub characters_via_event: Vec<&'a Character>,
    /// Support cards that teach it through training
    pub supports_via_training: Vec<&'a SupportCard>,
    /// Support cards that award it through an event
    pub supports_via_event: Vec<&'a SupportCard>,
}

impl SkillCrossRefs<'_> {
    /// True when nothing in the dataset references the skill.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owned_by.is_empty()
            && self.characters_via_event.is_empty()
            && self.supports_via_training.is_empty()
            && self.supports_via_event.is_empty()
    }
}

/// Runs every skill resolver for `skill_id`.
#[must_use]
pub fn skill_cross_refs<'a>(snapshot: &'a Snapshot, skill_id: &str) -> SkillCrossRefs<'a> {
    SkillCrossRefs {
        owned_by: characters_with_skill(snapshot, skill_id),
        characters_via_event: characters_via_event(snapshot, skill_id),
        supports_via_training: support_cards_via_training(snapshot, skill_id),
        supports_via_event: support_cards_via_event(snapshot, skill_id),
    }
}

/// The character or support card an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin<'a> {
    /// Event of a playable character
    Character(&'a Character),
    /// Event of a support card
    Support(&'a SupportCard),
}

impl<'a> Origin<'a> {
    /// Id within the owning collection.
    #[must_use]
    pub fn id(&self) -> &'a str {
        match self {
            Self::Character(c) => &c.id,
            Self::Support(s) => &s.id,
        }
    }

    /// Outfit or card title.
    #[must_use]
    pub fn name(&self) -> &'a str {
        match self {
            Self::Character(c) => &c.name,
            Self::Support(s) => &s.name,
        }
    }

    /// Character name.
    #[must_use]
    pub fn chara_name(&self) -> &'a str {
        match self {
            Self::Character(c) => &c.chara_name,
            Self::Support(s) => &s.chara_name,
        }
    }

    /// Raw rarity label.
    #[must_use]
    pub fn rare(&self) -> &'a str {
        match self {
            Self::Character(c) => &c.rare,
            Self::Support(s) => &s.rare,
        }
    }

    /// Relative image path.
    #[must_use]
    pub fn img_url(&self) -> &'a str {
        match self {
            Self::Character(c) => &c.img_url,
            Self::Support(s) => &s.img_url,
        }
    }

    /// `"星3 [name] charaName"` or `"SSR [name] charaName"`.
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "{} {}",
            format::rarity_label(self.rare()),
            format::entity_label(self.name(), self.chara_name())
        )
    }
}

/// Finds who an event belongs to.
///
/// Characters are searched first, in collection order, then support cards;
/// the first hit wins. The event's own `pid` is not consulted.
#[must_use]
pub fn originating_entity<'a>(snapshot: &'a Snapshot, event_id: &str) -> Option<Origin<'a>> {
    snapshot
        .players
        .iter()
        .find(|player| player.event_list.iter().any(|id| id == event_id))
        .map(Origin::Character)
        .or_else(|| {
            snapshot
                .supports
                .iter()
                .find(|support| support.event_list.iter().any(|id| id == event_id))
                .map(Origin::Support)
        })
}

/// An event together with its owner, ready for display.
#[must_use]
pub fn event_with_origin<'a>(
    snapshot: &'a Snapshot,
    event: &'a Event,
) -> (&'a Event, Option<Origin<'a>>) {
    (event, originating_entity(snapshot, &event.id))
}
