//! Support card entity from the `supports` feed.

use super::lenient;
use serde::Deserialize;

/// Support card as published in the feed.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SupportCard {
    /// Unique identifier within the support collection
    #[serde(deserialize_with = "lenient::text")]
    pub id: String,
    /// Card title
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    /// Character pictured on the card
    #[serde(rename = "charaName", default, deserialize_with = "lenient::text")]
    pub chara_name: String,
    /// Rarity tier ("SSR", "SR", "R")
    #[serde(default, deserialize_with = "lenient::text")]
    pub rare: String,
    /// Events the card can trigger
    #[serde(rename = "eventList", default, deserialize_with = "lenient::id_list")]
    pub event_list: Vec<String>,
    /// Hint skills learnable by training with the card
    #[serde(rename = "possessionSkill", default, deserialize_with = "lenient::id_list")]
    pub possession_skill: Vec<String>,
    /// Skills awarded by the card's events
    #[serde(rename = "trainingEventSkill", default, deserialize_with = "lenient::id_list")]
    pub training_event_skill: Vec<String>,
    /// Relative image path
    #[serde(rename = "imgUrl", default, deserialize_with = "lenient::text")]
    pub img_url: String,
}
