//! Character entity - one playable character outfit from the `players` feed.

use super::lenient;
use serde::Deserialize;

/// Playable character as published in the feed.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Character {
    /// Unique identifier within the character collection
    #[serde(deserialize_with = "lenient::text")]
    pub id: String,
    /// Outfit / display name (e.g. "スペシャルドリーマー")
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    /// Name of the character herself
    #[serde(rename = "charaName", default, deserialize_with = "lenient::text")]
    pub chara_name: String,
    /// Rarity label, usually a star count
    #[serde(default, deserialize_with = "lenient::text")]
    pub rare: String,
    /// Skills the character owns from the start
    #[serde(rename = "skillList", default, deserialize_with = "lenient::id_list")]
    pub skill_list: Vec<String>,
    /// Events this character can trigger during training
    #[serde(rename = "eventList", default, deserialize_with = "lenient::id_list")]
    pub event_list: Vec<String>,
    /// Relative image path
    #[serde(rename = "imgUrl", default, deserialize_with = "lenient::text")]
    pub img_url: String,
}
