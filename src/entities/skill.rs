//! Skill entity from the `skills` feed.

use super::lenient;
use serde::Deserialize;

/// One effect line of a skill.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Ability {
    /// Effect-type code, see [`crate::core::format::effect_type_name`]
    #[serde(rename = "type", default, deserialize_with = "lenient::integer")]
    pub kind: i64,
    /// Display value as published
    #[serde(default, deserialize_with = "lenient::text")]
    pub value: String,
}

/// Skill as published in the feed.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Skill {
    /// Unique identifier within the skill collection
    #[serde(deserialize_with = "lenient::text")]
    pub id: String,
    /// Skill name
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    /// Flavour description
    #[serde(rename = "describe", default, deserialize_with = "lenient::text")]
    pub description: String,
    /// Activation condition text
    #[serde(default, deserialize_with = "lenient::text")]
    pub condition: String,
    /// Duration in 1/10000 s; non-positive means not applicable
    #[serde(default, deserialize_with = "lenient::integer")]
    pub ability_time: i64,
    /// Effects in display order
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub ability: Vec<Ability>,
    /// Relative image path
    #[serde(rename = "imgUrl", default, deserialize_with = "lenient::text")]
    pub img_url: String,
}
