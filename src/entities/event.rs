//! Story event entity from the `events` feed.
//!
//! An event is a branching node: each choice leads to one or more outcome
//! lines. The feed writes choices as `[label, [line, ...]]` pairs.

use super::lenient;
use serde::Deserialize;

/// One branch of an event.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "RawChoice")]
pub struct Choice {
    /// Text of the option the player picks
    pub label: String,
    /// What happens when it is picked
    pub outcomes: Vec<String>,
}

#[derive(Deserialize)]
struct RawChoice(
    #[serde(deserialize_with = "lenient::text")] String,
    #[serde(deserialize_with = "lenient::lines")] Vec<String>,
);

impl From<RawChoice> for Choice {
    fn from(RawChoice(label, outcomes): RawChoice) -> Self {
        Self { label, outcomes }
    }
}

/// Story event as published in the feed.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Event {
    /// Unique identifier within the event collection
    #[serde(deserialize_with = "lenient::text")]
    pub id: String,
    /// Event title
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    /// Owner hint written by the dataset author; informational only
    #[serde(default, deserialize_with = "lenient::text")]
    pub pid: String,
    /// Choices in display order
    #[serde(rename = "choiceList", default, deserialize_with = "lenient::or_default")]
    pub choice_list: Vec<Choice>,
    /// Skills this event can award
    #[serde(default, deserialize_with = "lenient::id_list")]
    pub skills: Vec<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_choice_pairs_decode_in_order() {
        let event: Event = serde_json::from_str(
            r#"{
                "id": "801",
                "name": "夏合宿の夜",
                "pid": "1001",
                "choiceList": [
                    ["星を見る", ["やる気+1", "スキルPt+10"]],
                    ["早く寝る", "体力+20"]
                ],
                "skills": ["200012"]
            }"#,
        )
        .unwrap();

        assert_eq!(event.choice_list.len(), 2);
        assert_eq!(event.choice_list[0].label, "星を見る");
        assert_eq!(event.choice_list[0].outcomes, vec!["やる気+1", "スキルPt+10"]);
        assert_eq!(event.choice_list[1].outcomes, vec!["体力+20"]);
        assert_eq!(event.skills, vec!["200012"]);
    }

    #[test]
    fn test_event_without_name_is_rejected() {
        let result: Result<Event, _> = serde_json::from_str(r#"{"id": "1"}"#);
        assert!(result.is_err());
    }
}
