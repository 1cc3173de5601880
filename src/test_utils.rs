//! Shared test utilities.
//!
//! Builders for feed records with sensible defaults, a small hand-written
//! dataset whose cross-references are known, and a scripted
//! [`DatasetSource`] for driving the refresh scheduler without a network.

use crate::{
    core::{DatasetSource, Snapshot},
    entities::{Ability, Character, Choice, Event, Skill, SupportCard},
    errors::{Error, Result},
};
use serde_json::json;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Character with rarity "3" and a derived image path.
#[must_use]
pub fn character(
    id: &str,
    name: &str,
    chara_name: &str,
    skills: &[&str],
    events: &[&str],
) -> Character {
    Character {
        id: id.to_string(),
        name: name.to_string(),
        chara_name: chara_name.to_string(),
        rare: "3".to_string(),
        skill_list: strings(skills),
        event_list: strings(events),
        img_url: format!("img/players/{id}.png"),
    }
}

/// Support card with a derived image path.
#[must_use]
pub fn support(
    id: &str,
    name: &str,
    chara_name: &str,
    rare: &str,
    events: &[&str],
    possession_skill: &[&str],
    training_event_skill: &[&str],
) -> SupportCard {
    SupportCard {
        id: id.to_string(),
        name: name.to_string(),
        chara_name: chara_name.to_string(),
        rare: rare.to_string(),
        event_list: strings(events),
        possession_skill: strings(possession_skill),
        training_event_skill: strings(training_event_skill),
        img_url: format!("img/supports/{id}.png"),
    }
}

/// Skill lasting 3 seconds with one target-speed effect.
#[must_use]
pub fn skill(id: &str, name: &str) -> Skill {
    Skill {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{name}の説明"),
        condition: "distance_type==2".to_string(),
        ability_time: 30_000,
        ability: vec![Ability {
            kind: 27,
            value: "0.15".to_string(),
        }],
        img_url: format!("img/skills/{id}.png"),
    }
}

/// Event with two choices that awards `skills`.
#[must_use]
pub fn event(id: &str, name: &str, skills: &[&str]) -> Event {
    Event {
        id: id.to_string(),
        name: name.to_string(),
        pid: String::new(),
        choice_list: vec![
            Choice {
                label: "上の選択肢".to_string(),
                outcomes: strings(&["やる気+1", "スキルPt+10"]),
            },
            Choice {
                label: "下の選択肢".to_string(),
                outcomes: strings(&["体力+20"]),
            },
        ],
        skills: strings(skills),
    }
}

/// Small dataset with known cross-references:
///
/// * skill `200332` is innate to characters `1001` and `1002` and a training
///   hint of support `30001`
/// * skill `200012` is awarded by event `801` (character `1001`) and by the
///   events of support `30002`
/// * event `830` belongs to support `30001`; event `899` belongs to nobody
#[must_use]
pub fn sample_snapshot() -> Snapshot {
    Snapshot {
        players: vec![
            character(
                "1001",
                "スペシャルドリーマー",
                "スペシャルウィーク",
                &["200332"],
                &["801"],
            ),
            character(
                "1002",
                "サイレントイノセンス",
                "サイレンススズカ",
                &["200332", "200011"],
                &["810"],
            ),
        ],
        supports: vec![
            support(
                "30001",
                "はやく！はやく！",
                "スペシャルウィーク",
                "SSR",
                &["830"],
                &["200332"],
                &[],
            ),
            support(
                "30002",
                "これが俺たちの夢",
                "ゴールドシップ",
                "SR",
                &["831"],
                &[],
                &["200012"],
            ),
        ],
        skills: vec![
            skill("200011", "右回り○"),
            skill("200012", "左回り○"),
            skill("200332", "先頭プライド"),
        ],
        update_time: json!(["2022-03-01"]),
        races: json!([]),
        buffs: json!([]),
        effects: json!([]),
        events: vec![
            event("801", "夏合宿の夜", &["200012"]),
            event("810", "スズカの散歩", &[]),
            event("830", "特訓のお誘い", &[]),
            event("831", "ゴルシちゃんの冒険", &[]),
            event("899", "謎のイベント", &[]),
        ],
    }
}

/// Dataset in which every id starts with `tag`, for telling generations apart.
#[must_use]
pub fn tagged_snapshot(tag: &str) -> Snapshot {
    let skills: Vec<Skill> = (0..5)
        .map(|i| skill(&format!("{tag}-s{i}"), &format!("skill {i}")))
        .collect();
    let events: Vec<Event> = (0..5)
        .map(|i| event(&format!("{tag}-e{i}"), &format!("event {i}"), &[]))
        .collect();
    let players = (0..3)
        .map(|i| {
            character(
                &format!("{tag}-p{i}"),
                &format!("player {i}"),
                "chara",
                &[],
                &[],
            )
        })
        .collect();
    Snapshot {
        players,
        skills,
        events,
        ..Snapshot::default()
    }
}

/// A minimal but complete feed document.
pub const SAMPLE_FEED: &str = r#"{
    "players": [
        {
            "id": "1001",
            "name": "スペシャルドリーマー",
            "charaName": "スペシャルウィーク",
            "rare": 3,
            "skillList": ["200332"],
            "eventList": ["801"],
            "imgUrl": "img/players/1001.png"
        }
    ],
    "supports": [
        {
            "id": "30001",
            "name": "はやく！はやく！",
            "charaName": "スペシャルウィーク",
            "rare": "SSR",
            "eventList": ["830"],
            "possessionSkill": ["200332"],
            "trainingEventSkill": []
        }
    ],
    "skills": [
        {
            "id": "200011",
            "name": "右回り○",
            "describe": "右回りのレースが少し得意になる",
            "condition": "rotation==1",
            "ability_time": -1,
            "ability": [{"type": 1, "value": 40}],
            "imgUrl": "img/skills/200011.png"
        }
    ],
    "updateTime": ["2022-03-01"],
    "races": [{"name": "有馬記念"}],
    "buffs": [],
    "effects": [],
    "events": [
        {
            "id": "801",
            "name": "夏合宿の夜",
            "pid": "1001",
            "choiceList": [["星を見る", ["やる気+1"]]],
            "skills": ["200012"]
        }
    ]
}"#;

/// Dataset source that returns [`sample_snapshot`] and can be told to fail.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    calls: Arc<AtomicUsize>,
    failures: Arc<AtomicUsize>,
}

impl ScriptedSource {
    /// Source whose fetches succeed until told otherwise.
    #[must_use]
    pub fn succeeding() -> Self {
        Self::default()
    }

    /// Makes the next `n` fetches fail with a parse error.
    pub fn fail_next(&self, n: usize) {
        self.failures.store(n, Ordering::SeqCst);
    }

    /// Number of fetches attempted so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DatasetSource for ScriptedSource {
    async fn fetch(&self) -> Result<Snapshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let failing = self
            .failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            return Err(serde_json::from_str::<Snapshot>("<html>503</html>")
                .map_err(Error::from)
                .err()
                .unwrap_or(Error::Config {
                    message: "scripted failure".to_string(),
                }));
        }
        Ok(sample_snapshot())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_sample_feed_parses() {
        let snapshot = Snapshot::from_json(SAMPLE_FEED).unwrap();
        assert_eq!(snapshot.players[0].rare, "3");
        assert_eq!(snapshot.skills[0].ability_time, -1);
        assert_eq!(snapshot.skills[0].ability[0].value, "40");
        assert_eq!(snapshot.supports[0].img_url, "");
    }

    #[tokio::test]
    async fn test_scripted_source_fails_then_recovers() {
        let source = ScriptedSource::succeeding();
        source.fail_next(1);
        assert!(source.fetch().await.is_err());
        assert!(source.fetch().await.is_ok());
        assert_eq!(source.calls(), 2);
    }
}
