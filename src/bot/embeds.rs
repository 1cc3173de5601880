//! Embed and select-menu builders.
//!
//! Everything Discord-shaped lives here; the data comes from `core`.

use crate::{
    core::{
        Snapshot,
        format::{self, effect_type_name, format_ability_time},
        xref::{self, Origin, SkillCrossRefs},
    },
    entities::{Character, Event, Skill, SupportCard},
};
use poise::serenity_prelude as serenity;

/// Custom id of the skill selection menu
pub const SKILL_MENU: &str = "skill_menu";
/// Custom id of the event selection menu
pub const EVENT_MENU: &str = "event_menu";
/// Custom id of the tag selection menu
pub const TAG_MENU: &str = "tag_menu";

const FIELD_VALUE_LIMIT: usize = 1024;
const OPTION_TEXT_LIMIT: usize = 100;
/// Discord's limit on plain message content.
pub const MESSAGE_LIMIT: usize = 2000;

/// Cuts `text` to at most `limit` characters, marking the cut with `…`.
#[must_use]
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(limit.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn field_value(text: &str) -> String {
    if text.trim().is_empty() {
        "-".to_string()
    } else {
        truncate(text, FIELD_VALUE_LIMIT)
    }
}

fn character_lines(characters: &[&Character]) -> String {
    characters
        .iter()
        .map(|c| format::entity_label(&c.name, &c.chara_name))
        .collect::<Vec<_>>()
        .join("\n")
}

fn support_lines(supports: &[&SupportCard]) -> String {
    supports
        .iter()
        .map(|s| format::support_label(&s.rare, &s.name, &s.chara_name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Detail view of one skill with everything that grants it.
#[must_use]
pub fn skill_embed(skill: &Skill, refs: &SkillCrossRefs<'_>, image_base: &str) -> serenity::CreateEmbed {
    let mut embed = serenity::CreateEmbed::new()
        .title(truncate(&skill.name, 256))
        .description(field_value(&skill.description))
        .field("発動条件", field_value(&skill.condition), false)
        .field("効果時間", format_ability_time(skill.ability_time), false);

    for ability in &skill.ability {
        embed = embed.field(effect_type_name(ability.kind), field_value(&ability.value), false);
    }

    let sections = [
        ("スキルを所持しているウマ娘", character_lines(&refs.owned_by)),
        ("イベントで取得可能なウマ娘", character_lines(&refs.characters_via_event)),
        ("練習で取得可能なサポート", support_lines(&refs.supports_via_training)),
        ("イベントで取得可能なサポート", support_lines(&refs.supports_via_event)),
    ];
    for (name, lines) in sections {
        if !lines.is_empty() {
            embed = embed.field(name, field_value(&lines), false);
        }
    }

    if let Some(url) = format::image_url(image_base, &skill.img_url) {
        embed = embed.thumbnail(url);
    }
    embed
}

/// Detail view of one event; the thumbnail is the owner's portrait.
#[must_use]
pub fn event_embed(event: &Event, origin: Option<Origin<'_>>, image_base: &str) -> serenity::CreateEmbed {
    let mut embed = serenity::CreateEmbed::new().title(truncate(&event.name, 256));
    for choice in &event.choice_list {
        embed = embed.field(
            truncate(&choice.label, 256),
            field_value(&choice.outcomes.join("\n")),
            false,
        );
    }
    if let Some(origin) = origin {
        embed = embed.description(origin.describe());
        if let Some(url) = format::image_url(image_base, origin.img_url()) {
            embed = embed.thumbnail(url);
        }
    }
    embed
}

fn select_row(custom_id: &str, options: Vec<serenity::CreateSelectMenuOption>) -> serenity::CreateActionRow {
    serenity::CreateActionRow::SelectMenu(serenity::CreateSelectMenu::new(
        custom_id,
        serenity::CreateSelectMenuKind::String { options },
    ))
}

/// Selection menu for one page of skills.
#[must_use]
pub fn skill_menu(page: &[&Skill]) -> serenity::CreateActionRow {
    let options = page
        .iter()
        .map(|skill| {
            serenity::CreateSelectMenuOption::new(truncate(&skill.name, OPTION_TEXT_LIMIT), &skill.id)
        })
        .collect();
    select_row(SKILL_MENU, options)
}

/// Selection menu for one page of events, each labelled with its owner.
#[must_use]
pub fn event_menu(snapshot: &Snapshot, page: &[&Event]) -> serenity::CreateActionRow {
    let options = page
        .iter()
        .map(|event| {
            let option =
                serenity::CreateSelectMenuOption::new(truncate(&event.name, OPTION_TEXT_LIMIT), &event.id);
            match xref::originating_entity(snapshot, &event.id) {
                Some(origin) => option.description(truncate(&origin.describe(), OPTION_TEXT_LIMIT)),
                None => option,
            }
        })
        .collect();
    select_row(EVENT_MENU, options)
}

/// Tag keys that fit in a select option value, which cannot be shortened
/// without breaking the lookup when the key is picked.
#[must_use]
pub fn selectable_keys(page: &[String]) -> Vec<&String> {
    page.iter()
        .filter(|key| key.chars().count() <= OPTION_TEXT_LIMIT)
        .collect()
}

/// Selection menu for one page of tag keys, or `None` if no key on the page
/// fits in a select option.
#[must_use]
pub fn tag_menu(page: &[String]) -> Option<serenity::CreateActionRow> {
    let options: Vec<_> = selectable_keys(page)
        .into_iter()
        .map(|key| serenity::CreateSelectMenuOption::new(key, key))
        .collect();
    (!options.is_empty()).then(|| select_row(TAG_MENU, options))
}

/// Joins `lines` into messages of at most `max_lines` lines and `limit`
/// characters. A single line longer than `limit` gets a message of its own,
/// truncated.
#[must_use]
pub fn chunk_lines(lines: &[String], max_lines: usize, limit: usize) -> Vec<String> {
    let mut messages = Vec::new();
    let mut current = String::new();
    let mut count = 0;
    for line in lines {
        let line = truncate(line, limit);
        let line_len = line.chars().count();
        let needed = if count == 0 { line_len } else { line_len + 1 };
        if count > 0 && (count >= max_lines.max(1) || current.chars().count() + needed > limit) {
            messages.push(std::mem::take(&mut current));
            count = 0;
        }
        if count > 0 {
            current.push('\n');
        }
        current.push_str(&line);
        count += 1;
    }
    if count > 0 {
        messages.push(current);
    }
    messages
}
