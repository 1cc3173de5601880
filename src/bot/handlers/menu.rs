//! Selection menu callbacks.
//!
//! Menus sent by `/skill`, `/event` and `/tag` carry an entity id (or tag
//! key) as the option value. When a user picks one, the matching record is
//! looked up in its own collection and shown as if it had been the only hit.

use crate::{
    bot::{
        BotData,
        embeds::{self, EVENT_MENU, SKILL_MENU, TAG_MENU},
    },
    core::xref,
    errors::Result,
};
use poise::serenity_prelude as serenity;
use tracing::debug;

/// A pick from one of the bot's selection menus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Skill id from the skill menu
    Skill(String),
    /// Event id from the event menu
    Event(String),
    /// Tag key from the tag menu
    Tag(String),
}

impl Selection {
    /// Interprets a component's custom id and picked values.
    /// Returns `None` for menus this bot did not send or empty picks.
    #[must_use]
    pub fn parse(custom_id: &str, values: &[String]) -> Option<Self> {
        let value = values.first()?.clone();
        match custom_id {
            SKILL_MENU => Some(Self::Skill(value)),
            EVENT_MENU => Some(Self::Event(value)),
            TAG_MENU => Some(Self::Tag(value)),
            _ => None,
        }
    }
}

/// Answers a selection menu pick.
///
/// # Errors
/// Returns an error if the response cannot be sent.
pub async fn handle_component(
    ctx: &serenity::Context,
    component: &serenity::ComponentInteraction,
    data: &BotData,
) -> Result<()> {
    let serenity::ComponentInteractionDataKind::StringSelect { values } = &component.data.kind
    else {
        return Ok(());
    };
    let Some(selection) = Selection::parse(&component.data.custom_id, values) else {
        return Ok(());
    };
    debug!("Menu selection: {:?}", selection);

    let message = respond(data, component.guild_id, selection).await;
    component
        .create_response(
            &ctx.http,
            serenity::CreateInteractionResponse::Message(message),
        )
        .await?;
    Ok(())
}

async fn respond(
    data: &BotData,
    guild_id: Option<serenity::GuildId>,
    selection: Selection,
) -> serenity::CreateInteractionResponseMessage {
    let reply = serenity::CreateInteractionResponseMessage::new();
    let image_base = &data.settings.image_base_url;
    match selection {
        Selection::Skill(id) => {
            let snapshot = data.store.snapshot().await;
            match snapshot.skill(&id) {
                Some(skill) => {
                    let refs = xref::skill_cross_refs(&snapshot, &skill.id);
                    reply.embed(embeds::skill_embed(skill, &refs, image_base))
                }
                None => reply.content("スキルが見つかりませんでした"),
            }
        }
        Selection::Event(id) => {
            let snapshot = data.store.snapshot().await;
            match snapshot.event(&id) {
                Some(event) => {
                    let origin = xref::originating_entity(&snapshot, &event.id);
                    reply.embed(embeds::event_embed(event, origin, image_base))
                }
                None => reply.content("イベントが見つかりませんでした。"),
            }
        }
        Selection::Tag(key) => {
            let value = guild_id.and_then(|guild_id| data.tags.get(&guild_id.to_string(), &key));
            reply.content(value.unwrap_or_else(|| format!("{key}に一致するtagは見つかりませんでした")))
        }
    }
}
