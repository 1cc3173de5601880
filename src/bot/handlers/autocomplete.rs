//! Autocomplete handlers for Discord slash command parameters.

use crate::{bot::Context, core::Pattern};

/// Discord shows at most this many suggestions.
const AUTOCOMPLETE_LIMIT: usize = 25;
/// Longest value a suggestion can carry.
const CHOICE_VALUE_LIMIT: usize = 100;

/// Suggests tag keys of the current guild containing `partial`.
///
/// The partial input is matched literally, so half-typed regex syntax never
/// errors here.
pub async fn autocomplete_tag_key(ctx: Context<'_>, partial: &str) -> Vec<String> {
    let Some(guild_id) = ctx.guild_id() else {
        return Vec::new();
    };
    let tags = ctx.data().tags.guild(&guild_id.to_string());
    suggest(tags.keys(), partial)
}

fn suggest<'a>(keys: impl IntoIterator<Item = &'a String>, partial: &str) -> Vec<String> {
    Pattern::literal(partial)
        .filter(keys, String::as_str)
        .into_iter()
        .filter(|key| key.chars().count() <= CHOICE_VALUE_LIMIT)
        .take(AUTOCOMPLETE_LIMIT)
        .cloned()
        .collect()
}
