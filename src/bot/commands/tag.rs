//! Tag commands - per-guild text shortcuts.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{
            Context, embeds,
            commands::search_failed,
            handlers::autocomplete,
        },
        core::{Lookup, PAGE_SIZE},
        errors::{Error, Result},
    };

    const GUILD_ONLY: &str = "tagはサーバー内でのみ利用できます";

    /// keyに紐付けた文字列を返します
    #[poise::command(slash_command)]
    pub async fn tag(
        ctx: Context<'_>,
        #[description = "呼び出したいtagのkey"]
        #[autocomplete = "autocomplete::autocomplete_tag_key"]
        key: String,
    ) -> Result<()> {
        let Some(guild_id) = ctx.guild_id() else {
            ctx.say(GUILD_ONLY).await?;
            return Ok(());
        };
        let guild_id = guild_id.to_string();
        let tags = &ctx.data().tags;

        let lookup = match tags.search(&guild_id, &key) {
            Ok(lookup) => lookup,
            Err(e) => {
                ctx.say(search_failed(&key, &e)).await?;
                return Ok(());
            }
        };

        match lookup {
            Lookup::NotFound => {
                ctx.say(format!("{key}に一致するtagは見つかりませんでした"))
                    .await?;
            }
            Lookup::Single(matched) => match tags.get(&guild_id, &matched) {
                Some(value) => {
                    ctx.say(value).await?;
                }
                None => {
                    ctx.say(format!("{key}に一致するtagは見つかりませんでした"))
                        .await?;
                }
            },
            Lookup::Many(pages) => {
                let mut sent = false;
                for page in pages {
                    if let Some(menu) = embeds::tag_menu(&page) {
                        ctx.send(poise::CreateReply::default().components(vec![menu]))
                            .await?;
                        sent = true;
                    }
                }
                if !sent {
                    ctx.say(format!("{key}に一致するtagが多すぎます。keyを絞り込んでください"))
                        .await?;
                }
            }
        }
        Ok(())
    }

    /// tagとして文字列を登録します
    #[poise::command(slash_command)]
    pub async fn create_tag(
        ctx: Context<'_>,
        #[description = "呼び出す際の鍵となる文字列"] key: String,
        #[description = "呼び出したい文字列"] value: String,
    ) -> Result<()> {
        let Some(guild_id) = ctx.guild_id() else {
            ctx.say(GUILD_ONLY).await?;
            return Ok(());
        };
        match ctx.data().tags.insert(&guild_id.to_string(), &key, &value).await {
            Ok(()) => {}
            Err(e @ Error::TagStorage { .. }) => {
                tracing::error!("Tag registration failed in guild {}: {}", guild_id, e);
                ctx.say("タグファイルを読み書きできないため、登録できませんでした")
                    .await?;
                return Ok(());
            }
            Err(e) => return Err(e),
        }
        tracing::info!("Tag {:?} registered in guild {}", key, guild_id);
        ctx.say("タグを登録しました").await?;
        Ok(())
    }

    /// tagに登録されているkeyの一覧を出力します
    #[poise::command(slash_command)]
    pub async fn tag_list(
        ctx: Context<'_>,
        #[description = "keyのパターン"] pattern: Option<String>,
    ) -> Result<()> {
        let Some(guild_id) = ctx.guild_id() else {
            ctx.say(GUILD_ONLY).await?;
            return Ok(());
        };
        let pattern = pattern.unwrap_or_default();

        let keys = match ctx.data().tags.list(&guild_id.to_string(), &pattern) {
            Ok(keys) => keys,
            Err(e) => {
                ctx.say(search_failed(&pattern, &e)).await?;
                return Ok(());
            }
        };

        if keys.is_empty() {
            ctx.say("タグは見つかりませんでした").await?;
            return Ok(());
        }
        for message in embeds::chunk_lines(&keys, PAGE_SIZE, embeds::MESSAGE_LIMIT) {
            ctx.say(message).await?;
        }
        Ok(())
    }
}

pub use inner::*;
