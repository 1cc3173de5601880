//! `/event` - look a story event up by name.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{
            Context, embeds,
            commands::{DATA_LOADING, search_failed},
        },
        core::{Lookup, matcher, xref},
        entities::Event,
        errors::Result,
    };

    /// イベントを検索します
    #[poise::command(slash_command)]
    pub async fn event(
        ctx: Context<'_>,
        #[description = "検索したいイベントの名前を入力してください"] event_name: String,
    ) -> Result<()> {
        let data = ctx.data();
        if data.store.is_empty().await {
            ctx.say(DATA_LOADING).await?;
            return Ok(());
        }
        let snapshot = data.store.snapshot().await;

        let lookup = match matcher::lookup(&snapshot.events, |e: &Event| e.name.as_str(), &event_name)
        {
            Ok(lookup) => lookup,
            Err(e) => {
                ctx.say(search_failed(&event_name, &e)).await?;
                return Ok(());
            }
        };

        match lookup {
            Lookup::NotFound => {
                ctx.say("イベントが見つかりませんでした。").await?;
            }
            Lookup::Single(event) => {
                let origin = xref::originating_entity(&snapshot, &event.id);
                let embed = embeds::event_embed(event, origin, &data.settings.image_base_url);
                ctx.send(poise::CreateReply::default().embed(embed)).await?;
            }
            Lookup::Many(pages) => {
                for page in pages {
                    let menu = embeds::event_menu(&snapshot, &page);
                    ctx.send(poise::CreateReply::default().components(vec![menu]))
                        .await?;
                }
            }
        }
        Ok(())
    }
}

pub use inner::*;
