//! `/skill` - look a skill up by name.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{
            Context, embeds,
            commands::{DATA_LOADING, search_failed},
        },
        core::{Lookup, matcher, xref},
        entities::Skill,
        errors::Result,
    };

    /// スキルを検索します
    #[poise::command(slash_command)]
    pub async fn skill(
        ctx: Context<'_>,
        #[description = "検索したいスキルの名前を入力してください"] skill_name: String,
    ) -> Result<()> {
        let data = ctx.data();
        if data.store.is_empty().await {
            ctx.say(DATA_LOADING).await?;
            return Ok(());
        }
        let snapshot = data.store.snapshot().await;

        let lookup = match matcher::lookup(&snapshot.skills, |s: &Skill| s.name.as_str(), &skill_name)
        {
            Ok(lookup) => lookup,
            Err(e) => {
                ctx.say(search_failed(&skill_name, &e)).await?;
                return Ok(());
            }
        };

        match lookup {
            Lookup::NotFound => {
                ctx.say(format!("{skill_name}とマッチするスキルは見つかりませんでした"))
                    .await?;
            }
            Lookup::Single(skill) => {
                let refs = xref::skill_cross_refs(&snapshot, &skill.id);
                let embed = embeds::skill_embed(skill, &refs, &data.settings.image_base_url);
                ctx.send(poise::CreateReply::default().embed(embed)).await?;
            }
            Lookup::Many(pages) => {
                for page in pages {
                    ctx.send(
                        poise::CreateReply::default().components(vec![embeds::skill_menu(&page)]),
                    )
                    .await?;
                }
            }
        }
        Ok(())
    }
}

pub use inner::*;
