//! General Discord commands - ping and help.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{bot::Context, errors::Result};

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: Context<'_>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Lists the available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: Context<'_>) -> Result<()> {
        let help_text = "**コマンド一覧**\n\
        • `/skill <skill_name>` - スキルを名前の部分一致で検索します\n\
        • `/event <event_name>` - イベントを名前の部分一致で検索します\n\
        • `/tag <key>` - keyに紐付けた文字列を返します\n\
        • `/create_tag <key> <value>` - tagとして文字列を登録します\n\
        • `/tag_list [pattern]` - 登録されているkeyの一覧を出力します\n\
        • `/ping` - 応答を確認します\n\n\
        検索語には `^` `$` `|` `.*` などの基本的な正規表現が使えます（先読み・後方参照は使えません）";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
