//! `/botinfo`: static facts about the bot.

use crate::embed::{bot_embed, BotInfo};
use crate::framework::{Context, Error};
use chrono::Utc;

/// Shows information about the bot.
#[poise::command(slash_command)]
pub async fn botinfo(ctx: Context<'_>) -> Result<(), Error> {
    let guild_count = ctx.serenity_context().cache.guild_count();
    let activity = ctx.data().config.discord.activity.as_str();
    let embed = bot_embed(&BotInfo::current(guild_count, activity), Utc::now());

    ctx.send(poise::CreateReply::default().embed(embed.to_create_embed()))
        .await?;
    Ok(())
}
