/*
 *  Iris - Discord bot for ranking emoji usage across a server.
 *  Copyright (C) 2026  Iris contributors
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */
use crate::count::EmojiCounter;
use crate::utils::get_guild_id;
use crate::{Context, Error};
use poise::serenity_prelude::{
    self as serenity, ChannelType, GetMessages, GuildChannel, MessageId, Permissions,
};

/// What the bot needs on a channel before its history can be scanned.
const READ_PERMISSIONS: Permissions =
    Permissions::VIEW_CHANNEL.union(Permissions::READ_MESSAGE_HISTORY);

/// Pages are requested at the history API's maximum size.
const PAGE_SIZE: u8 = 100;

/**
 * Scans every text channel of the invoking guild that the bot may read,
 * feeding each message's text and reaction tallies to the counter.
 *
 * `after` bounds the scan to messages newer than the given id (see
 * `timeframe::snowflake_floor`); None scans the full history. A channel that
 * fails mid-fetch is logged and skipped, so one revoked permission or
 * transport hiccup never loses the rest of the report.
 */
pub async fn scan_guild(
    ctx: &Context<'_>,
    after: Option<MessageId>,
    counter: &mut EmojiCounter,
) -> Result<(), Error> {
    let guild_id = get_guild_id!(ctx);
    let bot_id = ctx.serenity_context().cache.current_user().id;
    let bot_member = guild_id.member(ctx.http(), bot_id).await?;
    let channels = guild_id.channels(ctx.http()).await?;

    // Resolve readable text channels against the cached guild before the
    // first history request:
    let readable: Vec<GuildChannel> = {
        let guild = guild_id
            .to_guild_cached(ctx.serenity_context())
            .expect("Guild missing from the cache for a guild-only command.");
        channels
            .into_values()
            .filter(|channel| matches!(channel.kind, ChannelType::Text | ChannelType::News))
            .filter(|channel| {
                guild
                    .user_permissions_in(channel, &bot_member)
                    .contains(READ_PERMISSIONS)
            })
            .collect()
    };

    for channel in readable {
        if let Err(err) = scan_channel(ctx, &channel, after, counter).await {
            eprintln!(
                "[scan] Skipping channel #{} ({}): {}",
                channel.name, channel.id, err
            );
        }
    }

    Ok(())
}

/**
 * Pages through one channel's history oldest-first.
 *
 * The history API returns each page newest-first, so every batch is re-sorted
 * by message id and the cursor advances to the highest id seen; an empty or
 * short batch means the channel is exhausted.
 */
async fn scan_channel(
    ctx: &Context<'_>,
    channel: &GuildChannel,
    after: Option<MessageId>,
    counter: &mut EmojiCounter,
) -> Result<(), serenity::Error> {
    let mut cursor = after.unwrap_or(MessageId::new(1));

    loop {
        let mut batch = channel
            .id
            .messages(
                ctx.http(),
                GetMessages::new().after(cursor).limit(PAGE_SIZE),
            )
            .await?;
        if batch.is_empty() {
            break;
        }

        batch.sort_by_key(|message| message.id);
        for message in &batch {
            counter.scan_text(&message.content);
            for reaction in &message.reactions {
                counter.add_reaction(&reaction.reaction_type, reaction.count);
            }
        }

        cursor = batch
            .last()
            .expect("A non-empty batch has a last message.")
            .id;
        if batch.len() < PAGE_SIZE as usize {
            break;
        }
    }

    Ok(())
}
