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
use crate::emoji::EmojiKey;
use crate::scan;
use crate::timeframe::snowflake_floor;
use crate::utils::get_guild_id;
use crate::{Context, Error};
use poise::serenity_prelude::{Permissions, Timestamp};

/// Discord caps message content at this many characters.
const MAX_MESSAGE_LEN: usize = 2000;

#[poise::command(
    slash_command,
    guild_only,
    ephemeral,
    default_member_permissions = "MANAGE_GUILD_EXPRESSIONS",
    description_localized(
        "en-US",
        "List custom emoji that saw little use over the last 30 days."
    )
)]
#[iris::log_cmd]
pub async fn underused_emojis(ctx: Context<'_>) -> Result<(), Error> {
    // The capability check precedes the expensive scan:
    if !author_can_manage_emojis(&ctx).await {
        ctx.reply("This command is restricted to members who can manage the server's emoji.")
            .await?;
        return Ok(());
    }

    ctx.say("Measuring custom emoji usage, this may take a while...")
        .await?;

    let threshold = ctx.data().config().underused_threshold;
    let window_days = ctx.data().config().underused_window_days;

    let now_ms = Timestamp::now().unix_timestamp() * 1000;
    let after = snowflake_floor(now_ms - window_days * 86_400_000);

    let mut counter = EmojiCounter::new();
    scan::scan_guild(&ctx, Some(after), &mut counter).await?;
    let tally = counter.into_tally();

    // Every currently registered emoji is reportable, including ones that
    // were never used at all inside the window:
    let guild_id = get_guild_id!(ctx);
    let underused: Vec<String> = guild_id
        .emojis(ctx.http())
        .await?
        .into_iter()
        .filter(|emoji| {
            let key = EmojiKey::Custom {
                id: emoji.id.get(),
                name: emoji.name.clone(),
                animated: emoji.animated,
            };
            tally.count(&key) < threshold
        })
        .map(|emoji| emoji.to_string())
        .collect();

    if underused.is_empty() {
        ctx.say(format!(
            "No custom emoji were used fewer than {} times in the last {} days.",
            threshold, window_days
        ))
        .await?;
        return Ok(());
    }

    let header = format!(
        "Custom emoji used fewer than {} times in the last {} days:\n",
        threshold, window_days
    );
    for message in split_messages(header, &underused) {
        ctx.say(message).await?;
    }

    Ok(())
}

/**
 * Whether the invoking member holds the Manage Expressions capability. Guild
 * interactions carry the member's effective permissions in the payload.
 */
async fn author_can_manage_emojis(ctx: &Context<'_>) -> bool {
    match ctx.author_member().await.and_then(|member| member.permissions) {
        Some(permissions) => permissions.contains(Permissions::MANAGE_GUILD_EXPRESSIONS),
        None => false,
    }
}

/// Splits the label list into messages below Discord's length cap.
fn split_messages(header: String, labels: &[String]) -> Vec<String> {
    let mut messages = Vec::new();
    let mut current = header;
    for label in labels {
        if current.len() + label.len() + 1 > MAX_MESSAGE_LEN {
            messages.push(current);
            current = String::new();
        }
        current.push_str(label);
        current.push(' ');
    }
    messages.push(current);
    messages
}
