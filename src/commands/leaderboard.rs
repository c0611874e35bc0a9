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
use crate::graph::{self, RankedEntry};
use crate::resolve::resolve_labels;
use crate::scan;
use crate::timeframe::{snowflake_floor, Timeframe};
use crate::utils::get_guild_id;
use crate::{Context, Error};
use poise::serenity_prelude::Timestamp;
use std::collections::HashMap;

/// The leaderboard never shows more than this many emoji.
const LEADERBOARD_SIZE: usize = 20;

#[poise::command(
    slash_command,
    guild_only,
    description_localized("en-US", "Rank the most used emoji across the server.")
)]
#[iris::log_cmd]
pub async fn leaderboard(
    ctx: Context<'_>,
    #[description = "Lookback window: 1-week, 1-month, 3-months or all-time (the default)."]
    timeframe: Option<String>,
    #[description = "Render a plain ranked list instead of a bar graph."] as_list: Option<bool>,
) -> Result<(), Error> {
    let label = timeframe.unwrap_or_else(|| "all-time".to_string());
    let Some(timeframe) = Timeframe::parse(&label) else {
        // User input error; no scan is started.
        ctx.reply(format!(
            "Unknown timeframe `{}`. Available options: {}.",
            label,
            Timeframe::LABELS
        ))
        .await?;
        return Ok(());
    };

    // Acknowledge before the scan: history pagination dominates wall-clock
    // time, and the interaction must be answered promptly.
    ctx.say("Collecting emoji usage across the server, this may take a while...")
        .await?;

    let now_ms = Timestamp::now().unix_timestamp() * 1000;
    let after = timeframe.cutoff_unix_ms(now_ms).map(snowflake_floor);

    let mut counter = EmojiCounter::new();
    scan::scan_guild(&ctx, after, &mut counter).await?;
    let tally = counter.into_tally();

    if tally.is_empty() {
        ctx.say("No emoji have been used in this server yet.").await?;
        return Ok(());
    }

    // Rank, then resolve the keys against the live emoji registry:
    let ranked = tally.ranked(LEADERBOARD_SIZE);
    let guild_id = get_guild_id!(ctx);
    let registry: HashMap<u64, String> = guild_id
        .emojis(ctx.http())
        .await?
        .into_iter()
        .map(|emoji| (emoji.id.get(), emoji.to_string()))
        .collect();
    let keys: Vec<_> = ranked.iter().map(|(key, _)| key.clone()).collect();
    let labels = resolve_labels(&keys, |id| registry.get(&id).cloned());
    let entries: Vec<RankedEntry> = labels
        .into_iter()
        .zip(ranked.iter().map(|(_, count)| *count))
        .map(|(label, count)| RankedEntry::new(label, count))
        .collect();

    let title = format!("**Top {} emoji used ({})**", entries.len(), label);
    let reply = if as_list.unwrap_or(false) {
        // No code block here, so custom emoji render inline:
        format!("{}\n{}", title, graph::ranked_list(&entries))
    } else {
        format!(
            "{}\n```\n{}\n```",
            title,
            graph::vertical_graph(&entries, ctx.data().config().graph_height)
        )
    };
    ctx.say(reply).await?;

    Ok(())
}
