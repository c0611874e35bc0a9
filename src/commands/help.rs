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
use crate::{Context, Error};

#[poise::command(
    slash_command,
    guild_only,
    ephemeral,
    description_localized("en-US", "Get help for using Iris.")
)]
#[iris::log_cmd]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    let config = ctx.data().config();
    ctx.reply(format!(
        "**Iris commands:**\n\
        - `/leaderboard [timeframe] [as_list]`: rank the 20 most used emoji across the server. \
        Timeframes: `1-week`, `1-month`, `3-months`, `all-time` (the default).\n\
        - `/underused_emojis`: list custom emoji used fewer than {} times over the last {} days, \
        including ones never used at all. Requires the Manage Expressions permission.\n\
        - `/license`: show this software's license information.",
        config.underused_threshold, config.underused_window_days
    ))
    .await?;

    Ok(())
}
