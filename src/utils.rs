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
use serde::{Deserialize, Serialize};
use std::fs;

/* Data structures: */

// Bot configuration struct:
/**
 * Data structure encapsulating the presentation and reporting knobs of the
 * bot. Loaded once at startup and injected into the command handlers.
 */
#[cfg_attr(debug_assertions, derive(Debug))]
#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct BotConfig {
    /// The height, in rows, of the leaderboard bar graph.
    pub graph_height: usize,
    /// Custom emoji used strictly fewer times than this over the report
    /// window are considered underused.
    pub underused_threshold: u64,
    /// The lookback window of the underused-emoji report, in days.
    pub underused_window_days: i64,
}

impl Default for BotConfig {
    fn default() -> Self {
        BotConfig {
            graph_height: 10,
            underused_threshold: 5,
            underused_window_days: 30,
        }
    }
}

/**
 * Macro for logging to stderr the usage of a command.
 */
macro_rules! elog_cmd {
    ($ctx:ident) => {
        eprintln!(
            "Executing command `{}`, triggered by <@{}> ({}).",
            $ctx.invocation_string(),
            $ctx.author().id,
            $ctx.author().tag()
        );
    };
}
pub(crate) use elog_cmd;

/**
 * Macro for retrieving the guild ID from a Context object.
 */
macro_rules! get_guild_id {
    ($ctx:ident) => {
        $ctx.guild_id()
            .expect("The command was not executed in a guild.")
    };
}
pub(crate) use get_guild_id;

/**
 * Loads the bot configuration from `config.json` in the working directory.
 * The file is optional; defaults cover a missing one. A file that exists but
 * does not parse is a startup error.
 */
pub fn load_config() -> BotConfig {
    match fs::read_to_string("config.json") {
        Ok(json) => {
            serde_json::from_str(&json).expect("Could not parse config.json as a BotConfig object.")
        }
        Err(_) => BotConfig::default(),
    }
}
