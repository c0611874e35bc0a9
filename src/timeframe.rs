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
use serenity::all::MessageId;

/// Milliseconds between the unix epoch and Discord's snowflake epoch.
const DISCORD_EPOCH_MS: i64 = 1_420_070_400_000;

/**
 * The lookback window of a leaderboard scan. Every label maps to a
 * duration-before-now cutoff, except all-time which scans unbounded history.
 */
#[cfg_attr(debug_assertions, derive(Debug))]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Timeframe {
    OneWeek,
    OneMonth,
    ThreeMonths,
    AllTime,
}

impl Timeframe {
    /// The accepted labels, for user-facing error messages.
    pub const LABELS: &'static str = "`1-week`, `1-month`, `3-months`, `all-time`";

    pub fn parse(label: &str) -> Option<Self> {
        match label.trim() {
            "1-week" => Some(Timeframe::OneWeek),
            "1-month" => Some(Timeframe::OneMonth),
            "3-months" => Some(Timeframe::ThreeMonths),
            "all-time" => Some(Timeframe::AllTime),
            _ => None,
        }
    }

    fn days(&self) -> Option<i64> {
        match self {
            Timeframe::OneWeek => Some(7),
            Timeframe::OneMonth => Some(30),
            Timeframe::ThreeMonths => Some(90),
            Timeframe::AllTime => None,
        }
    }

    /// The cutoff instant in unix milliseconds; None means no cutoff.
    pub fn cutoff_unix_ms(&self, now_unix_ms: i64) -> Option<i64> {
        self.days().map(|days| now_unix_ms - days * 86_400_000)
    }
}

/**
 * The smallest message id that can have been created at or after the given
 * instant. Handing this to the history API's `after` parameter makes the
 * platform enforce the time bound during pagination.
 */
pub fn snowflake_floor(unix_ms: i64) -> MessageId {
    let offset = (unix_ms - DISCORD_EPOCH_MS).max(1) as u64;
    MessageId::new(offset << 22)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_label_parses() {
        assert_eq!(Timeframe::parse("1-week"), Some(Timeframe::OneWeek));
        assert_eq!(Timeframe::parse("1-month"), Some(Timeframe::OneMonth));
        assert_eq!(Timeframe::parse("3-months"), Some(Timeframe::ThreeMonths));
        assert_eq!(Timeframe::parse("all-time"), Some(Timeframe::AllTime));
        assert_eq!(Timeframe::parse(" 1-week "), Some(Timeframe::OneWeek));
    }

    #[test]
    fn unknown_labels_are_rejected() {
        assert_eq!(Timeframe::parse("fortnight"), None);
        assert_eq!(Timeframe::parse(""), None);
    }

    #[test]
    fn all_time_has_no_cutoff() {
        assert_eq!(Timeframe::AllTime.cutoff_unix_ms(1_700_000_000_000), None);
    }

    #[test]
    fn bounded_timeframes_cut_off_days_before_now() {
        let now = 1_700_000_000_000;
        assert_eq!(
            Timeframe::OneWeek.cutoff_unix_ms(now),
            Some(now - 7 * 86_400_000)
        );
        assert_eq!(
            Timeframe::ThreeMonths.cutoff_unix_ms(now),
            Some(now - 90 * 86_400_000)
        );
    }

    #[test]
    fn snowflake_floor_shifts_the_epoch_offset() {
        assert_eq!(
            snowflake_floor(DISCORD_EPOCH_MS + 1_000),
            MessageId::new(1_000 << 22)
        );
    }

    #[test]
    fn snowflake_floor_clamps_pre_epoch_instants() {
        assert_eq!(snowflake_floor(0), MessageId::new(1 << 22));
    }
}
