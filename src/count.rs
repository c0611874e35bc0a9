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
use crate::emoji::{default_tokenizers, EmojiKey, EmojiTokenizer};
use serenity::all::ReactionType;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/* Data structures: */

/**
 * Frequency map of emoji occurrences, built fresh for every command run.
 *
 * Alongside the counts it remembers the order in which keys were first seen,
 * so that ranking can break count ties by discovery order.
 */
pub struct EmojiTally {
    counts: HashMap<EmojiKey, u64>,
    discovery: Vec<EmojiKey>,
}

impl EmojiTally {
    pub fn new() -> Self {
        EmojiTally {
            counts: HashMap::new(),
            discovery: Vec::new(),
        }
    }

    /**
     * Adds `amount` occurrences of `key`. An amount of zero records nothing,
     * not even the key itself.
     */
    pub fn record(&mut self, key: EmojiKey, amount: u64) {
        if amount == 0 {
            return;
        }
        match self.counts.entry(key) {
            Entry::Occupied(mut entry) => *entry.get_mut() += amount,
            Entry::Vacant(entry) => {
                self.discovery.push(entry.key().clone());
                entry.insert(amount);
            }
        }
    }

    /// The accumulated count for `key`; zero if it was never seen.
    pub fn count(&self, key: &EmojiKey) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /**
     * The top `limit` entries, ordered by count descending. The sort is
     * stable over discovery order, so equal counts rank in the order the
     * emoji were first encountered.
     */
    pub fn ranked(&self, limit: usize) -> Vec<(EmojiKey, u64)> {
        let mut entries: Vec<(EmojiKey, u64)> = self
            .discovery
            .iter()
            .map(|key| (key.clone(), self.counts[key]))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(limit);
        entries
    }
}

/**
 * Accumulates emoji occurrences from message text and reaction tallies into
 * one EmojiTally, running the configured tokenizer sequence over each text.
 */
pub struct EmojiCounter {
    tokenizers: Vec<Box<dyn EmojiTokenizer + Send + Sync>>,
    tally: EmojiTally,
}

impl EmojiCounter {
    pub fn new() -> Self {
        EmojiCounter {
            tokenizers: default_tokenizers(),
            tally: EmojiTally::new(),
        }
    }

    /// Counts every emoji occurrence found in one message's text.
    pub fn scan_text(&mut self, content: &str) {
        let mut found = Vec::new();
        for tokenizer in &self.tokenizers {
            tokenizer.tokenize(content, &mut found);
        }
        for key in found {
            self.tally.record(key, 1);
        }
    }

    /**
     * Adds one reaction's aggregate tally. A reaction entry already counts
     * every user who applied it, so `users` is added as-is rather than
     * counted as a single occurrence.
     */
    pub fn add_reaction(&mut self, reaction: &ReactionType, users: u64) {
        if let Some(key) = reaction_key(reaction) {
            self.tally.record(key, users);
        }
    }

    pub fn into_tally(self) -> EmojiTally {
        self.tally
    }
}

/// Maps a Discord reaction emoji to the same key space as the text scan.
fn reaction_key(reaction: &ReactionType) -> Option<EmojiKey> {
    match reaction {
        ReactionType::Unicode(cluster) => Some(EmojiKey::Unicode(cluster.clone())),
        ReactionType::Custom { animated, id, name } => Some(EmojiKey::Custom {
            id: id.get(),
            name: name.clone().unwrap_or_default(),
            animated: *animated,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unicode(cluster: &str) -> EmojiKey {
        EmojiKey::Unicode(cluster.to_string())
    }

    #[test]
    fn message_without_emoji_changes_nothing() {
        let mut counter = EmojiCounter::new();
        counter.scan_text("plain words only");
        assert!(counter.into_tally().is_empty());
    }

    #[test]
    fn counting_is_order_independent() {
        let messages = ["😀 <:wave:123>", "😂😀", "😂 <a:wave:123>"];

        let mut forward = EmojiCounter::new();
        for message in &messages {
            forward.scan_text(message);
        }
        let forward = forward.into_tally();

        let mut backward = EmojiCounter::new();
        for message in messages.iter().rev() {
            backward.scan_text(message);
        }
        let backward = backward.into_tally();

        for key in [
            unicode("😀"),
            unicode("😂"),
            EmojiKey::Custom {
                id: 123,
                name: "wave".to_string(),
                animated: false,
            },
        ] {
            assert_eq!(forward.count(&key), backward.count(&key));
        }
    }

    #[test]
    fn reaction_tally_is_added_not_incremented() {
        let mut counter = EmojiCounter::new();
        counter.add_reaction(&ReactionType::Unicode("😂".to_string()), 3);
        assert_eq!(counter.into_tally().count(&unicode("😂")), 3);
    }

    #[test]
    fn text_and_reaction_occurrences_share_one_key() {
        let mut counter = EmojiCounter::new();
        counter.scan_text("😂");
        counter.add_reaction(&ReactionType::Unicode("😂".to_string()), 2);
        assert_eq!(counter.into_tally().count(&unicode("😂")), 3);
    }

    #[test]
    fn renamed_custom_emoji_accumulates_one_key() {
        let mut counter = EmojiCounter::new();
        counter.scan_text("<:wave:123>");
        counter.add_reaction(
            &ReactionType::Custom {
                animated: false,
                id: serenity::all::EmojiId::new(123),
                name: Some("hello".to_string()),
            },
            2,
        );
        let tally = counter.into_tally();
        assert_eq!(
            tally.count(&EmojiKey::Custom {
                id: 123,
                name: "anything".to_string(),
                animated: false,
            }),
            3
        );
    }

    #[test]
    fn zero_tally_reaction_records_nothing() {
        let mut tally = EmojiTally::new();
        tally.record(unicode("😀"), 0);
        assert!(tally.is_empty());
    }

    #[test]
    fn ranking_truncates_to_the_top_twenty() {
        let mut tally = EmojiTally::new();
        for i in 0..25u64 {
            tally.record(unicode(&format!("e{}", i)), 25 - i);
        }
        let ranked = tally.ranked(20);
        assert_eq!(ranked.len(), 20);
        assert_eq!(ranked[0], (unicode("e0"), 25));
        assert_eq!(ranked[19], (unicode("e19"), 6));
        for pair in ranked.windows(2) {
            assert!(pair[0].1 > pair[1].1);
        }
    }

    #[test]
    fn ties_rank_in_discovery_order() {
        // "😀😀" then "😀" with a 😂×3 reaction on the second message.
        let mut counter = EmojiCounter::new();
        counter.scan_text("😀😀");
        counter.scan_text("😀");
        counter.add_reaction(&ReactionType::Unicode("😂".to_string()), 3);
        let ranked = counter.into_tally().ranked(20);
        assert_eq!(ranked, vec![(unicode("😀"), 3), (unicode("😂"), 3)]);
    }
}
