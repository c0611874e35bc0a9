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
use regex::Regex;
use std::fmt;
use std::hash::{Hash, Hasher};
use unicode_segmentation::UnicodeSegmentation;

/* Data structures: */

/**
 * Canonical identifier for one emoji occurrence.
 *
 * A standard emoji is identified by its full grapheme cluster. A custom emoji
 * is identified by its numeric id alone: the name and animation flag are
 * carried for rendering, so a server-side rename never splits a count across
 * two keys.
 */
#[derive(Clone)]
#[cfg_attr(debug_assertions, derive(Debug))]
pub enum EmojiKey {
    Unicode(String),
    Custom { id: u64, name: String, animated: bool },
}

// Identity of a custom emoji is its id; the name is mutable server-side.
impl PartialEq for EmojiKey {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (EmojiKey::Unicode(a), EmojiKey::Unicode(b)) => a == b,
            (EmojiKey::Custom { id: a, .. }, EmojiKey::Custom { id: b, .. }) => a == b,
            _ => false,
        }
    }
}

impl Eq for EmojiKey {}

impl Hash for EmojiKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            EmojiKey::Unicode(cluster) => {
                state.write_u8(0);
                cluster.hash(state);
            }
            EmojiKey::Custom { id, .. } => {
                state.write_u8(1);
                id.hash(state);
            }
        }
    }
}

impl fmt::Display for EmojiKey {
    /**
     * Renders the key in the form Discord displays: the bare grapheme cluster
     * for standard emoji, the `<:name:id>` markup for custom ones. The markup
     * form doubles as the degraded label for emoji deleted from the server.
     */
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmojiKey::Unicode(cluster) => write!(f, "{}", cluster),
            EmojiKey::Custom { id, name, animated } => {
                if *animated {
                    write!(f, "<a:{}:{}>", name, id)
                } else {
                    write!(f, "<:{}:{}>", name, id)
                }
            }
        }
    }
}

/* Tokenizers: */

/**
 * One pass of emoji extraction over message text. The counter composes
 * several tokenizers in sequence, so extending the recognized emoji set never
 * touches the counting logic.
 */
pub trait EmojiTokenizer {
    /// Appends a key to `found` for every occurrence recognized in `text`.
    fn tokenize(&self, text: &str, found: &mut Vec<EmojiKey>);
}

/**
 * Recognizes standard Unicode emoji, one occurrence per extended grapheme
 * cluster, so multi-codepoint sequences (skin-tone modifiers, ZWJ families)
 * count once.
 */
pub struct UnicodeTokenizer;

impl UnicodeTokenizer {
    fn is_emoji(cluster: &str) -> bool {
        if emojis::get(cluster).is_some() {
            return true;
        }
        // Messages often carry the unqualified form; retry the lookup with
        // variation selectors stripped.
        let stripped: String = cluster.chars().filter(|c| *c != '\u{fe0f}').collect();
        !stripped.is_empty() && emojis::get(&stripped).is_some()
    }
}

impl EmojiTokenizer for UnicodeTokenizer {
    fn tokenize(&self, text: &str, found: &mut Vec<EmojiKey>) {
        for cluster in text.graphemes(true) {
            if Self::is_emoji(cluster) {
                found.push(EmojiKey::Unicode(cluster.to_string()));
            }
        }
    }
}

/**
 * Recognizes Discord's custom-emoji markup, `<:name:id>` with an `a` prefix
 * for animated ones.
 */
pub struct CustomMarkupTokenizer {
    pattern: Regex,
}

impl CustomMarkupTokenizer {
    pub fn new() -> Self {
        CustomMarkupTokenizer {
            pattern: Regex::new(r"<(a?):([\w~]+):(\d+)>")
                .expect("Failed to compile regex for custom emoji markup."),
        }
    }
}

impl EmojiTokenizer for CustomMarkupTokenizer {
    fn tokenize(&self, text: &str, found: &mut Vec<EmojiKey>) {
        for caps in self.pattern.captures_iter(text) {
            // Ids too large for u64 cannot be real snowflakes; skip them.
            let Ok(id) = caps[3].parse::<u64>() else {
                continue;
            };
            found.push(EmojiKey::Custom {
                id,
                name: caps[2].to_string(),
                animated: !caps[1].is_empty(),
            });
        }
    }
}

/**
 * The tokenizer sequence used for every message scan: standard Unicode emoji
 * first, then custom-emoji markup.
 */
pub fn default_tokenizers() -> Vec<Box<dyn EmojiTokenizer + Send + Sync>> {
    vec![
        Box::new(UnicodeTokenizer),
        Box::new(CustomMarkupTokenizer::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize_all(text: &str) -> Vec<EmojiKey> {
        let mut found = Vec::new();
        for tokenizer in default_tokenizers() {
            tokenizer.tokenize(text, &mut found);
        }
        found
    }

    #[test]
    fn counts_each_unicode_occurrence() {
        let found = tokenize_all("😀😀");
        assert_eq!(
            found,
            vec![
                EmojiKey::Unicode("😀".to_string()),
                EmojiKey::Unicode("😀".to_string())
            ]
        );
    }

    #[test]
    fn zwj_sequence_is_one_occurrence() {
        let found = tokenize_all("👨‍👩‍👧");
        assert_eq!(found, vec![EmojiKey::Unicode("👨‍👩‍👧".to_string())]);
    }

    #[test]
    fn skin_tone_modifier_is_one_occurrence() {
        let found = tokenize_all("ok 👍🏽 then");
        assert_eq!(found, vec![EmojiKey::Unicode("👍🏽".to_string())]);
    }

    #[test]
    fn variation_selector_form_is_recognized() {
        let found = tokenize_all("❤️");
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn plain_text_yields_nothing() {
        assert!(tokenize_all("just words, no pictures").is_empty());
    }

    #[test]
    fn custom_markup_is_parsed() {
        let found = tokenize_all("hello <:wave:123> and <a:party:456>");
        assert_eq!(
            found,
            vec![
                EmojiKey::Custom {
                    id: 123,
                    name: "wave".to_string(),
                    animated: false
                },
                EmojiKey::Custom {
                    id: 456,
                    name: "party".to_string(),
                    animated: true
                },
            ]
        );
    }

    #[test]
    fn renamed_custom_emoji_keys_are_equal() {
        let before = EmojiKey::Custom {
            id: 123,
            name: "wave".to_string(),
            animated: false,
        };
        let after = EmojiKey::Custom {
            id: 123,
            name: "hello".to_string(),
            animated: false,
        };
        assert_eq!(before, after);
    }

    #[test]
    fn display_renders_discord_markup() {
        let plain = EmojiKey::Custom {
            id: 123,
            name: "wave".to_string(),
            animated: false,
        };
        let animated = EmojiKey::Custom {
            id: 456,
            name: "party".to_string(),
            animated: true,
        };
        assert_eq!(plain.to_string(), "<:wave:123>");
        assert_eq!(animated.to_string(), "<a:party:456>");
        assert_eq!(EmojiKey::Unicode("😀".to_string()).to_string(), "😀");
    }
}
