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
use crate::emoji::EmojiKey;

/**
 * Resolves emoji keys to human-renderable labels.
 *
 * A standard emoji is its own label. A custom emoji is looked up by id in the
 * guild's current registry (`registry` returns the live rendering, picking up
 * renames); when the emoji has been deleted since it was counted, the stored
 * markup form is used instead, so historical usage stays reportable.
 */
pub fn resolve_labels<F>(keys: &[EmojiKey], registry: F) -> Vec<String>
where
    F: Fn(u64) -> Option<String>,
{
    keys.iter()
        .map(|key| match key {
            EmojiKey::Unicode(_) => key.to_string(),
            EmojiKey::Custom { id, .. } => registry(*id).unwrap_or_else(|| key.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_emoji_resolve_to_themselves() {
        let keys = [EmojiKey::Unicode("😀".to_string())];
        let labels = resolve_labels(&keys, |_| panic!("standard emoji need no lookup"));
        assert_eq!(labels, vec!["😀".to_string()]);
    }

    #[test]
    fn registered_custom_emoji_resolve_to_their_live_form() {
        let keys = [EmojiKey::Custom {
            id: 123,
            name: "wave".to_string(),
            animated: false,
        }];
        // Renamed server-side since it was counted:
        let labels = resolve_labels(&keys, |id| {
            (id == 123).then(|| "<:hello:123>".to_string())
        });
        assert_eq!(labels, vec!["<:hello:123>".to_string()]);
    }

    #[test]
    fn deleted_custom_emoji_fall_back_to_the_stored_markup() {
        let keys = [EmojiKey::Custom {
            id: 999,
            name: "gone".to_string(),
            animated: true,
        }];
        let labels = resolve_labels(&keys, |_| None);
        assert_eq!(labels, vec!["<a:gone:999>".to_string()]);
    }
}
