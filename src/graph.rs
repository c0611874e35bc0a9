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
use getset::Getters;
use std::fmt::Write;

/* Data structures: */

/**
 * One leaderboard row: a resolved, renderable label and its usage count.
 */
#[cfg_attr(debug_assertions, derive(Debug))]
#[derive(Clone, Getters)]
pub struct RankedEntry {
    #[getset(get = "pub")]
    label: String,
    #[getset(get = "pub")]
    count: u64,
}

impl RankedEntry {
    pub fn new(label: String, count: u64) -> Self {
        RankedEntry { label, count }
    }
}

/**
 * Renders entries as a vertical bar graph: one five-column cell per entry,
 * bars scaled so the largest count fills `height` rows, followed by a label
 * row and a count row.
 */
pub fn vertical_graph(entries: &[RankedEntry], height: usize) -> String {
    let max_count = entries.iter().map(|e| *e.count()).max().unwrap_or(0);
    if max_count == 0 {
        return "(no data)".to_string();
    }

    // Scale each bar to the graph height, rounding up so a nonzero count is
    // never invisible:
    let bar_heights: Vec<usize> = entries
        .iter()
        .map(|e| (((*e.count() * height as u64 + max_count - 1) / max_count) as usize).max(1))
        .collect();

    let mut lines = Vec::new();
    for level in (1..=height).rev() {
        let mut row = String::new();
        for bar in &bar_heights {
            row.push_str(if *bar >= level { "  █  " } else { "     " });
        }
        lines.push(row);
    }

    let mut labels = String::new();
    let mut counts = String::new();
    for entry in entries {
        write!(&mut labels, " {}  ", entry.label()).unwrap();
        write!(&mut counts, " {:^3} ", entry.count()).unwrap();
    }
    lines.push(labels);
    lines.push(counts);

    lines.join("\n")
}

/**
 * Renders entries as a plain ranked list, one line per entry. Unlike the
 * graph this goes out without a code block, so custom emoji render inline.
 */
pub fn ranked_list(entries: &[RankedEntry]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{} {} ({})", placement(i + 1), entry.label(), entry.count()))
        .collect::<Vec<String>>()
        .join("\n")
}

fn placement(rank: usize) -> String {
    match rank {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        _ => format!("{}.", rank),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pairs: &[(&str, u64)]) -> Vec<RankedEntry> {
        pairs
            .iter()
            .map(|(label, count)| RankedEntry::new(label.to_string(), *count))
            .collect()
    }

    #[test]
    fn empty_input_renders_no_data() {
        assert_eq!(vertical_graph(&[], 10), "(no data)");
    }

    #[test]
    fn bars_scale_to_the_graph_height() {
        let graph = vertical_graph(&entries(&[("😀", 4), ("😂", 1)]), 4);
        let lines: Vec<&str> = graph.lines().collect();
        assert_eq!(lines.len(), 6); // 4 bar rows + labels + counts.
        assert_eq!(lines[0], "  █       ");
        assert_eq!(lines[3], "  █    █  ");
        assert_eq!(lines[4], " 😀   😂  ");
        assert_eq!(lines[5], "  4    1  ");
    }

    #[test]
    fn small_counts_still_get_a_visible_bar() {
        let graph = vertical_graph(&entries(&[("😀", 100), ("😂", 1)]), 10);
        let bottom_row = graph.lines().nth(9).unwrap();
        assert_eq!(bottom_row, "  █    █  ");
    }

    #[test]
    fn list_medals_the_first_three_placements() {
        let list = ranked_list(&entries(&[("a", 9), ("b", 8), ("c", 7), ("d", 6)]));
        let lines: Vec<&str> = list.lines().collect();
        assert_eq!(lines[0], "🥇 a (9)");
        assert_eq!(lines[1], "🥈 b (8)");
        assert_eq!(lines[2], "🥉 c (7)");
        assert_eq!(lines[3], "4. d (6)");
    }
}
