//! Line-set filters
//!
//! Filters drop whole lines and never reorder the survivors. Equality is exact
//! string equality; the case-insensitive operations still dedupe on the raw
//! line text.

use std::collections::{HashMap, HashSet};

/// Keep the first occurrence of every line, in first-seen order.
pub fn remove_duplicates(lines: Vec<String>) -> Vec<String> {
    first_occurrences_where(lines, |_| true)
}

/// Keep one copy of every line that occurs two or more times.
pub fn keep_only_duplicates(lines: Vec<String>) -> Vec<String> {
    first_occurrences_where(lines, |count| count > 1)
}

/// Keep every line that occurs exactly once.
pub fn keep_only_unique(lines: Vec<String>) -> Vec<String> {
    first_occurrences_where(lines, |count| count == 1)
}

/// Drop lines that are empty or contain only whitespace.
pub fn remove_blank_lines(mut lines: Vec<String>) -> Vec<String> {
    lines.retain(|line| !line.trim().is_empty());
    lines
}

/// Keeps the first occurrence of each distinct line whose total occurrence
/// count satisfies `keep_count`.
fn first_occurrences_where(lines: Vec<String>, keep_count: impl Fn(usize) -> bool) -> Vec<String> {
    let keep: Vec<bool> = {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for line in &lines {
            *counts.entry(line.as_str()).or_default() += 1;
        }

        let mut seen: HashSet<&str> = HashSet::new();
        lines
            .iter()
            .map(|line| seen.insert(line.as_str()) && keep_count(counts[line.as_str()]))
            .collect()
    };

    lines
        .into_iter()
        .zip(keep)
        .filter_map(|(line, keep)| keep.then_some(line))
        .collect()
}
