//! Line comparators
//!
//! Every comparator is a total, three-way ordering over two lines. Equal lines
//! always compare `Equal`, so all of them are safe to use with a stable sort.
//!
//! # Variants
//!
//! - `Lexicographic`: plain `str` ordering (Unicode scalar value order)
//! - `Reverse`: descending lexicographic
//! - `CaseInsensitive`: root-locale collation at primary strength, so case and
//!   accents are ignored
//! - `Natural`: root-locale collation with numeric substrings compared by value
//! - `LineLength` / `LineLengthReverse`: count of grapheme clusters
//! - `VariableLength` / `VariableLengthReverse`: grapheme count of the text
//!   before the last `=` on the line
//!
//! The two collating comparators are backed by ICU4X collators that are built
//! once per thread and reused. If the collation data cannot be loaded the
//! comparator falls back to a simpler ordering and logs a warning.

use icu_collator::{Collator, CollatorOptions, Numeric, Strength};
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;
use unicode_segmentation::UnicodeSegmentation;

/// Greedy match up to the last `=`; group 1 is the variable name.
static VARIABLE_KEY_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(.*)=").unwrap());

thread_local! {
    static CASE_INSENSITIVE_COLLATOR: Option<Collator> =
        build_collator(Strength::Primary, Numeric::Off);
    static NATURAL_COLLATOR: Option<Collator> =
        build_collator(Strength::Tertiary, Numeric::On);
}

fn build_collator(strength: Strength, numeric: Numeric) -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(strength);
    options.numeric = Some(numeric);
    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(err) => {
            tracing::warn!(?strength, ?numeric, ?err, "collator unavailable, using fallback ordering");
            None
        }
    }
}

/// The comparators a sort pass can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    Lexicographic,
    Reverse,
    CaseInsensitive,
    Natural,
    LineLength,
    LineLengthReverse,
    VariableLength,
    VariableLengthReverse,
}

impl Comparator {
    /// Compare two lines. `Less` means `a` sorts before `b`.
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            Comparator::Lexicographic => a.cmp(b),
            Comparator::Reverse => reverse_compare(a, b),
            Comparator::CaseInsensitive => case_insensitive_compare(a, b),
            Comparator::Natural => natural_compare(a, b),
            Comparator::LineLength => line_length_compare(a, b),
            Comparator::LineLengthReverse => line_length_compare(a, b).reverse(),
            Comparator::VariableLength => variable_length_compare(a, b),
            Comparator::VariableLengthReverse => variable_length_compare(a, b).reverse(),
        }
    }

    /// Short human-readable name, used in logs.
    pub fn label(self) -> &'static str {
        match self {
            Comparator::Lexicographic => "lexicographic",
            Comparator::Reverse => "reverse",
            Comparator::CaseInsensitive => "case-insensitive",
            Comparator::Natural => "natural",
            Comparator::LineLength => "line-length",
            Comparator::LineLengthReverse => "line-length-reverse",
            Comparator::VariableLength => "variable-length",
            Comparator::VariableLengthReverse => "variable-length-reverse",
        }
    }
}

/// Descending lexicographic order.
pub fn reverse_compare(a: &str, b: &str) -> Ordering {
    b.cmp(a)
}

pub fn case_insensitive_compare(a: &str, b: &str) -> Ordering {
    CASE_INSENSITIVE_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()),
    })
}

/// Numeric-aware ordering: `item2` sorts before `item10`.
pub fn natural_compare(a: &str, b: &str) -> Ordering {
    NATURAL_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    })
}

/// Number of user-perceived characters in `line`.
pub fn perceived_length(line: &str) -> usize {
    line.graphemes(true).count()
}

pub fn line_length_compare(a: &str, b: &str) -> Ordering {
    perceived_length(a).cmp(&perceived_length(b))
}

/// The text before the last `=` on the line, or the whole line when there is
/// no `=` or nothing precedes it.
pub fn variable_key(line: &str) -> &str {
    VARIABLE_KEY_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|name| name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(line)
}

pub fn variable_length_compare(a: &str, b: &str) -> Ordering {
    perceived_length(variable_key(a)).cmp(&perceived_length(variable_key(b)))
}
