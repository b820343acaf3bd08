//! Duplicate-based filter passes

use crate::sortlines::filters;
use crate::sortlines::pipeline::mapper::LineMapper;

/// Which lines a duplicate filter keeps. Survivors stay in first-seen order and
/// appear once each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateFilter {
    /// Every distinct line.
    RemoveDuplicates,
    /// Lines that occur two or more times.
    KeepDuplicates,
    /// Lines that occur exactly once.
    KeepUnique,
}

#[derive(Debug, Clone, Copy)]
pub struct DuplicateFilterMapper {
    filter: DuplicateFilter,
}

impl DuplicateFilterMapper {
    pub fn new(filter: DuplicateFilter) -> Self {
        DuplicateFilterMapper { filter }
    }
}

impl LineMapper for DuplicateFilterMapper {
    fn name(&self) -> &'static str {
        match self.filter {
            DuplicateFilter::RemoveDuplicates => "remove-duplicates",
            DuplicateFilter::KeepDuplicates => "keep-duplicates",
            DuplicateFilter::KeepUnique => "keep-unique",
        }
    }

    fn map_lines(&mut self, lines: Vec<String>) -> Vec<String> {
        match self.filter {
            DuplicateFilter::RemoveDuplicates => filters::remove_duplicates(lines),
            DuplicateFilter::KeepDuplicates => filters::keep_only_duplicates(lines),
            DuplicateFilter::KeepUnique => filters::keep_only_unique(lines),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_each_filter_mode() {
        let input = lines(&["a", "b", "a", "c", "b", "a"]);

        let mut remove = DuplicateFilterMapper::new(DuplicateFilter::RemoveDuplicates);
        assert_eq!(remove.map_lines(input.clone()), lines(&["a", "b", "c"]));

        let mut dups = DuplicateFilterMapper::new(DuplicateFilter::KeepDuplicates);
        assert_eq!(dups.map_lines(input.clone()), lines(&["a", "b"]));

        let mut unique = DuplicateFilterMapper::new(DuplicateFilter::KeepUnique);
        assert_eq!(unique.map_lines(input), lines(&["c"]));
    }

    #[test]
    fn test_names() {
        assert_eq!(
            DuplicateFilterMapper::new(DuplicateFilter::KeepUnique).name(),
            "keep-unique"
        );
    }
}
