//! Comparator-driven sort pass

use crate::sortlines::compare::Comparator;
use crate::sortlines::pipeline::mapper::LineMapper;

/// Stable sort of the whole sequence with a single comparator.
#[derive(Debug, Clone, Copy)]
pub struct SortMapper {
    comparator: Comparator,
}

impl SortMapper {
    pub fn new(comparator: Comparator) -> Self {
        SortMapper { comparator }
    }

    pub fn comparator(&self) -> Comparator {
        self.comparator
    }
}

impl LineMapper for SortMapper {
    fn name(&self) -> &'static str {
        "sort"
    }

    fn map_lines(&mut self, mut lines: Vec<String>) -> Vec<String> {
        let comparator = self.comparator;
        lines.sort_by(|a, b| comparator.compare(a, b));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sorts_with_comparator() {
        let mut mapper = SortMapper::new(Comparator::Lexicographic);
        assert_eq!(
            mapper.map_lines(lines(&["c", "a", "b"])),
            lines(&["a", "b", "c"])
        );
    }

    #[test]
    fn test_sort_is_stable() {
        // Same length, so the input order must survive.
        let mut mapper = SortMapper::new(Comparator::LineLength);
        assert_eq!(
            mapper.map_lines(lines(&["bb", "a", "aa", "cc"])),
            lines(&["a", "bb", "aa", "cc"])
        );
    }

    #[test]
    fn test_single_line_unchanged() {
        let mut mapper = SortMapper::new(Comparator::Reverse);
        assert_eq!(mapper.map_lines(lines(&["only"])), lines(&["only"]));
    }
}
