//! Structure-preserving sort pass
//!
//! Builds the indentation forest, sorts every sibling group lexicographically,
//! and flattens back. See [`crate::sortlines::tree`] for the tree rules.

use crate::sortlines::pipeline::mapper::LineMapper;
use crate::sortlines::tree::structural_sort;

#[derive(Debug, Default)]
pub struct StructuralSortMapper;

impl StructuralSortMapper {
    pub fn new() -> Self {
        StructuralSortMapper
    }
}

impl LineMapper for StructuralSortMapper {
    fn name(&self) -> &'static str {
        "structural-sort"
    }

    fn map_lines(&mut self, lines: Vec<String>) -> Vec<String> {
        structural_sort(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sorts_yaml_like_blocks() {
        let input = lines(&[
            "services:",
            "  web:",
            "    image: nginx",
            "    ports: 80",
            "  db:",
            "    image: postgres",
            "networks:",
            "  default: {}",
        ]);
        let output = StructuralSortMapper::new().map_lines(input);
        assert_eq!(
            output,
            lines(&[
                "networks:",
                "  default: {}",
                "services:",
                "  db:",
                "    image: postgres",
                "  web:",
                "    image: nginx",
                "    ports: 80",
            ])
        );
    }

    #[test]
    fn test_preserves_line_count() {
        let input = lines(&["b", "  x", "a", "", "  y"]);
        let output = StructuralSortMapper::new().map_lines(input.clone());
        assert_eq!(output.len(), input.len());
    }
}
