//! Blank line removal
//!
//! Runs ahead of an operation's own passes when the host enables
//! `filter_blank_lines`. A line is blank when it is empty after trimming.

use crate::sortlines::filters::remove_blank_lines;
use crate::sortlines::pipeline::mapper::LineMapper;

/// Drops empty and whitespace-only lines, keeping the order of the rest.
#[derive(Debug, Default)]
pub struct BlankLinesMapper;

impl BlankLinesMapper {
    pub fn new() -> Self {
        BlankLinesMapper
    }
}

impl LineMapper for BlankLinesMapper {
    fn name(&self) -> &'static str {
        "blank-lines"
    }

    fn map_lines(&mut self, lines: Vec<String>) -> Vec<String> {
        remove_blank_lines(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_blank_and_whitespace_lines() {
        let input = vec!["a".to_string(), "".into(), "  ".into(), "b".into()];
        let output = BlankLinesMapper::new().map_lines(input);
        assert_eq!(output, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_keeps_indented_content() {
        let input = vec!["  indented".to_string()];
        let output = BlankLinesMapper::new().map_lines(input.clone());
        assert_eq!(output, input);
    }
}
