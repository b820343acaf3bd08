//! Line buffer used by hosts that work on plain text
//!
//! Splits text into lines the way an editor does: every `\n` ends a line, so a
//! trailing newline produces a final empty line and the empty string is a
//! single empty line. A `\r` before the `\n` is treated as part of the line
//! ending. Joining uses the detected ending, so unchanged documents round-trip.

use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// CarriageReturn followed by LineFeed.
    Crlf,

    /// U+000A -- LineFeed
    LF,
}

impl LineEnding {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Crlf => "\r\n",
            Self::LF => "\n",
        }
    }

    /// CRLF if the text contains any CRLF pair, LF otherwise.
    pub fn detect(text: &str) -> LineEnding {
        if text.contains("\r\n") {
            LineEnding::Crlf
        } else {
            LineEnding::LF
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("line range {start}..={end} is outside a document of {line_count} lines")]
    RangeOutOfBounds {
        start: usize,
        end: usize,
        line_count: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
    line_ending: LineEnding,
}

impl Document {
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Document {
            lines,
            line_ending: LineEnding::detect(text),
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Copy of the lines in `range`.
    pub fn lines_in(&self, range: &RangeInclusive<usize>) -> Result<Vec<String>, DocumentError> {
        self.check_range(range)?;
        Ok(self.lines[range.clone()].to_vec())
    }

    /// Replace the lines in `range` with `replacement`, which may be shorter.
    pub fn replace_lines(
        &mut self,
        range: RangeInclusive<usize>,
        replacement: Vec<String>,
    ) -> Result<(), DocumentError> {
        self.check_range(&range)?;
        self.lines.splice(range, replacement);
        Ok(())
    }

    pub fn to_text(&self) -> String {
        self.lines.join(self.line_ending.as_str())
    }

    fn check_range(&self, range: &RangeInclusive<usize>) -> Result<(), DocumentError> {
        let (start, end) = (*range.start(), *range.end());
        if start > end || end >= self.lines.len() {
            return Err(DocumentError::RangeOutOfBounds {
                start,
                end,
                line_count: self.lines.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_and_join_round_trip() {
        for text in ["a\nb\nc", "a\nb\n", "", "\n", "one"] {
            assert_eq!(Document::from_text(text).to_text(), text);
        }
    }

    #[test]
    fn test_trailing_newline_is_an_empty_line() {
        let doc = Document::from_text("a\nb\n");
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.line(2), Some(""));
    }

    #[test]
    fn test_crlf_detected_and_preserved() {
        let doc = Document::from_text("b\r\na\r\n");
        assert_eq!(doc.line_ending(), LineEnding::Crlf);
        assert_eq!(doc.lines(), &["b".to_string(), "a".to_string(), String::new()]);
        assert_eq!(doc.to_text(), "b\r\na\r\n");
    }

    #[test]
    fn test_replace_lines_with_fewer() {
        let mut doc = Document::from_text("x\nb\nb\na\ny");
        doc.replace_lines(1..=3, vec!["a".into(), "b".into()]).unwrap();
        assert_eq!(doc.to_text(), "x\na\nb\ny");
    }

    #[test]
    fn test_lines_in() {
        let doc = Document::from_text("a\nb\nc");
        assert_eq!(doc.lines_in(&(1..=2)).unwrap(), vec!["b", "c"]);
    }

    #[test]
    fn test_out_of_bounds_range() {
        let mut doc = Document::from_text("a\nb");
        let err = doc.replace_lines(1..=5, Vec::new()).unwrap_err();
        assert_eq!(
            err,
            DocumentError::RangeOutOfBounds {
                start: 1,
                end: 5,
                line_count: 2
            }
        );
        assert_eq!(
            err.to_string(),
            "line range 1..=5 is outside a document of 2 lines"
        );
    }
}
