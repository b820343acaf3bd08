//! Editor selections and the line range they cover
//!
//! Positions are 0-based. The resolution rules follow what editors expect from
//! a "sort lines" command:
//!
//! 1. An empty selection covers the whole document when `sort_entire_file` is on.
//! 2. Otherwise a selection within a single line is left alone.
//! 3. A selection ending at column 0 of a later line excludes that line when
//!    `ignore_unselected_last_line` is on.

use crate::sortlines::document::Document;
use sortlines_config::SortLinesConfig;
use std::ops::RangeInclusive;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Position { line, character }
    }
}

/// A selection normalized so that `start <= end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    start: Position,
    end: Position,
}

impl Selection {
    /// Build a selection from its anchor and active ends, in either order.
    pub fn new(anchor: Position, active: Position) -> Self {
        Selection {
            start: anchor.min(active),
            end: anchor.max(active),
        }
    }

    /// An empty selection (a bare cursor).
    pub fn cursor(at: Position) -> Self {
        Selection { start: at, end: at }
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionOptions {
    pub sort_entire_file: bool,
    pub ignore_unselected_last_line: bool,
}

impl SelectionOptions {
    pub fn from_config(config: &SortLinesConfig) -> Self {
        SelectionOptions {
            sort_entire_file: config.selection.sort_entire_file,
            ignore_unselected_last_line: config.selection.ignore_unselected_last_line,
        }
    }
}

/// The inclusive line range to transform, or `None` when the command should
/// leave the document untouched.
pub fn resolve_line_range(
    selection: &Selection,
    line_count: usize,
    options: &SelectionOptions,
) -> Option<RangeInclusive<usize>> {
    if selection.is_empty() && options.sort_entire_file {
        if line_count == 0 {
            return None;
        }
        tracing::debug!(line_count, "empty selection, using whole document");
        return Some(0..=line_count - 1);
    }

    if selection.is_single_line() {
        tracing::debug!(line = selection.start.line, "single-line selection, nothing to do");
        return None;
    }

    let mut end_line = selection.end.line;
    if selection.end.character == 0 && options.ignore_unselected_last_line {
        end_line -= 1;
    }
    Some(selection.start.line..=end_line)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionParseError {
    #[error("selection '{0}' must look like START[:COL]-END[:COL]")]
    Malformed(String),
    #[error("line numbers start at 1, got 0 in '{0}'")]
    ZeroLine(String),
}

/// A selection written as `START[:COL]-END[:COL]`: 1-based lines, 0-based
/// columns. An omitted start column is 0; an omitted end column is the end of
/// that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSpec {
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: Option<usize>,
}

impl SelectionSpec {
    /// Convert to a 0-based selection, measuring omitted end columns in `document`.
    pub fn to_selection(&self, document: &Document) -> Selection {
        let end_line = self.end_line.saturating_sub(1);
        let end_column = self.end_column.unwrap_or_else(|| {
            document
                .line(end_line)
                .map(|line| line.chars().count())
                .unwrap_or(0)
        });
        Selection::new(
            Position::new(self.start_line.saturating_sub(1), self.start_column),
            Position::new(end_line, end_column),
        )
    }
}

impl FromStr for SelectionSpec {
    type Err = SelectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || SelectionParseError::Malformed(s.to_string());
        let (start, end) = s.split_once('-').ok_or_else(malformed)?;

        let parse_point = |point: &str| -> Result<(usize, Option<usize>), SelectionParseError> {
            let (line, column) = match point.split_once(':') {
                Some((line, column)) => (line, Some(column)),
                None => (point, None),
            };
            let line: usize = line.trim().parse().map_err(|_| malformed())?;
            if line == 0 {
                return Err(SelectionParseError::ZeroLine(s.to_string()));
            }
            let column = column
                .map(|c| c.trim().parse::<usize>().map_err(|_| malformed()))
                .transpose()?;
            Ok((line, column))
        };

        let (start_line, start_column) = parse_point(start)?;
        let (end_line, end_column) = parse_point(end)?;
        Ok(SelectionSpec {
            start_line,
            start_column: start_column.unwrap_or(0),
            end_line,
            end_column,
        })
    }
}
