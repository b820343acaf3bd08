//! Apply an operation to a selection inside a text buffer
//!
//! This is the host side of the library: it resolves the selection to a line
//! range, runs the operation over those lines, and splices the result back.
//! Everything outside the range is left byte-for-byte untouched.

use crate::sortlines::document::{Document, DocumentError};
use crate::sortlines::pipeline::{ExecutionError, ExecutionOptions, Operation, PipelineExecutor};
use crate::sortlines::selection::{resolve_line_range, Selection, SelectionOptions};
use sortlines_config::SortLinesConfig;
use std::ops::RangeInclusive;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProcessError {
    #[error(transparent)]
    Execution(#[from] ExecutionError),
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Result of processing a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// The range was transformed; `text` is the whole new buffer.
    Applied {
        text: String,
        range: RangeInclusive<usize>,
        lines_written: usize,
    },
    /// The selection did not resolve to a range, so nothing changed.
    Skipped,
}

impl ProcessOutcome {
    /// The new text, or `original` when the buffer was left alone.
    pub fn text_or<'a>(&'a self, original: &'a str) -> &'a str {
        match self {
            ProcessOutcome::Applied { text, .. } => text,
            ProcessOutcome::Skipped => original,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LineProcessor {
    executor: PipelineExecutor,
    selection_options: SelectionOptions,
}

impl LineProcessor {
    pub fn new(executor: PipelineExecutor, selection_options: SelectionOptions) -> Self {
        LineProcessor {
            executor,
            selection_options,
        }
    }

    pub fn from_config(config: &SortLinesConfig) -> Self {
        Self::new(
            PipelineExecutor::with_options(ExecutionOptions::from_config(config)),
            SelectionOptions::from_config(config),
        )
    }

    pub fn executor(&self) -> &PipelineExecutor {
        &self.executor
    }

    pub fn selection_options(&self) -> &SelectionOptions {
        &self.selection_options
    }

    /// Run the operation named `operation_name` over the selected lines of `text`.
    pub fn process_named(
        &self,
        text: &str,
        operation_name: &str,
        selection: &Selection,
    ) -> Result<ProcessOutcome, ProcessError> {
        let operation: Operation = operation_name.parse()?;
        self.process(text, operation, selection)
    }

    /// Run `operation` over the selected lines of `text`.
    pub fn process(
        &self,
        text: &str,
        operation: Operation,
        selection: &Selection,
    ) -> Result<ProcessOutcome, ProcessError> {
        let mut document = Document::from_text(text);
        match self.process_document(&mut document, operation, selection)? {
            Some((range, lines_written)) => Ok(ProcessOutcome::Applied {
                text: document.to_text(),
                range,
                lines_written,
            }),
            None => Ok(ProcessOutcome::Skipped),
        }
    }

    /// Transform `document` in place. Returns the replaced range and the number
    /// of lines written into it, or `None` when the selection was skipped.
    pub fn process_document(
        &self,
        document: &mut Document,
        operation: Operation,
        selection: &Selection,
    ) -> Result<Option<(RangeInclusive<usize>, usize)>, DocumentError> {
        let Some(range) =
            resolve_line_range(selection, document.line_count(), &self.selection_options)
        else {
            return Ok(None);
        };

        let lines = document.lines_in(&range)?;
        let output = self.executor.run(operation, lines);
        let written = output.len();
        document.replace_lines(range.clone(), output)?;
        Ok(Some((range, written)))
    }
}
