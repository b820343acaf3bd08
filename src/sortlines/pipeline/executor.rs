//! Pipeline executor that runs named operations

use crate::sortlines::pipeline::mapper::Pipeline;
use crate::sortlines::pipeline::mappers::*;
use crate::sortlines::pipeline::registry::{Operation, Pass};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortlines_config::SortLinesConfig;

/// Errors during pipeline execution
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    #[error("Operation '{0}' not found")]
    OperationNotFound(String),
}

/// Host-supplied switches read by the executor, never by the mappers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionOptions {
    /// Strip blank lines before the operation's own passes.
    pub filter_blank_lines: bool,
    /// Seed for the shuffle pass. `None` uses the thread-local generator.
    pub shuffle_seed: Option<u64>,
}

impl ExecutionOptions {
    pub fn from_config(config: &SortLinesConfig) -> Self {
        ExecutionOptions {
            filter_blank_lines: config.pipeline.filter_blank_lines,
            shuffle_seed: config.shuffle.seed,
        }
    }
}

/// Executes operations over line sequences
#[derive(Debug, Clone, Default)]
pub struct PipelineExecutor {
    options: ExecutionOptions,
}

impl PipelineExecutor {
    /// Create executor with default options
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ExecutionOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExecutionOptions {
        &self.options
    }

    /// Execute an operation selected by name
    pub fn execute(
        &self,
        operation_name: &str,
        lines: Vec<String>,
    ) -> Result<Vec<String>, ExecutionError> {
        let operation: Operation = operation_name.parse()?;
        Ok(self.run(operation, lines))
    }

    /// Run an operation, drawing randomness from the configured seed or the
    /// thread-local generator.
    pub fn run(&self, operation: Operation, lines: Vec<String>) -> Vec<String> {
        match self.options.shuffle_seed {
            Some(seed) => self.run_with_rng(operation, lines, &mut StdRng::seed_from_u64(seed)),
            None => self.run_with_rng(operation, lines, &mut rand::rng()),
        }
    }

    /// Run an operation with an explicit random source.
    pub fn run_with_rng<R>(
        &self,
        operation: Operation,
        lines: Vec<String>,
        rng: &mut R,
    ) -> Vec<String>
    where
        R: Rng + ?Sized,
    {
        let input_len = lines.len();
        let mut pipeline = self.build_pipeline(operation, rng);
        tracing::debug!(
            operation = operation.name(),
            stages = ?pipeline.stage_names(),
            lines = input_len,
            "running operation"
        );

        let output = pipeline.run(lines);
        tracing::debug!(
            operation = operation.name(),
            input = input_len,
            output = output.len(),
            "operation complete"
        );
        output
    }

    /// Assemble the mapper chain for an operation.
    pub fn build_pipeline<'a, R>(&self, operation: Operation, rng: &'a mut R) -> Pipeline<'a>
    where
        R: Rng + ?Sized,
    {
        let mut pipeline = Pipeline::new();
        if self.options.filter_blank_lines {
            pipeline = pipeline.add_transformation(BlankLinesMapper::new());
        }

        // At most one shuffle pass exists per operation, so the generator is
        // handed to the first one.
        let mut rng = Some(rng);
        for pass in operation.passes() {
            pipeline = match *pass {
                Pass::Sort(comparator) => pipeline.add_transformation(SortMapper::new(comparator)),
                Pass::Filter(filter) => {
                    pipeline.add_transformation(DuplicateFilterMapper::new(filter))
                }
                Pass::Structural => pipeline.add_transformation(StructuralSortMapper::new()),
                Pass::Shuffle => match rng.take() {
                    Some(rng) => pipeline.add_transformation(ShuffleMapper::new(rng)),
                    None => pipeline,
                },
            };
        }
        pipeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_executor_default() {
        let executor = PipelineExecutor::default();
        assert_eq!(executor.options(), &ExecutionOptions::default());
    }

    #[test]
    fn test_execute_by_name() {
        let executor = PipelineExecutor::new();
        let result = executor.execute("normal", lines(&["b", "c", "a"]));
        assert_eq!(result.unwrap(), lines(&["a", "b", "c"]));
    }

    #[test]
    fn test_execute_nonexistent_operation() {
        let executor = PipelineExecutor::new();
        let result = executor.execute("nonexistent", lines(&["a"]));

        match result.unwrap_err() {
            ExecutionError::OperationNotFound(name) => assert_eq!(name, "nonexistent"),
        }
    }

    #[test]
    fn test_unique_sorts_then_dedupes() {
        let executor = PipelineExecutor::new();
        let output = executor.run(Operation::Unique, lines(&["b", "a", "b", "a"]));
        assert_eq!(output, lines(&["a", "b"]));
    }

    #[test]
    fn test_blank_lines_filtered_first() {
        let executor = PipelineExecutor::with_options(ExecutionOptions {
            filter_blank_lines: true,
            ..Default::default()
        });
        let output = executor.run(Operation::Normal, lines(&["b", "", "  ", "a"]));
        assert_eq!(output, lines(&["a", "b"]));
    }

    #[test]
    fn test_blank_lines_kept_by_default() {
        let executor = PipelineExecutor::new();
        let output = executor.run(Operation::Normal, lines(&["b", "", "a"]));
        assert_eq!(output, lines(&["", "a", "b"]));
    }

    #[test]
    fn test_pipeline_stages() {
        let executor = PipelineExecutor::with_options(ExecutionOptions {
            filter_blank_lines: true,
            ..Default::default()
        });
        let mut rng = StdRng::seed_from_u64(0);
        let pipeline = executor.build_pipeline(Operation::CaseInsensitiveUnique, &mut rng);
        assert_eq!(
            pipeline.stage_names(),
            vec!["blank-lines", "sort", "remove-duplicates"]
        );
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible() {
        let executor = PipelineExecutor::with_options(ExecutionOptions {
            shuffle_seed: Some(1234),
            ..Default::default()
        });
        let input: Vec<String> = (0..30).map(|i| format!("line {}", i)).collect();

        let first = executor.run(Operation::Shuffle, input.clone());
        let second = executor.run(Operation::Shuffle, input.clone());
        assert_eq!(first, second);

        let mut sorted = first.clone();
        sorted.sort();
        let mut expected = input;
        expected.sort();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_empty_input_for_every_operation() {
        let executor = PipelineExecutor::new();
        for op in Operation::ALL {
            assert!(executor.run(op, Vec::new()).is_empty(), "{}", op);
        }
    }

    #[test]
    fn test_single_line_unchanged_for_every_operation() {
        let executor = PipelineExecutor::new();
        for op in Operation::ALL {
            if op == Operation::KeepDuplicates {
                continue;
            }
            assert_eq!(executor.run(op, lines(&["solo"])), lines(&["solo"]), "{}", op);
        }
    }

    #[test]
    fn test_error_display() {
        let err = ExecutionError::OperationNotFound("test".into());
        assert_eq!(format!("{}", err), "Operation 'test' not found");
    }
}
