//! Main module for sortlines library functionality

pub mod compare;
pub mod document;
pub mod filters;
pub mod pipeline;
pub mod processor;
pub mod selection;
pub mod shuffle;
pub mod tree;

pub use compare::Comparator;
pub use pipeline::{ExecutionError, ExecutionOptions, Operation, PipelineExecutor};
pub use processor::{LineProcessor, ProcessError, ProcessOutcome};
pub use tree::{build_forest, flatten, sort_forest, Forest, IndentationNode};
