//! Transformation pipeline for line operations
//!
//! This module provides:
//! - The operation table (`Operation`, `Pass`) - one tagged variant per exposed operation
//! - The executor (`PipelineExecutor`) - resolves an operation and runs its passes
//! - Low-level chaining (`Pipeline`, `LineMapper`) - ordered line transformations
//! - Concrete mappers for every pass kind

pub mod executor;
pub mod mapper;
pub mod mappers;
pub mod registry;

pub use executor::{ExecutionError, ExecutionOptions, PipelineExecutor};
pub use mapper::{LineMapper, Pipeline};
pub use registry::{Operation, Pass};

pub use mappers::{
    BlankLinesMapper, DuplicateFilter, DuplicateFilterMapper, ShuffleMapper, SortMapper,
    StructuralSortMapper,
};
