//! LineMapper implementations for line transformations
//!
//! This module contains concrete implementations of the LineMapper trait, one
//! per kind of pass an operation can be composed of.

pub mod blank_lines;
pub mod duplicates;
pub mod shuffle;
pub mod sort;
pub mod structural;

pub use blank_lines::BlankLinesMapper;
pub use duplicates::{DuplicateFilter, DuplicateFilterMapper};
pub use shuffle::ShuffleMapper;
pub use sort::SortMapper;
pub use structural::StructuralSortMapper;
