//! Operation table for line pipelines
//!
//! Each externally exposed operation is one variant of [`Operation`]. An
//! operation maps to a fixed, ordered list of [`Pass`]es; the executor turns
//! those passes into mappers. Names are kebab-case and are what hosts and the
//! CLI use to select an operation.

use crate::sortlines::compare::Comparator;
use crate::sortlines::pipeline::executor::ExecutionError;
use crate::sortlines::pipeline::mappers::DuplicateFilter;
use std::fmt;
use std::str::FromStr;

/// One step of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Sort(Comparator),
    Filter(DuplicateFilter),
    Shuffle,
    Structural,
}

/// Every operation a host can run on a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Normal,
    Unique,
    Reverse,
    CaseInsensitive,
    CaseInsensitiveUnique,
    LineLength,
    LineLengthReverse,
    VariableLength,
    VariableLengthReverse,
    Natural,
    Shuffle,
    Structural,
    RemoveDuplicates,
    KeepDuplicates,
    KeepUnique,
}

impl Operation {
    /// All operations, in the order they are listed to users.
    pub const ALL: [Operation; 15] = [
        Operation::Normal,
        Operation::Unique,
        Operation::Reverse,
        Operation::CaseInsensitive,
        Operation::CaseInsensitiveUnique,
        Operation::LineLength,
        Operation::LineLengthReverse,
        Operation::VariableLength,
        Operation::VariableLengthReverse,
        Operation::Natural,
        Operation::Shuffle,
        Operation::Structural,
        Operation::RemoveDuplicates,
        Operation::KeepDuplicates,
        Operation::KeepUnique,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Normal => "normal",
            Operation::Unique => "unique",
            Operation::Reverse => "reverse",
            Operation::CaseInsensitive => "case-insensitive",
            Operation::CaseInsensitiveUnique => "case-insensitive-unique",
            Operation::LineLength => "line-length",
            Operation::LineLengthReverse => "line-length-reverse",
            Operation::VariableLength => "variable-length",
            Operation::VariableLengthReverse => "variable-length-reverse",
            Operation::Natural => "natural",
            Operation::Shuffle => "shuffle",
            Operation::Structural => "structural",
            Operation::RemoveDuplicates => "remove-duplicates",
            Operation::KeepDuplicates => "keep-duplicates",
            Operation::KeepUnique => "keep-unique",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Operation::Normal => "Sort lines in ascending order",
            Operation::Unique => "Sort lines and drop exact duplicates",
            Operation::Reverse => "Sort lines in descending order",
            Operation::CaseInsensitive => "Sort lines ignoring case and accents",
            Operation::CaseInsensitiveUnique => {
                "Sort lines ignoring case and accents, then drop exact duplicates"
            }
            Operation::LineLength => "Sort lines from shortest to longest",
            Operation::LineLengthReverse => "Sort lines from longest to shortest",
            Operation::VariableLength => {
                "Sort lines by the length of the text before the last '='"
            }
            Operation::VariableLengthReverse => {
                "Sort lines by the length of the text before the last '=', longest first"
            }
            Operation::Natural => "Sort lines comparing embedded numbers by value",
            Operation::Shuffle => "Shuffle lines into a random order",
            Operation::Structural => {
                "Sort each indentation level, keeping nested lines under their parent"
            }
            Operation::RemoveDuplicates => "Drop repeated lines, keeping the first occurrence",
            Operation::KeepDuplicates => "Keep one copy of each line that appears more than once",
            Operation::KeepUnique => "Keep only lines that appear exactly once",
        }
    }

    /// The passes run for this operation, in order.
    pub fn passes(self) -> &'static [Pass] {
        use Comparator as C;
        use DuplicateFilter as F;

        match self {
            Operation::Normal => &[Pass::Sort(C::Lexicographic)],
            Operation::Unique => &[
                Pass::Sort(C::Lexicographic),
                Pass::Filter(F::RemoveDuplicates),
            ],
            Operation::Reverse => &[Pass::Sort(C::Reverse)],
            Operation::CaseInsensitive => &[Pass::Sort(C::CaseInsensitive)],
            Operation::CaseInsensitiveUnique => &[
                Pass::Sort(C::CaseInsensitive),
                Pass::Filter(F::RemoveDuplicates),
            ],
            Operation::LineLength => &[Pass::Sort(C::LineLength)],
            Operation::LineLengthReverse => &[Pass::Sort(C::LineLengthReverse)],
            Operation::VariableLength => &[Pass::Sort(C::VariableLength)],
            Operation::VariableLengthReverse => &[Pass::Sort(C::VariableLengthReverse)],
            Operation::Natural => &[Pass::Sort(C::Natural)],
            Operation::Shuffle => &[Pass::Shuffle],
            Operation::Structural => &[Pass::Structural],
            Operation::RemoveDuplicates => &[Pass::Filter(F::RemoveDuplicates)],
            Operation::KeepDuplicates => &[Pass::Filter(F::KeepDuplicates)],
            Operation::KeepUnique => &[Pass::Filter(F::KeepUnique)],
        }
    }

    /// Look an operation up by name. `yaml` is accepted for `structural`.
    pub fn from_name(name: &str) -> Option<Operation> {
        if name == "yaml" {
            return Some(Operation::Structural);
        }
        Operation::ALL.into_iter().find(|op| op.name() == name)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ExecutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::from_name(s).ok_or_else(|| ExecutionError::OperationNotFound(s.to_string()))
    }
}
