//! Line mapper trait and pipeline chaining
//!
//! A `LineMapper` is one transformation pass: it takes the current line sequence
//! and returns the next one. `Pipeline` owns an ordered list of mappers and feeds
//! the output of each into the next.
//!
//! # Examples
//!
//! ```ignore
//! let mut pipeline = Pipeline::new()
//!     .add_transformation(SortMapper::new(Comparator::Lexicographic))
//!     .add_transformation(DuplicateFilterMapper::new(DuplicateFilter::RemoveDuplicates));
//!
//! let lines = pipeline.run(vec!["b".into(), "a".into(), "b".into()]);
//! ```

/// One transformation pass over a line sequence.
///
/// Implementations only select, reorder or drop whole lines; the text of a line
/// is never modified. Every mapper is total: any input, including an empty one,
/// produces an output.
pub trait LineMapper {
    /// Name used in trace output.
    fn name(&self) -> &'static str;

    /// Transform the line sequence.
    fn map_lines(&mut self, lines: Vec<String>) -> Vec<String>;
}

/// Ordered chain of mappers, applied left to right.
///
/// The lifetime lets a mapper borrow state from the caller, such as the random
/// generator used by the shuffle pass.
pub struct Pipeline<'a> {
    transformations: Vec<Box<dyn LineMapper + 'a>>,
}

impl<'a> Pipeline<'a> {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Pipeline {
            transformations: Vec::new(),
        }
    }

    /// Add a transformation to the end of the chain.
    pub fn add_transformation<T: LineMapper + 'a>(mut self, mapper: T) -> Self {
        self.transformations.push(Box::new(mapper));
        self
    }

    /// Names of the transformations, in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.transformations.iter().map(|m| m.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.transformations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transformations.is_empty()
    }

    /// Run every transformation in order.
    pub fn run(&mut self, mut lines: Vec<String>) -> Vec<String> {
        for mapper in self.transformations.iter_mut() {
            let before = lines.len();
            lines = mapper.map_lines(lines);
            tracing::trace!(
                stage = mapper.name(),
                before,
                after = lines.len(),
                "pipeline stage complete"
            );
        }
        lines
    }
}

impl Default for Pipeline<'_> {
    fn default() -> Self {
        Self::new()
    }
}
