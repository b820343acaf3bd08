//! Random permutation pass

use crate::sortlines::pipeline::mapper::LineMapper;
use crate::sortlines::shuffle::shuffle;
use rand::Rng;

/// Shuffles the sequence with a generator borrowed from the caller.
pub struct ShuffleMapper<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> ShuffleMapper<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        ShuffleMapper { rng }
    }
}

impl<R: Rng + ?Sized> LineMapper for ShuffleMapper<'_, R> {
    fn name(&self) -> &'static str {
        "shuffle"
    }

    fn map_lines(&mut self, mut lines: Vec<String>) -> Vec<String> {
        shuffle(&mut lines, &mut *self.rng);
        lines
    }
}
