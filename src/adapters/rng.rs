use crate::domain::ports::IndexPicker;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform picker backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandPicker<R: Rng = StdRng> {
    rng: R,
}

impl RandPicker<StdRng> {
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Same seed, same dataset, same picks.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> IndexPicker for RandPicker<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Replays a fixed sequence of indices, wrapping each into range.
///
/// Cycles back to the start once exhausted. Intended for deterministic tests.
#[derive(Debug, Clone)]
pub struct SequencePicker {
    indices: Vec<usize>,
    cursor: usize,
}

impl SequencePicker {
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self {
            indices: indices.into(),
            cursor: 0,
        }
    }
}

impl IndexPicker for SequencePicker {
    fn pick_index(&mut self, len: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let raw = self.indices[self.cursor % self.indices.len()];
        self.cursor += 1;
        raw % len
    }
}
