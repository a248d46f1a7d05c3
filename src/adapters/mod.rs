// Adapters layer: concrete dataset sources and randomness providers.

pub mod dataset;
pub mod rng;

pub use dataset::{EmbeddedDataset, FileDataset};
pub use rng::{RandPicker, SequencePicker};
