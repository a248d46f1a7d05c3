pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{EmbeddedDataset, FileDataset, RandPicker, SequencePicker};
pub use config::Settings;
pub use crate::core::{joker::Joker, store::JokeStore, Joke, Outcome, Request};
pub use utils::error::{JokerError, Result};
