pub mod joker;
pub mod store;

pub use crate::domain::model::{Joke, Outcome, Request};
pub use crate::domain::ports::{DatasetSource, IndexPicker};
pub use crate::utils::error::Result;
