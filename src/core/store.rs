use crate::core::{DatasetSource, IndexPicker, Joke};
use crate::utils::error::{JokerError, Result};
use std::collections::BTreeSet;

/// Loads joke records from a dataset source.
pub struct JokeStore<S: DatasetSource> {
    source: S,
}

impl<S: DatasetSource> JokeStore<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Reads and parses the whole dataset. Called once per invocation.
    pub fn load_all(&self) -> Result<Vec<Joke>> {
        tracing::debug!("Loading jokes from {}", self.source.describe());
        let raw = self.source.read()?;
        let jokes: Vec<Joke> = serde_json::from_slice(&raw)?;
        tracing::debug!("Loaded {} jokes", jokes.len());
        Ok(jokes)
    }
}

/// Jokes whose category equals `category` exactly, in dataset order.
pub fn filter_by_category<'a>(jokes: &'a [Joke], category: &str) -> Vec<&'a Joke> {
    jokes.iter().filter(|joke| joke.category == category).collect()
}

/// Uniformly random element of `items`; `EmptyInputError` when there is none.
pub fn pick_random<'a, T, P>(items: &'a [T], picker: &mut P) -> Result<&'a T>
where
    P: IndexPicker + ?Sized,
{
    if items.is_empty() {
        return Err(JokerError::EmptyInputError);
    }
    let index = picker.pick_index(items.len());
    items.get(index).ok_or(JokerError::EmptyInputError)
}

/// Each category once, sorted.
pub fn distinct_categories(jokes: &[Joke]) -> BTreeSet<&str> {
    jokes.iter().map(|joke| joke.category.as_str()).collect()
}
