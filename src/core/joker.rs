use crate::core::store::{distinct_categories, filter_by_category, pick_random, JokeStore};
use crate::core::{DatasetSource, IndexPicker, Outcome, Request};
use crate::utils::error::Result;
use std::io::Write;

pub struct Joker<S: DatasetSource, P: IndexPicker> {
    store: JokeStore<S>,
    picker: P,
}

impl<S: DatasetSource, P: IndexPicker> Joker<S, P> {
    pub fn new(store: JokeStore<S>, picker: P) -> Self {
        Self { store, picker }
    }

    /// Serves one request, writing user-facing text to `out`.
    pub fn run<W: Write>(&mut self, request: &Request, out: &mut W) -> Result<Outcome> {
        let jokes = self.store.load_all()?;

        match request {
            Request::ListCategories => {
                let categories = distinct_categories(&jokes);
                for category in &categories {
                    writeln!(out, "{}", category)?;
                }
                tracing::debug!("Listed {} categories", categories.len());
                Ok(Outcome::Listed(categories.len()))
            }
            Request::TellJoke { category: Some(category) } => {
                let matching = filter_by_category(&jokes, category);
                tracing::debug!("{} jokes match category '{}'", matching.len(), category);

                if matching.is_empty() {
                    write!(
                        out,
                        "No jokes found for category: {}\n\nUse 'joker -l' to get all available joke categories\n",
                        category
                    )?;
                    return Ok(Outcome::NoMatch(category.clone()));
                }

                let joke = *pick_random(&matching, &mut self.picker)?;
                write!(out, "{}\n\n{}\n\n", joke.setup, joke.punchline)?;
                Ok(Outcome::Told(joke.clone()))
            }
            Request::TellJoke { category: None } => {
                let joke = pick_random(&jokes, &mut self.picker)?;
                write!(out, "{}\n\n{}\n\n", joke.setup, joke.punchline)?;
                Ok(Outcome::Told(joke.clone()))
            }
        }
    }
}
