use serde::Deserialize;

/// One joke record as stored in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Joke {
    #[serde(rename = "type")]
    pub category: String,
    pub setup: String,
    pub punchline: String,
}

impl Joke {
    pub fn new(
        category: impl Into<String>,
        setup: impl Into<String>,
        punchline: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            setup: setup.into(),
            punchline: punchline.into(),
        }
    }
}

/// What a single invocation asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    ListCategories,
    TellJoke { category: Option<String> },
}

/// What a single invocation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Listed(usize),
    Told(Joke),
    NoMatch(String),
}
