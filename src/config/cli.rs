use crate::core::Request;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "joker")]
#[command(about = "your joke supplier")]
#[command(
    long_about = "joker is a CLI that provides you with a random joke or a joke from a specific category if you specify. For example:\n\n   joker\n   joker dad\n   joker -l"
)]
pub struct CliConfig {
    /// Only pick jokes from this category
    pub category: Option<String>,

    /// Get all available joke categories
    #[arg(short, long)]
    pub list: bool,

    /// Read jokes from this JSON file instead of the bundled set
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed the random pick for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    /// `--list` takes precedence over a category argument. An empty category means any joke.
    pub fn request(&self) -> Request {
        if self.list {
            Request::ListCategories
        } else {
            Request::TellJoke {
                category: self.category.clone().filter(|c| !c.is_empty()),
            }
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(dataset) = &self.dataset {
            validate_path("dataset", &dataset.to_string_lossy())?;
        }
        Ok(())
    }
}
