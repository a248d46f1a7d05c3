#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::{EmbeddedDataset, FileDataset, RandPicker};
use crate::core::joker::Joker;
use crate::core::store::JokeStore;
use crate::core::DatasetSource;
use crate::utils::validation::{validate_path, Validate};
use crate::Result;
use std::path::PathBuf;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// Effective settings after merging command-line flags over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub dataset_path: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl Settings {
    /// Flag values win; anything unset falls back to the file, then to defaults.
    pub fn merge(
        dataset_flag: Option<PathBuf>,
        seed_flag: Option<u64>,
        file: Option<&TomlConfig>,
    ) -> Self {
        let dataset_path =
            dataset_flag.or_else(|| file.and_then(|f| f.dataset_path()).map(PathBuf::from));
        let seed = seed_flag.or_else(|| file.and_then(|f| f.seed()));
        Self { dataset_path, seed }
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };
        let settings = Self::merge(cli.dataset.clone(), cli.seed, file.as_ref());
        settings.validate()?;
        Ok(settings)
    }

    pub fn dataset_source(&self) -> Box<dyn DatasetSource> {
        match &self.dataset_path {
            Some(path) => Box::new(FileDataset::new(path.clone())),
            None => Box::new(EmbeddedDataset),
        }
    }

    pub fn picker(&self) -> RandPicker {
        match self.seed {
            Some(seed) => RandPicker::seeded(seed),
            None => RandPicker::from_os_rng(),
        }
    }

    pub fn build_joker(&self) -> Joker<Box<dyn DatasetSource>, RandPicker> {
        Joker::new(JokeStore::new(self.dataset_source()), self.picker())
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.dataset_path {
            validate_path("dataset", &path.to_string_lossy())?;
        }
        Ok(())
    }
}
