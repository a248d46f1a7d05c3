use crate::domain::ports::DatasetSource;
use crate::utils::error::Result;
use std::fs;
use std::path::PathBuf;

const BUNDLED_JOKES: &str = include_str!("../../data/jokes.json");

/// The joke collection compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedDataset;

impl DatasetSource for EmbeddedDataset {
    fn read(&self) -> Result<Vec<u8>> {
        Ok(BUNDLED_JOKES.as_bytes().to_vec())
    }

    fn describe(&self) -> String {
        "bundled dataset".to_string()
    }
}

/// A JSON dataset on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileDataset {
    path: PathBuf,
}

impl FileDataset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for FileDataset {
    fn read(&self) -> Result<Vec<u8>> {
        let data = fs::read(&self.path)?;
        Ok(data)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
