use thiserror::Error;

#[derive(Error, Debug)]
pub enum JokerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Dataset parsing error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Configuration parsing error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Cannot pick from an empty set of jokes")]
    EmptyInputError,

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl JokerError {
    /// Short message meant for the person at the terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            JokerError::IoError(e) => format!("Could not read a required file: {}", e),
            JokerError::ParseError(e) => format!("The joke data is malformed: {}", e),
            JokerError::ConfigParseError(e) => format!("The configuration file is malformed: {}", e),
            JokerError::EmptyInputError => "There are no jokes to pick from".to_string(),
            JokerError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            JokerError::IoError(_) => "Check that the dataset or config path exists and is readable",
            JokerError::ParseError(_) => {
                "The dataset must be a JSON array of objects with string fields type, setup and punchline"
            }
            JokerError::ConfigParseError(_) => "Check the TOML syntax of the configuration file",
            JokerError::EmptyInputError => "Point --dataset at a file that contains at least one joke",
            JokerError::InvalidConfigValueError { .. } => "Fix the value and run the command again",
        }
    }

    /// Every failure ends the invocation with the same status.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

pub type Result<T> = std::result::Result<T, JokerError>;
