use thiserror::Error;

#[derive(Error, Debug)]
pub enum MineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("No usable text in input")]
    EmptyText,
}

pub type Result<T> = std::result::Result<T, MineError>;

impl From<toml::de::Error> for MineError {
    fn from(err: toml::de::Error) -> Self {
        MineError::Config(err.to_string())
    }
}
