use beam_core::BeamError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Beam(#[from] BeamError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to format output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),
}

impl CliError {
    /// Structured JSON form of the underlying library error, if any
    pub fn details_json(&self) -> Option<String> {
        match self {
            CliError::Beam(e) => serde_json::to_string_pretty(e).ok(),
            _ => None,
        }
    }
}
