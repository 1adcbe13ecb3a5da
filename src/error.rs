use thiserror::Error;

#[derive(Error, Debug)]
pub enum DartForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Export Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Encoding Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Veuillez entrer un nombre valide.")]
    NotANumber(String),

    #[error("Veuillez entrer un score entre {min} et {max}.")]
    OutOfRange { score: i32, min: i32, max: i32 },

    #[error("Invalid Notation: '{0}'")]
    InvalidNotation(String),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type DfResult<T> = Result<T, DartForgeError>;
