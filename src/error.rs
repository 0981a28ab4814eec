use thiserror::Error;

#[derive(Error, Debug)]
pub enum PeticaoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid amount: {0}")]
    Amount(String),

    #[error("Amount out of domain: {0}")]
    OutOfDomain(String),

    #[error("Invalid date: {0}")]
    Date(String),

    #[error("Unknown bank: {0}")]
    UnknownBank(String),

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, PeticaoError>;
