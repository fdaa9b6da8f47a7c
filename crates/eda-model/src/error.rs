use thiserror::Error;

#[derive(Debug, Error)]
pub enum EdaError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, EdaError>;
