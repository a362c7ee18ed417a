use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to write CSV file: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;
