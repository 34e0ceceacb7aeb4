use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Investment not found: {0}")]
    NotFound(String),

    #[error("Malformed record at line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        let message = err.to_string();
        let line = err.position().map(|pos| pos.line()).unwrap_or(0);
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => LedgerError::Storage(io_err),
            _ => LedgerError::Parse { line, message },
        }
    }
}
