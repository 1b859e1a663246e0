use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Configuration error in '{path}': {reason}")]
    Config { path: String, reason: String },
}
