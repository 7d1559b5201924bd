use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Record not found")]
    NotFound,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Insufficient stock for {upc}: requested {requested}, available {available}")]
    InsufficientStock {
        upc: String,
        requested: i32,
        available: i32,
    },
    #[error("Internal error: {0}")]
    Internal(String),
}
