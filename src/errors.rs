use std::io;

use thiserror::Error;

use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Config(_) => 2,
            AppError::Io(_) => 3,
            AppError::Domain(_) => 4,
            AppError::Database(_) | AppError::Pool(_) | AppError::Migration(_) => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_display_is_transparent() {
        let err: AppError = DomainError::NotFound.into();
        assert_eq!(err.to_string(), "Record not found");
    }

    #[test]
    fn io_error_maps_to_app_io() {
        let err: AppError = io::Error::new(io::ErrorKind::UnexpectedEof, "closed").into();
        assert!(matches!(err, AppError::Io(_)));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn diesel_error_maps_to_app_database() {
        let err: AppError = diesel::result::Error::RollbackTransaction.into();
        assert!(matches!(err, AppError::Database(_)));
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn config_error_display() {
        assert_eq!(
            AppError::Config("DATABASE_URL must be set".to_string()).to_string(),
            "Configuration error: DATABASE_URL must be set"
        );
    }

    #[test]
    fn diesel_not_found_maps_to_domain_not_found() {
        let err: DomainError = diesel::result::Error::NotFound.into();
        assert!(matches!(err, DomainError::NotFound));
    }

    #[test]
    fn insufficient_stock_display() {
        let err = DomainError::InsufficientStock {
            upc: "012345678910".to_string(),
            requested: 20,
            available: 15,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for 012345678910: requested 20, available 15"
        );
    }
}
