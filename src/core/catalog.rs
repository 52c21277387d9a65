use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

// CatalogError classifies every failure the catalog service can produce:
// a rejected payload, a missing record, or a failure inside the storage
// engine. Storage errors are terminal for the request and never retried.
#[derive(Debug)]
pub enum CatalogError {
    InvalidInput {
        message: String,
    },
    NotFound {
        message: String,
    },
    Storage {
        message: String,
    },
}

impl CatalogError {
    pub fn invalid_input(message: &str) -> CatalogError {
        CatalogError::InvalidInput { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> CatalogError {
        CatalogError::NotFound { message: message.to_string() }
    }

    pub fn storage(message: &str) -> CatalogError {
        CatalogError::Storage { message: message.to_string() }
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::InvalidInput { message } => {
                write!(f, "{}", message)
            }
            CatalogError::NotFound { message } => {
                write!(f, "{}", message)
            }
            CatalogError::Storage { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl Error for CatalogError {}

/// A specialized Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
