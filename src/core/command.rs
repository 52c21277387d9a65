use std::fmt;
use std::fmt::{Display, Formatter};
use async_trait::async_trait;
use crate::core::catalog::CatalogError;

// CommandError mirrors the service error taxonomy at the command layer so
// the controller can map outcomes without reaching into the domain types.
#[derive(Debug)]
pub enum CommandError {
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

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<CatalogError> for CommandError {
    fn from(other: CatalogError) -> Self {
        match other {
            CatalogError::InvalidInput { message } => {
                CommandError::InvalidInput { message }
            }
            CatalogError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            CatalogError::Storage { message } => {
                CommandError::Storage { message }
            }
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::InvalidInput { message } => {
                write!(f, "{}", message)
            }
            CommandError::NotFound { message } => {
                write!(f, "{}", message)
            }
            CommandError::Storage { message } => {
                write!(f, "{}", message)
            }
        }
    }
}
