//! Core use-case services.
//!
//! ## Service map
//! - `book_service.rs`: book catalog keyed by ISBN.
//! - `user_service.rs`: user registry keyed by user id.
//! - `loan_service.rs`: loan lifecycle and the one-active-loan-per-book rule.
//!
//! ## Conventions
//! - Each service owns its collection for the process lifetime; the host
//!   injects catalog/registry handles into the loan service.
//! - Nothing here persists, locks, or spawns; one thread of control.

pub mod book_service;
pub mod loan_service;
pub mod user_service;

pub use book_service::BookService;
pub use loan_service::LoanService;
pub use user_service::UserService;

use crate::model::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error shared by catalog, registry and lending operations.
///
/// One enum across all three services keeps collaborator failures intact
/// when they cross a service boundary: the lending caller sees the
/// originating kind and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// A required input was blank after trimming.
    InvalidArgument(String),
    /// A keyed lookup found no match.
    NotFound(String),
    /// A borrow request hit a book that is already out.
    Conflict(String),
    /// A diagnostic query ran against an empty collection.
    OutOfRange(String),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(message)
            | Self::NotFound(message)
            | Self::Conflict(message)
            | Self::OutOfRange(message) => write!(f, "{message}"),
        }
    }
}

impl Error for ServiceError {}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::InvalidArgument(value.to_string())
    }
}
