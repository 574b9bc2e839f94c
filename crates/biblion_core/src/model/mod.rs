//! Domain model for books, users and loans.
//!
//! # Responsibility
//! - Define the entity records shared by catalog, registry and lending logic.
//! - Own required-field validation for entity construction.
//!
//! # Invariants
//! - `Book.isbn` and `User.id` are caller-supplied identities, stored as given.
//! - A `Loan` captures user/book snapshots at lending time; later registry
//!   edits do not rewrite recorded loans.

pub mod book;
pub mod loan;
pub mod user;

pub use book::Book;
pub use loan::{Loan, LoanId, LoanState};
pub use user::User;

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

/// Validation failure for a required entity field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field was empty or whitespace-only.
    BlankField(&'static str),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField(field) => {
                write!(f, "required field `{field}` must not be blank")
            }
        }
    }
}

impl Error for ValidationError {}

/// Checks that a required text field carries non-whitespace content.
///
/// Trimming applies to the check only; stored values keep their original form.
pub fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankField(field));
    }
    Ok(())
}

/// Current wall-clock time in unix epoch milliseconds.
///
/// A clock set before the unix epoch collapses to 0 instead of failing.
pub fn now_epoch_ms() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_millis() as i64,
        Err(_) => 0,
    }
}
