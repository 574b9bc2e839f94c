//! User entity record.

use crate::model::{now_epoch_ms, require_text, ValidationError};
use serde::{Deserialize, Serialize};

/// Registered borrower.
///
/// Identity is the caller-supplied `id`. `name` and `email` are the only
/// fields the registry mutates after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Caller-supplied identity used for lookups.
    pub id: String,
    pub name: String,
    pub email: String,
    /// Registration time in unix epoch milliseconds.
    pub register_date: i64,
}

impl User {
    /// Creates a user registered now.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self::with_register_date(id, name, email, now_epoch_ms())
    }

    /// Creates a user with an explicit registration time.
    ///
    /// Used by import paths where the registration already happened.
    pub fn with_register_date(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        register_date: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            register_date,
        }
    }

    /// Checks that every required field carries content.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("id", &self.id)?;
        require_text("name", &self.name)?;
        require_text("email", &self.email)?;
        Ok(())
    }
}
