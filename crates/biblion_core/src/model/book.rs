//! Book entity record.

use crate::model::{require_text, ValidationError};
use serde::{Deserialize, Serialize};

/// Catalog entry for one title.
///
/// Identity is the caller-supplied `isbn`. Records are immutable once added;
/// correcting a book means removing and re-adding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Caller-supplied identity used for lookups and lending checks.
    pub isbn: String,
    pub title: String,
    pub author: String,
}

impl Book {
    /// Creates a book record. Write paths call [`Book::validate`] before
    /// storing it.
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
        }
    }

    /// Checks that every required field carries content.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("isbn", &self.isbn)?;
        require_text("title", &self.title)?;
        require_text("author", &self.author)?;
        Ok(())
    }
}
