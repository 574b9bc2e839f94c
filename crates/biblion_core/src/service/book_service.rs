//! Book catalog service.
//!
//! # Responsibility
//! - Own the in-memory book collection, keyed by ISBN.
//! - Provide the lookup-or-fail contract the lending service consumes.
//!
//! # Invariants
//! - Iteration order is insertion order.
//! - Duplicate ISBNs are accepted; lookups resolve to the first match.

use crate::model::{require_text, Book};
use crate::service::{ServiceError, ServiceResult};
use log::info;

/// In-memory book catalog.
#[derive(Debug, Default)]
pub struct BookService {
    books: Vec<Book>,
}

impl BookService {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a book after validating every required field.
    ///
    /// ISBN uniqueness is not checked here; see the module invariants.
    pub fn add_book(&mut self, isbn: &str, title: &str, author: &str) -> ServiceResult<()> {
        let book = Book::new(isbn, title, author);
        book.validate()?;
        self.books.push(book);
        info!("event=book_added module=catalog status=ok isbn={isbn}");
        Ok(())
    }

    /// Returns the first book matching `isbn`.
    pub fn book_by_isbn(&self, isbn: &str) -> ServiceResult<&Book> {
        require_text("isbn", isbn)?;
        self.books
            .iter()
            .find(|book| book.isbn == isbn)
            .ok_or_else(|| book_not_found(isbn))
    }

    /// Removes the first book matching `isbn`.
    pub fn remove_book(&mut self, isbn: &str) -> ServiceResult<()> {
        require_text("isbn", isbn)?;
        let index = self
            .books
            .iter()
            .position(|book| book.isbn == isbn)
            .ok_or_else(|| book_not_found(isbn))?;
        self.books.remove(index);
        info!("event=book_removed module=catalog status=ok isbn={isbn}");
        Ok(())
    }

    /// All books in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }
}

fn book_not_found(isbn: &str) -> ServiceError {
    ServiceError::NotFound(format!("book with isbn `{isbn}` was not found"))
}
