//! Loan entity record and lifecycle state.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another loan.
//! - The only state transition is `Started` -> `Finished`.
//! - Loan records are append-only history; returning a book finishes its
//!   loan instead of deleting it.

use crate::model::{now_epoch_ms, Book, User};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one recorded loan.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type LoanId = Uuid;

/// Lifecycle state of a loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanState {
    /// The book is out with the borrower.
    Started,
    /// The book came back. Terminal.
    Finished,
}

/// One lending of one book to one user.
///
/// `user` and `book` are value snapshots taken when the loan started; the
/// lending checks match on their keys (`user.id`, `book.isbn`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    /// Stable id used for linking and auditing.
    pub uuid: LoanId,
    pub user: User,
    pub book: Book,
    /// Loan start time in unix epoch milliseconds.
    pub loan_date: i64,
    pub state: LoanState,
}

impl Loan {
    /// Starts a loan dated now.
    pub fn new(user: User, book: Book) -> Self {
        Self::with_loan_date(user, book, now_epoch_ms())
    }

    /// Starts a loan with an explicit date.
    ///
    /// Used by import paths where the lending already happened.
    pub fn with_loan_date(user: User, book: Book, loan_date: i64) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            user,
            book,
            loan_date,
            state: LoanState::Started,
        }
    }

    /// Marks the loan finished. There is no way back to `Started`.
    pub fn finish(&mut self) {
        self.state = LoanState::Finished;
    }

    /// Returns whether the book is still out under this loan.
    pub fn is_active(&self) -> bool {
        self.state == LoanState::Started
    }
}
