//! Loan lifecycle service.
//!
//! # Responsibility
//! - Resolve borrower and book through the injected registry/catalog.
//! - Enforce that one ISBN has at most one active loan at a time.
//! - Keep the full loan history, finished loans included.
//!
//! # Invariants
//! - A loan only moves `Started` -> `Finished`; records are never deleted.
//! - Borrow order is: validate inputs, resolve user, resolve book, check the
//!   active-loan rule, append. A failed step leaves the history untouched.
//! - Registry/catalog failures surface to callers unchanged.

use crate::model::{require_text, Loan, LoanId};
use crate::service::{BookService, ServiceError, ServiceResult, UserService};
use log::info;
use std::cell::RefCell;
use std::rc::Rc;

/// Loan lifecycle manager over injected catalog and registry handles.
///
/// Handles are shared (`Rc<RefCell<..>>`) so the host keeps mutating the
/// catalog and registry while this service resolves lookups through them.
/// Everything here assumes one thread of control; a concurrent host must
/// wrap each service instance in its own lock.
pub struct LoanService {
    book_service: Rc<RefCell<BookService>>,
    user_service: Rc<RefCell<UserService>>,
    loans: Vec<Loan>,
}

impl LoanService {
    /// Creates a lending service over the given collaborator handles.
    pub fn new(
        book_service: Rc<RefCell<BookService>>,
        user_service: Rc<RefCell<UserService>>,
    ) -> Self {
        Self {
            book_service,
            user_service,
            loans: Vec::new(),
        }
    }

    /// Starts a loan of `isbn` to `user_id` and returns the new loan id.
    ///
    /// # Errors
    /// - `InvalidArgument` when either key is blank.
    /// - `NotFound` from the registry/catalog when user or book is unknown.
    /// - `Conflict` while another loan of the same ISBN is still active.
    pub fn borrow_book(&mut self, user_id: &str, isbn: &str) -> ServiceResult<LoanId> {
        require_text("user id", user_id)?;
        require_text("isbn", isbn)?;

        let user = {
            let users = self.user_service.borrow();
            users.user_by_id(user_id)?.clone()
        };
        let book = {
            let books = self.book_service.borrow();
            books.book_by_isbn(isbn)?.clone()
        };

        if self
            .loans
            .iter()
            .any(|loan| loan.book.isbn == isbn && loan.is_active())
        {
            return Err(ServiceError::Conflict(format!(
                "book with isbn `{isbn}` is already on loan"
            )));
        }

        let loan = Loan::new(user, book);
        let loan_id = loan.uuid;
        self.loans.push(loan);
        info!("event=loan_started module=lending status=ok isbn={isbn} user_id={user_id}");
        Ok(loan_id)
    }

    /// Finishes the active loan matching `user_id` and `isbn`.
    ///
    /// Only `Started` records match, so returning the same pair twice fails
    /// the second time with `NotFound`. First match in insertion order wins.
    pub fn return_book(&mut self, user_id: &str, isbn: &str) -> ServiceResult<()> {
        require_text("user id", user_id)?;
        require_text("isbn", isbn)?;

        for loan in &mut self.loans {
            if loan.user.id == user_id && loan.book.isbn == isbn && loan.is_active() {
                loan.finish();
                info!(
                    "event=loan_finished module=lending status=ok isbn={isbn} user_id={user_id}"
                );
                return Ok(());
            }
        }

        Err(ServiceError::NotFound(format!(
            "no active loan of book `{isbn}` for user `{user_id}`"
        )))
    }

    /// Full loan history in insertion order, finished loans included.
    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    /// Loan date of the first recorded loan, in epoch milliseconds.
    ///
    /// First means first by insertion order, not the chronological minimum
    /// over explicitly dated records.
    ///
    /// # Errors
    /// - `OutOfRange` when no loans have been recorded.
    pub fn earliest_loan_date(&self) -> ServiceResult<i64> {
        match self.loans.first() {
            Some(loan) => Ok(loan.loan_date),
            None => Err(ServiceError::OutOfRange("no loans recorded".to_string())),
        }
    }
}
