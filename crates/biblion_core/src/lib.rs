//! Core domain logic for Biblion.
//! This crate is the single source of truth for lending invariants.

pub mod logging;
pub mod model;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::book::Book;
pub use model::loan::{Loan, LoanId, LoanState};
pub use model::user::User;
pub use model::ValidationError;
pub use service::{
    BookService, LoanService, ServiceError, ServiceResult, UserService,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
