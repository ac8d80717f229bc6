//! Business logic and services for the expense ledger.
//! Depends on the domain types. No terminal I/O, no direct file access.

pub mod clock;
pub mod expense_manager;
pub mod expense_service;
pub mod summary_service;

pub use clock::{Clock, SystemClock};
pub use expense_manager::ExpenseManager;
pub use expense_service::ExpenseService;
pub use summary_service::SummaryService;
