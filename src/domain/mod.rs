//! Pure domain models for the expense ledger.
//! No I/O, no storage. Only data types and core enums.

pub mod budget;
pub mod expense;
pub mod ledger;

pub use budget::*;
pub use expense::*;
pub use ledger::*;
