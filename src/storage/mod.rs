//! Persistence contracts and backends for ledger state.

pub mod json_backend;

pub use json_backend::JsonStorage;

use crate::domain::ExpenseRecord;
use crate::errors::LedgerError;

/// Trait that abstracts interaction with the persistence layer.
///
/// State lives under two logical keys: the full expense list and the
/// monthly budget. `None` from a load means the key has never been written
/// or its contents could not be decoded; both start the ledger empty.
pub trait StorageBackend: Send + Sync {
    fn load_expenses(&self) -> Result<Option<Vec<ExpenseRecord>>, LedgerError>;
    fn save_expenses(&self, expenses: &[ExpenseRecord]) -> Result<(), LedgerError>;
    fn load_budget(&self) -> Result<Option<f64>, LedgerError>;
    fn save_budget(&self, amount: f64) -> Result<(), LedgerError>;
}
