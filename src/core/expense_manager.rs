//! Session facade that wires ledger state to persistence.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::core::clock::Clock;
use crate::core::expense_service::ExpenseService;
use crate::domain::{Category, ExpenseRecord, Ledger};
use crate::errors::LedgerError;
use crate::storage::StorageBackend;

/// Owns the live ledger for an application session.
///
/// Mutations validate through [`ExpenseService`] and persist the affected
/// storage key before returning, so the persisted state always matches the
/// in-memory state the presentation layer re-queries.
pub struct ExpenseManager {
    ledger: Ledger,
    storage: Box<dyn StorageBackend>,
    clock: Box<dyn Clock>,
}

impl ExpenseManager {
    /// Loads persisted state, falling back to an empty ledger when either
    /// key is absent or unreadable.
    pub fn open(
        storage: Box<dyn StorageBackend>,
        clock: Box<dyn Clock>,
    ) -> Result<Self, LedgerError> {
        let expenses = storage.load_expenses()?.unwrap_or_default();
        let budget = storage.load_budget()?.unwrap_or(0.0);
        let ledger = Ledger::from_parts(expenses, budget);
        for warning in ledger.integrity_warnings() {
            warn!("{warning}");
        }
        debug!(
            records = ledger.expense_count(),
            budget = ledger.monthly_budget(),
            "ledger loaded"
        );
        Ok(Self {
            ledger,
            storage,
            clock,
        })
    }

    /// Current ledger state, for summary queries after every mutation.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Today's date according to the session clock, for use as the
    /// reference date in summary queries.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn add_expense(
        &mut self,
        name: &str,
        amount: f64,
        category: Category,
        date: NaiveDate,
    ) -> Result<ExpenseRecord, LedgerError> {
        let record = ExpenseService::add_expense(
            &mut self.ledger,
            self.clock.as_ref(),
            name,
            amount,
            category,
            date,
        )?;
        self.storage.save_expenses(self.ledger.expenses())?;
        debug!(
            id = record.id,
            category = %record.category,
            amount = record.amount,
            "expense added"
        );
        Ok(record)
    }

    pub fn delete_expense(&mut self, id: i64) -> Result<bool, LedgerError> {
        if !ExpenseService::delete_expense(&mut self.ledger, id) {
            return Ok(false);
        }
        self.storage.save_expenses(self.ledger.expenses())?;
        debug!(id, "expense deleted");
        Ok(true)
    }

    pub fn clear_all(&mut self) -> Result<(), LedgerError> {
        ExpenseService::clear_all(&mut self.ledger);
        self.storage.save_expenses(self.ledger.expenses())?;
        debug!("all expenses cleared");
        Ok(())
    }

    pub fn set_budget(&mut self, amount: f64) -> Result<(), LedgerError> {
        ExpenseService::set_budget(&mut self.ledger, amount)?;
        self.storage.save_budget(self.ledger.monthly_budget())?;
        debug!(budget = amount, "monthly budget updated");
        Ok(())
    }
}
