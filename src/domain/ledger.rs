//! In-memory ledger state: the expense list plus the configured budget.

use std::collections::HashSet;

use crate::domain::expense::ExpenseRecord;

/// Owns the full expense history and the monthly budget.
///
/// Records are kept newest-creation-first. Insertion order matters for
/// display, never for aggregation. Records enter only through
/// [`ExpenseService::add_expense`](crate::core::ExpenseService::add_expense)
/// or a reload from storage, so the mutators stay crate-private.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    expenses: Vec<ExpenseRecord>,
    monthly_budget: f64,
    last_id: i64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds ledger state from persisted records and budget.
    ///
    /// The id high-water mark is re-seeded from the loaded records. A
    /// negative persisted budget collapses to the unconfigured state.
    pub fn from_parts(expenses: Vec<ExpenseRecord>, monthly_budget: f64) -> Self {
        let last_id = expenses.iter().map(|record| record.id).max().unwrap_or(0);
        Self {
            expenses,
            monthly_budget: monthly_budget.max(0.0),
            last_id,
        }
    }

    /// All records, newest-creation-first.
    pub fn expenses(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    /// The configured monthly budget. Zero means no budget is configured.
    pub fn monthly_budget(&self) -> f64 {
        self.monthly_budget
    }

    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Reports records that violate ledger invariants, for logging after a
    /// load. Suspect records are kept; no data is dropped here.
    pub fn integrity_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let mut seen = HashSet::new();
        for record in &self.expenses {
            if !record.amount.is_finite() || record.amount <= 0.0 {
                warnings.push(format!(
                    "expense {} `{}` has non-positive amount {}",
                    record.id, record.name, record.amount
                ));
            }
            if !seen.insert(record.id) {
                warnings.push(format!("duplicate expense id {}", record.id));
            }
        }
        warnings
    }

    /// Reserves the next unused identifier at or above `candidate`.
    /// Identifiers are strictly increasing and never reused after deletion.
    pub(crate) fn claim_id(&mut self, candidate: i64) -> i64 {
        let id = candidate.max(self.last_id + 1);
        self.last_id = id;
        id
    }

    pub(crate) fn prepend(&mut self, record: ExpenseRecord) {
        self.expenses.insert(0, record);
    }

    pub(crate) fn remove(&mut self, id: i64) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|record| record.id != id);
        self.expenses.len() < before
    }

    pub(crate) fn clear(&mut self) {
        self.expenses.clear();
    }

    pub(crate) fn set_monthly_budget(&mut self, amount: f64) {
        self.monthly_budget = amount;
    }
}
