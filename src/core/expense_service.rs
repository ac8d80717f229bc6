//! Validated mutations over the expense ledger.

use chrono::NaiveDate;

use crate::core::clock::Clock;
use crate::domain::{Category, ExpenseRecord, Ledger};
use crate::errors::LedgerError;

/// Applies user-initiated changes to a [`Ledger`].
///
/// Every operation validates its input before touching state, so a failed
/// call leaves the ledger exactly as it was.
pub struct ExpenseService;

impl ExpenseService {
    /// Records a new expense at the front of the ledger.
    ///
    /// The id comes from the creation timestamp in epoch milliseconds,
    /// bumped past the ledger's high-water mark so ids stay unique even for
    /// same-millisecond adds.
    pub fn add_expense(
        ledger: &mut Ledger,
        clock: &dyn Clock,
        name: &str,
        amount: f64,
        category: Category,
        date: NaiveDate,
    ) -> Result<ExpenseRecord, LedgerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::Validation(
                "expense name must not be empty".into(),
            ));
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::Validation(format!(
                "expense amount must be a positive number, got {amount}"
            )));
        }
        let created_at = clock.now();
        let id = ledger.claim_id(created_at.timestamp_millis());
        let record = ExpenseRecord {
            id,
            name: name.to_string(),
            amount,
            category,
            date,
            created_at,
        };
        ledger.prepend(record.clone());
        Ok(record)
    }

    /// Removes the record with the matching id. Returns whether anything was
    /// removed; a missing id is a no-op, not an error.
    pub fn delete_expense(ledger: &mut Ledger, id: i64) -> bool {
        ledger.remove(id)
    }

    /// Empties the ledger unconditionally.
    pub fn clear_all(ledger: &mut Ledger) {
        ledger.clear();
    }

    /// Replaces the monthly budget. The previous value survives a rejected
    /// amount.
    pub fn set_budget(ledger: &mut Ledger, amount: f64) -> Result<(), LedgerError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::Validation(format!(
                "budget must be a positive number, got {amount}"
            )));
        }
        ledger.set_monthly_budget(amount);
        Ok(())
    }
}

/// Parses a raw amount field ahead of [`ExpenseService::add_expense`].
pub fn parse_amount(value: &str) -> Result<f64, LedgerError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| LedgerError::Validation(format!("`{value}` is not a number")))
}

/// Parses a `YYYY-MM-DD` date field.
pub fn parse_date(value: &str) -> Result<NaiveDate, LedgerError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| LedgerError::Validation(format!("`{value}` is not a valid calendar date")))
}

/// Parses a category field against the fixed set.
pub fn parse_category(value: &str) -> Result<Category, LedgerError> {
    Category::parse(value)
        .ok_or_else(|| LedgerError::Validation(format!("`{value}` is not a known category")))
}
