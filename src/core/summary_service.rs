//! Pure aggregation queries over ledger state.

use chrono::{Datelike, Duration, NaiveDate};

use crate::domain::{
    AlertLevel, AlertThresholds, BudgetUtilization, Category, CategoryFilter, CategoryTotal,
    DailyTotal, ExpenseRecord, Ledger,
};

/// Read-only reporting over a [`Ledger`].
///
/// Every query takes its reference date as an explicit argument, never an
/// implicit clock read, so results are reproducible.
pub struct SummaryService;

impl SummaryService {
    /// Sums `amount` over the given records. Order-independent.
    pub fn total_spent(records: &[ExpenseRecord]) -> f64 {
        records.iter().map(|record| record.amount).sum()
    }

    /// Budget minus all-time spending. Goes negative once spending passes
    /// the budget.
    pub fn balance(ledger: &Ledger) -> f64 {
        ledger.monthly_budget() - Self::total_spent(ledger.expenses())
    }

    /// Returns the records matching `filter`, preserving ledger order.
    pub fn filter_by_category(ledger: &Ledger, filter: CategoryFilter) -> Vec<&ExpenseRecord> {
        ledger
            .expenses()
            .iter()
            .filter(|record| filter.matches(record.category))
            .collect()
    }

    /// Sums spending inside the calendar month containing `reference`.
    /// Month-and-year equality, not a rolling 30-day window.
    pub fn current_month_total(ledger: &Ledger, reference: NaiveDate) -> f64 {
        ledger
            .expenses()
            .iter()
            .filter(|record| {
                record.date.month() == reference.month() && record.date.year() == reference.year()
            })
            .map(|record| record.amount)
            .sum()
    }

    /// Measures current-month spending against the budget.
    ///
    /// `None` while no budget is configured, which is a distinct state from
    /// a configured budget at 0% utilization.
    pub fn budget_utilization(ledger: &Ledger, reference: NaiveDate) -> Option<BudgetUtilization> {
        let budget = ledger.monthly_budget();
        if budget <= 0.0 {
            return None;
        }
        let spent = Self::current_month_total(ledger, reference);
        Some(BudgetUtilization::from_parts(spent, budget))
    }

    /// Total spend per category over every record, in first-seen order.
    /// Categories without records are omitted.
    pub fn category_totals(ledger: &Ledger) -> Vec<CategoryTotal> {
        let grand_total = Self::total_spent(ledger.expenses());
        let mut totals: Vec<(Category, f64)> = Vec::new();
        for record in ledger.expenses() {
            match totals
                .iter_mut()
                .find(|(category, _)| *category == record.category)
            {
                Some((_, amount)) => *amount += record.amount,
                None => totals.push((record.category, record.amount)),
            }
        }
        totals
            .into_iter()
            .map(|(category, amount)| CategoryTotal {
                category,
                amount,
                percent_of_total: if grand_total > 0.0 {
                    (amount / grand_total) * 100.0
                } else {
                    0.0
                },
            })
            .collect()
    }

    /// Category totals sorted by descending spend. Equal amounts keep their
    /// first-seen order.
    pub fn category_breakdown(ledger: &Ledger) -> Vec<CategoryTotal> {
        let mut breakdown = Self::category_totals(ledger);
        breakdown.sort_by(|a, b| {
            b.amount
                .partial_cmp(&a.amount)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        breakdown
    }

    /// Daily spend for the `days` consecutive dates ending at `reference`
    /// inclusive, oldest first. Days without records report zero.
    pub fn daily_totals(ledger: &Ledger, days: usize, reference: NaiveDate) -> Vec<DailyTotal> {
        (0..days)
            .map(|offset| {
                let date = reference - Duration::days((days - 1 - offset) as i64);
                let amount = ledger
                    .expenses()
                    .iter()
                    .filter(|record| record.date == date)
                    .map(|record| record.amount)
                    .sum();
                DailyTotal { date, amount }
            })
            .collect()
    }

    /// Evaluates the alert tier for the month containing `reference`.
    /// `AlertLevel::None` while no budget is configured.
    pub fn budget_alert(
        ledger: &Ledger,
        reference: NaiveDate,
        thresholds: &AlertThresholds,
    ) -> AlertLevel {
        match Self::budget_utilization(ledger, reference) {
            Some(utilization) => AlertLevel::evaluate(&utilization, thresholds),
            None => AlertLevel::None,
        }
    }
}
