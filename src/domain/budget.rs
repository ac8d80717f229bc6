//! Budget reporting types derived from ledger state.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::expense::Category;

/// Current-month spending measured against the configured budget.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BudgetUtilization {
    pub spent: f64,
    pub remaining: f64,
    pub percent_used: f64,
}

impl BudgetUtilization {
    /// Builds a utilization reading. `budget` must be positive; callers
    /// treat an unconfigured budget as an absent reading instead.
    pub fn from_parts(spent: f64, budget: f64) -> Self {
        Self {
            spent,
            remaining: budget - spent,
            percent_used: (spent / budget) * 100.0,
        }
    }
}

/// Percentage cut-offs for budget alerts.
///
/// The defaults mirror the product's 75/90/100 tiers; the values are
/// configuration, not law, and ride along in [`Config`](crate::config::Config).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AlertThresholds {
    #[serde(default = "AlertThresholds::default_warning")]
    pub warning_percent: f64,
    #[serde(default = "AlertThresholds::default_critical")]
    pub critical_percent: f64,
    #[serde(default = "AlertThresholds::default_exceeded")]
    pub exceeded_percent: f64,
}

impl AlertThresholds {
    fn default_warning() -> f64 {
        75.0
    }

    fn default_critical() -> f64 {
        90.0
    }

    fn default_exceeded() -> f64 {
        100.0
    }
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            warning_percent: Self::default_warning(),
            critical_percent: Self::default_critical(),
            exceeded_percent: Self::default_exceeded(),
        }
    }
}

/// Non-persistent classification of how close to budget the user is.
///
/// Recomputed from current data on every evaluation. Tiers use closed lower
/// bounds, so a utilization of exactly 100% already reports `Exceeded`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlertLevel {
    None,
    Warning,
    Critical,
    Exceeded { overage: f64 },
}

impl AlertLevel {
    /// Maps a utilization reading to the highest applicable alert tier.
    pub fn evaluate(utilization: &BudgetUtilization, thresholds: &AlertThresholds) -> AlertLevel {
        let percent = utilization.percent_used;
        if percent >= thresholds.exceeded_percent {
            // spent - budget == -(remaining)
            AlertLevel::Exceeded {
                overage: -utilization.remaining,
            }
        } else if percent >= thresholds.critical_percent {
            AlertLevel::Critical
        } else if percent >= thresholds.warning_percent {
            AlertLevel::Warning
        } else {
            AlertLevel::None
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AlertLevel::None => "None",
            AlertLevel::Warning => "Warning",
            AlertLevel::Critical => "Critical",
            AlertLevel::Exceeded { .. } => "Exceeded",
        };
        f.write_str(label)
    }
}

/// Aggregated spend for one category across the whole ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub amount: f64,
    pub percent_of_total: f64,
}

/// Spend on a single calendar day; zero when nothing was recorded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub amount: f64,
}
