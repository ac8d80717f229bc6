//! Domain models for expense entries and their categories.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Classifies an expense into one of the fixed spending buckets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Entertainment,
    Bills,
    Healthcare,
    Education,
    Other,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Entertainment,
        Category::Bills,
        Category::Healthcare,
        Category::Education,
        Category::Other,
    ];

    /// Parses a category from its display name, case-insensitively.
    /// Returns `None` for anything outside the fixed set.
    pub fn parse(value: &str) -> Option<Category> {
        match value.trim().to_ascii_lowercase().as_str() {
            "food" => Some(Category::Food),
            "transport" => Some(Category::Transport),
            "shopping" => Some(Category::Shopping),
            "entertainment" => Some(Category::Entertainment),
            "bills" => Some(Category::Bills),
            "healthcare" => Some(Category::Healthcare),
            "education" => Some(Category::Education),
            "other" => Some(Category::Other),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Bills => "Bills",
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Selects which expenses a listing query returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parses the UI filter value, where `"all"` selects every category.
    pub fn parse(value: &str) -> Option<CategoryFilter> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Some(CategoryFilter::All);
        }
        Category::parse(value).map(CategoryFilter::Only)
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => category.fmt(f),
        }
    }
}

/// A single recorded expense.
///
/// `date` is the calendar day the expense occurred; `created_at` is the
/// moment the record was entered and only orders the list. The serialized
/// field names are a stability contract with previously saved data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    pub id: i64,
    pub name: String,
    pub amount: f64,
    pub category: Category,
    pub date: NaiveDate,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}
