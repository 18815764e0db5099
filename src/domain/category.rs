//! Aggregated spending for a single category.

use serde::{Deserialize, Serialize};

use crate::domain::color::Color;
use crate::domain::common::{Amounted, Displayable, NamedEntity};
use crate::domain::transaction::Transaction;

/// The summed spending of one category along with its constituent transactions.
///
/// Produced by [`crate::core::services::AggregationService`] and read-only
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryData {
    pub category: String,
    pub amount: f64,
    pub color: Color,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl CategoryData {
    pub fn new(category: impl Into<String>, amount: f64, color: Color) -> Self {
        Self {
            category: category.into(),
            amount,
            color,
            transactions: Vec::new(),
        }
    }

    pub fn with_transactions(mut self, transactions: Vec<Transaction>) -> Self {
        self.transactions = transactions;
        self
    }
}

impl NamedEntity for CategoryData {
    fn name(&self) -> &str {
        &self.category
    }
}

impl Amounted for CategoryData {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for CategoryData {
    fn display_label(&self) -> String {
        format!(
            "{} ({:.2}, {} transactions)",
            self.category,
            self.amount,
            self.transactions.len()
        )
    }
}
