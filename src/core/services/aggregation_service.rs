//! Groups raw transactions into display-ordered category totals.

use std::collections::HashMap;

use tracing::debug;

use crate::core::palette::color_for;
use crate::domain::{Amounted, CategoryData, Transaction};

/// Builds the chart's [`CategoryData`] list from a transaction set.
///
/// Categories are keyed by exact name. Colors follow first-seen order, while the
/// output is sorted by descending amount with ties kept in first-seen order.
pub struct AggregationService;

impl AggregationService {
    /// Groups, sums, colors and sorts `transactions`.
    pub fn group_by_category(transactions: &[Transaction]) -> Vec<CategoryData> {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<CategoryData> = Vec::new();

        for txn in transactions {
            let position = *positions.entry(txn.category.as_str()).or_insert_with(|| {
                let position = groups.len();
                groups.push(CategoryData::new(
                    txn.category.clone(),
                    0.0,
                    color_for(position),
                ));
                position
            });
            let group = &mut groups[position];
            group.amount += txn.amount;
            group.transactions.push(txn.clone());
        }

        // `sort_by` is stable, so equal sums stay in first-seen order.
        groups.sort_by(|a, b| b.amount.total_cmp(&a.amount));

        debug!(
            transactions = transactions.len(),
            categories = groups.len(),
            "aggregated transactions by category"
        );
        groups
    }

    /// Sum of all amounts, negative ones included. An empty slice sums to `+0.0`.
    pub fn total<T: Amounted>(items: &[T]) -> f64 {
        items
            .iter()
            .map(Amounted::amount)
            .fold(0.0, |total, amount| total + amount)
    }
}
