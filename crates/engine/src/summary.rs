//! Aggregates over a set of expenses.

use std::collections::BTreeMap;

use crate::Expense;

/// Totals of a set of expenses.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub total: f64,
    pub per_category: BTreeMap<String, f64>,
}

impl Summary {
    pub fn of(expenses: &[Expense]) -> Self {
        Self {
            count: expenses.len(),
            total: total(expenses),
            per_category: totals_by_category(expenses),
        }
    }
}

/// Sum of all amounts.
pub fn total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Sum of amounts grouped by category.
pub fn totals_by_category(expenses: &[Expense]) -> BTreeMap<String, f64> {
    expenses.iter().fold(BTreeMap::new(), |mut acc, e| {
        *acc.entry(e.category.clone()).or_insert(0.0) += e.amount;
        acc
    })
}
