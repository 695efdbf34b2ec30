//! Per-category totals
//!
//! Keeps categories in the order they first show up among the records, so
//! the summary reads in the same order as the register.

use std::collections::HashMap;

use crate::models::{Amount, ExpenseRecord};

/// Summed amounts keyed by category label
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals {
    entries: Vec<CategoryTotal>,
}

/// One category's accumulated amount
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category label, exactly as entered
    pub category: String,
    /// Sum of the amounts in this category
    pub total: Amount,
    /// Number of records in this category
    pub count: usize,
}

impl CategoryTotals {
    /// Accumulate totals over records in a single pass
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ExpenseRecord>,
    {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut entries: Vec<CategoryTotal> = Vec::new();

        for record in records {
            let category = record.expense.category.as_str();
            let slot = *index.entry(category).or_insert_with(|| {
                entries.push(CategoryTotal {
                    category: category.to_string(),
                    total: Amount::zero(),
                    count: 0,
                });
                entries.len() - 1
            });

            let entry = &mut entries[slot];
            entry.total += record.expense.amount;
            entry.count += 1;
        }

        Self { entries }
    }

    /// Total for a category, if any record carries it
    pub fn get(&self, category: &str) -> Option<Amount> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.total)
    }

    /// Iterate categories in first-appearance order
    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.entries.iter()
    }

    /// Category labels in first-appearance order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.category.as_str())
    }

    /// Number of distinct categories
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no categories
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
