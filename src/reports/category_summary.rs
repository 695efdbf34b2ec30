//! Category Summary
//!
//! Spending per category across every current record.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Amount;
use crate::store::ExpenseStore;

/// One category's line in the summary
#[derive(Debug, Clone)]
pub struct CategorySummaryRow {
    /// Category label
    pub category: String,
    /// Total amount in the category
    pub total: Amount,
    /// Number of expenses in the category
    pub expense_count: usize,
}

/// Category Summary report
#[derive(Debug, Clone)]
pub struct CategorySummary {
    /// Rows in first-appearance order
    pub rows: Vec<CategorySummaryRow>,
    /// Total across all categories
    pub total: Amount,
    /// Total number of expenses
    pub expense_count: usize,
}

impl CategorySummary {
    /// Generate the summary from the store's current records
    pub fn generate(store: &ExpenseStore) -> Self {
        let rows = store
            .category_totals()
            .iter()
            .map(|entry| CategorySummaryRow {
                category: entry.category.clone(),
                total: entry.total,
                expense_count: entry.count,
            })
            .collect();

        Self {
            rows,
            total: store.total(),
            expense_count: store.len(),
        }
    }

    /// Check if there is nothing to summarize
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Category Summary\n");
        output.push_str(&"=".repeat(48));
        output.push('\n');

        if self.is_empty() {
            output.push_str("No expenses recorded.\n");
            return output;
        }

        output.push_str(&format!("{:<28} {:>12} {:>6}\n", "Category", "Amount", "Count"));
        output.push_str(&"-".repeat(48));
        output.push('\n');

        for row in &self.rows {
            let label = if row.category.is_empty() {
                "(none)"
            } else {
                row.category.as_str()
            };
            output.push_str(&format!(
                "{:<28} {:>12} {:>6}\n",
                label,
                row.total.to_string(),
                row.expense_count
            ));
        }

        output.push_str(&"-".repeat(48));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>12} {:>6}\n",
            "TOTAL",
            self.total.to_string(),
            self.expense_count
        ));

        output
    }

    /// Write the summary as `category: amount` lines
    pub fn write_lines<W: Write>(&self, writer: &mut W) -> ExpenseResult<()> {
        for row in &self.rows {
            writeln!(writer, "{}: {}", row.category, row.total)
                .map_err(|e| ExpenseError::Io(e.to_string()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;

    fn create_test_store() -> ExpenseStore {
        let mut store = ExpenseStore::new();
        store.add(Expense::from_input("Groceries", "10", "2024-01-01", "Food"));
        store.add(Expense::from_input("Bus", "5", "2024-01-02", "Transport"));
        store.add(Expense::from_input("Lunch", "3", "2024-01-03", "Food"));
        store
    }

    #[test]
    fn test_generate_category_summary() {
        let store = create_test_store();
        let summary = CategorySummary::generate(&store);

        assert_eq!(summary.rows.len(), 2);
        assert_eq!(summary.rows[0].category, "Food");
        assert_eq!(summary.rows[0].total, Amount::new(13.0));
        assert_eq!(summary.rows[0].expense_count, 2);
        assert_eq!(summary.rows[1].category, "Transport");
        assert_eq!(summary.total, Amount::new(18.0));
        assert_eq!(summary.expense_count, 3);
    }

    #[test]
    fn test_format_terminal() {
        let summary = CategorySummary::generate(&create_test_store());
        let text = summary.format_terminal();

        assert!(text.contains("Category Summary"));
        assert!(text.contains("Food"));
        assert!(text.contains("13.00"));
        assert!(text.contains("Transport"));
        assert!(text.contains("18.00"));
    }

    #[test]
    fn test_format_empty() {
        let summary = CategorySummary::generate(&ExpenseStore::new());
        assert!(summary.is_empty());
        assert!(summary.format_terminal().contains("No expenses recorded."));
    }

    #[test]
    fn test_write_lines() {
        let summary = CategorySummary::generate(&create_test_store());
        let mut buffer = Vec::new();
        summary.write_lines(&mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "Food: 13.00\nTransport: 5.00\n");
    }

    #[test]
    fn test_nan_shows_in_category() {
        let mut store = create_test_store();
        store.add(Expense::from_input("Mystery", "??", "2024-01-04", "Food"));

        let summary = CategorySummary::generate(&store);
        assert!(summary.rows[0].total.is_nan());
        assert!(summary.format_terminal().contains("NaN"));
    }
}
