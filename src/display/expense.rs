//! Expense display formatting
//!
//! Register rows, full registers with a total line, and single-record details.

use crate::models::{Expense, ExpenseRecord};
use crate::store::ExpenseStore;

/// Format a single record as a register row
pub fn format_expense_row(record: &ExpenseRecord, name_width: usize) -> String {
    let expense = &record.expense;
    format!(
        "{:<8} {} {:>12} {:<12} {}",
        record.id.to_string(),
        truncate(&expense.name, name_width),
        expense.amount.to_string(),
        truncate(expense.date.as_str(), 12),
        expense.category
    )
}

/// Format a list of records as a register with a total line
pub fn format_expense_register(records: &[ExpenseRecord], name_width: usize) -> String {
    if records.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let width = 8 + 1 + name_width + 1 + 12 + 1 + 12 + 1 + 10;

    let mut output = String::new();
    output.push_str(&format!(
        "{:<8} {:<name_width$} {:>12} {:<12} {}\n",
        "ID",
        "Name",
        "Amount",
        "Date",
        "Category",
        name_width = name_width
    ));
    output.push_str(&"-".repeat(width));
    output.push('\n');

    for record in records {
        output.push_str(&format_expense_row(record, name_width));
        output.push('\n');
    }

    output.push_str(&"-".repeat(width));
    output.push('\n');
    output.push_str(&format!(
        "{:>w$}\n",
        format!("Total: {}", ExpenseStore::total_of(records)),
        w = 8 + 1 + name_width + 1 + 12
    ));

    output
}

/// Format one expense for display, e.g. when staging it for editing
pub fn format_expense_details(record: &ExpenseRecord) -> String {
    let expense: &Expense = &record.expense;
    let mut output = String::new();

    output.push_str(&format!("Expense:  {}\n", record.id));
    output.push_str(&format!("Name:     {}\n", expense.name));
    output.push_str(&format!("Amount:   {}\n", expense.amount));

    if expense.date.is_valid() {
        output.push_str(&format!("Date:     {}\n", expense.date));
    } else {
        output.push_str(&format!("Date:     {} (unreadable)\n", expense.date));
    }

    if expense.category.is_empty() {
        output.push_str("Category: (none)\n");
    } else {
        output.push_str(&format!("Category: {}\n", expense.category));
    }

    output
}

/// Pad or shorten a string to exactly `max_len` characters
fn truncate(s: &str, max_len: usize) -> String {
    let len = s.chars().count();
    if len <= max_len {
        format!("{:width$}", s, width = max_len)
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;

    fn record(name: &str, amount: &str, date: &str, category: &str) -> ExpenseRecord {
        ExpenseRecord::new(
            ExpenseId::from_raw(1),
            Expense::from_input(name, amount, date, category),
        )
    }

    #[test]
    fn test_format_expense_row() {
        let formatted = format_expense_row(&record("Coffee", "3.5", "2024-01-02", "Food"), 20);
        assert!(formatted.starts_with("exp-1"));
        assert!(formatted.contains("Coffee"));
        assert!(formatted.contains("3.50"));
        assert!(formatted.contains("2024-01-02"));
        assert!(formatted.ends_with("Food"));
    }

    #[test]
    fn test_format_empty_register() {
        let formatted = format_expense_register(&[], 20);
        assert!(formatted.contains("No expenses found"));
    }

    #[test]
    fn test_register_has_total() {
        let records = vec![
            record("A", "12.50", "2024-01-01", "X"),
            record("B", "7.25", "2024-01-02", "Y"),
            record("C", "100", "2024-01-03", "X"),
        ];
        let formatted = format_expense_register(&records, 20);
        assert!(formatted.contains("Total: 119.75"));
    }

    #[test]
    fn test_register_shows_nan_total() {
        let records = vec![record("A", "1", "2024-01-01", "X"), record("B", "x", "2024-01-02", "Y")];
        let formatted = format_expense_register(&records, 20);
        assert!(formatted.contains("Total: NaN"));
    }

    #[test]
    fn test_format_expense_details() {
        let formatted = format_expense_details(&record("Coffee", "3.5", "someday", ""));
        assert!(formatted.contains("Coffee"));
        assert!(formatted.contains("3.50"));
        assert!(formatted.contains("someday (unreadable)"));
        assert!(formatted.contains("Category: (none)"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Short", 10).trim(), "Short");
        assert_eq!(truncate("Short", 10).len(), 10);

        let result = truncate("A very long string", 10);
        assert_eq!(result, "A very ...");
        assert_eq!(truncate("Café au lait avec sucre", 8), "Café ...");
    }
}
