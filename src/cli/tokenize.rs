//! Command line tokenizer for session input
//!
//! Splits a line into words the way a shell would for simple cases: words are
//! separated by whitespace, single or double quotes keep spaces inside a word,
//! and a backslash takes the next character literally (outside single quotes).

use crate::error::ExpenseError;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Quote {
    None,
    Single,
    Double,
}

/// Split a session line into words
///
/// `""` yields an empty word, so empty form fields can still be entered.
pub fn split_line(line: &str) -> Result<Vec<String>, ExpenseError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote = Quote::None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Quote::Single, '\'') | (Quote::Double, '"') => quote = Quote::None,
            (Quote::Single, c) => current.push(c),
            (Quote::None, '\'') => {
                quote = Quote::Single;
                in_word = true;
            }
            (Quote::None, '"') => {
                quote = Quote::Double;
                in_word = true;
            }
            (_, '\\') => match chars.next() {
                Some(escaped) => {
                    current.push(escaped);
                    in_word = true;
                }
                None => {
                    return Err(ExpenseError::Command(
                        "line ends with an unfinished escape".into(),
                    ))
                }
            },
            (Quote::None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (_, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote != Quote::None {
        return Err(ExpenseError::Command("unterminated quote".into()));
    }

    if in_word {
        words.push(current);
    }

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_words() {
        assert_eq!(
            split_line("add Coffee 3.50 2024-01-02 Food").unwrap(),
            vec!["add", "Coffee", "3.50", "2024-01-02", "Food"]
        );
        assert_eq!(split_line("  list   ").unwrap(), vec!["list"]);
        assert!(split_line("").unwrap().is_empty());
    }

    #[test]
    fn test_quotes() {
        assert_eq!(
            split_line(r#"add "Train ticket" 12 2024-01-02 'Day trip'"#).unwrap(),
            vec!["add", "Train ticket", "12", "2024-01-02", "Day trip"]
        );
        assert_eq!(split_line(r#"a"b c"d"#).unwrap(), vec!["ab cd"]);
    }

    #[test]
    fn test_empty_quoted_word() {
        assert_eq!(
            split_line(r#"add "" 1 2024-01-01 """#).unwrap(),
            vec!["add", "", "1", "2024-01-01", ""]
        );
    }

    #[test]
    fn test_escapes() {
        assert_eq!(split_line(r"Joe\'s\ Diner").unwrap(), vec!["Joe's Diner"]);
        assert_eq!(split_line(r#""say \"hi\"""#).unwrap(), vec![r#"say "hi""#]);
        assert_eq!(split_line(r"'back\slash'").unwrap(), vec![r"back\slash"]);
    }

    #[test]
    fn test_errors() {
        assert!(split_line("add \"open").is_err());
        assert!(split_line("trailing\\").is_err());
    }
}
