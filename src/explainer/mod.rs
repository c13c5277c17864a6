//! Print-statement explaining
//!
//! Recognizes the non-standard `print` directive of the SQL-extension dialect
//! and extracts the table names it references, ahead of execution.

mod print_statement;

pub use print_statement::PrintStatementExplainer;

/// Split a script into individual statements on the `;` separator.
///
/// Separators inside single-quoted string literals do not split. Statements
/// are trimmed and empty statements (stray separators, trailing newline after
/// the last `;`) are dropped, so a separator never leaks into a statement.
pub fn split_statements(script: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut in_string = false;

    for c in script.chars() {
        match c {
            '\'' => {
                in_string = !in_string;
                current.push(c);
            }
            ';' if !in_string => {
                let trimmed = current.trim();
                if !trimmed.is_empty() {
                    statements.push(trimmed.to_string());
                }
                current.clear();
            }
            _ => current.push(c),
        }
    }

    let trimmed = current.trim();
    if !trimmed.is_empty() {
        statements.push(trimmed.to_string());
    }

    statements
}
