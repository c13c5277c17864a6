//! Table-reference extraction for `print` statements
//!
//! The `print` directive is not part of the standard grammar, so it is
//! recognized at text level rather than handed to a SQL parser.
//!
//! ## Supported shape
//!
//! ```sql
//! print table_a
//! print table_a, table_b, table_c
//! PRINT table_a, table_b;
//! ```
//!
//! The keyword match is case-insensitive; table names are preserved verbatim
//! (no case folding, no catalog resolution). Duplicated names stay duplicated
//! and order of appearance is kept.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ExplainError;

/// Matches the leading `print` keyword followed by at least one whitespace
/// character, with optional leading whitespace.
static PRINT_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*print\s+").expect("Invalid print keyword regex"));

/// Extracts the table names referenced by one `print` statement.
///
/// The statement is parsed once at construction; the explainer itself is
/// immutable and side-effect-free afterwards, so it can be queried repeatedly
/// and shared across threads freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintStatementExplainer {
    statement: String,
    table_names: Vec<String>,
}

impl PrintStatementExplainer {
    /// Create an explainer for a single raw `print` statement.
    ///
    /// # Errors
    /// Returns [`ExplainError::InvalidStatement`] if the statement does not
    /// start with the `print` keyword, and [`ExplainError::NoTableReferences`]
    /// if the keyword is present but no table name follows it.
    pub fn new(statement: &str) -> Result<Self, ExplainError> {
        let keyword = PRINT_KEYWORD
            .find(statement)
            .ok_or_else(|| ExplainError::InvalidStatement {
                statement: statement.to_string(),
            })?;

        // A trailing statement terminator is not part of the last table name.
        let arguments = statement[keyword.end()..]
            .trim_end()
            .trim_end_matches(';');

        let table_names: Vec<String> = arguments
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();

        if table_names.is_empty() {
            return Err(ExplainError::NoTableReferences {
                statement: statement.to_string(),
            });
        }

        Ok(Self {
            statement: statement.to_string(),
            table_names,
        })
    }

    /// Whether a statement starts with the `print` keyword.
    ///
    /// Lets a routing pipeline pick out print statements without paying for
    /// (or erroring on) a full parse.
    pub fn is_print_statement(statement: &str) -> bool {
        PRINT_KEYWORD.is_match(statement)
    }

    /// The table names referenced by the statement, in order of appearance.
    ///
    /// Every name is non-empty and carries no leading/trailing whitespace.
    pub fn table_names(&self) -> &[String] {
        &self.table_names
    }

    /// The raw statement exactly as supplied.
    pub fn statement(&self) -> &str {
        &self.statement
    }
}
