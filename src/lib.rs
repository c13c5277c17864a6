//! sql-print-explainer: table-reference extraction for print statements
//!
//! The SQL-extension dialect accepts a non-standard `print` directive that
//! displays the named tables during plan explanation. This library extracts,
//! ahead of execution, the ordered table names a print statement references.
//!
//! The document-store boundary the explain pipeline sits next to is described
//! by the contracts in [`document`]; its persistence lives elsewhere.

pub mod document;
pub mod error;
pub mod explainer;

use std::path::PathBuf;

use anyhow::Result;

pub use error::ExplainError;
pub use explainer::PrintStatementExplainer;

/// Options for explaining a script file
#[derive(Debug, Clone)]
pub struct ExplainOptions {
    /// Path to the script file
    pub script_path: PathBuf,
    /// Enable verbose output
    pub verbose: bool,
}

/// Explain every print statement in a script file
///
/// Reads the script, splits it into statements, and builds an explainer for
/// each print statement. Statements of the rest of the dialect are skipped;
/// they are handled by the execution pipeline, not here.
pub fn explain_script(options: ExplainOptions) -> Result<Vec<PrintStatementExplainer>> {
    let content = std::fs::read_to_string(&options.script_path).map_err(|source| {
        ExplainError::ScriptReadError {
            path: options.script_path.clone(),
            source,
        }
    })?;

    let statements = explainer::split_statements(&content);

    if options.verbose {
        println!("Found {} statements", statements.len());
    }

    let mut explainers = Vec::new();
    for statement in &statements {
        if !PrintStatementExplainer::is_print_statement(statement) {
            continue;
        }
        explainers.push(PrintStatementExplainer::new(statement)?);
    }

    if options.verbose {
        println!("Explained {} print statements", explainers.len());
    }

    Ok(explainers)
}
