use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use sql_print_explainer::{explain_script, ExplainOptions, PrintStatementExplainer};

#[derive(Parser)]
#[command(name = "sql-print-explainer")]
#[command(author, version, about = "Table-reference extraction for print statements")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Explain the print statements of a single statement or a script file
    Explain {
        /// A single statement to explain
        #[arg(short, long, conflicts_with = "script")]
        statement: Option<String>,

        /// Path to a script file to explain
        #[arg(short = 'f', long)]
        script: Option<PathBuf>,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Explain {
            statement,
            script,
            verbose,
        } => {
            let explainers = match (statement, script) {
                (Some(statement), None) => vec![PrintStatementExplainer::new(&statement)?],
                (None, Some(script_path)) => explain_script(ExplainOptions {
                    script_path,
                    verbose,
                })?,
                _ => anyhow::bail!("Provide either --statement or --script"),
            };

            for explainer in &explainers {
                println!(
                    "{} -> {}",
                    explainer.statement(),
                    explainer.table_names().join(", ")
                );
            }
        }
    }

    Ok(())
}
