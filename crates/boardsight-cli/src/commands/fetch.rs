//! Fetch command - fetch one board and show or export its cleaned table.

use std::fs::File;
use std::path::PathBuf;

use boardsight::board::{fetch_table, fetch_table_or_empty};
use boardsight::{BoardsightConfig, ColumnKind, Table, TableCleaner};
use colored::Colorize;
use tracing::debug;

use crate::cli::OutputFormat;

pub fn run(
    board_id: String,
    output: Option<PathBuf>,
    format: Option<OutputFormat>,
    rows: usize,
    allow_empty: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = BoardsightConfig::from_env();
    let client = super::board_client(&config)?;
    let cleaner = TableCleaner::new();
    debug!(board_id = %board_id, allow_empty, ?format, "fetch command");

    eprintln!("{} board {}", "Fetching".cyan().bold(), board_id.white());

    let table = if allow_empty {
        fetch_table_or_empty(&client, &cleaner, &board_id)
    } else {
        fetch_table(&client, &cleaner, &board_id)?
    };

    if verbose {
        print_schema(&table);
    }

    match (output, format) {
        (Some(path), format) => {
            let file = File::create(&path)
                .map_err(|e| format!("Cannot create {}: {}", path.display(), e))?;
            match format.unwrap_or(OutputFormat::Csv) {
                OutputFormat::Csv => table.write_csv(file)?,
                OutputFormat::Json => serde_json::to_writer_pretty(file, &table)?,
            }
            eprintln!(
                "{} {} rows to {}",
                "Saved".green().bold(),
                table.row_count(),
                path.display().to_string().white()
            );
        }
        (None, Some(OutputFormat::Csv)) => table.write_csv(std::io::stdout())?,
        (None, Some(OutputFormat::Json)) => {
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
        (None, None) => {
            println!("{}", table.preview(rows));
            println!();
            println!(
                "{} rows, {} columns",
                table.row_count().to_string().white().bold(),
                table.column_count().to_string().white().bold()
            );
        }
    }

    Ok(())
}

fn print_schema(table: &Table) {
    eprintln!();
    eprintln!("{}", "Columns:".yellow().bold());
    for name in table.columns() {
        let kind = match table.column_kind(name) {
            Some(ColumnKind::Numeric) => "numeric".blue(),
            Some(ColumnKind::Date) => "date".magenta(),
            _ => "text".normal(),
        };
        eprintln!("  {:30} {}", name, kind);
    }
    eprintln!();
}
