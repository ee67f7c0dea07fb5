//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Boardsight: board analytics with LLM narratives
#[derive(Parser)]
#[command(name = "boardsight")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch one board and show or export its cleaned table
    Fetch {
        /// Board identifier
        #[arg(value_name = "BOARD_ID")]
        board_id: String,

        /// Write the table to a file instead of printing a preview
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (default: csv for files, preview for the terminal)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Number of rows to show in the preview
        #[arg(long, default_value = "20")]
        rows: usize,

        /// Treat a failed fetch as an empty board instead of an error
        #[arg(long)]
        allow_empty: bool,
    },

    /// Compute business metrics from the deals and work-orders boards
    Metrics {
        /// Deals board identifier (default: $DEALS_BOARD_ID)
        #[arg(long)]
        deals: Option<String>,

        /// Work-orders board identifier (default: $WORK_ORDERS_BOARD_ID)
        #[arg(long)]
        orders: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask a question about the pipeline
    Ask {
        /// The question to answer
        #[arg(value_name = "QUESTION")]
        question: String,

        /// Deals board identifier (default: $DEALS_BOARD_ID)
        #[arg(long)]
        deals: Option<String>,

        /// Work-orders board identifier (default: $WORK_ORDERS_BOARD_ID)
        #[arg(long)]
        orders: Option<String>,

        /// Model to use (e.g., "gemini-flash-latest")
        #[arg(long)]
        model: Option<String>,

        /// Use a mock LLM instead of calling the API
        #[arg(long)]
        mock_llm: bool,

        /// Print the prompt sent to the model
        #[arg(long)]
        show_prompt: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated values
    Csv,
    /// JSON array of row objects
    Json,
}
