//! Boardsight CLI - board analytics with LLM narratives.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Fetch {
            board_id,
            output,
            format,
            rows,
            allow_empty,
        } => commands::fetch::run(board_id, output, format, rows, allow_empty, cli.verbose),

        Commands::Metrics {
            deals,
            orders,
            json,
        } => commands::metrics::run(deals, orders, json, cli.verbose),

        Commands::Ask {
            question,
            deals,
            orders,
            model,
            mock_llm,
            show_prompt,
        } => commands::ask::run(
            question,
            deals,
            orders,
            model,
            mock_llm,
            show_prompt,
            cli.verbose,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "boardsight=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
