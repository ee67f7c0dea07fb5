//! Fetch-normalize-clean pipeline for a single board.

use tracing::{debug, info, warn};

use crate::clean::TableCleaner;
use crate::error::Result;
use crate::table::{Table, normalize_items};

use super::client::BoardSource;

/// Fetch a board and turn its items into a cleaned table.
///
/// Fetch failures are returned as errors, so a failed fetch is never
/// confused with a board that genuinely has no items.
pub fn fetch_table(
    source: &dyn BoardSource,
    cleaner: &TableCleaner,
    board_id: &str,
) -> Result<Table> {
    let board = source.fetch_board(board_id)?;
    debug!(board_id, board = %board.name, items = board.items.len(), "board fetched");

    let table = cleaner.clean(normalize_items(&board.items));
    info!(
        board_id,
        rows = table.row_count(),
        columns = table.column_count(),
        "board table ready"
    );
    Ok(table)
}

/// Like [`fetch_table`], but degrades to an empty table on any failure.
///
/// The failure is logged and otherwise discarded.
pub fn fetch_table_or_empty(
    source: &dyn BoardSource,
    cleaner: &TableCleaner,
    board_id: &str,
) -> Table {
    fetch_table(source, cleaner, board_id).unwrap_or_else(|e| {
        warn!(board_id, error = %e, "board fetch failed, continuing with an empty table");
        Table::new()
    })
}
