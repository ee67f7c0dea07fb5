//! Flattening of board items into column-title keyed rows.

use indexmap::IndexMap;
use tracing::debug;

use crate::board::Item;

use super::table::Table;

/// Column that always carries the item's display name.
pub const NAME_COLUMN: &str = "Name";

/// One item flattened to `column title -> raw text`, with `None` marking an absent value.
pub type NormalizedRow = IndexMap<String, Option<String>>;

/// Flatten one item into a row.
///
/// Column values without a title are dropped. Empty text becomes `None`.
/// The item's display name always wins over a column that happens to be titled "Name".
pub fn normalize_item(item: &Item) -> NormalizedRow {
    let mut row = NormalizedRow::with_capacity(item.column_values.len() + 1);
    row.insert(NAME_COLUMN.to_string(), Some(item.name.clone()));

    for value in &item.column_values {
        let Some(title) = value.title() else {
            continue;
        };
        if title == NAME_COLUMN {
            debug!(item = %item.name, "ignoring column titled '{}'", NAME_COLUMN);
            continue;
        }
        row.insert(title.to_string(), value.value().map(str::to_string));
    }

    row
}

/// Flatten every item and unify the rows into one table.
pub fn normalize_items(items: &[Item]) -> Table {
    let rows: Vec<NormalizedRow> = items.iter().map(normalize_item).collect();
    Table::from_rows(rows)
}
