//! Tabular model and row normalization.

mod normalize;
mod table;
mod value;

pub use normalize::{NAME_COLUMN, NormalizedRow, normalize_item, normalize_items};
pub use table::{ColumnKind, Table};
pub use value::{CellValue, MISSING_SENTINEL};

pub(crate) use value::format_number;
