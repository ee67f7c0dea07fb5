//! Type inference and gap filling for normalized tables.

mod cleaner;
mod rules;

pub use cleaner::{TableCleaner, fill_missing};
pub use rules::{ColumnRule, DateRule, NumericRule, parse_date, parse_number};
