//! Cell values held by a [`Table`](super::Table).

use std::fmt;

use chrono::{NaiveDateTime, Timelike};
use serde::{Serialize, Serializer};

/// Literal text that replaces every unrecoverable missing or invalid cell.
pub const MISSING_SENTINEL: &str = "N/A";

/// A single cell after normalization and (optionally) cleaning.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Raw or sentinel text.
    Text(String),
    /// A value from a column that parsed as numeric in full.
    Number(f64),
    /// A value from a date column.
    Date(NaiveDateTime),
    /// Absent value: the item lacked the column, the text was empty,
    /// or a date failed to parse.
    Missing,
}

impl CellValue {
    /// Build a cell from an optional raw value.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some(text) => CellValue::Text(text.to_string()),
            None => CellValue::Missing,
        }
    }

    /// Returns the text if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number if this is a numeric cell.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the timestamp if this is a date cell.
    pub fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            CellValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Returns true for the literal sentinel text.
    pub fn is_sentinel(&self) -> bool {
        matches!(self, CellValue::Text(s) if s == MISSING_SENTINEL)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{}", format_number(*n)),
            CellValue::Date(d) => {
                if d.num_seconds_from_midnight() == 0 && d.nanosecond() == 0 {
                    write!(f, "{}", d.format("%Y-%m-%d"))
                } else {
                    write!(f, "{}", d.format("%Y-%m-%d %H:%M:%S"))
                }
            }
            CellValue::Missing => Ok(()),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Number(n) => serializer.serialize_f64(*n),
            CellValue::Date(_) => serializer.collect_str(self),
            CellValue::Missing => serializer.serialize_none(),
        }
    }
}

/// Format a number without a trailing fraction when it is integral.
pub(crate) fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
