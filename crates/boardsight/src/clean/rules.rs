//! Per-column coercion rules.
//!
//! Each rule sees one whole column at a time and decides on its own how to
//! rewrite it. Rules run in order, so a later rule sees the output of an earlier one.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::table::CellValue;
use crate::table::format_number;

// Currency symbol and thousands separator.
static NUMERIC_NOISE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[$,]").unwrap());

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%Y%m%d",
];

/// A coercion applied to one column of a table.
pub trait ColumnRule: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Rewrite the column in place. Returns true if any cell changed.
    fn apply(&self, column: &str, cells: &mut [CellValue]) -> bool;
}

/// Converts a text column to numbers, but only if every cell parses.
///
/// Columns that already hold a number or a date are left alone, and so are
/// columns with a missing cell. A single stray token keeps the whole column as
/// its original, unstripped text.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericRule;

impl ColumnRule for NumericRule {
    fn name(&self) -> &str {
        "numeric"
    }

    fn apply(&self, _column: &str, cells: &mut [CellValue]) -> bool {
        if cells.is_empty() {
            return false;
        }

        let parsed: Option<Vec<f64>> = cells
            .iter()
            .map(|cell| cell.as_text().and_then(parse_number))
            .collect();

        match parsed {
            Some(numbers) => {
                for (cell, n) in cells.iter_mut().zip(numbers) {
                    *cell = CellValue::Number(n);
                }
                true
            }
            None => false,
        }
    }
}

/// Reinterprets every cell of a column whose name mentions "date".
///
/// Works per value: cells that parse become dates, everything else becomes missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRule;

impl DateRule {
    /// Whether the rule applies to a column name.
    pub fn matches(column: &str) -> bool {
        column.to_lowercase().contains("date")
    }
}

impl ColumnRule for DateRule {
    fn name(&self) -> &str {
        "date"
    }

    fn apply(&self, column: &str, cells: &mut [CellValue]) -> bool {
        if !Self::matches(column) {
            return false;
        }

        let mut changed = false;
        for cell in cells.iter_mut() {
            let coerced = match cell {
                CellValue::Date(_) | CellValue::Missing => continue,
                CellValue::Text(text) => parse_date(text),
                CellValue::Number(n) => parse_date(&format_number(*n)),
            };
            *cell = coerced.map(CellValue::Date).unwrap_or(CellValue::Missing);
            changed = true;
        }
        changed
    }
}

/// Parse a number after removing `$` and `,`. Non-finite results are rejected.
pub fn parse_number(raw: &str) -> Option<f64> {
    let stripped = NUMERIC_NOISE.replace_all(raw, "");
    stripped
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Parse a date or timestamp in one of the accepted layouts.
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(values: &[&str]) -> Vec<CellValue> {
        values.iter().map(|v| CellValue::Text(v.to_string())).collect()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("$1,200"), Some(1200.0));
        assert_eq!(parse_number("1000"), Some(1000.0));
        assert_eq!(parse_number(" 12.5 "), Some(12.5));
        assert_eq!(parse_number("-3"), Some(-3.0));
        assert_eq!(parse_number("$"), None);
        assert_eq!(parse_number("n/a-text"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn test_numeric_all_parse() {
        let mut cells = text(&["$1,200", "1000"]);
        assert!(NumericRule.apply("Deal value", &mut cells));
        assert_eq!(cells, vec![CellValue::Number(1200.0), CellValue::Number(1000.0)]);
    }

    #[test]
    fn test_numeric_all_or_nothing() {
        let mut cells = text(&["$500", "n/a-text"]);
        assert!(!NumericRule.apply("Deal value", &mut cells));
        assert_eq!(cells, text(&["$500", "n/a-text"]));
    }

    #[test]
    fn test_numeric_rejects_missing_cells() {
        let mut cells = vec![CellValue::Text("5".to_string()), CellValue::Missing];
        assert!(!NumericRule.apply("Count", &mut cells));
        assert_eq!(cells[0], CellValue::Text("5".to_string()));
    }

    #[test]
    fn test_numeric_skips_non_text() {
        let mut cells = vec![CellValue::Number(1.0), CellValue::Number(2.0)];
        assert!(!NumericRule.apply("Count", &mut cells));

        let mut empty: Vec<CellValue> = Vec::new();
        assert!(!NumericRule.apply("Count", &mut empty));
    }

    #[test]
    fn test_date_rule_matches_name() {
        assert!(DateRule::matches("Close Date"));
        assert!(DateRule::matches("UPDATED_DATE"));
        assert!(DateRule::matches("dates"));
        assert!(!DateRule::matches("Deal value"));
    }

    #[test]
    fn test_date_rule_per_value() {
        let mut cells = text(&["2024-01-15", "soon", "03/02/2024"]);
        cells.push(CellValue::Missing);

        assert!(DateRule.apply("Close Date", &mut cells));
        assert_eq!(cells[0], CellValue::Date(ymd(2024, 1, 15)));
        assert!(cells[1].is_missing());
        assert_eq!(cells[2], CellValue::Date(ymd(2024, 3, 2)));
        assert!(cells[3].is_missing());
    }

    #[test]
    fn test_date_rule_ignores_other_columns() {
        let mut cells = text(&["2024-01-15"]);
        assert!(!DateRule.apply("Stage", &mut cells));
        assert_eq!(cells, text(&["2024-01-15"]));
    }

    #[test]
    fn test_date_rule_reads_numeric_cells() {
        let mut cells = vec![CellValue::Number(20240115.0), CellValue::Number(7.0)];
        DateRule.apply("Start date", &mut cells);
        assert_eq!(cells[0], CellValue::Date(ymd(2024, 1, 15)));
        assert!(cells[1].is_missing());
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("2024-01-15"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("2024/01/15"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("15 Jan 2024"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("Jan 15, 2024"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("January 15, 2024"), Some(ymd(2024, 1, 15)));
        assert_eq!(
            parse_date("2024-01-15 09:30:00"),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(9, 30, 0)
        );
        assert_eq!(
            parse_date("2024-01-15T09:30:00Z"),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(9, 30, 0)
        );
        assert_eq!(parse_date("N/A"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2024-13-45"), None);
    }
}
