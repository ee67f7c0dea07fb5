//! Column-unified table built from normalized rows.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use indexmap::IndexSet;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::error::{BoardsightError, Result};

use super::normalize::NormalizedRow;
use super::value::CellValue;

/// Semantic kind of a column, derived from its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Every cell is a number.
    Numeric,
    /// At least one date; the rest are dates or missing markers.
    Date,
    /// Anything else.
    Text,
}

/// An ordered sequence of rows sharing one column schema.
///
/// The schema is the union of the keys of every source row, in first-seen order.
/// Rows lacking a column hold [`CellValue::Missing`] for it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Create an empty table (zero rows, zero columns).
    pub fn new() -> Self {
        Self::default()
    }

    /// Unify normalized rows into a table.
    pub fn from_rows(rows: Vec<NormalizedRow>) -> Self {
        let mut columns: IndexSet<String> = IndexSet::new();
        for row in &rows {
            for key in row.keys() {
                if !columns.contains(key) {
                    columns.insert(key.clone());
                }
            }
        }

        let rows = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|col| CellValue::from_raw(row.get(col).and_then(|v| v.as_deref())))
                    .collect()
            })
            .collect();

        Self {
            columns: columns.into_iter().collect(),
            rows,
        }
    }

    /// Column names in schema order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Row data, aligned with [`columns`](Self::columns).
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Whether the table has a column with this name.
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// All cells of a column by name.
    pub fn column(&self, name: &str) -> Option<Vec<&CellValue>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(|row| &row[index]).collect())
    }

    /// A specific cell.
    pub fn get(&self, row: usize, column: &str) -> Option<&CellValue> {
        let index = self.column_index(column)?;
        self.rows.get(row).map(|r| &r[index])
    }

    /// Classify a column from its current cells.
    pub fn column_kind(&self, name: &str) -> Option<ColumnKind> {
        let cells = self.column(name)?;

        if !cells.is_empty() && cells.iter().all(|c| matches!(c, CellValue::Number(_))) {
            return Some(ColumnKind::Numeric);
        }

        let has_date = cells.iter().any(|c| matches!(c, CellValue::Date(_)));
        let rest_missing = cells
            .iter()
            .all(|c| matches!(c, CellValue::Date(_) | CellValue::Missing) || c.is_sentinel());
        if has_date && rest_missing {
            return Some(ColumnKind::Date);
        }

        Some(ColumnKind::Text)
    }

    /// Rewrite every column in place. The closure receives the column name and its cells.
    pub(crate) fn for_each_column_mut(&mut self, mut f: impl FnMut(&str, &mut [CellValue])) {
        for (index, name) in self.columns.iter().enumerate() {
            let mut cells: Vec<CellValue> = self
                .rows
                .iter_mut()
                .map(|row| std::mem::replace(&mut row[index], CellValue::Missing))
                .collect();

            f(name, &mut cells);

            for (row, cell) in self.rows.iter_mut().zip(cells) {
                row[index] = cell;
            }
        }
    }

    /// Write the table as CSV with a header row. Missing cells are written empty.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(&self.columns)?;
        for row in &self.rows {
            wtr.write_record(row.iter().map(|cell| cell.to_string()))?;
        }
        wtr.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    /// Save the table to a CSV file.
    pub fn save_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| BoardsightError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.write_csv(file)
    }

    /// Render the first `max_rows` rows as an aligned plain-text grid.
    pub fn preview(&self, max_rows: usize) -> String {
        if self.columns.is_empty() {
            return "(empty table)".to_string();
        }

        let shown: Vec<Vec<String>> = self
            .rows
            .iter()
            .take(max_rows)
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, name)| {
                shown
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(name.chars().count()))
                    .max()
                    .unwrap_or(0)
                    .min(32)
            })
            .collect();

        let render = |cells: Vec<&str>| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| {
                    let truncated: String = cell.chars().take(*width).collect();
                    format!("{:<width$}", truncated, width = *width)
                })
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let mut lines = vec![render(self.columns.iter().map(String::as_str).collect())];
        for row in &shown {
            lines.push(render(row.iter().map(String::as_str).collect()));
        }
        if self.rows.len() > max_rows {
            lines.push(format!("... {} more rows", self.rows.len() - max_rows));
        }
        lines.join("\n")
    }
}

/// Serializes as a list of row objects keyed by column name.
impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in &self.rows {
            seq.serialize_element(&RowRef {
                columns: &self.columns,
                cells: row,
            })?;
        }
        seq.end()
    }
}

struct RowRef<'a> {
    columns: &'a [String],
    cells: &'a [CellValue],
}

impl Serialize for RowRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, cell) in self.columns.iter().zip(self.cells) {
            map.serialize_entry(name, cell)?;
        }
        map.end()
    }
}
