//! Table-wide cleaning pipeline.

use tracing::debug;

use crate::table::{CellValue, MISSING_SENTINEL, Table};

use super::rules::{ColumnRule, DateRule, NumericRule};

/// Applies column rules in order, then fills every remaining gap with the sentinel.
pub struct TableCleaner {
    rules: Vec<Box<dyn ColumnRule>>,
}

impl TableCleaner {
    /// Create a cleaner with the default rules: numeric, then date.
    pub fn new() -> Self {
        Self {
            rules: vec![Box::new(NumericRule), Box::new(DateRule)],
        }
    }

    /// Create a cleaner with no rules. Only the fill stage runs.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule. It runs after the existing ones.
    pub fn with_rule(mut self, rule: impl ColumnRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Names of the configured rules, in order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Coerce every column, then replace all missing cells with the sentinel.
    pub fn clean(&self, mut table: Table) -> Table {
        if table.is_empty() {
            return table;
        }

        table.for_each_column_mut(|column, cells| {
            for rule in &self.rules {
                if rule.apply(column, cells) {
                    debug!(column, rule = rule.name(), "column coerced");
                }
            }
        });

        fill_missing(&mut table);
        table
    }
}

impl Default for TableCleaner {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace every missing cell in the table with the sentinel text.
pub fn fill_missing(table: &mut Table) {
    table.for_each_column_mut(|_, cells| {
        for cell in cells.iter_mut().filter(|c| c.is_missing()) {
            *cell = CellValue::Text(MISSING_SENTINEL.to_string());
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Item;
    use crate::table::{ColumnKind, normalize_items};

    struct UppercaseRule;

    impl ColumnRule for UppercaseRule {
        fn name(&self) -> &str {
            "uppercase"
        }

        fn apply(&self, column: &str, cells: &mut [CellValue]) -> bool {
            if column != "Region" {
                return false;
            }
            for cell in cells.iter_mut() {
                if let CellValue::Text(s) = cell {
                    *s = s.to_uppercase();
                }
            }
            true
        }
    }

    fn deals() -> Table {
        normalize_items(&[
            Item::new("A").with_value("Deal value", Some("$1,200")),
            Item::new("B")
                .with_value("Deal value", Some("1000"))
                .with_value("Region", Some("West")),
        ])
    }

    #[test]
    fn test_clean_scenario() {
        let cleaned = TableCleaner::new().clean(deals());

        assert_eq!(cleaned.columns(), &["Name", "Deal value", "Region"]);
        assert_eq!(cleaned.column_kind("Deal value"), Some(ColumnKind::Numeric));
        assert_eq!(cleaned.get(0, "Deal value"), Some(&CellValue::Number(1200.0)));
        assert_eq!(cleaned.get(1, "Deal value"), Some(&CellValue::Number(1000.0)));
        assert!(cleaned.get(0, "Region").unwrap().is_sentinel());
        assert_eq!(cleaned.get(1, "Region").unwrap().as_text(), Some("West"));
    }

    #[test]
    fn test_mixed_column_stays_text() {
        let table = normalize_items(&[
            Item::new("A").with_value("Deal value", Some("$500")),
            Item::new("B").with_value("Deal value", Some("n/a-text")),
        ]);

        let cleaned = TableCleaner::new().clean(table);
        assert_eq!(cleaned.get(0, "Deal value").unwrap().as_text(), Some("$500"));
        assert_eq!(cleaned.get(1, "Deal value").unwrap().as_text(), Some("n/a-text"));
    }

    #[test]
    fn test_no_missing_after_clean() {
        let table = normalize_items(&[
            Item::new("A").with_value("Close date", Some("someday")),
            Item::new("B").with_value("Owner", Some("")),
        ]);

        let cleaned = TableCleaner::new().clean(table);
        assert!(cleaned.rows().iter().flatten().all(|c| !c.is_missing()));
        assert!(cleaned.get(0, "Close date").unwrap().is_sentinel());
        assert!(cleaned.get(1, "Close date").unwrap().is_sentinel());
        assert!(cleaned.get(1, "Owner").unwrap().is_sentinel());
    }

    #[test]
    fn test_clean_is_idempotent() {
        let table = normalize_items(&[
            Item::new("A")
                .with_value("Deal value", Some("$1,200"))
                .with_value("Close Date", Some("2024-02-01")),
            Item::new("B")
                .with_value("Deal value", Some("900"))
                .with_value("Close Date", Some("tbd"))
                .with_value("Region", Some("East")),
        ]);

        let cleaner = TableCleaner::new();
        let once = cleaner.clean(table);
        let twice = cleaner.clean(once.clone());
        assert_eq!(once, twice);
        assert_eq!(once.column_kind("Close Date"), Some(ColumnKind::Date));
    }

    #[test]
    fn test_empty_table_untouched() {
        let cleaned = TableCleaner::new().clean(Table::new());
        assert_eq!(cleaned, Table::new());
    }

    #[test]
    fn test_custom_rule_runs_after_defaults() {
        let cleaner = TableCleaner::new().with_rule(UppercaseRule);
        assert_eq!(cleaner.rule_names(), vec!["numeric", "date", "uppercase"]);

        let cleaned = cleaner.clean(deals());
        assert_eq!(cleaned.get(1, "Region").unwrap().as_text(), Some("WEST"));
        assert!(cleaned.get(0, "Region").unwrap().is_sentinel());
    }

    #[test]
    fn test_empty_cleaner_only_fills() {
        let cleaned = TableCleaner::empty().clean(deals());
        assert_eq!(cleaned.get(0, "Deal value").unwrap().as_text(), Some("$1,200"));
        assert!(cleaned.get(0, "Region").unwrap().is_sentinel());
    }
}
