//! Aggregate business metrics over the deals and work-order tables.
//!
//! The well-known columns are optional. When one is absent, the metrics that
//! depend on it degrade to zero or empty instead of failing.

use std::cmp::Ordering;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::table::{CellValue, Table};

/// Names of the columns the metrics read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Column holding each deal's value.
    pub deal_value_column: String,
    /// Column holding each deal's status.
    pub status_column: String,
    /// Status value that marks a deal as open.
    pub open_status: String,
    /// Column holding each deal's sector.
    pub sector_column: String,
    /// Number of sectors reported in the breakdown.
    pub top_sectors: usize,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            deal_value_column: "Masked Deal value".to_string(),
            status_column: "Deal Status".to_string(),
            open_status: "Open".to_string(),
            sector_column: "Sector/service".to_string(),
            top_sectors: 3,
        }
    }
}

/// Pipeline value attributed to one sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorTotal {
    pub sector: String,
    pub value: f64,
}

/// Headline numbers handed to the language model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessMetrics {
    /// Sum of all deal values.
    pub total_pipeline: f64,
    /// Sum of deal values whose status is open.
    pub open_pipeline: f64,
    /// Number of deals.
    pub total_deals: usize,
    /// Number of work orders.
    pub total_orders: usize,
    /// Largest sectors by pipeline value, descending.
    #[serde(default)]
    pub top_sectors: Vec<SectorTotal>,
}

impl BusinessMetrics {
    /// Compute metrics from a deals table and a work-orders table.
    pub fn compute(deals: &Table, orders: &Table, config: &MetricsConfig) -> Self {
        let values: Vec<f64> = match deals.column(&config.deal_value_column) {
            Some(cells) => cells.into_iter().map(deal_value).collect(),
            None => vec![0.0; deals.row_count()],
        };

        let total_pipeline: f64 = values.iter().sum();

        let open_pipeline = deals
            .column(&config.status_column)
            .map(|statuses| {
                statuses
                    .iter()
                    .zip(&values)
                    .filter(|(status, _)| status.as_text() == Some(config.open_status.as_str()))
                    .map(|(_, value)| value)
                    .sum::<f64>()
            })
            .unwrap_or(0.0);

        let top_sectors = deals
            .column(&config.sector_column)
            .map(|sectors| top_sectors(&sectors, &values, config.top_sectors))
            .unwrap_or_default();

        Self {
            total_pipeline,
            open_pipeline,
            total_deals: deals.row_count(),
            total_orders: orders.row_count(),
            top_sectors,
        }
    }
}

/// Numeric value of a deal-value cell. Anything unparseable counts as zero.
///
/// Text cells are parsed as plain numbers without stripping currency noise:
/// a column the cleaner left as text is not uniformly numeric.
fn deal_value(cell: &CellValue) -> f64 {
    match cell {
        CellValue::Number(n) => *n,
        CellValue::Text(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .unwrap_or(0.0),
        CellValue::Date(_) | CellValue::Missing => 0.0,
    }
}

fn top_sectors(sectors: &[&CellValue], values: &[f64], limit: usize) -> Vec<SectorTotal> {
    let mut totals: IndexMap<String, f64> = IndexMap::new();
    for (sector, value) in sectors.iter().zip(values) {
        *totals.entry(sector.to_string()).or_insert(0.0) += value;
    }

    let mut ranked: Vec<SectorTotal> = totals
        .into_iter()
        .map(|(sector, value)| SectorTotal { sector, value })
        .collect();
    ranked.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.sector.cmp(&b.sector))
    });
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Item;
    use crate::clean::TableCleaner;
    use crate::table::normalize_items;

    fn deals() -> Table {
        TableCleaner::new().clean(normalize_items(&[
            Item::new("D1")
                .with_value("Masked Deal value", Some("$1,000"))
                .with_value("Deal Status", Some("Open"))
                .with_value("Sector/service", Some("Mining")),
            Item::new("D2")
                .with_value("Masked Deal value", Some("2500"))
                .with_value("Deal Status", Some("Won"))
                .with_value("Sector/service", Some("Energy")),
            Item::new("D3")
                .with_value("Masked Deal value", Some("500"))
                .with_value("Deal Status", Some("Open"))
                .with_value("Sector/service", Some("Mining")),
            Item::new("D4")
                .with_value("Masked Deal value", Some("100"))
                .with_value("Deal Status", Some("Open"))
                .with_value("Sector/service", Some("Agriculture")),
            Item::new("D5")
                .with_value("Masked Deal value", Some("50"))
                .with_value("Deal Status", Some("Lost"))
                .with_value("Sector/service", Some("Railways")),
        ]))
    }

    fn orders() -> Table {
        normalize_items(&[Item::new("W1"), Item::new("W2")])
    }

    #[test]
    fn test_compute_metrics() {
        let metrics = BusinessMetrics::compute(&deals(), &orders(), &MetricsConfig::default());

        assert_eq!(metrics.total_pipeline, 4150.0);
        assert_eq!(metrics.open_pipeline, 1600.0);
        assert_eq!(metrics.total_deals, 5);
        assert_eq!(metrics.total_orders, 2);
        assert_eq!(
            metrics.top_sectors,
            vec![
                SectorTotal { sector: "Energy".to_string(), value: 2500.0 },
                SectorTotal { sector: "Mining".to_string(), value: 1500.0 },
                SectorTotal { sector: "Agriculture".to_string(), value: 100.0 },
            ]
        );
    }

    #[test]
    fn test_missing_columns_degrade() {
        let deals = normalize_items(&[Item::new("D1"), Item::new("D2")]);
        let metrics = BusinessMetrics::compute(&deals, &Table::new(), &MetricsConfig::default());

        assert_eq!(metrics.total_pipeline, 0.0);
        assert_eq!(metrics.open_pipeline, 0.0);
        assert_eq!(metrics.total_deals, 2);
        assert_eq!(metrics.total_orders, 0);
        assert!(metrics.top_sectors.is_empty());
    }

    #[test]
    fn test_text_deal_values_not_stripped() {
        // One stray token keeps the column as text; currency strings no longer count.
        let deals = TableCleaner::new().clean(normalize_items(&[
            Item::new("D1").with_value("Masked Deal value", Some("$1,000")),
            Item::new("D2").with_value("Masked Deal value", Some("tbd")),
            Item::new("D3"),
        ]));
        assert_eq!(
            deals.column_kind("Masked Deal value"),
            Some(crate::table::ColumnKind::Text)
        );
        let metrics = BusinessMetrics::compute(&deals, &Table::new(), &MetricsConfig::default());
        assert_eq!(metrics.total_pipeline, 0.0);
    }

    #[test]
    fn test_text_deal_values_plain_numbers_counted() {
        let deals = TableCleaner::new().clean(normalize_items(&[
            Item::new("D1").with_value("Masked Deal value", Some("250")),
            Item::new("D2").with_value("Masked Deal value", Some("$1,000")),
            Item::new("D3").with_value("Masked Deal value", Some("NaN")),
        ]));
        let metrics = BusinessMetrics::compute(&deals, &Table::new(), &MetricsConfig::default());
        assert_eq!(metrics.total_pipeline, 250.0);
    }

    #[test]
    fn test_sector_ties_sorted_by_name() {
        let deals = normalize_items(&[
            Item::new("D1")
                .with_value("Masked Deal value", Some("10"))
                .with_value("Sector/service", Some("B")),
            Item::new("D2")
                .with_value("Masked Deal value", Some("10"))
                .with_value("Sector/service", Some("A")),
        ]);
        let config = MetricsConfig {
            top_sectors: 1,
            ..Default::default()
        };
        let metrics = BusinessMetrics::compute(&deals, &Table::new(), &config);
        assert_eq!(metrics.top_sectors.len(), 1);
        assert_eq!(metrics.top_sectors[0].sector, "A");
    }
}
