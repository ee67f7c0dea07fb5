//! Metrics command - compute business metrics from both boards.

use boardsight::{Advisor, BoardsightConfig, BusinessMetrics};
use colored::Colorize;

pub fn run(
    deals: Option<String>,
    orders: Option<String>,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = BoardsightConfig::from_env();
    let (deals_id, orders_id) = super::board_ids(&config, deals, orders)?;

    let advisor = Advisor::new(super::board_client(&config)?)
        .with_metrics_config(config.metrics.clone());

    let dataset = advisor.load(&deals_id, &orders_id)?;
    let metrics = advisor.metrics(&dataset);

    if json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
        return Ok(());
    }

    if verbose {
        println!(
            "Loaded {} deals and {} work orders",
            dataset.deals.row_count(),
            dataset.orders.row_count()
        );
        println!();
    }

    print_metrics(&metrics);
    Ok(())
}

/// Print metrics as a short colored summary.
pub(crate) fn print_metrics(metrics: &BusinessMetrics) {
    println!("{}", "Business Metrics".yellow().bold());
    println!("  {:24} {:.2}", "Total pipeline value", metrics.total_pipeline);
    println!("  {:24} {:.2}", "Open pipeline value", metrics.open_pipeline);
    println!("  {:24} {}", "Total deals", metrics.total_deals);
    println!("  {:24} {}", "Total work orders", metrics.total_orders);

    if !metrics.top_sectors.is_empty() {
        println!();
        println!("{}", "Top Sectors by Pipeline".yellow().bold());
        for sector in &metrics.top_sectors {
            println!("  {:24} {:.2}", sector.sector, sector.value);
        }
    }
}
