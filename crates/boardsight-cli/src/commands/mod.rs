//! CLI command implementations.

pub mod ask;
pub mod fetch;
pub mod metrics;

use boardsight::{BoardsightConfig, MondayClient};

/// Build a board client from the environment configuration.
pub(crate) fn board_client(config: &BoardsightConfig) -> Result<MondayClient, Box<dyn std::error::Error>> {
    let api_key = config.require_monday_key()?;
    Ok(MondayClient::with_config(api_key, config.monday.clone())?)
}

/// Resolve the two board identifiers, preferring command-line values.
pub(crate) fn board_ids(
    config: &BoardsightConfig,
    deals: Option<String>,
    orders: Option<String>,
) -> Result<(String, String), Box<dyn std::error::Error>> {
    let deals = match deals {
        Some(id) => id,
        None => config.require_deals_board()?.to_string(),
    };
    let orders = match orders {
        Some(id) => id,
        None => config.require_orders_board()?.to_string(),
    };
    Ok((deals, orders))
}
