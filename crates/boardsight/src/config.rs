//! Runtime configuration assembled from the environment.

use crate::board::MondayConfig;
use crate::error::{BoardsightError, Result};
use crate::llm::{DEFAULT_COMPANY, LlmConfig};
use crate::metrics::MetricsConfig;

/// Environment variable holding the board service token.
pub const MONDAY_API_KEY_VAR: &str = "MONDAY_API_KEY";
/// Environment variables holding the LLM key, in lookup order.
pub const LLM_API_KEY_VARS: &[&str] = &["GEMINI_API_KEY", "GOOGLE_API_KEY"];
/// Environment variable holding the deals board identifier.
pub const DEALS_BOARD_VAR: &str = "DEALS_BOARD_ID";
/// Environment variable holding the work-orders board identifier.
pub const ORDERS_BOARD_VAR: &str = "WORK_ORDERS_BOARD_ID";

/// Configuration for a Boardsight run.
#[derive(Debug, Clone)]
pub struct BoardsightConfig {
    /// Board service token.
    pub monday_api_key: Option<String>,
    /// LLM API key.
    pub llm_api_key: Option<String>,
    /// Deals board identifier.
    pub deals_board_id: Option<String>,
    /// Work-orders board identifier.
    pub orders_board_id: Option<String>,
    /// Board client settings.
    pub monday: MondayConfig,
    /// LLM settings.
    pub llm: LlmConfig,
    /// Column names used by the metrics.
    pub metrics: MetricsConfig,
    /// Company named in the advisor prompt.
    pub company: String,
}

impl Default for BoardsightConfig {
    fn default() -> Self {
        Self {
            monday_api_key: None,
            llm_api_key: None,
            deals_board_id: None,
            orders_board_id: None,
            monday: MondayConfig::default(),
            llm: LlmConfig::default(),
            metrics: MetricsConfig::default(),
            company: DEFAULT_COMPANY.to_string(),
        }
    }
}

impl BoardsightConfig {
    /// Read keys and board identifiers from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read keys and board identifiers through a lookup function.
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Self {
            monday_api_key: get(MONDAY_API_KEY_VAR),
            llm_api_key: LLM_API_KEY_VARS.iter().find_map(|name| get(*name)),
            deals_board_id: get(DEALS_BOARD_VAR),
            orders_board_id: get(ORDERS_BOARD_VAR),
            ..Self::default()
        }
    }

    /// The board service token, or a configuration error naming the variable.
    pub fn require_monday_key(&self) -> Result<&str> {
        require(self.monday_api_key.as_deref(), MONDAY_API_KEY_VAR)
    }

    /// The LLM API key, or a configuration error naming the variables.
    pub fn require_llm_key(&self) -> Result<&str> {
        require(self.llm_api_key.as_deref(), &LLM_API_KEY_VARS.join(" or "))
    }

    /// The deals board identifier, or a configuration error.
    pub fn require_deals_board(&self) -> Result<&str> {
        require(self.deals_board_id.as_deref(), DEALS_BOARD_VAR)
    }

    /// The work-orders board identifier, or a configuration error.
    pub fn require_orders_board(&self) -> Result<&str> {
        require(self.orders_board_id.as_deref(), ORDERS_BOARD_VAR)
    }
}

fn require<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str> {
    value.ok_or_else(|| BoardsightError::Config(format!("{} is not set", name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_from_lookup() {
        let config = BoardsightConfig::from_lookup(lookup(&[
            ("MONDAY_API_KEY", "m-token"),
            ("GOOGLE_API_KEY", "g-key"),
            ("DEALS_BOARD_ID", "111"),
            ("WORK_ORDERS_BOARD_ID", "222"),
        ]));

        assert_eq!(config.require_monday_key().unwrap(), "m-token");
        assert_eq!(config.require_llm_key().unwrap(), "g-key");
        assert_eq!(config.require_deals_board().unwrap(), "111");
        assert_eq!(config.require_orders_board().unwrap(), "222");
        assert_eq!(config.company, DEFAULT_COMPANY);
    }

    #[test]
    fn test_gemini_key_preferred() {
        let config = BoardsightConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "gemini"),
            ("GOOGLE_API_KEY", "google"),
        ]));
        assert_eq!(config.llm_api_key.as_deref(), Some("gemini"));
    }

    #[test]
    fn test_missing_values() {
        let config = BoardsightConfig::from_lookup(lookup(&[("MONDAY_API_KEY", "  ")]));
        assert!(config.monday_api_key.is_none());

        let err = config.require_monday_key().unwrap_err();
        assert!(err.to_string().contains("MONDAY_API_KEY"));

        let err = config.require_llm_key().unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY or GOOGLE_API_KEY"));
    }
}
