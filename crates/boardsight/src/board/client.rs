//! GraphQL client for the monday.com board API.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::error::{BoardsightError, Result};

use super::model::Board;

/// Board API endpoint.
const API_URL: &str = "https://api.monday.com/v2";

/// Board API version header value.
const API_VERSION: &str = "2023-10";

/// Maximum number of items requested per board. Larger boards are truncated.
pub const ITEM_LIMIT: usize = 500;

/// Anything that can produce a board by identifier.
pub trait BoardSource {
    /// Fetch one board with its first page of items.
    fn fetch_board(&self, board_id: &str) -> Result<Board>;
}

/// Configuration for the board client.
#[derive(Debug, Clone)]
pub struct MondayConfig {
    /// GraphQL endpoint.
    pub api_url: String,

    /// Value for the `API-Version` header.
    pub api_version: String,

    /// Items requested per board.
    pub item_limit: usize,

    /// Request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,
}

impl Default for MondayConfig {
    fn default() -> Self {
        Self {
            api_url: API_URL.to_string(),
            api_version: API_VERSION.to_string(),
            item_limit: ITEM_LIMIT,
            timeout: None,
        }
    }
}

/// Blocking client for the board service.
pub struct MondayClient {
    client: Client,
    api_key: String,
    config: MondayConfig,
}

impl MondayClient {
    /// Create a client with the given API token.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, MondayConfig::default())
    }

    /// Create a client with custom configuration.
    pub fn with_config(api_key: impl Into<String>, config: MondayConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| BoardsightError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            config,
        })
    }

    /// Create from the `MONDAY_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("MONDAY_API_KEY").map_err(|_| {
            BoardsightError::Config("MONDAY_API_KEY environment variable not set".to_string())
        })?;
        Self::new(api_key)
    }

    pub fn config(&self) -> &MondayConfig {
        &self.config
    }

    /// Build headers for API requests.
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&self.api_key)
                .map_err(|e| BoardsightError::Config(format!("Invalid API key: {}", e)))?,
        );
        headers.insert(
            "API-Version",
            HeaderValue::from_str(&self.config.api_version)
                .map_err(|e| BoardsightError::Config(format!("Invalid API version: {}", e)))?,
        );
        Ok(headers)
    }

    /// Build the request body for one board.
    fn request_body(&self, board_id: &str) -> Value {
        json!({
            "query": board_query(self.config.item_limit),
            "variables": { "board_id": [board_id] }
        })
    }
}

impl BoardSource for MondayClient {
    fn fetch_board(&self, board_id: &str) -> Result<Board> {
        debug!(board_id, url = %self.config.api_url, "querying board");

        let response = self
            .client
            .post(&self.config.api_url)
            .headers(self.build_headers()?)
            .json(&self.request_body(board_id))
            .send()
            .map_err(BoardsightError::Transport)?;

        let status = response.status().as_u16();
        let body = response.text().map_err(BoardsightError::Transport)?;

        parse_response(board_id, status, &body)
    }
}

/// GraphQL query for a board's name and its first page of items.
fn board_query(limit: usize) -> String {
    format!(
        r#"query ($board_id: [ID!]) {{
    boards (ids: $board_id) {{
        name
        items_page (limit: {limit}) {{
            items {{
                name
                column_values {{
                    column {{ title }}
                    text
                }}
            }}
        }}
    }}
}}"#
    )
}

/// Interpret a raw HTTP response from the board service.
///
/// A non-success status, a top-level `errors` key (even `null` or empty), or the absence of
/// `data.boards[0]` are each reported as distinct errors.
pub(crate) fn parse_response(board_id: &str, status: u16, body: &str) -> Result<Board> {
    if !(200..300).contains(&status) {
        return Err(BoardsightError::Status {
            status,
            body: body.to_string(),
        });
    }

    let response: GraphQlResponse = serde_json::from_str(body)?;

    if let Some(errors) = response.errors {
        return Err(BoardsightError::Query(error_messages(&errors)));
    }

    response
        .data
        .and_then(|data| data.boards)
        .and_then(|boards| boards.into_iter().next())
        .ok_or_else(|| BoardsightError::MissingBoard(board_id.to_string()))
}

fn error_messages(errors: &Value) -> Vec<String> {
    let message = |e: &Value| match e.get("message").and_then(Value::as_str) {
        Some(message) => message.to_string(),
        None => e.to_string(),
    };
    match errors {
        Value::Array(items) => items.iter().map(message).collect(),
        Value::Null => Vec::new(),
        other => vec![message(other)],
    }
}

/// Keeps a present-but-null field as `Some(Value::Null)`.
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Top-level GraphQL envelope.
#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<ResponseData>,
    #[serde(default, deserialize_with = "present")]
    errors: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    #[serde(default)]
    boards: Option<Vec<Board>>,
}
