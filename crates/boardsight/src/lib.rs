//! Boardsight: board-service analytics with LLM narratives.
//!
//! Boardsight pulls items from a project-management board, flattens their
//! loosely-typed column values into a column-unified table, infers numeric and
//! date columns, and hands headline business metrics to a language model
//! together with a free-text question.
//!
//! # Pipeline
//!
//! - **Fetch**: one GraphQL query per board, first 500 items
//! - **Normalize**: each item becomes a `title -> text` row; the table schema is the union of all rows
//! - **Clean**: all-or-nothing numeric coercion, per-value date coercion, then `"N/A"` for every gap
//!
//! # Example
//!
//! ```no_run
//! use boardsight::{Advisor, GeminiProvider, MondayClient};
//!
//! let advisor = Advisor::new(MondayClient::from_env().unwrap())
//!     .with_llm(GeminiProvider::from_env().unwrap());
//!
//! let dataset = advisor.load("1111111111", "2222222222").unwrap();
//! let answer = advisor.ask(&dataset, "How is the energy pipeline looking?").unwrap();
//! println!("{}", answer.text);
//! ```

pub mod board;
pub mod clean;
pub mod config;
pub mod error;
pub mod llm;
pub mod metrics;
pub mod table;

mod advisor;

pub use crate::advisor::{Advisor, Answer, Dataset};
pub use board::{Board, BoardSource, Item, MockBoardSource, MondayClient, MondayConfig};
pub use clean::{ColumnRule, TableCleaner};
pub use config::BoardsightConfig;
pub use error::{BoardsightError, Result};
pub use llm::{GeminiProvider, LlmConfig, LlmProvider, MockProvider};
pub use metrics::{BusinessMetrics, MetricsConfig, SectorTotal};
pub use table::{CellValue, ColumnKind, MISSING_SENTINEL, Table};
