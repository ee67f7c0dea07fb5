//! Board service access.
//!
//! The board service is queried once per board for its first page of items.
//! [`fetch_table`] runs the whole pipeline for one board: fetch, normalize, clean.
//!
//! # Example
//!
//! ```no_run
//! use boardsight::board::{MondayClient, fetch_table};
//! use boardsight::TableCleaner;
//!
//! let client = MondayClient::new("api-token").unwrap();
//! let table = fetch_table(&client, &TableCleaner::new(), "1234567890").unwrap();
//! println!("{} rows", table.row_count());
//! ```

mod client;
mod mock;
mod model;
mod pipeline;

pub use client::{BoardSource, MondayClient, MondayConfig};
pub use mock::MockBoardSource;
pub use model::{Board, ColumnRef, ColumnValue, Item};
pub use pipeline::{fetch_table, fetch_table_or_empty};
