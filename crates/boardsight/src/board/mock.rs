//! In-memory board source for tests and offline runs.

use std::collections::HashMap;

use crate::error::{BoardsightError, Result};

use super::client::BoardSource;
use super::model::Board;

/// Board source that serves boards from memory.
///
/// Unknown identifiers fail with [`BoardsightError::MissingBoard`].
#[derive(Debug, Clone, Default)]
pub struct MockBoardSource {
    boards: HashMap<String, Board>,
}

impl MockBoardSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a board under an identifier.
    pub fn with_board(mut self, board_id: impl Into<String>, board: Board) -> Self {
        self.boards.insert(board_id.into(), board);
        self
    }
}

impl BoardSource for MockBoardSource {
    fn fetch_board(&self, board_id: &str) -> Result<Board> {
        self.boards
            .get(board_id)
            .cloned()
            .ok_or_else(|| BoardsightError::MissingBoard(board_id.to_string()))
    }
}
