//! Wire types for the board service's item query.

use serde::{Deserialize, Deserializer, Serialize};

/// A board and the first page of its items.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Board {
    /// Display name of the board.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Items on the board, in board order.
    #[serde(default, rename = "items_page", deserialize_with = "items_from_page")]
    pub items: Vec<Item>,
}

/// One record on a board.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name of the item.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Column values exposed by this item. Items on one board may expose different subsets.
    #[serde(default, deserialize_with = "null_as_default")]
    pub column_values: Vec<ColumnValue>,
}

impl Item {
    /// Create an item with no column values.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_values: Vec::new(),
        }
    }

    /// Add a titled column value.
    pub fn with_value(mut self, title: impl Into<String>, text: Option<&str>) -> Self {
        self.column_values.push(ColumnValue {
            column: Some(ColumnRef {
                title: Some(title.into()),
            }),
            text: text.map(str::to_string),
        });
        self
    }
}

/// A (column, text) pair on an item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnValue {
    /// Reference to the column definition; may be absent in malformed data.
    #[serde(default)]
    pub column: Option<ColumnRef>,

    /// Rendered text of the value.
    #[serde(default)]
    pub text: Option<String>,
}

impl ColumnValue {
    /// The column title, if present and non-empty.
    pub fn title(&self) -> Option<&str> {
        self.column
            .as_ref()
            .and_then(|c| c.title.as_deref())
            .filter(|t| !t.is_empty())
    }

    /// The text, if present and non-empty.
    pub fn value(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }
}

/// Column definition referenced by a value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnRef {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Deserialize)]
struct ItemsPage {
    #[serde(default, deserialize_with = "null_as_default")]
    items: Vec<Item>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn items_from_page<'de, D>(deserializer: D) -> std::result::Result<Vec<Item>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ItemsPage>::deserialize(deserializer)?
        .map(|page| page.items)
        .unwrap_or_default())
}
