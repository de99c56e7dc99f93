//! Item record and insert input

use serde::{Deserialize, Serialize};

/// A stored item, serialized as `{id, name, description, price, available}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub available: bool,
}

fn default_available() -> bool {
    true
}

/// Input for inserting an item. The id is assigned by storage.
///
/// Price is not range-checked; negative values are stored as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default = "default_available")]
    pub available: bool,
}

impl NewItem {
    /// An available item with no description.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
            available: default_available(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }
}
