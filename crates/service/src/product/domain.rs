use serde::{Deserialize, Serialize};

/// Product (business view).
///
/// `id` is `None` until the storage layer assigns one on insert; it is stable
/// afterwards and never overwritten by an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
}
