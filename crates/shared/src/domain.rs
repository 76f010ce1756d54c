use serde::{Deserialize, Serialize};

/// Source-assigned catalog key. Opaque to this app; uniqueness is guaranteed
/// upstream and not validated locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One catalog item. Records are never mutated after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub images: Vec<String>,
}

impl Product {
    /// First image of the sequence, used as the display thumbnail. The wire
    /// format assumes at least one image but does not guarantee it, so
    /// callers must degrade gracefully on `None`.
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
