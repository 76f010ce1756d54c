//! Filter and sort over the in-memory product list.
//!
//! Both operations are pure: `filter` always derives from the full list and
//! `sort` returns a new ordering, so callers can compose them as a single
//! recomputation of the visible list.

use shared::domain::Product;

/// The four orderings offered by the sort selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::NameAsc => "Name (A-Z)",
            SortKey::NameDesc => "Name (Z-A)",
            SortKey::PriceAsc => "Price (low to high)",
            SortKey::PriceDesc => "Price (high to low)",
        }
    }
}

/// Keeps the records whose name or description contains `query` as a
/// case-insensitive substring. An empty query keeps everything.
pub fn filter(products: &[Product], query: &str) -> Vec<Product> {
    if query.is_empty() {
        return products.to_vec();
    }
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|product| {
            product.name.to_lowercase().contains(&needle)
                || product.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Reorders `products` by `key`. `sort_by` is a stable sort, so records with
/// equal keys keep their incoming relative order.
pub fn sort(mut products: Vec<Product>, key: SortKey) -> Vec<Product> {
    match key {
        SortKey::NameAsc => products.sort_by(|a, b| name_key(a).cmp(&name_key(b))),
        SortKey::NameDesc => products.sort_by(|a, b| name_key(b).cmp(&name_key(a))),
        SortKey::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }
    products
}

// Lowercased comparison stands in for locale collation.
fn name_key(product: &Product) -> String {
    product.name.to_lowercase()
}

#[cfg(test)]
#[path = "tests/query_tests.rs"]
mod tests;
