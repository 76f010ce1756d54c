//! Catalog screen state as a unidirectional reducer.
//!
//! The visible list is always recomputed as `sort(filter(full, query), key)`
//! in one derivation. Sorting the current derived list in place (and letting
//! a later filter silently discard that order) is deliberately not
//! supported.

use shared::domain::Product;

use crate::query::{self, SortKey};

/// Everything the catalog screen renders. Updated only through [`reduce`];
/// the derived list is wholly recomputed, never patched in place.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    /// Full record list, set on successful load and otherwise untouched.
    pub products: Vec<Product>,
    /// Derived list: the committed query filtered over `products`, then
    /// ordered by `sort_key`.
    pub visible: Vec<Product>,
    /// Committed filter query. The draft being typed lives in the UI text
    /// buffer and only reaches the reducer on an explicit commit.
    pub query: String,
    pub sort_key: SortKey,
    /// True exactly while the catalog fetch is in flight.
    pub loading: bool,
    /// Last load failure, shown as a banner until dismissed or a reload
    /// starts.
    pub load_error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum CatalogAction {
    LoadStarted,
    LoadSucceeded(Vec<Product>),
    LoadFailed(String),
    FilterCommitted(String),
    SortKeyChanged(SortKey),
    LoadErrorDismissed,
}

pub fn reduce(state: &CatalogState, action: CatalogAction) -> CatalogState {
    let mut next = state.clone();
    match action {
        CatalogAction::LoadStarted => {
            next.loading = true;
            next.load_error = None;
        }
        CatalogAction::LoadSucceeded(products) => {
            next.loading = false;
            next.load_error = None;
            next.products = products;
            next.derive_visible();
        }
        CatalogAction::LoadFailed(message) => {
            // Both lists keep their prior value; only the flag and the error
            // channel change.
            next.loading = false;
            next.load_error = Some(message);
        }
        CatalogAction::FilterCommitted(committed_query) => {
            next.query = committed_query;
            next.derive_visible();
        }
        CatalogAction::SortKeyChanged(sort_key) => {
            next.sort_key = sort_key;
            next.derive_visible();
        }
        CatalogAction::LoadErrorDismissed => {
            next.load_error = None;
        }
    }
    next
}

impl CatalogState {
    fn derive_visible(&mut self) {
        self.visible = query::sort(query::filter(&self.products, &self.query), self.sort_key);
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
