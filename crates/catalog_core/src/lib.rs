use reqwest::Client;
use shared::{
    domain::Product,
    protocol::{products_from_document, CatalogDocument},
};
use tracing::{debug, info};

pub mod error;
pub mod query;
pub mod state;

pub use error::CatalogFetchError;

/// Production endpoint the app ships against. Overridable through the GUI
/// binary's `--catalog-url` flag or the `CATALOG_URL` environment variable.
pub const DEFAULT_CATALOG_URL: &str =
    "https://dfef-dmrn-tps-default-rtdb.firebaseio.com/products.json";

/// HTTP client for the remote product catalog.
///
/// The catalog is fetched in one shot at startup; there is no pagination and
/// no incremental refresh. Image bytes for thumbnails are fetched lazily,
/// one GET per displayed URL.
pub struct CatalogClient {
    http: Client,
    catalog_url: String,
}

impl CatalogClient {
    pub fn new(catalog_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            catalog_url: catalog_url.into(),
        }
    }

    pub fn catalog_url(&self) -> &str {
        &self.catalog_url
    }

    /// Fetches the keyed product document and flattens it into the full
    /// list, ordered by ascending record key (see
    /// [`shared::protocol::CatalogDocument`]).
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogFetchError> {
        debug!(url = %self.catalog_url, "fetching catalog document");
        let response = self
            .http
            .get(&self.catalog_url)
            .send()
            .await
            .map_err(CatalogFetchError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogFetchError::Status { status });
        }

        let document: CatalogDocument =
            response.json().await.map_err(CatalogFetchError::Decode)?;

        let products = products_from_document(document);
        info!(count = products.len(), "catalog document loaded");
        Ok(products)
    }

    /// Fetches raw image bytes for a product thumbnail. Decoding is left to
    /// the caller.
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, CatalogFetchError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(CatalogFetchError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogFetchError::Status { status });
        }

        let bytes = response.bytes().await.map_err(CatalogFetchError::Request)?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
