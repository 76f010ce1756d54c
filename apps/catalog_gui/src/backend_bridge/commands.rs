//! Backend commands queued from UI to backend worker.

use shared::domain::ProductId;

pub enum BackendCommand {
    LoadCatalog,
    FetchThumbnail { product_id: ProductId, url: String },
}
