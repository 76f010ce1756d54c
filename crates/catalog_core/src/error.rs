use thiserror::Error;

/// Ways a catalog fetch can fail. The UI collapses all of them into a
/// single load-failed condition.
#[derive(Debug, Error)]
pub enum CatalogFetchError {
    #[error("catalog request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("catalog endpoint returned {status}")]
    Status { status: reqwest::StatusCode },
    #[error("catalog response was not a valid product document: {0}")]
    Decode(#[source] reqwest::Error),
}
