pub mod api;
pub mod client;
pub mod models;

pub use client::{ApiCall, CatalogClient};
pub use models::{BookRecord, ImageLinks, SearchAnswer, VolumeInfo, parse_search_answer};

use crate::error::CatalogError;

/// Anything that can answer a catalog search with a full result set.
///
/// `CatalogClient` is the HTTP implementation; the controller only depends on
/// this trait so it can be driven without a server.
pub trait CatalogSource {
    fn search(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<Vec<BookRecord>, CatalogError>> + Send;
}
