use super::{CatalogSource, client::CatalogClient, models::*};
use crate::error::CatalogError;
use log::info;

impl CatalogClient {
    /// Run one search and return every record the server sent back.
    pub async fn search_books(&self, text: &str) -> Result<Vec<BookRecord>, CatalogError> {
        let url = self.search_url(text)?;
        let response = self.call(url).await?;
        let body = response.text().await?;

        let records = parse_search_answer(&body)?;
        info!("Catalog returned {} records for '{}'", records.len(), text);
        Ok(records)
    }
}

impl CatalogSource for CatalogClient {
    async fn search(&self, text: &str) -> Result<Vec<BookRecord>, CatalogError> {
        self.search_books(text).await
    }
}
