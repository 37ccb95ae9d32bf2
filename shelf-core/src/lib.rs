pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod expansion;
pub mod format;
pub mod pagination;

#[cfg(test)]
mod testing;

pub use catalog::{ApiCall, BookRecord, CatalogClient, CatalogSource, ImageLinks, VolumeInfo};
pub use config::CatalogConfig;
pub use controller::{SearchController, SearchOutcome, SearchTicket, Sequencing};
pub use error::CatalogError;
pub use expansion::RowExpansion;
pub use format::{
    authors_label, format_detail_card, format_published_date, format_row, result_count_label,
    title_initials, title_label,
};
pub use pagination::{
    DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, PageDirection, PaginationModel, PaginationState, slice,
};

/// Pagination sized for the page control to match what the client asks for.
pub fn pagination_for(config: &CatalogConfig) -> PaginationModel {
    PaginationModel::new(config.max_results as usize)
}
