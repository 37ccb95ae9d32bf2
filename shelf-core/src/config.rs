/// Where the catalog lives when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3001";
/// Joined onto the base URL, so it stays relative to any path prefix.
pub const SEARCH_PATH: &str = "api/v1/search";
/// Server-side start offset sent with every search.
pub const DEFAULT_START_INDEX: u32 = 5;
/// Upper bound on the records the server returns for one search.
pub const DEFAULT_MAX_RESULTS: u32 = 40;

/// Connection settings for the catalog search endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub base_url: String,
    pub start_index: u32,
    pub max_results: u32,
}

impl CatalogConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_start_index(mut self, start_index: u32) -> Self {
        self.start_index = start_index;
        self
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            start_index: DEFAULT_START_INDEX,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.base_url, "http://localhost:3001");
        assert_eq!(config.start_index, 5);
        assert_eq!(config.max_results, 40);
    }

    #[test]
    fn test_builder_keeps_other_fields() {
        let config = CatalogConfig::new("http://books.internal:8080").with_start_index(0);
        assert_eq!(config.base_url, "http://books.internal:8080");
        assert_eq!(config.start_index, 0);
        assert_eq!(config.max_results, DEFAULT_MAX_RESULTS);
    }
}
