use std::fmt;

/// Everything that can go wrong while asking the catalog for books.
///
/// All variants are the same failure from the UI's point of view: the search
/// request failed and the previous results stay on screen.
#[derive(Debug)]
pub enum CatalogError {
    Network(reqwest::Error),
    Status { code: u16, url: String },
    Json(serde_json::Error),
    InvalidUrl(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Network(e) => write!(f, "Network error: {}", e),
            CatalogError::Status { code, url } => {
                write!(f, "Catalog returned status {} for {}", code, url)
            }
            CatalogError::Json(e) => write!(f, "JSON parsing error: {}", e),
            CatalogError::InvalidUrl(e) => write!(f, "Invalid catalog URL: {}", e),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Network(e) => Some(e),
            CatalogError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::Network(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Json(err)
    }
}
