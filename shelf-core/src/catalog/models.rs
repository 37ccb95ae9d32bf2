use crate::error::CatalogError;
use log::info;
use serde::{Deserialize, Serialize};

/// Body of `GET /api/v1/search`. Records are kept as raw JSON first so that a
/// single malformed entry doesn't sink the whole answer.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct SearchAnswer {
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BookRecord {
    pub id: String,
    #[serde(rename = "volumeInfo", default)]
    pub volume_info: VolumeInfo,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    #[serde(default)]
    pub authors: Vec<String>,
    pub title: Option<String>,
    pub published_date: Option<String>,
    pub image_links: Option<ImageLinks>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ImageLinks {
    pub thumbnail: Option<String>,
}

impl BookRecord {
    pub fn title(&self) -> Option<&str> {
        self.volume_info
            .title
            .as_deref()
            .filter(|title| !title.trim().is_empty())
    }

    pub fn authors(&self) -> &[String] {
        &self.volume_info.authors
    }

    pub fn published_date(&self) -> Option<&str> {
        self.volume_info.published_date.as_deref()
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.volume_info
            .image_links
            .as_ref()
            .and_then(|links| links.thumbnail.as_deref())
    }

    pub fn description(&self) -> Option<&str> {
        self.volume_info.description.as_deref()
    }
}

/// Decode a search response body into the records it carries.
///
/// A body that isn't the expected JSON object is an error. Individual records
/// without an `id` are skipped.
pub fn parse_search_answer(body: &str) -> Result<Vec<BookRecord>, CatalogError> {
    let answer: SearchAnswer = serde_json::from_str(body)?;

    let mut records = Vec::with_capacity(answer.data.len());
    for raw in answer.data {
        match serde_json::from_value::<BookRecord>(raw) {
            Ok(record) => records.push(record),
            Err(e) => {
                info!("Skipping invalid book record: {}", e);
                continue;
            }
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dune_answer() {
        let input = include_str!("../../test_data/search_answer_dune.json");
        let records = parse_search_answer(input).unwrap();

        // The fourth entry has no id and is dropped
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].id, "B1hSG45JCX4C");
        assert_eq!(records[0].title(), Some("Dune"));
        assert_eq!(records[0].authors(), &["Frank Herbert".to_string()]);
        assert_eq!(records[0].published_date(), Some("1965-06-01"));
        assert_eq!(
            records[0].thumbnail(),
            Some("http://books.google.com/books/content?id=B1hSG45JCX4C&printsec=frontcover&img=1&zoom=1")
        );
        assert!(records[0].description().unwrap().starts_with("Set on the desert planet"));
    }

    #[test]
    fn test_missing_volume_fields() {
        let input = include_str!("../../test_data/search_answer_dune.json");
        let records = parse_search_answer(input).unwrap();

        let bare = &records[2];
        assert_eq!(bare.id, "zQ0MEAAAQBAJ");
        assert!(bare.authors().is_empty());
        assert_eq!(bare.title(), None);
        assert_eq!(bare.thumbnail(), None);
        assert_eq!(bare.description(), None);
    }

    #[test]
    fn test_missing_data_is_empty() {
        let records = parse_search_answer(r#"{"kind":"books#volumes"}"#).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_non_json_body_is_error() {
        let result = parse_search_answer("<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(CatalogError::Json(_))));
    }
}
