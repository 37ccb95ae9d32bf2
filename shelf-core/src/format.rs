use crate::catalog::BookRecord;
use time::macros::format_description;
use time::{Date, Month};

pub const NO_AUTHORS: &str = "No authors available!";
pub const NO_TITLE: &str = "No title available!";

pub fn authors_label(record: &BookRecord) -> String {
    if record.authors().is_empty() {
        NO_AUTHORS.to_string()
    } else {
        record.authors().join(", ")
    }
}

pub fn title_label(record: &BookRecord) -> String {
    record.title().unwrap_or(NO_TITLE).to_string()
}

/// First letter of the first word and first letter of the last word.
///
/// A one-word title yields its first letter twice ("Dune" -> "DD").
pub fn title_initials(title: &str) -> String {
    let mut words = title.split_whitespace();
    let Some(first) = words.next() else {
        return String::new();
    };
    let last = words.last().unwrap_or(first);

    first.chars().take(1).chain(last.chars().take(1)).collect()
}

/// Render a catalog date such as `1965-06-01` as "Tuesday, June 1, 1965".
///
/// Year-only and year-month dates are padded with the first month/day.
/// Anything unparseable comes back unchanged.
pub fn format_published_date(raw: &str) -> String {
    parse_catalog_date(raw)
        .and_then(|date| {
            date.format(format_description!(
                "[weekday], [month repr:long] [day padding:none], [year]"
            ))
            .ok()
        })
        .unwrap_or_else(|| raw.to_string())
}

fn parse_catalog_date(raw: &str) -> Option<Date> {
    let date_part = raw.trim().split('T').next()?;
    let mut parts = date_part.split('-');

    let year: i32 = parts.next()?.parse().ok()?;
    let month: u8 = match parts.next() {
        Some(m) => m.parse().ok()?,
        None => 1,
    };
    let day: u8 = match parts.next() {
        Some(d) => d.parse().ok()?,
        None => 1,
    };
    if parts.next().is_some() {
        return None;
    }

    Date::from_calendar_date(year, Month::try_from(month).ok()?, day).ok()
}

pub fn result_count_label(count: usize) -> String {
    format!("Result count: {}", count)
}

/// One table row for plain-text output.
pub fn format_row(position: usize, record: &BookRecord) -> String {
    format!(
        "{:>3}. {} | {}",
        position,
        authors_label(record),
        title_label(record)
    )
}

/// The expanded detail card as plain text.
pub fn format_detail_card(record: &BookRecord) -> String {
    let title = title_label(record);
    let mut lines = vec![format!("[{}] {}", title_initials(&title), title)];

    if let Some(date) = record.published_date() {
        lines.push(format_published_date(date));
    }
    if let Some(thumbnail) = record.thumbnail() {
        lines.push(format!("Cover: {}", thumbnail));
    }
    if let Some(description) = record.description() {
        lines.push(description.to_string());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ImageLinks, VolumeInfo};

    fn record(title: Option<&str>, authors: &[&str]) -> BookRecord {
        BookRecord {
            id: "id-1".to_string(),
            volume_info: VolumeInfo {
                authors: authors.iter().map(|a| a.to_string()).collect(),
                title: title.map(String::from),
                published_date: Some("1965-06-01".to_string()),
                image_links: Some(ImageLinks {
                    thumbnail: Some("http://covers.example/dune.jpg".to_string()),
                }),
                description: Some("Spice.".to_string()),
            },
        }
    }

    #[test]
    fn test_fallback_labels() {
        let bare = record(None, &[]);
        assert_eq!(authors_label(&bare), "No authors available!");
        assert_eq!(title_label(&bare), "No title available!");
    }

    #[test]
    fn test_multiple_authors_joined() {
        let book = record(Some("Good Omens"), &["Terry Pratchett", "Neil Gaiman"]);
        assert_eq!(authors_label(&book), "Terry Pratchett, Neil Gaiman");
    }

    #[test]
    fn test_title_initials() {
        assert_eq!(title_initials("Dune Messiah"), "DM");
        assert_eq!(title_initials("The Left Hand of Darkness"), "TD");
        assert_eq!(title_initials("Dune"), "DD");
        assert_eq!(title_initials("  "), "");
    }

    #[test]
    fn test_published_date_formats() {
        assert_eq!(format_published_date("1965-06-01"), "Tuesday, June 1, 1965");
        assert_eq!(format_published_date("1969"), "Wednesday, January 1, 1969");
        assert_eq!(format_published_date("2019-10"), "Tuesday, October 1, 2019");
        assert_eq!(
            format_published_date("2019-10-15T00:00:00Z"),
            "Tuesday, October 15, 2019"
        );
    }

    #[test]
    fn test_unparseable_date_kept() {
        assert_eq!(format_published_date("circa 1900"), "circa 1900");
        assert_eq!(format_published_date("2019-13-01"), "2019-13-01");
    }

    #[test]
    fn test_detail_card() {
        let book = record(Some("Dune"), &["Frank Herbert"]);
        assert_eq!(
            format_detail_card(&book),
            "[DD] Dune\nTuesday, June 1, 1965\nCover: http://covers.example/dune.jpg\nSpice."
        );
    }

    #[test]
    fn test_row_and_count() {
        let book = record(Some("Dune"), &["Frank Herbert"]);
        assert_eq!(format_row(1, &book), "  1. Frank Herbert | Dune");
        assert_eq!(result_count_label(40), "Result count: 40");
    }
}
