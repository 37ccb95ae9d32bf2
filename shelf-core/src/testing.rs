//! In-memory catalog used by the unit tests.

use crate::catalog::{BookRecord, CatalogSource, VolumeInfo};
use crate::error::CatalogError;
use std::sync::{Mutex, OnceLock};

pub fn sample_records(prefix: &str, count: usize) -> Vec<BookRecord> {
    (0..count)
        .map(|i| BookRecord {
            id: format!("{}-{}", prefix, i),
            volume_info: VolumeInfo {
                authors: vec![format!("Author {}", i)],
                title: Some(format!("{} volume {}", prefix, i)),
                published_date: Some("2001-01-01".to_string()),
                ..Default::default()
            },
        })
        .collect()
}

pub struct FakeCatalog {
    records: Option<Vec<BookRecord>>,
    queries: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn returning(records: Vec<BookRecord>) -> Self {
        Self {
            records: Some(records),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            records: None,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

impl CatalogSource for FakeCatalog {
    async fn search(&self, text: &str) -> Result<Vec<BookRecord>, CatalogError> {
        self.queries.lock().unwrap().push(text.to_string());
        match &self.records {
            Some(records) => Ok(records.clone()),
            None => Err(CatalogError::Status {
                code: 503,
                url: format!("http://localhost:3001/api/v1/search?text={}", text),
            }),
        }
    }
}

/// `log` sink that keeps every formatted record in memory.
pub struct CapturedLog {
    lines: Mutex<Vec<String>>,
}

impl CapturedLog {
    pub fn lines_containing(&self, needle: &str) -> Vec<String> {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .filter(|line| line.contains(needle))
            .cloned()
            .collect()
    }
}

impl log::Log for CapturedLog {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        self.lines
            .lock()
            .unwrap()
            .push(format!("{} {} {}", record.level(), record.target(), record.args()));
    }

    fn flush(&self) {}
}

static CAPTURED_LOG: OnceLock<CapturedLog> = OnceLock::new();

/// Install the capturing logger for the whole test binary (first call wins).
pub fn captured_log() -> &'static CapturedLog {
    let logger = CAPTURED_LOG.get_or_init(|| CapturedLog {
        lines: Mutex::new(Vec::new()),
    });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(log::LevelFilter::Trace);
    }
    logger
}
