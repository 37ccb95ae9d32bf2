//! The single state container behind the search screen.
//!
//! Every change to the query, the result set, the pagination state or the row
//! expansion goes through one of the methods below, so the UI layer only has
//! to forward events and read the derived view back.

use crate::catalog::{BookRecord, CatalogSource};
use crate::expansion::RowExpansion;
use crate::pagination::{DEFAULT_PAGE_SIZE, PageDirection, PaginationModel, PaginationState};
use std::fmt;
use tracing::{debug, info, warn};

/// How overlapping searches are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sequencing {
    /// Only the response to the most recently issued request is applied.
    #[default]
    LatestRequest,
    /// Whatever response arrives last is applied.
    LastResolution,
}

/// Handed out when a search starts and given back with its response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub id: u64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Applied { count: usize },
    Failed,
    Superseded,
}

#[derive(Debug, Clone)]
pub struct SearchController {
    query: String,
    results: Vec<BookRecord>,
    pagination: PaginationModel,
    expansion: RowExpansion,
    sequencing: Sequencing,
    last_issued: u64,
    in_flight: usize,
}

impl SearchController {
    pub fn new() -> Self {
        Self::with_pagination(PaginationModel::default())
    }

    pub fn with_pagination(pagination: PaginationModel) -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            pagination,
            expansion: RowExpansion::new(),
            sequencing: Sequencing::default(),
            last_issued: 0,
            in_flight: 0,
        }
    }

    pub fn with_sequencing(mut self, sequencing: Sequencing) -> Self {
        self.sequencing = sequencing;
        self
    }

    /// Record the submitted text and issue a ticket for the request.
    pub fn begin_search(&mut self, text: &str) -> SearchTicket {
        self.query = text.to_string();
        self.last_issued += 1;
        self.in_flight += 1;
        debug!(id = self.last_issued, query = %text, "search issued");

        SearchTicket {
            id: self.last_issued,
            text: text.to_string(),
        }
    }

    /// Apply the response for `ticket`.
    ///
    /// A failure is logged and leaves the result set and the visible window
    /// exactly as they were.
    pub fn complete_search<E: fmt::Display>(
        &mut self,
        ticket: &SearchTicket,
        outcome: Result<Vec<BookRecord>, E>,
    ) -> SearchOutcome {
        self.in_flight = self.in_flight.saturating_sub(1);

        if self.sequencing == Sequencing::LatestRequest && ticket.id != self.last_issued {
            debug!(
                id = ticket.id,
                latest = self.last_issued,
                query = %ticket.text,
                "dropping response to superseded search"
            );
            return SearchOutcome::Superseded;
        }

        match outcome {
            Ok(records) => {
                let count = records.len();
                self.results = records;
                self.pagination
                    .show_leading(self.results.len(), DEFAULT_PAGE_SIZE);
                self.forget_hidden_rows();
                info!(query = %ticket.text, count, "search results applied");
                SearchOutcome::Applied { count }
            }
            Err(e) => {
                warn!(query = %ticket.text, error = %e, "search request failed");
                SearchOutcome::Failed
            }
        }
    }

    /// Issue a search against `source` and apply its response.
    pub async fn search<S: CatalogSource>(&mut self, source: &S, text: &str) -> SearchOutcome {
        let ticket = self.begin_search(text);
        let outcome = source.search(text).await;
        self.complete_search(&ticket, outcome)
    }

    pub fn page_change(&mut self, direction: PageDirection) {
        self.pagination.on_page_change(direction, self.results.len());
        self.forget_hidden_rows();
    }

    /// Page the way the next/previous buttons do: a step the page control
    /// has disabled is ignored and reported as `false`.
    pub fn step_page(&mut self, direction: PageDirection) -> bool {
        let allowed = match direction {
            PageDirection::Next => self.pagination.can_go_next(),
            PageDirection::Previous => self.pagination.can_go_previous(),
        };
        if allowed {
            self.page_change(direction);
        } else {
            debug!(?direction, "page control step not available");
        }
        allowed
    }

    pub fn page_size_change(&mut self, new_size: usize) -> bool {
        let changed = self
            .pagination
            .on_page_size_change(new_size, self.results.len());
        if changed {
            self.forget_hidden_rows();
        } else {
            warn!(new_size, "ignoring page size change");
        }
        changed
    }

    pub fn toggle_row(&mut self, id: &str) -> bool {
        if !self.visible().iter().any(|record| record.id == id) {
            return false;
        }
        self.expansion.toggle(id)
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expansion.is_expanded(id)
    }

    fn forget_hidden_rows(&mut self) {
        let visible = self.pagination.visible(&self.results);
        self.expansion
            .retain_visible(visible.iter().map(|record| record.id.as_str()));
    }

    /// Last submitted search text.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[BookRecord] {
        &self.results
    }

    /// Size of the whole result set, not of the visible window.
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    pub fn visible(&self) -> &[BookRecord] {
        self.pagination.visible(&self.results)
    }

    pub fn pagination(&self) -> &PaginationModel {
        &self.pagination
    }

    pub fn pagination_state(&self) -> PaginationState {
        self.pagination.state()
    }

    pub fn is_searching(&self) -> bool {
        self.in_flight > 0
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new()
    }
}
