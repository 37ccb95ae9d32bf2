//! Windowing of an already-fetched result set into pages.
//!
//! The arithmetic here reproduces the paging behaviour users of the catalog
//! table have always seen, quirks included:
//!
//! * the leading window (after a search or a page size change) starts at
//!   index 1, so the first record of a result set is never part of it;
//! * `Next` moves the offset *down* by one page and `Previous` moves it *up*;
//! * a page size change resets the page index but leaves the offset alone.
//!
//! None of these operations can fail. Offsets outside the result set just
//! produce a short or empty window.

use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 5;
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 30];
/// Row count the page control assumes, independent of how many records
/// actually came back.
pub const DEFAULT_PAGINATION_COUNT: usize = 40;

const LEADING_WINDOW_START: isize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Next,
    Previous,
}

/// `offset` is meant to equal `page_index * page_size` but nothing keeps the
/// two in step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub page_index: usize,
    pub page_size: usize,
    pub offset: isize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

/// Clamp `start..end` to a collection of `len` items.
///
/// Negative bounds clamp to 0; an inverted or out-of-range request yields `0..0`.
pub fn window_bounds(len: usize, start: isize, end: isize) -> Range<usize> {
    let start = start.max(0) as usize;
    let end = (end.max(0) as usize).min(len);
    if start >= end { 0..0 } else { start..end }
}

/// Contiguous sub-slice of `set`, start inclusive and end exclusive.
pub fn slice<T>(set: &[T], start: isize, end: isize) -> &[T] {
    &set[window_bounds(set.len(), start, end)]
}

/// Window shown right after a search or a page size change: `set[1..size]`.
pub fn leading_window(len: usize, size: usize) -> Range<usize> {
    window_bounds(len, LEADING_WINDOW_START, size as isize)
}

/// Pagination state plus the window it currently selects.
///
/// The model never owns the records; callers pass the result set length in
/// and read the window back with [`PaginationModel::visible`].
#[derive(Debug, Clone)]
pub struct PaginationModel {
    state: PaginationState,
    window: Range<usize>,
    count: usize,
}

impl PaginationModel {
    pub fn new(count: usize) -> Self {
        Self {
            state: PaginationState::default(),
            window: 0..0,
            count,
        }
    }

    pub fn state(&self) -> PaginationState {
        self.state
    }

    pub fn window(&self) -> Range<usize> {
        self.window.clone()
    }

    /// The records of `set` inside the current window.
    pub fn visible<'a, T>(&self, set: &'a [T]) -> &'a [T] {
        slice(set, self.window.start as isize, self.window.end as isize)
    }

    /// Select the leading window of `size` rows without touching the state.
    pub fn show_leading(&mut self, len: usize, size: usize) {
        self.window = leading_window(len, size);
    }

    pub fn on_page_change(&mut self, direction: PageDirection, len: usize) {
        let step = self.state.page_size as isize;
        match direction {
            PageDirection::Next => {
                self.state.offset -= step;
                self.state.page_index += 1;
            }
            PageDirection::Previous => {
                self.state.offset += step;
                self.state.page_index = self.state.page_index.saturating_sub(1);
            }
        }
        self.window = window_bounds(len, self.state.offset, self.state.offset + step);
    }

    /// Returns false (and changes nothing) for a zero page size.
    pub fn on_page_size_change(&mut self, new_size: usize, len: usize) -> bool {
        if new_size == 0 {
            return false;
        }
        self.state.page_size = new_size;
        self.state.page_index = 0;
        self.window = leading_window(len, new_size);
        true
    }

    // Page control bookkeeping. This is what the next/previous buttons and the
    // "from-to of count" label are driven by.

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn total_pages(&self) -> usize {
        if self.count == 0 {
            1
        } else {
            self.count.div_ceil(self.state.page_size)
        }
    }

    pub fn can_go_previous(&self) -> bool {
        self.state.page_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.state.page_index < self.total_pages() - 1
    }

    pub fn displayed_rows_label(&self) -> String {
        let from = if self.count == 0 {
            0
        } else {
            self.state.page_index * self.state.page_size + 1
        };
        let to = ((self.state.page_index + 1) * self.state.page_size).min(self.count);
        format!("{}-{} of {}", from, to, self.count)
    }
}

impl Default for PaginationModel {
    fn default() -> Self {
        Self::new(DEFAULT_PAGINATION_COUNT)
    }
}
