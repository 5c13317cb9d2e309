//! Search, date-range filtering and pagination.
//!
//! [`compute_view`] is pure: it reads the store's records and the current
//! [`ViewState`] and returns the page to display. All predicates combine with
//! AND. Dates are ISO `YYYY-MM-DD` strings, so string comparison is calendar
//! comparison.

use crate::constants::PAGE_SIZE;
use crate::todo::TodoRecord;

/// Search text, date bounds and page number controlling what is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub search_text: String,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    /// 1-based
    pub current_page: usize,
    pub page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            date_from: None,
            date_to: None,
            current_page: 1,
            page_size: PAGE_SIZE,
        }
    }
}

impl ViewState {
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.reset_page();
    }

    pub fn set_date_from(&mut self, date: Option<String>) {
        self.date_from = date;
        self.reset_page();
    }

    pub fn set_date_to(&mut self, date: Option<String>) {
        self.date_to = date;
        self.reset_page();
    }

    pub fn reset_page(&mut self) {
        self.current_page = 1;
    }

    fn matches(&self, record: &TodoRecord, needle: &str) -> bool {
        if !needle.is_empty() && !record.text.to_lowercase().contains(needle) {
            return false;
        }
        if let Some(from) = &self.date_from {
            if record.created_date.as_str() < from.as_str() {
                return false;
            }
        }
        if let Some(to) = &self.date_to {
            if record.created_date.as_str() > to.as_str() {
                return false;
            }
        }
        true
    }
}

/// One page of the filtered sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View<'a> {
    pub page_records: Vec<&'a TodoRecord>,
    /// Number of records passing the filters, across all pages
    pub total_filtered: usize,
}

pub fn compute_view<'a>(records: &'a [TodoRecord], view_state: &ViewState) -> View<'a> {
    let needle = view_state.search_text.to_lowercase();
    let filtered: Vec<&TodoRecord> = records.iter().filter(|r| view_state.matches(r, &needle)).collect();
    let total_filtered = filtered.len();

    let start = view_state
        .current_page
        .saturating_sub(1)
        .saturating_mul(view_state.page_size);
    let page_records = filtered
        .into_iter()
        .skip(start)
        .take(view_state.page_size)
        .collect();

    View {
        page_records,
        total_filtered,
    }
}

/// `ceil(count / page_size)`; zero records means zero pages.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}
