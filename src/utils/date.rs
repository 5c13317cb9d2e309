//! Date utility functions

use chrono::{Local, NaiveDate};

/// ISO calendar date format used for every stored and filtered date
pub const YMD_FORMAT: &str = "%Y-%m-%d";

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(YMD_FORMAT).to_string()
}

/// Parse a strict YYYY-MM-DD string. Surrounding whitespace is ignored.
pub fn parse_ymd(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    // chrono accepts single-digit months/days; require the zero-padded form so
    // the lexicographic comparison used by the filter stays calendar ordered.
    if trimmed.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, YMD_FORMAT).ok()
}

/// Normalize raw date-field input into an optional ISO date string.
///
/// Empty or invalid input yields `None`, i.e. the bound is unset.
pub fn normalize_ymd(input: &str) -> Option<String> {
    parse_ymd(input).map(format_ymd)
}

/// Source of "today".
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;

    fn today_ymd(&self) -> String {
        format_ymd(self.today())
    }
}

/// Wall clock in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
