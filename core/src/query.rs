//! Query-string composition for list endpoints.
//!
//! # Design
//! Every list operation accepts a slice of options from a closed family
//! (`ConversationOption`, `ArticleOption`, ...). Each option writes at most
//! one already-escaped `key=value` fragment into a `QueryRecord` slot; the
//! record then renders the fragments in the fixed `Slot` declaration order,
//! whatever order the options were given in.
//!
//! Options never fail. An empty, zero or invalid payload leaves its slot
//! untouched, and a later option for the same slot overwrites an earlier one.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except RFC 3986 unreserved characters gets escaped, so the
/// same set is safe for path segments and query values.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode `value` for use as a path segment or query value.
pub fn escape(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Query parameters known to the client. Declaration order is render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    Filter,
    For,
    ForId,
    Sort,
    Status,
    Query,
    StartDate,
    EndDate,
    Page,
    Category,
    Tag,
    Data,
}

/// Accumulates query fragments before rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryRecord {
    slots: BTreeMap<Slot, String>,
}

impl QueryRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an already-escaped fragment, replacing any earlier one.
    pub fn set(&mut self, slot: Slot, fragment: String) {
        self.slots.insert(slot, fragment);
    }

    pub fn get(&self, slot: Slot) -> Option<&str> {
        self.slots.get(&slot).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// `?a=1&b=2` in slot order, or an empty string when nothing is set.
    pub fn render(&self) -> String {
        if self.slots.is_empty() {
            return String::new();
        }
        let joined = self
            .slots
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("&");
        format!("?{joined}")
    }

    pub(crate) fn set_text(&mut self, slot: Slot, key: &str, value: &str) {
        if !value.is_empty() {
            self.set(slot, format!("{key}={}", escape(value)));
        }
    }

    pub(crate) fn set_page(&mut self, page: u32) {
        if page > 0 {
            self.set(Slot::Page, format!("page={page}"));
        }
    }

    pub(crate) fn set_date(&mut self, slot: Slot, key: &str, date: Option<NaiveDate>) {
        let Some(date) = date else {
            return;
        };
        if date.year() > 1 && date.month() > 0 && date.day() > 0 {
            self.set(
                slot,
                format!("{key}={:04}-{:02}-{:02}", date.year(), date.month(), date.day()),
            );
        }
    }
}

/// A single optional refinement of a list request.
pub trait QueryOption {
    fn apply(&self, record: &mut QueryRecord);
}

/// Fold `options` into a fresh record, in order.
pub fn compose<O: QueryOption>(options: &[O]) -> QueryRecord {
    let mut record = QueryRecord::new();
    for option in options {
        option.apply(&mut record);
    }
    record
}
