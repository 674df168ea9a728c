//! Optional query parameters, one closed family per list endpoint.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::email;
use crate::query::{escape, QueryOption, QueryRecord, Slot};
use crate::types::ArticleStatus;

/// Which conversations a listing returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    Archived,
    Open,
    Unassigned,
    All,
}

impl Filter {
    pub fn as_str(self) -> &'static str {
        match self {
            Filter::Archived => "archived",
            Filter::Open => "open",
            Filter::Unassigned => "unassigned",
            Filter::All => "all",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sort {
    Updated,
    Changed,
    CreatedAt,
}

impl Sort {
    pub fn as_str(self) -> &'static str {
        match self {
            Sort::Updated => "updated",
            Sort::Changed => "changed",
            Sort::CreatedAt => "created_at",
        }
    }
}

/// A calendar date, or `None` when the year/month/day triple is not one.
fn ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Options for `Client::get_conversations`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationOption {
    Filter(Filter),
    /// Only conversations with this customer email. Ignored unless it parses
    /// as an email address.
    For(String),
    ForId(String),
    Sort(Sort),
    StartDate(Option<NaiveDate>),
    EndDate(Option<NaiveDate>),
    Page(u32),
    /// Channel slug.
    Category(String),
    Tags(Vec<String>),
    /// Matches on custom conversation data, `data[key]=value`.
    Data(BTreeMap<String, String>),
}

impl ConversationOption {
    pub fn filter(filter: Filter) -> Self {
        Self::Filter(filter)
    }

    pub fn for_email(email: impl Into<String>) -> Self {
        Self::For(email.into())
    }

    pub fn for_id(id: impl Into<String>) -> Self {
        Self::ForId(id.into())
    }

    pub fn sort(sort: Sort) -> Self {
        Self::Sort(sort)
    }

    pub fn start_date(year: i32, month: u32, day: u32) -> Self {
        Self::StartDate(ymd(year, month, day))
    }

    pub fn end_date(year: i32, month: u32, day: u32) -> Self {
        Self::EndDate(ymd(year, month, day))
    }

    pub fn page(page: u32) -> Self {
        Self::Page(page)
    }

    pub fn category(slug: impl Into<String>) -> Self {
        Self::Category(slug.into())
    }

    pub fn tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Tags(tags.into_iter().map(Into::into).collect())
    }

    pub fn data<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Data(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl QueryOption for ConversationOption {
    fn apply(&self, record: &mut QueryRecord) {
        match self {
            Self::Filter(filter) => record.set_text(Slot::Filter, "filter", filter.as_str()),
            Self::For(email) => {
                if email::is_valid(email) {
                    record.set_text(Slot::For, "for", email);
                }
            }
            Self::ForId(id) => record.set_text(Slot::ForId, "for_id", id),
            Self::Sort(sort) => record.set_text(Slot::Sort, "sort", sort.as_str()),
            Self::StartDate(date) => record.set_date(Slot::StartDate, "start_date", *date),
            Self::EndDate(date) => record.set_date(Slot::EndDate, "end_date", *date),
            Self::Page(page) => record.set_page(*page),
            Self::Category(slug) => record.set_text(Slot::Category, "category", slug),
            // Entries are joined verbatim, blanks included.
            Self::Tags(tags) => {
                if !tags.is_empty() {
                    record.set(Slot::Tag, format!("tag={}", escape(&tags.join(","))));
                }
            }
            Self::Data(pairs) => {
                if pairs.is_empty() {
                    return;
                }
                let fragment = pairs
                    .iter()
                    .map(|(key, value)| format!("data[{}]={}", escape(key), escape(value)))
                    .collect::<Vec<_>>()
                    .join("&");
                record.set(Slot::Data, fragment);
            }
        }
    }
}

/// Options for `Client::get_articles`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleOption {
    /// `Published` is the server default and is never sent.
    Status(ArticleStatus),
    Query(String),
    Page(u32),
}

impl ArticleOption {
    pub fn status(status: ArticleStatus) -> Self {
        Self::Status(status)
    }

    pub fn query(q: impl Into<String>) -> Self {
        Self::Query(q.into())
    }

    pub fn page(page: u32) -> Self {
        Self::Page(page)
    }
}

impl QueryOption for ArticleOption {
    fn apply(&self, record: &mut QueryRecord) {
        match self {
            Self::Status(status) => {
                let code = status.code();
                if code > 0 {
                    record.set(Slot::Status, format!("status={code}"));
                }
            }
            Self::Query(q) => record.set_text(Slot::Query, "q", q),
            Self::Page(page) => record.set_page(*page),
        }
    }
}

/// Options for `Client::get_contacts`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOption {
    /// Free-text search over name, email and mobile.
    Query(String),
    Page(u32),
}

impl ContactOption {
    pub fn query(q: impl Into<String>) -> Self {
        Self::Query(q.into())
    }

    pub fn page(page: u32) -> Self {
        Self::Page(page)
    }
}

impl QueryOption for ContactOption {
    fn apply(&self, record: &mut QueryRecord) {
        match self {
            Self::Query(q) => record.set_text(Slot::Query, "q", q),
            Self::Page(page) => record.set_page(*page),
        }
    }
}

/// Options for `Client::get_staff`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaffOption {
    Page(u32),
}

impl StaffOption {
    pub fn page(page: u32) -> Self {
        Self::Page(page)
    }
}

impl QueryOption for StaffOption {
    fn apply(&self, record: &mut QueryRecord) {
        match self {
            Self::Page(page) => record.set_page(*page),
        }
    }
}

/// Date range shared by every `get_report_*` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOption {
    StartDate(Option<NaiveDate>),
    EndDate(Option<NaiveDate>),
}

impl ReportOption {
    pub fn start_date(year: i32, month: u32, day: u32) -> Self {
        Self::StartDate(ymd(year, month, day))
    }

    pub fn end_date(year: i32, month: u32, day: u32) -> Self {
        Self::EndDate(ymd(year, month, day))
    }
}

impl QueryOption for ReportOption {
    fn apply(&self, record: &mut QueryRecord) {
        match self {
            Self::StartDate(date) => record.set_date(Slot::StartDate, "start_date", *date),
            Self::EndDate(date) => record.set_date(Slot::EndDate, "end_date", *date),
        }
    }
}

/// Options for `Client::get_response_templates`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseTemplateOption {
    Query(String),
    Page(u32),
}

impl ResponseTemplateOption {
    pub fn query(q: impl Into<String>) -> Self {
        Self::Query(q.into())
    }

    pub fn page(page: u32) -> Self {
        Self::Page(page)
    }
}

impl QueryOption for ResponseTemplateOption {
    fn apply(&self, record: &mut QueryRecord) {
        match self {
            Self::Query(q) => record.set_text(Slot::Query, "q", q),
            Self::Page(page) => record.set_page(*page),
        }
    }
}
