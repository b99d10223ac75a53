//! Sorted and paginated list views.
//!
//! A list view is a named projection of one collection: a stable sort by
//! the configured key, optionally partitioned into fixed-size batches
//! (pages). Each batch becomes one JSON artifact; an unlimited view writes
//! `{name}.json`, a limited one writes `{name}-0.json`, `{name}-1.json`, ...
//!
//! Sorting is stable: documents with equal keys keep their original
//! relative order, which matters because dates collide routinely.

use crate::config::{ListSpec, Order, SortBy};
use crate::types::Document;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date sort key for documents whose `date` doesn't parse.
///
/// A bad date must never abort the build; it sorts as the epoch instead
/// (first under `asc`, last under `desc`).
const DATE_SENTINEL: i64 = 0;

/// One computed list view: the batches to persist, in page order.
#[derive(Debug, PartialEq)]
pub struct ListOutput {
    pub name: String,
    /// True when the view had a `limit`; batch artifacts get `-{n}`
    /// suffixes even if everything fit in one page.
    pub paginated: bool,
    pub batches: Vec<Vec<Document>>,
}

impl ListOutput {
    /// Artifact file names for this view, in batch order.
    pub fn file_names(&self) -> Vec<String> {
        if self.paginated {
            (0..self.batches.len())
                .map(|i| format!("{}-{}.json", self.name, i))
                .collect()
        } else {
            vec![format!("{}.json", self.name)]
        }
    }
}

/// Compute every configured view over one collection's documents.
///
/// An unlimited view always produces exactly one batch (possibly empty). A
/// limited view over an empty collection produces zero batches, so no files
/// are written for it.
///
/// Config validation rejects `limit = 0` before it reaches here; a caller
/// passing one anyway gets a page size of 1 instead of a panic.
pub fn build_lists(documents: &[Document], specs: &[ListSpec]) -> Vec<ListOutput> {
    specs
        .iter()
        .map(|spec| {
            let sorted = sort_documents(documents, spec);
            let batches = match spec.limit {
                Some(limit) => sorted.chunks(limit.max(1)).map(|c| c.to_vec()).collect(),
                None => vec![sorted],
            };
            ListOutput {
                name: spec.name.clone(),
                paginated: spec.limit.is_some(),
                batches,
            }
        })
        .collect()
}

/// Stable sort of a copy of `documents` by the view's key and direction.
fn sort_documents(documents: &[Document], spec: &ListSpec) -> Vec<Document> {
    match spec.sort_by {
        SortBy::Date => {
            let mut keyed: Vec<(i64, Document)> = documents
                .iter()
                .map(|d| (parse_date(&d.date), d.clone()))
                .collect();
            match spec.order {
                Order::Asc => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
                Order::Desc => keyed.sort_by(|a, b| b.0.cmp(&a.0)),
            }
            keyed.into_iter().map(|(_, d)| d).collect()
        }
        SortBy::Id => {
            let mut sorted = documents.to_vec();
            match spec.order {
                Order::Asc => sorted.sort_by(|a, b| a.id.cmp(&b.id)),
                Order::Desc => sorted.sort_by(|a, b| b.id.cmp(&a.id)),
            }
            sorted
        }
    }
}

/// Parse a document date into epoch seconds, falling back to the sentinel.
///
/// Accepted formats, tried in order: RFC 3339, `YYYY-MM-DD HH:MM:SS`,
/// `YYYY-MM-DD`.
fn parse_date(date: &str) -> i64 {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return dt.timestamp();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S") {
        return dt.and_utc().timestamp();
    }
    if let Ok(d) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc().timestamp()).unwrap_or(DATE_SENTINEL);
    }
    DATE_SENTINEL
}
