//! Secondary index aggregation.
//!
//! Builds the three per-collection frequency indexes (categories, authors,
//! tags) in a single linear pass over the documents. Each index is emitted
//! in first-seen key order (never sorted by name or count); that order is
//! the on-disk JSON array order, so it must be stable run to run.
//!
//! Indexes are rebuilt from scratch every build. Nothing is loaded from a
//! previous run and nothing is updated incrementally.

use crate::types::{AuthorEntry, CategoryEntry, Document, TagEntry};
use std::collections::HashMap;

/// The three frequency indexes for one collection.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Indexes {
    pub categories: Vec<CategoryEntry>,
    pub authors: Vec<AuthorEntry>,
    pub tags: Vec<TagEntry>,
}

/// Entry list in insertion order plus a position table for O(1) lookup.
struct OrderedIndex<T> {
    entries: Vec<T>,
    positions: HashMap<String, usize>,
}

impl<T> OrderedIndex<T> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Run `bump` on the existing entry for `key`, or append `make()` for a
    /// first sighting.
    fn upsert(&mut self, key: &str, bump: impl FnOnce(&mut T), make: impl FnOnce() -> T) {
        match self.positions.get(key) {
            Some(&pos) => bump(&mut self.entries[pos]),
            None => {
                self.positions.insert(key.to_string(), self.entries.len());
                self.entries.push(make());
            }
        }
    }
}

/// Build category, author, and tag indexes over one collection.
///
/// Counting rules:
/// - every document increments its `category` entry and its `author_id`
///   entry by one;
/// - an author's display `name` is captured from the first document seen
///   with that `author_id` and never updated afterwards;
/// - every tag occurrence increments that tag's entry; a document listing
///   the same tag twice contributes 2.
///
/// Field values are not validated: a missing field loads as `""` upstream
/// and simply becomes a literal empty key here.
pub fn build_indexes(documents: &[Document]) -> Indexes {
    let mut categories = OrderedIndex::new();
    let mut authors = OrderedIndex::new();
    let mut tags = OrderedIndex::new();

    for doc in documents {
        categories.upsert(
            &doc.category,
            |e: &mut CategoryEntry| e.amount += 1,
            || CategoryEntry {
                name: doc.category.clone(),
                amount: 1,
            },
        );

        authors.upsert(
            &doc.author_id,
            |e: &mut AuthorEntry| e.amount += 1,
            || AuthorEntry {
                author_id: doc.author_id.clone(),
                name: doc.author.clone(),
                amount: 1,
            },
        );

        for tag in &doc.tags {
            tags.upsert(
                tag,
                |e: &mut TagEntry| e.amount += 1,
                || TagEntry {
                    tag: tag.clone(),
                    amount: 1,
                },
            );
        }
    }

    Indexes {
        categories: categories.entries,
        authors: authors.entries,
        tags: tags.entries,
    }
}
