//! Shared types serialized across the pipeline.
//!
//! Everything here ends up in a JSON artifact (per-document records, the
//! three index files, list batches) or in the route set handed to the host
//! site generator, so field names are part of the on-disk contract.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One content item: front-matter metadata plus markdown body.
///
/// Documents are deserialized from a file's YAML front-matter; `body` is
/// filled in from the text below the fence and `html` stays `None` until
/// the render stage. Front-matter keys beyond the known fields are kept in
/// `extra` and written back out verbatim, so a collection can carry
/// arbitrary metadata (cover images, excerpts, ...) without the pipeline
/// knowing about it.
///
/// Missing metadata is not an error: string fields default to `""` and
/// `tags` to an empty list, which downstream indexing treats as literal
/// key values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique within its collection (file stem when front-matter omits it).
    /// On a duplicate, the later document's artifact overwrites the earlier.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub author_id: String,
    /// Display name for `author_id`.
    #[serde(default)]
    pub author: String,
    /// Ordered; duplicates within one document are counted, not collapsed.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Parsed only when a list view sorts by date; stored as written.
    #[serde(default)]
    pub date: String,
    /// Raw markdown body.
    #[serde(default)]
    pub body: String,
    /// Rendered markup; absent until the render stage has run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Any other front-matter keys, preserved as-is.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Frequency entry for one distinct `category` value in a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub name: String,
    pub amount: usize,
}

/// Frequency entry for one distinct `author_id` in a collection.
///
/// `name` is captured from the first document seen with that `author_id`;
/// later documents carrying a different display name do not update it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorEntry {
    pub author_id: String,
    pub name: String,
    pub amount: usize,
}

/// Frequency entry for one distinct tag in a collection.
///
/// `amount` counts (document, occurrence) pairs: a document listing the
/// same tag twice contributes 2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagEntry {
    pub tag: String,
    pub amount: usize,
}

/// One addressable path the host site generator should pre-render.
///
/// Derived fresh each build, never stored. The route set is deliberately
/// not deduplicated: an author with N documents yields N identical author
/// routes, matching what document-driven hosts expect to receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub route: String,
}

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self { route: path.into() }
    }
}
