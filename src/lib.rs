//! # mdmodels
//!
//! A build-time markdown content pipeline. Your filesystem is the data
//! source: each subdirectory of the content root is a collection of
//! markdown documents (YAML front-matter + body), and one build pass turns
//! those into the JSON artifacts and route set a static site generator
//! consumes.
//!
//! # Architecture: One Pass, Four Products
//!
//! ```text
//! models/posts/*.md ──load──► Vec<Document>
//!                                │
//!                      render (pulldown-cmark, parallel)
//!                                │
//!            ┌───────────────────┼──────────────────┐
//!        indexes             list views         {id}.json
//!   categories/authors    sorted + paginated   per document
//!      /tags .json             batches
//! ```
//!
//! Routes (`/{collection}/{id}`, `/authors/{id}`, `/categories/{name}`,
//! `/tags/{tag}`) are derived separately from the same loaded collections,
//! on demand for the host's route enumeration.
//!
//! Every invocation is a wholesale rebuild: the output subtree is deleted
//! and recreated, nothing carries over between builds, and a deterministic
//! content tree produces byte-identical artifacts run after run. There is
//! no database and no query language, just a fixed set of precomputed
//! views.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`loader`] | Walks the content root, parses front-matter, yields collections |
//! | [`render`] | Markdown → HTML with relative-image rewriting |
//! | [`index`] | Category/author/tag frequency indexes, insertion-ordered |
//! | [`list`] | Sorted, optionally paginated list views |
//! | [`routes`] | Route derivation for the host site generator |
//! | [`pipeline`] | Orchestrates one full build pass |
//! | [`persist`] | Output-tree side effects: dirs, JSON writes, asset copies |
//! | [`config`] | `config.toml` loading and validation |
//! | [`types`] | Shared serialized types (`Document`, index entries, `Route`) |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Insertion-Ordered Indexes
//!
//! Index JSON arrays are emitted in first-seen key order, not sorted by
//! name or count. Consumers render "browse by category/author/tag" widgets
//! straight from the arrays, and first-seen order (which follows document
//! order, which is deterministic path order) keeps those widgets stable
//! across rebuilds without a separate ordering rule.
//!
//! ## Stable Sorts, Sentinel Dates
//!
//! List views sort with a stable comparator so documents with colliding
//! dates keep their path order. An unparseable date sorts as epoch 0
//! rather than failing the build; one bad front-matter line should not
//! take down a site deploy.
//!
//! ## Whole-Collection Failure Units
//!
//! Indexes and lists cross-reference the documents they were built with,
//! so a render or write failure fails its whole collection rather than
//! leaving a collection with artifacts from a half-rendered set. Other
//! collections still build; the first error surfaces when the pass ends.

pub mod config;
pub mod index;
pub mod list;
pub mod loader;
pub mod output;
pub mod persist;
pub mod pipeline;
pub mod render;
pub mod routes;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
