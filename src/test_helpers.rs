//! Shared test utilities for the mdmodels test suite.
//!
//! Provides a compact [`Document`] builder and a helper that materializes a
//! collection of markdown files under a content root, so tests can set up
//! content trees without repeating fs boilerplate.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::types::Document;

/// Build a [`Document`] with the fields the pipeline cares about.
///
/// `body`, `html`, and `extra` start empty; tests that need them set them
/// directly on the returned value.
pub fn doc(
    id: &str,
    category: &str,
    author_id: &str,
    author: &str,
    tags: &[&str],
    date: &str,
) -> Document {
    Document {
        id: id.to_string(),
        category: category.to_string(),
        author_id: author_id.to_string(),
        author: author.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        date: date.to_string(),
        body: String::new(),
        html: None,
        extra: BTreeMap::new(),
    }
}

/// Write `(filename, content)` pairs into `{root}/{collection}/`, creating
/// directories as needed.
pub fn write_collection(root: &Path, collection: &str, files: &[(&str, &str)]) {
    let dir = root.join(collection);
    fs::create_dir_all(&dir).unwrap();
    for (name, content) in files {
        fs::write(dir.join(name), content).unwrap();
    }
}
