//! CLI output formatting for the pipeline commands.
//!
//! Output is information-centric: the primary display for a collection is
//! its name and document count, with artifact details as indented context
//! lines. Each command has a pure `format_*` function (returns
//! `Vec<String>`, no I/O) and a thin `print_*` wrapper, so tests can assert
//! on formatted output without capturing stdout.
//!
//! ## Build
//!
//! ```text
//! Collections
//! 001 pages (1 document)
//!     indexes: 1 category, 1 author, 0 tags
//!     lists: list.json
//! 002 posts (4 documents)
//!     indexes: 2 categories, 3 authors, 5 tags
//!     lists: list.json recent-0.json recent-1.json
//!     images: 3 files
//!
//! Built 2 collections, 5 documents
//! ```
//!
//! ## Check
//!
//! ```text
//! 001 posts (4 documents)
//!     001 first-post (news)
//!     002 second-post (news)
//! ```

use crate::pipeline::BuildSummary;
use crate::persist::CopyOutcome;
use crate::types::Document;
use std::collections::BTreeMap;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Singular/plural helper: `1 document`, `3 documents`.
fn count(n: usize, noun: &str) -> String {
    count_with(n, noun, &format!("{noun}s"))
}

fn count_with(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

pub fn format_build_output(summary: &BuildSummary) -> Vec<String> {
    let mut lines = vec!["Collections".to_string()];

    for (pos, collection) in summary.collections.iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(pos + 1),
            collection.name,
            count(collection.documents, "document")
        ));
        lines.push(format!(
            "    indexes: {}, {}, {}",
            count_with(collection.categories, "category", "categories"),
            count(collection.authors, "author"),
            count(collection.tags, "tag"),
        ));
        if !collection.list_files.is_empty() {
            lines.push(format!("    lists: {}", collection.list_files.join(" ")));
        }
        if let CopyOutcome::Copied { files } = collection.assets {
            lines.push(format!("    images: {}", count(files, "file")));
        }
    }

    let total_docs: usize = summary.collections.iter().map(|c| c.documents).sum();
    lines.push(String::new());
    lines.push(format!(
        "Built {}, {}",
        count(summary.collections.len(), "collection"),
        count(total_docs, "document")
    ));

    lines
}

pub fn print_build_output(summary: &BuildSummary) {
    for line in format_build_output(summary) {
        println!("{line}");
    }
}

pub fn format_check_output(collections: &BTreeMap<String, Vec<Document>>) -> Vec<String> {
    let mut lines = Vec::new();

    for (pos, (name, documents)) in collections.iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(pos + 1),
            name,
            count(documents.len(), "document")
        ));
        for (doc_pos, doc) in documents.iter().enumerate() {
            let context = if doc.category.is_empty() {
                String::new()
            } else {
                format!(" ({})", doc.category)
            };
            lines.push(format!("    {} {}{}", format_index(doc_pos + 1), doc.id, context));
        }
    }

    lines
}

pub fn print_check_output(collections: &BTreeMap<String, Vec<Document>>) {
    for line in format_check_output(collections) {
        println!("{line}");
    }
}
