//! Content discovery and front-matter parsing.
//!
//! Walks the content root and turns it into in-memory collections. This is
//! the pipeline's document source; everything downstream (indexing, list
//! views, routes) consumes its output and never touches the filesystem
//! again until persistence.
//!
//! ## Directory Structure
//!
//! ```text
//! models/                      # Content root (config: input_dir)
//! ├── posts/                   # Collection = immediate subdirectory
//! │   ├── images/              # Asset dir - copied verbatim, never scanned
//! │   ├── first-post.md
//! │   └── second-post.md
//! └── pages/
//!     └── about.md
//! ```
//!
//! ## Document Format
//!
//! Each `.md` file is YAML front-matter followed by a markdown body:
//!
//! ```text
//! ---
//! id: first-post
//! category: news
//! author_id: u1
//! author: Ann
//! tags: [rust, pipelines]
//! date: 2020-01-01
//! ---
//! Body text here.
//! ```
//!
//! The front-matter block is optional, as is every key in it; `id` falls
//! back to the file stem. Unknown keys are preserved on the document and
//! serialized back out. Malformed YAML is an error - a document that can't
//! be parsed would silently corrupt every index built over it.
//!
//! Files within a collection are visited in path order, so document order
//! (which drives index insertion order and route order) is deterministic
//! for a given tree.

use crate::types::Document;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("invalid front-matter in {path}: {source}")]
    FrontMatter {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// Directory name inside a collection that holds binary assets rather than
/// documents. Copied to the output tree, skipped by the scan.
pub const ASSET_DIR: &str = "images";

/// Load every collection under `root`.
///
/// Each immediate subdirectory becomes a collection; loose files at the
/// root are ignored. Returns collections keyed by name, each holding its
/// documents in path order.
pub fn load_collections(root: &Path) -> Result<BTreeMap<String, Vec<Document>>, LoaderError> {
    let mut collections = BTreeMap::new();

    let mut dirs: Vec<PathBuf> = fs::read_dir(root)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();

    for dir in dirs {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        if name.starts_with('.') {
            continue;
        }
        collections.insert(name, load_collection(&dir)?);
    }

    Ok(collections)
}

/// Load all documents in one collection directory, in path order.
fn load_collection(dir: &Path) -> Result<Vec<Document>, LoaderError> {
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| !(e.file_type().is_dir() && e.file_name() == ASSET_DIR))
    {
        let entry = entry?;
        let path = entry.path();
        if path.is_file()
            && path
                .extension()
                .map(|e| e.eq_ignore_ascii_case("md"))
                .unwrap_or(false)
        {
            files.push(path.to_path_buf());
        }
    }
    files.sort();

    let mut documents = Vec::with_capacity(files.len());
    for path in &files {
        documents.push(load_document(path)?);
    }
    Ok(documents)
}

/// Parse one markdown file into a [`Document`].
fn load_document(path: &Path) -> Result<Document, LoaderError> {
    let content = fs::read_to_string(path)?;
    let (front_matter, body) = split_front_matter(&content);

    let mut doc: Document = match front_matter {
        Some(yaml) if !yaml.trim().is_empty() => {
            serde_yaml::from_str(yaml).map_err(|source| LoaderError::FrontMatter {
                path: path.to_path_buf(),
                source,
            })?
        }
        _ => Document::default(),
    };

    doc.body = body.to_string();
    if doc.id.is_empty() {
        doc.id = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
    }

    Ok(doc)
}

/// Split content into (front-matter, body).
///
/// Front-matter is a leading `---` fence closed by a line that is exactly
/// `---`. Content without an opening fence is all body.
fn split_front_matter(content: &str) -> (Option<&str>, &str) {
    let rest = match content.strip_prefix("---\n").or_else(|| content.strip_prefix("---\r\n")) {
        Some(rest) => rest,
        None => return (None, content),
    };

    let mut offset = 0;
    while offset <= rest.len() {
        let newline = rest[offset..].find('\n').map(|n| offset + n);
        let line_end = newline.unwrap_or(rest.len());
        if rest[offset..line_end].trim_end_matches('\r') == "---" {
            let body = match newline {
                Some(n) => &rest[n + 1..],
                None => "",
            };
            return (Some(&rest[..offset]), body);
        }
        match newline {
            Some(n) => offset = n + 1,
            None => break,
        }
    }

    // Unclosed fence: treat the whole file as body, fence line included.
    (None, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::write_collection;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const POST: &str = "---\nid: a\ncategory: news\nauthor_id: u1\nauthor: Ann\ntags: [x, y]\ndate: 2020-01-01\n---\nHello *world*.\n";

    #[test]
    fn collection_per_subdirectory() {
        let tmp = TempDir::new().unwrap();
        write_collection(tmp.path(), "posts", &[("a.md", POST)]);
        write_collection(tmp.path(), "pages", &[("about.md", "# About\n")]);

        let collections = load_collections(tmp.path()).unwrap();
        let names: Vec<&str> = collections.keys().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["pages", "posts"]);
    }

    #[test]
    fn front_matter_fields_parsed() {
        let tmp = TempDir::new().unwrap();
        write_collection(tmp.path(), "posts", &[("a.md", POST)]);

        let collections = load_collections(tmp.path()).unwrap();
        let doc = &collections["posts"][0];

        assert_eq!(doc.id, "a");
        assert_eq!(doc.category, "news");
        assert_eq!(doc.author_id, "u1");
        assert_eq!(doc.author, "Ann");
        assert_eq!(doc.tags, vec!["x", "y"]);
        assert_eq!(doc.date, "2020-01-01");
        assert_eq!(doc.body, "Hello *world*.\n");
        assert!(doc.html.is_none());
    }

    #[test]
    fn extra_front_matter_keys_preserved() {
        let tmp = TempDir::new().unwrap();
        write_collection(
            tmp.path(),
            "posts",
            &[("a.md", "---\nid: a\ncover: ./hero.png\nfeatured: true\n---\nbody\n")],
        );

        let doc = &load_collections(tmp.path()).unwrap()["posts"][0];
        assert_eq!(doc.extra["cover"], serde_json::json!("./hero.png"));
        assert_eq!(doc.extra["featured"], serde_json::json!(true));
    }

    #[test]
    fn id_falls_back_to_file_stem() {
        let tmp = TempDir::new().unwrap();
        write_collection(tmp.path(), "posts", &[("my-post.md", "---\ncategory: news\n---\nbody\n")]);

        let doc = &load_collections(tmp.path()).unwrap()["posts"][0];
        assert_eq!(doc.id, "my-post");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let tmp = TempDir::new().unwrap();
        write_collection(tmp.path(), "posts", &[("bare.md", "just a body, no fence\n")]);

        let doc = &load_collections(tmp.path()).unwrap()["posts"][0];
        assert_eq!(doc.id, "bare");
        assert_eq!(doc.category, "");
        assert_eq!(doc.author_id, "");
        assert!(doc.tags.is_empty());
        assert_eq!(doc.body, "just a body, no fence\n");
    }

    #[test]
    fn documents_in_path_order() {
        let tmp = TempDir::new().unwrap();
        write_collection(
            tmp.path(),
            "posts",
            &[("b.md", "# B\n"), ("a.md", "# A\n"), ("c.md", "# C\n")],
        );

        let ids: Vec<String> = load_collections(tmp.path()).unwrap()["posts"]
            .iter()
            .map(|d| d.id.clone())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn images_dir_not_scanned() {
        let tmp = TempDir::new().unwrap();
        write_collection(tmp.path(), "posts", &[("a.md", POST)]);
        let images = tmp.path().join("posts").join("images");
        fs::create_dir_all(&images).unwrap();
        fs::write(images.join("stray.md"), "not a document").unwrap();

        let collections = load_collections(tmp.path()).unwrap();
        assert_eq!(collections["posts"].len(), 1);
    }

    #[test]
    fn malformed_front_matter_is_error() {
        let tmp = TempDir::new().unwrap();
        write_collection(tmp.path(), "posts", &[("bad.md", "---\n: [unbalanced\n---\nbody\n")]);

        let result = load_collections(tmp.path());
        assert!(matches!(result, Err(LoaderError::FrontMatter { .. })));
    }

    #[test]
    fn unclosed_fence_is_all_body() {
        let (fm, body) = split_front_matter("---\nid: a\nno closing fence\n");
        assert!(fm.is_none());
        assert!(body.starts_with("---\n"));
    }

    #[test]
    fn crlf_fences_accepted() {
        let (fm, body) = split_front_matter("---\r\nid: a\r\n---\r\nbody\r\n");
        assert_eq!(fm, Some("id: a\r\n"));
        assert_eq!(body, "body\r\n");
    }

    #[test]
    fn empty_collection_dir_yields_empty_vec() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("empty")).unwrap();

        let collections = load_collections(tmp.path()).unwrap();
        assert!(collections["empty"].is_empty());
    }
}
