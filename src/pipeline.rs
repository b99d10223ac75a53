//! Build orchestration.
//!
//! Drives one full pass: load collections, render every document body,
//! aggregate indexes, compute list views, and persist all artifacts. One
//! invocation is one wholesale rebuild: the output subtree is deleted and
//! recreated up front, which is also the recovery mechanism for a previous
//! failed run (no mid-run rollback exists).
//!
//! ## Per-Collection Flow
//!
//! ```text
//! copy images/ (best effort)
//!    → render all bodies (parallel, pure)
//!    → write {id}.json per document
//!    → write authors.json / categories.json / tags.json
//!    → write one JSON per list batch
//! ```
//!
//! Collections are independent units: a failure aborts that collection's
//! remaining steps but every other collection is still attempted, and the
//! first failure is returned once the pass is over. Within one collection
//! there is no partial-success policy; indexes and lists are only written
//! over a fully rendered document set.

use crate::config::PipelineConfig;
use crate::index::build_indexes;
use crate::list::build_lists;
use crate::loader::{ASSET_DIR, LoaderError, load_collections};
use crate::persist::{
    CopyOutcome, PersistError, copy_dir_best_effort, ensure_dir, remove_dir, write_json,
};
use crate::render::MarkdownRenderer;
use crate::types::Document;
use rayon::prelude::*;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Loader(#[from] LoaderError),
    #[error(transparent)]
    Persist(#[from] PersistError),
    #[error("collection '{collection}': {source}")]
    Collection {
        collection: String,
        source: PersistError,
    },
}

/// What one build pass produced, for CLI reporting.
#[derive(Debug)]
pub struct BuildSummary {
    pub collections: Vec<CollectionSummary>,
}

#[derive(Debug)]
pub struct CollectionSummary {
    pub name: String,
    pub documents: usize,
    pub categories: usize,
    pub authors: usize,
    pub tags: usize,
    /// List artifact file names, in view then batch order.
    pub list_files: Vec<String>,
    pub assets: CopyOutcome,
}

/// Run one full build pass rooted at `project_root`.
///
/// Reads content from `{project_root}/{input_dir}` and writes artifacts
/// under `{project_root}/{output_dir}/{input_dir}`, which is deleted and
/// recreated first.
pub fn run(config: &PipelineConfig, project_root: &Path) -> Result<BuildSummary, PipelineError> {
    let input_root = project_root.join(&config.input_dir);
    let output_root = project_root.join(&config.output_dir).join(&config.input_dir);

    remove_dir(&output_root)?;
    ensure_dir(&output_root)?;

    let collections = load_collections(&input_root)?;
    let renderer = MarkdownRenderer::new(config.input_dir.clone());

    let mut summaries = Vec::with_capacity(collections.len());
    let mut first_failure: Option<PipelineError> = None;

    for (name, documents) in &collections {
        match build_collection(name, documents, config, &renderer, &input_root, &output_root) {
            Ok(summary) => summaries.push(summary),
            Err(source) => {
                if first_failure.is_none() {
                    first_failure = Some(PipelineError::Collection {
                        collection: name.clone(),
                        source,
                    });
                }
            }
        }
    }

    match first_failure {
        Some(err) => Err(err),
        None => Ok(BuildSummary {
            collections: summaries,
        }),
    }
}

/// Render every document body, returning new records with `html` set.
///
/// Pure with respect to its inputs; renders run in parallel since each one
/// depends only on its own body text.
pub fn render_all(
    documents: &[Document],
    renderer: &MarkdownRenderer,
    collection: &str,
) -> Vec<Document> {
    documents
        .par_iter()
        .map(|doc| {
            let mut rendered = doc.clone();
            rendered.html = Some(renderer.render(&doc.body, collection));
            rendered
        })
        .collect()
}

fn build_collection(
    name: &str,
    documents: &[Document],
    config: &PipelineConfig,
    renderer: &MarkdownRenderer,
    input_root: &Path,
    output_root: &Path,
) -> Result<CollectionSummary, PersistError> {
    let out_dir = output_root.join(name);
    ensure_dir(&out_dir)?;

    let assets = copy_dir_best_effort(
        &input_root.join(name).join(ASSET_DIR),
        &out_dir.join(ASSET_DIR),
    )?;

    let rendered = render_all(documents, renderer, name);

    // Duplicate ids are not an error: the later write wins.
    for doc in &rendered {
        write_json(&out_dir.join(format!("{}.json", doc.id)), doc)?;
    }

    let indexes = build_indexes(&rendered);
    write_json(&out_dir.join("authors.json"), &indexes.authors)?;
    write_json(&out_dir.join("categories.json"), &indexes.categories)?;
    write_json(&out_dir.join("tags.json"), &indexes.tags)?;

    let mut list_files = Vec::new();
    for list in build_lists(&rendered, &config.lists) {
        for (file_name, batch) in list.file_names().iter().zip(&list.batches) {
            write_json(&out_dir.join(file_name), batch)?;
            list_files.push(file_name.clone());
        }
    }

    Ok(CollectionSummary {
        name: name.to_string(),
        documents: rendered.len(),
        categories: indexes.categories.len(),
        authors: indexes.authors.len(),
        tags: indexes.tags.len(),
        list_files,
        assets,
    })
}
