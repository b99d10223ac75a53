//! Markdown rendering.
//!
//! Wraps [pulldown-cmark](https://docs.rs/pulldown-cmark) behind a renderer
//! built once from config and shared by reference across all collections;
//! there is no mutable parser state, so one instance can serve parallel
//! renders.
//!
//! ## Image Source Rewriting
//!
//! Documents reference their collection's assets relatively
//! (`![](./chart.png)`), but the published site serves those assets from the
//! copied output tree. The renderer rewrites `./`-prefixed image
//! destinations to `/{input_dir}/{collection}/...` so the rendered HTML
//! points at the served location. Absolute paths and full URLs pass through
//! untouched.

use pulldown_cmark::{CowStr, Event, Parser, Tag, html};

/// Stateless markdown-to-HTML renderer.
///
/// Construct one per pipeline run; [`render`](Self::render) is pure given
/// the body text and collection name.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    input_dir: String,
}

impl MarkdownRenderer {
    pub fn new(input_dir: impl Into<String>) -> Self {
        Self {
            input_dir: input_dir.into(),
        }
    }

    /// Render a document body to HTML, rewriting relative image sources to
    /// the collection's served asset path.
    pub fn render(&self, body: &str, collection: &str) -> String {
        let parser = Parser::new(body).map(|event| match event {
            Event::Start(Tag::Image {
                link_type,
                dest_url,
                title,
                id,
            }) => {
                let dest_url = match self.rewrite_asset_url(&dest_url, collection) {
                    Some(rewritten) => CowStr::from(rewritten),
                    None => dest_url,
                };
                Event::Start(Tag::Image {
                    link_type,
                    dest_url,
                    title,
                    id,
                })
            }
            other => other,
        });

        let mut out = String::new();
        html::push_html(&mut out, parser);
        out
    }

    /// `./x` → `/{input_dir}/{collection}/x`; anything else is untouched.
    fn rewrite_asset_url(&self, dest: &str, collection: &str) -> Option<String> {
        dest.strip_prefix("./")
            .map(|rest| format!("/{}/{}/{}", self.input_dir, collection, rest))
    }
}
