//! Route derivation.
//!
//! Computes the flat set of addressable paths implied by the content graph,
//! for the host site generator's route enumeration. Routes are derived
//! fresh from the loaded collections and never persisted.
//!
//! For every document, in original (unsorted) document order:
//!
//! ```text
//! /{collection}/{id}
//! /authors/{author_id}
//! /categories/{category}
//! /tags/{tag}            # one per tag, in tag order
//! ```
//!
//! No deduplication: an author with N documents contributes N identical
//! author routes (same for categories and tags). Hosts that require unique
//! routes dedup on their side.

use crate::types::{Document, Route};
use std::collections::BTreeMap;

/// Derive every route implied by the given collections.
pub fn derive_routes(collections: &BTreeMap<String, Vec<Document>>) -> Vec<Route> {
    let mut routes = Vec::new();
    extend_routes(collections, &mut routes);
    routes
}

/// Append every derived route to a caller-owned list.
///
/// This is the host-facing enumeration hook: the host hands over its
/// mutable route list and gets it back with the content routes appended.
pub fn extend_routes(collections: &BTreeMap<String, Vec<Document>>, routes: &mut Vec<Route>) {
    for (collection, documents) in collections {
        for doc in documents {
            routes.push(Route::new(format!("/{}/{}", collection, doc.id)));
            routes.push(Route::new(format!("/authors/{}", doc.author_id)));
            routes.push(Route::new(format!("/categories/{}", doc.category)));
            for tag in &doc.tags {
                routes.push(Route::new(format!("/tags/{tag}")));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::doc;
    use pretty_assertions::assert_eq;

    fn collections_of(name: &str, docs: Vec<Document>) -> BTreeMap<String, Vec<Document>> {
        BTreeMap::from([(name.to_string(), docs)])
    }

    fn paths(routes: &[Route]) -> Vec<&str> {
        routes.iter().map(|r| r.route.as_str()).collect()
    }

    #[test]
    fn four_route_kinds_per_document_in_order() {
        let collections = collections_of(
            "posts",
            vec![doc("a", "news", "u1", "Ann", &["x", "y"], "2020-01-01")],
        );

        let routes = derive_routes(&collections);
        assert_eq!(
            paths(&routes),
            vec![
                "/posts/a",
                "/authors/u1",
                "/categories/news",
                "/tags/x",
                "/tags/y",
            ]
        );
    }

    #[test]
    fn routes_not_deduplicated() {
        let collections = collections_of(
            "posts",
            vec![
                doc("a", "news", "u1", "Ann", &["x", "x"], "2020-01-01"),
                doc("b", "news", "u1", "AnnRenamed", &["y"], "2019-01-01"),
            ],
        );

        let routes = derive_routes(&collections);
        let all = paths(&routes);

        assert_eq!(all.iter().filter(|r| **r == "/authors/u1").count(), 2);
        assert_eq!(all.iter().filter(|r| **r == "/categories/news").count(), 2);
        assert_eq!(all.iter().filter(|r| **r == "/tags/x").count(), 2);
        assert_eq!(all.iter().filter(|r| **r == "/tags/y").count(), 1);
        assert!(all.contains(&"/posts/a"));
        assert!(all.contains(&"/posts/b"));
    }

    #[test]
    fn route_count_formula() {
        // M docs => M + M + M + total tag occurrences.
        let docs = vec![
            doc("a", "c1", "u1", "A", &["t1", "t2"], ""),
            doc("b", "c2", "u2", "B", &[], ""),
            doc("c", "c1", "u1", "A", &["t1"], ""),
        ];
        let tag_total: usize = docs.iter().map(|d| d.tags.len()).sum();
        let m = docs.len();

        let routes = derive_routes(&collections_of("posts", docs));
        assert_eq!(routes.len(), 3 * m + tag_total);
    }

    #[test]
    fn collections_never_merge() {
        let mut collections = BTreeMap::new();
        collections.insert(
            "posts".to_string(),
            vec![doc("a", "news", "u1", "Ann", &[], "")],
        );
        collections.insert(
            "pages".to_string(),
            vec![doc("about", "site", "u1", "Ann", &[], "")],
        );

        let routes = derive_routes(&collections);
        let all = paths(&routes);
        assert!(all.contains(&"/posts/a"));
        assert!(all.contains(&"/pages/about"));
    }

    #[test]
    fn extend_appends_after_existing_routes() {
        let collections = collections_of("posts", vec![doc("a", "news", "u1", "Ann", &[], "")]);

        let mut routes = vec![Route::new("/already-there")];
        extend_routes(&collections, &mut routes);

        assert_eq!(routes[0].route, "/already-there");
        assert_eq!(routes.len(), 4);
    }

    #[test]
    fn empty_collections_give_no_routes() {
        let routes = derive_routes(&collections_of("posts", vec![]));
        assert!(routes.is_empty());
    }
}
