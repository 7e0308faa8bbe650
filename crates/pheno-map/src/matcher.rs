//! Header matching between two schema generations.

use indexmap::IndexMap;
use tracing::debug;

use pheno_model::{HeaderMatch, OverlapReport};

/// Builds a case-insensitive lookup index over a header sequence.
///
/// The index is insertion-ordered. When two headers fold to the same
/// lowercase key the later header wins, while the key keeps its first
/// position, so collisions resolve the same way on every run.
pub fn fold_index(headers: &[String]) -> IndexMap<String, String> {
    let mut index = IndexMap::new();
    for header in headers {
        index.insert(header.to_lowercase(), header.clone());
    }
    index
}

/// Strips the separator characters `_`, ` `, and `-` from a folded name.
pub fn squash(folded: &str) -> String {
    folded
        .chars()
        .filter(|ch| !matches!(ch, '_' | ' ' | '-'))
        .collect()
}

/// Classifies every version-2 header against the version-1 headers.
///
/// Exact matches differ only by case; close matches additionally tolerate
/// any mix of underscores, spaces, and hyphens. A pair reported exact is
/// never also reported close. Empty inputs yield empty outputs.
///
/// The close pass compares every pair of folded keys, which is quadratic;
/// fine at the tens-to-hundreds of columns these tables carry.
pub fn match_headers(v1_headers: &[String], v2_headers: &[String]) -> OverlapReport {
    let v1_index = fold_index(v1_headers);
    let v2_index = fold_index(v2_headers);

    let mut exact = Vec::new();
    for (v2_folded, v2_original) in &v2_index {
        if let Some(v1_original) = v1_index.get(v2_folded) {
            exact.push(HeaderMatch {
                version2: v2_original.clone(),
                version1: v1_original.clone(),
            });
        }
    }

    let mut close = Vec::new();
    for (v2_folded, v2_original) in &v2_index {
        let v2_squashed = squash(v2_folded);
        for (v1_folded, v1_original) in &v1_index {
            if squash(v1_folded) != v2_squashed {
                continue;
            }
            let pair = HeaderMatch {
                version2: v2_original.clone(),
                version1: v1_original.clone(),
            };
            if !exact.contains(&pair) {
                close.push(pair);
            }
        }
    }

    let unmatched: Vec<String> = v2_headers
        .iter()
        .filter(|header| {
            !exact
                .iter()
                .chain(&close)
                .any(|pair| &pair.version2 == *header)
        })
        .cloned()
        .collect();

    debug!(
        exact = exact.len(),
        close = close.len(),
        unmatched = unmatched.len(),
        "classified version-2 headers"
    );

    OverlapReport {
        exact,
        close,
        unmatched,
    }
}
