// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! TF-IDF ranking.
//!
//! Turns query stems into a candidate set and scores every (term, document)
//! pair in it:
//!
//! - **AND**: candidates are the intersection of each term's document set.
//!   One absent term empties the whole result.
//! - **OR**: every (term, document) pair where the term occurs is its own
//!   candidate, enumerated per term. The same document can be listed once
//!   per query term.
//!
//! `tf(t, d)` divides the occurrence count by the number of *distinct*
//! terms in the document, not the total token count. That is a deliberate
//! departure from textbook TF and load-bearing for ranking compatibility;
//! do not "fix" it. `idf(t) = ln(N / (df + 1))`; the `+1` avoids a zero
//! division and lets terms present in every document go slightly negative.
//!
//! Sorting is stable and descending, so equal scores keep query-term order
//! and ascending document IDs. Nothing else is promised about ties.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::index::IndexStore;
use crate::types::{DocId, SearchStrategy, Stem};

/// A scored (query term, document) pair.
#[derive(Debug, Clone)]
pub struct ScoredHit {
    pub stem: Stem,
    pub document_id: DocId,
    pub score: f64,
}

/// Score the candidate set for `query_stems`, descending by relevance.
///
/// Duplicate query stems produce duplicate hits; the caller sees exactly
/// what was asked.
pub fn rank(store: &IndexStore, query_stems: &[Stem], strategy: SearchStrategy) -> Vec<ScoredHit> {
    let mut hits = Vec::new();

    match strategy {
        SearchStrategy::And => {
            let candidates = common_documents(store, query_stems);
            for stem in query_stems {
                for &document_id in &candidates {
                    hits.push(scored(store, stem, document_id));
                }
            }
        }
        SearchStrategy::Or => {
            for stem in query_stems {
                if let Some(docs) = store.documents_for_term(&stem.stemmed) {
                    for &document_id in docs {
                        hits.push(scored(store, stem, document_id));
                    }
                }
            }
        }
    }

    hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    hits
}

fn scored(store: &IndexStore, stem: &Stem, document_id: DocId) -> ScoredHit {
    ScoredHit {
        stem: stem.clone(),
        document_id,
        score: tf_idf(store, &stem.stemmed, document_id),
    }
}

/// Documents containing every query term. Empty input yields the empty set.
pub fn common_documents(store: &IndexStore, query_stems: &[Stem]) -> BTreeSet<DocId> {
    let mut common: Option<BTreeSet<DocId>> = None;
    for stem in query_stems {
        let docs = store
            .documents_for_term(&stem.stemmed)
            .cloned()
            .unwrap_or_default();
        common = Some(match common {
            None => docs,
            Some(acc) => acc.intersection(&docs).copied().collect(),
        });
    }
    common.unwrap_or_default()
}

/// Occurrences of `term` in the document over its distinct term count.
pub fn term_frequency(store: &IndexStore, term: &str, document_id: DocId) -> f64 {
    let distinct = store.distinct_term_count(document_id);
    if distinct == 0 {
        return 0.0;
    }
    let count = store.occurrences(document_id, term).map_or(0, <[_]>::len);
    count as f64 / distinct as f64
}

/// `ln(N / (df + 1))` over the whole corpus.
pub fn inverse_document_frequency(store: &IndexStore, term: &str) -> f64 {
    let total = store.document_count() as f64;
    let df = store
        .documents_for_term(term)
        .map_or(0, BTreeSet::len) as f64;
    (total / (df + 1.0)).ln()
}

/// Relevance of `term` within one document.
pub fn tf_idf(store: &IndexStore, term: &str, document_id: DocId) -> f64 {
    term_frequency(store, term, document_id) * inverse_document_frequency(store, term)
}
