// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the index.
//!
//! A [`Stem`] is what the tokenizer produces: a word, where it sat in its
//! line, and the term the stemmer reduced it to. An [`Occurrence`] is a stem
//! pinned to a specific document and line; occurrences are what the index
//! stores and what search results carry back to the caller so a UI can
//! highlight the exact hit.
//!
//! # Invariants
//!
//! - `Stem.stemmed` is never empty for anything the tokenizer emits.
//! - `Occurrence.stemmed` always equals the term it is filed under in the
//!   index, and `Occurrence.document_id` always equals the document it is
//!   filed under. The store's `verify()` checks both after a reload.

use serde::{Deserialize, Serialize};

/// Document identifier. Assigned densely from 0 in walk order on a fresh
/// build; after a reload only uniqueness is guaranteed.
pub type DocId = u32;

/// A single word of a line, after tokenization and stemming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stem {
    /// 0-based byte column of the surface word within its line, counted
    /// after leading whitespace is trimmed off the front of the line.
    pub index: usize,
    /// The surface word as it appeared, with surrounding punctuation removed.
    pub original: String,
    /// The Porter stem of the lowercased surface word.
    pub stemmed: String,
}

/// A stem located within a specific document and line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// ID of the document this occurrence belongs to.
    pub document_id: DocId,
    /// 0-based line number within the document.
    pub line: usize,
    /// 0-based byte column within the line (see [`Stem::index`]).
    pub index: usize,
    /// The surface word as it appeared.
    pub original: String,
    /// The term this occurrence is indexed under.
    pub stemmed: String,
}

impl Occurrence {
    /// Pin a tokenizer [`Stem`] to a document and line.
    pub fn from_stem(stem: Stem, document_id: DocId, line: usize) -> Self {
        Occurrence {
            document_id,
            line,
            index: stem.index,
            original: stem.original,
            stemmed: stem.stemmed,
        }
    }
}

/// How multi-term queries combine their terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStrategy {
    /// Only documents containing every query term are candidates.
    #[default]
    And,
    /// Every (term, document) pair where the term occurs is a candidate,
    /// enumerated per term without deduplication.
    Or,
}

/// One ranked hit: a query term matched in a document.
///
/// A multi-term OR query produces one result per (term, document) pair, so
/// the same document can appear several times with different query terms.
/// The occurrence list is the stored positions for this term in this
/// document, in document order.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    /// The query term this result refers to.
    pub query_term: Stem,
    /// The document the term matched in.
    pub document_id: DocId,
    /// TF-IDF relevance score. Can go negative for terms that appear in
    /// every document (the IDF denominator is df + 1).
    pub relevance_score: f64,
    /// Where the term occurs in the document, in increasing (line, column)
    /// order.
    pub occurrences: Vec<Occurrence>,
}
