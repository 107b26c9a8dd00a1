// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The in-memory inverted index.
//!
//! Three maps, kept in lockstep:
//!
//! - `documents`: document ID → filesystem path (bijective)
//! - `term_occurrences`: document ID → term → occurrences, in document order
//! - `term_documents`: term → set of document IDs containing it
//!
//! The store is append-only while indexing and read-only while querying.
//! There is no partial removal; a reindex replaces the whole store.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **TERM_DOCS_CONSISTENT**: `term_documents[t]` contains `d` iff
//!    `term_occurrences[d][t]` exists and is non-empty.
//! 2. **OCCURRENCE_TAGS**: every occurrence filed under `(d, t)` carries
//!    `document_id == d` and `stemmed == t`.
//! 3. **KEYS_ALIGNED**: `documents` and `term_occurrences` have identical
//!    key sets; an empty file still has an (empty) occurrence entry.
//! 4. **OCCURRENCES_ORDERED**: occurrence lists are strictly increasing in
//!    `(line, index)`.
//!
//! `add_document` maintains all four by construction. [`IndexStore::verify`]
//! re-checks them, which is how reloads from disk reject corrupt artifacts.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::types::{DocId, Occurrence, Stem};

/// A structural inconsistency found by [`IndexStore::verify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexViolation {
    /// A known document has no entry in `term_occurrences`.
    MissingOccurrenceEntry { document_id: DocId },
    /// `term_occurrences` mentions a document the `documents` map does not.
    UnknownOccurrenceDocument { document_id: DocId },
    /// Two document IDs map to the same path.
    DuplicateDocumentPath { path: PathBuf },
    /// A `(document, term)` entry exists but holds no occurrences.
    EmptyTermEntry { document_id: DocId, term: String },
    /// An occurrence is filed under a term or document it does not carry.
    MistaggedOccurrence { document_id: DocId, term: String },
    /// An occurrence list is not strictly increasing in `(line, index)`.
    UnorderedOccurrences { document_id: DocId, term: String },
    /// Occurrences exist but `term_documents` does not list the document.
    MissingTermDocument { term: String, document_id: DocId },
    /// `term_documents` lists a document with no backing occurrences.
    StaleTermDocument { term: String, document_id: DocId },
}

impl fmt::Display for IndexViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexViolation::MissingOccurrenceEntry { document_id } => {
                write!(f, "document {} has no occurrence entry", document_id)
            }
            IndexViolation::UnknownOccurrenceDocument { document_id } => {
                write!(
                    f,
                    "occurrences recorded for unknown document {}",
                    document_id
                )
            }
            IndexViolation::DuplicateDocumentPath { path } => {
                write!(f, "two document ids map to {}", path.display())
            }
            IndexViolation::EmptyTermEntry { document_id, term } => {
                write!(
                    f,
                    "term {:?} in document {} has an empty occurrence list",
                    term, document_id
                )
            }
            IndexViolation::MistaggedOccurrence { document_id, term } => {
                write!(
                    f,
                    "occurrence under term {:?} in document {} carries different tags",
                    term, document_id
                )
            }
            IndexViolation::UnorderedOccurrences { document_id, term } => {
                write!(
                    f,
                    "occurrences of {:?} in document {} are out of document order",
                    term, document_id
                )
            }
            IndexViolation::MissingTermDocument { term, document_id } => {
                write!(
                    f,
                    "term {:?} occurs in document {} but term_documents does not list it",
                    term, document_id
                )
            }
            IndexViolation::StaleTermDocument { term, document_id } => {
                write!(
                    f,
                    "term_documents lists {:?} in document {} without backing occurrences",
                    term, document_id
                )
            }
        }
    }
}

/// The position-aware inverted index.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct IndexStore {
    documents: BTreeMap<DocId, PathBuf>,
    term_occurrences: HashMap<DocId, HashMap<String, Vec<Occurrence>>>,
    term_documents: HashMap<String, BTreeSet<DocId>>,
    next_doc_id: DocId,
}

impl IndexStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from already-deserialized maps. The caller is
    /// expected to run [`verify`](Self::verify) afterwards; nothing here
    /// checks consistency.
    pub(crate) fn from_parts(
        documents: BTreeMap<DocId, PathBuf>,
        term_occurrences: HashMap<DocId, HashMap<String, Vec<Occurrence>>>,
        term_documents: HashMap<String, BTreeSet<DocId>>,
    ) -> Self {
        let next_doc_id = documents
            .keys()
            .next_back()
            .map(|&id| id + 1)
            .unwrap_or(0);
        IndexStore {
            documents,
            term_occurrences,
            term_documents,
            next_doc_id,
        }
    }

    /// File a document's stems under the next free document ID.
    ///
    /// `stems_per_line` holds one entry per line of the document, in order;
    /// the tokenizer guarantees in-line column order, which together give
    /// the strictly increasing `(line, index)` ordering the store promises.
    pub fn add_document(&mut self, path: PathBuf, stems_per_line: Vec<Vec<Stem>>) -> DocId {
        let document_id = self.next_doc_id;
        self.next_doc_id += 1;

        self.documents.insert(document_id, path);
        let doc_terms = self.term_occurrences.entry(document_id).or_default();

        for (line, stems) in stems_per_line.into_iter().enumerate() {
            for stem in stems {
                let term = stem.stemmed.clone();
                let occurrence = Occurrence::from_stem(stem, document_id, line);
                doc_terms.entry(term.clone()).or_default().push(occurrence);
                self.term_documents
                    .entry(term)
                    .or_default()
                    .insert(document_id);
            }
        }

        document_id
    }

    /// Number of indexed documents.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Path of a document, if the ID is known.
    pub fn document_path(&self, document_id: DocId) -> Option<&Path> {
        self.documents.get(&document_id).map(PathBuf::as_path)
    }

    /// All documents in ascending ID order.
    pub fn documents(&self) -> impl Iterator<Item = (DocId, &Path)> {
        self.documents.iter().map(|(&id, p)| (id, p.as_path()))
    }

    /// Term → occurrence map for one document.
    pub fn document_terms(&self, document_id: DocId) -> Option<&HashMap<String, Vec<Occurrence>>> {
        self.term_occurrences.get(&document_id)
    }

    /// Occurrences of a term within a document, in document order.
    pub fn occurrences(&self, document_id: DocId, term: &str) -> Option<&[Occurrence]> {
        self.term_occurrences
            .get(&document_id)?
            .get(term)
            .map(Vec::as_slice)
    }

    /// Number of distinct terms in a document. This is the TF divisor.
    pub fn distinct_term_count(&self, document_id: DocId) -> usize {
        self.term_occurrences
            .get(&document_id)
            .map_or(0, HashMap::len)
    }

    /// The set of documents containing a term.
    pub fn documents_for_term(&self, term: &str) -> Option<&BTreeSet<DocId>> {
        self.term_documents.get(term)
    }

    /// All terms with their document sets (arbitrary order).
    pub fn terms(&self) -> impl Iterator<Item = (&str, &BTreeSet<DocId>)> {
        self.term_documents.iter().map(|(t, s)| (t.as_str(), s))
    }

    /// Number of distinct terms across the corpus.
    pub fn term_count(&self) -> usize {
        self.term_documents.len()
    }

    /// Total number of stored occurrences.
    pub fn occurrence_count(&self) -> usize {
        self.term_occurrences
            .values()
            .flat_map(HashMap::values)
            .map(Vec::len)
            .sum()
    }

    /// Check every structural invariant, returning the first violation.
    ///
    /// Cheap relative to a reload (one pass over everything), so the
    /// persistence layer runs it after every load.
    pub fn verify(&self) -> Result<(), IndexViolation> {
        for &document_id in self.documents.keys() {
            if !self.term_occurrences.contains_key(&document_id) {
                return Err(IndexViolation::MissingOccurrenceEntry { document_id });
            }
        }
        for &document_id in self.term_occurrences.keys() {
            if !self.documents.contains_key(&document_id) {
                return Err(IndexViolation::UnknownOccurrenceDocument { document_id });
            }
        }

        let mut seen_paths = HashSet::new();
        for path in self.documents.values() {
            if !seen_paths.insert(path) {
                return Err(IndexViolation::DuplicateDocumentPath { path: path.clone() });
            }
        }

        for (&document_id, doc_terms) in &self.term_occurrences {
            for (term, occurrences) in doc_terms {
                if occurrences.is_empty() {
                    return Err(IndexViolation::EmptyTermEntry {
                        document_id,
                        term: term.clone(),
                    });
                }
                for occurrence in occurrences {
                    if occurrence.stemmed != *term || occurrence.document_id != document_id {
                        return Err(IndexViolation::MistaggedOccurrence {
                            document_id,
                            term: term.clone(),
                        });
                    }
                }
                for pair in occurrences.windows(2) {
                    if (pair[1].line, pair[1].index) <= (pair[0].line, pair[0].index) {
                        return Err(IndexViolation::UnorderedOccurrences {
                            document_id,
                            term: term.clone(),
                        });
                    }
                }
                let listed = self
                    .term_documents
                    .get(term)
                    .is_some_and(|docs| docs.contains(&document_id));
                if !listed {
                    return Err(IndexViolation::MissingTermDocument {
                        term: term.clone(),
                        document_id,
                    });
                }
            }
        }

        for (term, docs) in &self.term_documents {
            for &document_id in docs {
                let backed = self
                    .term_occurrences
                    .get(&document_id)
                    .and_then(|t| t.get(term))
                    .is_some_and(|occs| !occs.is_empty());
                if !backed {
                    return Err(IndexViolation::StaleTermDocument {
                        term: term.clone(),
                        document_id,
                    });
                }
            }
        }

        Ok(())
    }
}
