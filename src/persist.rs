// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index persistence.
//!
//! The index round-trips through three JSON artifacts in the index
//! directory:
//!
//! - `documents.json`: document path → document ID
//! - `term_occurrences.json`: document ID (as a decimal string, JSON keys
//!   are strings) → term → `[{line, index, original}]`
//! - `term_documents.json`: term → array of document IDs
//!
//! Occurrences are stored without their `document_id` and `stemmed` fields;
//! both are implied by where the record sits and are restored on load.
//!
//! Writes go through a temp file and a rename, so a crash mid-save leaves
//! either the old artifact or none; `exists_on_disk` requires all three
//! files, which is what makes a half-written save read as "no cache".
//! Loads re-run the store's structural verification and reject anything
//! inconsistent as corrupt; the caller's escape hatch is a full reindex.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::index::IndexStore;
use crate::types::{DocId, Occurrence};

/// Artifact holding the path ↔ ID mapping.
pub const DOCUMENTS_FILE: &str = "documents.json";
/// Artifact holding per-document term occurrences.
pub const TERM_OCCURRENCES_FILE: &str = "term_occurrences.json";
/// Artifact holding the term → documents map.
pub const TERM_DOCUMENTS_FILE: &str = "term_documents.json";

/// An occurrence as it appears on disk. Document ID and term are implied
/// by the enclosing JSON structure.
#[derive(Debug, Serialize, Deserialize)]
struct StoredOccurrence {
    line: usize,
    index: usize,
    original: String,
}

/// Locations of the three artifacts under one index directory.
pub struct IndexPaths {
    root: PathBuf,
}

impl IndexPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        IndexPaths { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn documents(&self) -> PathBuf {
        self.root.join(DOCUMENTS_FILE)
    }

    pub fn term_occurrences(&self) -> PathBuf {
        self.root.join(TERM_OCCURRENCES_FILE)
    }

    pub fn term_documents(&self) -> PathBuf {
        self.root.join(TERM_DOCUMENTS_FILE)
    }
}

/// Are all three artifacts present?
///
/// All-or-nothing: a partial set (crash between renames) reads as absent
/// and the next indexing run rebuilds from the corpus.
pub fn exists_on_disk(paths: &IndexPaths) -> bool {
    paths.documents().is_file()
        && paths.term_occurrences().is_file()
        && paths.term_documents().is_file()
}

/// Serialize the store into the three artifacts.
pub fn save(paths: &IndexPaths, store: &IndexStore) -> Result<()> {
    // BTreeMaps throughout so the artifacts are byte-stable across runs.
    let documents: BTreeMap<String, DocId> = store
        .documents()
        .map(|(id, path)| (path.to_string_lossy().into_owned(), id))
        .collect();

    let mut term_occurrences: BTreeMap<String, BTreeMap<&str, Vec<StoredOccurrence>>> =
        BTreeMap::new();
    for (id, _) in store.documents() {
        let doc_terms = store
            .document_terms(id)
            .expect("documents and term_occurrences share keys");
        let stored: BTreeMap<&str, Vec<StoredOccurrence>> = doc_terms
            .iter()
            .map(|(term, occurrences)| {
                let list = occurrences
                    .iter()
                    .map(|o| StoredOccurrence {
                        line: o.line,
                        index: o.index,
                        original: o.original.clone(),
                    })
                    .collect();
                (term.as_str(), list)
            })
            .collect();
        term_occurrences.insert(id.to_string(), stored);
    }

    let term_documents: BTreeMap<&str, Vec<DocId>> = store
        .terms()
        .map(|(term, docs)| (term, docs.iter().copied().collect()))
        .collect();

    write_atomic(&paths.documents(), &documents)?;
    write_atomic(&paths.term_occurrences(), &term_occurrences)?;
    write_atomic(&paths.term_documents(), &term_documents)?;
    Ok(())
}

/// Deserialize the three artifacts and rebuild a verified store.
pub fn load(paths: &IndexPaths) -> Result<IndexStore> {
    let raw_documents: BTreeMap<String, DocId> =
        read_artifact(&paths.documents(), DOCUMENTS_FILE)?;
    let raw_occurrences: HashMap<String, HashMap<String, Vec<StoredOccurrence>>> =
        read_artifact(&paths.term_occurrences(), TERM_OCCURRENCES_FILE)?;
    let raw_term_documents: HashMap<String, Vec<DocId>> =
        read_artifact(&paths.term_documents(), TERM_DOCUMENTS_FILE)?;

    let mut documents = BTreeMap::new();
    for (path, id) in raw_documents {
        if documents.insert(id, PathBuf::from(path)).is_some() {
            return Err(Error::corrupt(
                DOCUMENTS_FILE,
                format!("duplicate document id {}", id),
            ));
        }
    }

    let mut term_occurrences: HashMap<DocId, HashMap<String, Vec<Occurrence>>> = HashMap::new();
    for (id_key, terms) in raw_occurrences {
        let document_id: DocId = id_key.parse().map_err(|_| {
            Error::corrupt(
                TERM_OCCURRENCES_FILE,
                format!("document key {:?} is not an integer id", id_key),
            )
        })?;
        let doc_terms = terms
            .into_iter()
            .map(|(term, stored)| {
                let occurrences = stored
                    .into_iter()
                    .map(|o| Occurrence {
                        document_id,
                        line: o.line,
                        index: o.index,
                        original: o.original,
                        stemmed: term.clone(),
                    })
                    .collect();
                (term, occurrences)
            })
            .collect();
        term_occurrences.insert(document_id, doc_terms);
    }

    let mut term_documents: HashMap<String, BTreeSet<DocId>> = HashMap::new();
    for (term, ids) in raw_term_documents {
        let set: BTreeSet<DocId> = ids.iter().copied().collect();
        if set.len() != ids.len() {
            return Err(Error::corrupt(
                TERM_DOCUMENTS_FILE,
                format!("duplicate document id for term {:?}", term),
            ));
        }
        term_documents.insert(term, set);
    }

    let store = IndexStore::from_parts(documents, term_occurrences, term_documents);
    store
        .verify()
        .map_err(|violation| Error::corrupt("index", violation.to_string()))?;
    Ok(store)
}

fn read_artifact<T: DeserializeOwned>(path: &Path, artifact: &str) -> Result<T> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_slice(&bytes).map_err(|e| Error::corrupt(artifact, e.to_string()))
}

/// Write JSON to a sibling temp file, then rename over the target.
fn write_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_vec(value)
        .map_err(|e| Error::io(path, io::Error::new(io::ErrorKind::InvalidData, e)))?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, &json).map_err(|e| Error::io(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| Error::io(path, e))
}
