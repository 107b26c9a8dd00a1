// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine facade.
//!
//! Owns the index and its lifecycle: build it (from cache or by walking the
//! corpus), answer queries against it, and map document IDs back to paths.
//! Everything else in the crate is plumbing behind this type.
//!
//! The corpus directory and the index directory are both explicit. Nothing
//! here touches global state; two engines with different directories can
//! coexist in one process (though a single engine is strictly
//! single-threaded: queries only after indexing completes).

use std::path::{Path, PathBuf};

use crate::build::build_corpus_index;
use crate::error::{Error, Result};
use crate::index::IndexStore;
use crate::persist::{self, IndexPaths};
use crate::scoring::rank;
use crate::tokenizer::tokenize;
use crate::types::{DocId, SearchResult, SearchStrategy};

/// The core search engine. See the crate docs for the full data flow.
pub struct SearchEngine {
    corpus_dir: PathBuf,
    paths: IndexPaths,
    store: IndexStore,
}

impl SearchEngine {
    /// Create an engine over `corpus_dir`, persisting index artifacts to
    /// the current working directory.
    ///
    /// Fails if the corpus path refers to an existing regular file; a
    /// not-yet-existing directory is fine (it just indexes as empty).
    pub fn new(corpus_dir: impl Into<PathBuf>) -> Result<Self> {
        Self::with_index_dir(corpus_dir, ".")
    }

    /// Like [`new`](Self::new), with an explicit directory for the three
    /// index artifacts.
    pub fn with_index_dir(
        corpus_dir: impl Into<PathBuf>,
        index_dir: impl Into<PathBuf>,
    ) -> Result<Self> {
        let corpus_dir = corpus_dir.into();
        if corpus_dir.is_file() {
            return Err(Error::CorpusPathIsFile { path: corpus_dir });
        }
        Ok(SearchEngine {
            corpus_dir,
            paths: IndexPaths::new(index_dir),
            store: IndexStore::new(),
        })
    }

    pub fn corpus_dir(&self) -> &Path {
        &self.corpus_dir
    }

    /// Build the in-memory index.
    ///
    /// With `use_cache` set and all three artifacts present on disk, loads
    /// them instead of walking the corpus. Otherwise walks, and persists
    /// the result. A walk that finds nothing logs a warning, leaves the
    /// index empty, and does not touch any artifacts on disk. Calling this
    /// again discards the previous index either way.
    pub fn index_corpus(&mut self, use_cache: bool) -> Result<()> {
        if use_cache && persist::exists_on_disk(&self.paths) {
            eprintln!("Loading local index from {}", self.paths.root().display());
            self.store = persist::load(&self.paths)?;
            eprintln!(
                "Loaded index for {} documents.",
                self.store.document_count()
            );
            return Ok(());
        }

        let store = build_corpus_index(&self.corpus_dir)?;
        if store.is_empty() {
            eprintln!(
                "⚠️  No searchable text documents under {}; the index is empty.",
                self.corpus_dir.display()
            );
            self.store = store;
            return Ok(());
        }

        persist::save(&self.paths, &store)?;
        eprintln!("Indexed {} documents.", store.document_count());
        self.store = store;
        Ok(())
    }

    /// Number of indexed documents.
    pub fn index_size(&self) -> usize {
        self.store.document_count()
    }

    /// Path of an indexed document. Unknown IDs are a caller bug and
    /// surface as an error.
    pub fn document_path(&self, document_id: DocId) -> Result<&Path> {
        self.store
            .document_path(document_id)
            .ok_or(Error::UnknownDocument { document_id })
    }

    /// Read-only view of the underlying index.
    pub fn store(&self) -> &IndexStore {
        &self.store
    }

    /// Run a query and return ranked results, best first.
    ///
    /// The query goes through the same tokenizer as documents, so stop
    /// words and words under three bytes vanish before matching. A query
    /// that tokenizes to nothing returns no results.
    pub fn search(&self, query: &str, strategy: SearchStrategy) -> Vec<SearchResult> {
        let query_stems = tokenize(query.as_bytes());
        if query_stems.is_empty() {
            eprintln!("Query {:?} has no searchable terms.", query);
            return Vec::new();
        }

        rank(&self.store, &query_stems, strategy)
            .into_iter()
            .map(|hit| {
                let occurrences = self
                    .store
                    .occurrences(hit.document_id, &hit.stem.stemmed)
                    .map(<[_]>::to_vec)
                    .unwrap_or_default();
                SearchResult {
                    query_term: hit.stem,
                    document_id: hit.document_id,
                    relevance_score: hit.score,
                    occurrences,
                }
            })
            .collect()
    }
}
