//! Local full-text search over a directory of plain-text documents.
//!
//! Quarry walks a corpus of `.txt` files, builds a position-aware inverted
//! index with Porter-stemmed terms, persists it as three JSON artifacts,
//! and answers free-form queries with TF-IDF-ranked results that point at
//! the exact line and column of every hit.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ stemmer.rs │◀────│ tokenizer.rs │◀────│   build.rs  │
//! │  (stem)    │     │ (tokenize)   │     │ (corpus     │
//! └────────────┘     └──────────────┘     │    walk)    │
//!                           ▲             └──────┬──────┘
//!                           │                    ▼
//!                    ┌──────┴──────┐      ┌─────────────┐     ┌────────────┐
//!                    │  engine.rs  │─────▶│  index.rs   │◀───▶│ persist.rs │
//!                    │ (facade)    │      │ (IndexStore)│     │ (3 × JSON) │
//!                    └──────┬──────┘      └─────────────┘     └────────────┘
//!                           ▼
//!                    ┌─────────────┐
//!                    │ scoring.rs  │
//!                    │  (TF-IDF)   │
//!                    └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use quarry::{SearchEngine, SearchStrategy};
//!
//! let mut engine = SearchEngine::with_index_dir("./corpus", "./index")?;
//! engine.index_corpus(true)?;
//!
//! for result in engine.search("hopping rabbits", SearchStrategy::And) {
//!     let path = engine.document_path(result.document_id)?;
//!     println!("{} ({:.4})", path.display(), result.relevance_score);
//!     for occ in &result.occurrences {
//!         println!("  {}:{} {}", occ.line, occ.index, occ.original);
//!     }
//! }
//! # Ok::<(), quarry::Error>(())
//! ```
//!
//! The engine is single-threaded: index first, query after. A reindex
//! (`index_corpus(false)`) discards the in-memory index and rebuilds from
//! the corpus, overwriting the persisted artifacts.

pub mod build;
mod engine;
mod error;
mod index;
pub mod persist;
mod scoring;
mod stemmer;
mod tokenizer;
mod types;

// Re-exports for the public API
pub use engine::SearchEngine;
pub use error::{Error, Result};
pub use index::{IndexStore, IndexViolation};
pub use persist::IndexPaths;
pub use scoring::{
    common_documents, inverse_document_frequency, rank, term_frequency, tf_idf, ScoredHit,
};
pub use stemmer::stem;
pub use tokenizer::{check_stemmable, is_stop_word, tokenize, MIN_STEMMABLE_LEN};
pub use types::{DocId, Occurrence, SearchResult, SearchStrategy, Stem};
