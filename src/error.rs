// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the search engine.
//!
//! One enum covers the whole crate. Configuration mistakes and unknown
//! document IDs surface to the caller directly; I/O failures carry the path
//! they happened on; corrupt index artifacts carry enough detail to say
//! which file is bad and why, so the caller can decide to reindex.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::types::DocId;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while indexing, persisting, or querying.
#[derive(Debug)]
pub enum Error {
    /// The configured corpus path exists but is a regular file, not a directory.
    CorpusPathIsFile { path: PathBuf },
    /// A document ID was requested that the index does not know.
    UnknownDocument { document_id: DocId },
    /// Reading or writing a file failed.
    Io { path: PathBuf, source: io::Error },
    /// A persisted artifact failed parsing, schema, or invariant checks.
    ///
    /// The caller may respond by reindexing with the cache disabled.
    CorruptIndex { artifact: String, detail: String },
}

impl Error {
    /// Attach a path to a raw I/O error.
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn corrupt(artifact: &str, detail: impl Into<String>) -> Self {
        Error::CorruptIndex {
            artifact: artifact.to_string(),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CorpusPathIsFile { path } => {
                write!(
                    f,
                    "corpus path {} is a file, expected a directory",
                    path.display()
                )
            }
            Error::UnknownDocument { document_id } => {
                write!(f, "unknown document id {}", document_id)
            }
            Error::Io { path, source } => {
                write!(f, "{}: {}", path.display(), source)
            }
            Error::CorruptIndex { artifact, detail } => {
                write!(f, "corrupt index artifact {}: {}", artifact, detail)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
