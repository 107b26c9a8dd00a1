// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus indexing.
//!
//! Walks the corpus directory recursively, feeds every `.txt` file through
//! the tokenizer line by line, and files the resulting stems in a fresh
//! [`IndexStore`]. Document IDs follow walk order; nothing guarantees that
//! order is alphabetical, only that it is a traversal of the tree.
//!
//! Files are read as raw bytes. A document that is not valid UTF-8 still
//! indexes; the tokenizer recovers surface forms lossily. An unreadable
//! file is fatal for the whole run: the partially built index is dropped
//! with the error, never saved.

use std::fs;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::index::IndexStore;
use crate::tokenizer::tokenize;

/// Only files with exactly this extension are indexed (case-sensitive).
const CORPUS_EXTENSION: &str = "txt";

fn progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<10} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap()
    .progress_chars("━━╸")
}

/// Walk the corpus and build a fresh index over every `.txt` file in it.
///
/// Returns an empty store for an empty (or entirely non-`.txt`) corpus;
/// deciding what that means is the caller's business.
pub fn build_corpus_index(corpus_dir: &Path) -> Result<IndexStore> {
    let files = corpus_files(corpus_dir)?;

    let bar = ProgressBar::new(files.len() as u64);
    bar.set_style(progress_style());
    bar.set_prefix("Indexing");

    let mut store = IndexStore::new();
    for path in files {
        bar.set_message(
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );
        index_file(&mut store, &path)?;
        bar.inc(1);
    }
    bar.finish_with_message(format!("{} documents", store.document_count()));

    Ok(store)
}

/// Enumerate indexable files in walk order.
fn corpus_files(corpus_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(corpus_dir) {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| corpus_dir.to_path_buf());
            match e.into_io_error() {
                Some(io) => Error::io(path, io),
                None => Error::io(
                    path,
                    std::io::Error::new(std::io::ErrorKind::Other, "walk cycle"),
                ),
            }
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if path.extension().and_then(|x| x.to_str()) == Some(CORPUS_EXTENSION) {
            files.push(path);
        }
    }
    Ok(files)
}

/// Tokenize one document and file it under a fresh ID.
fn index_file(store: &mut IndexStore, path: &Path) -> Result<()> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    let stems_per_line = byte_lines(&bytes).map(tokenize).collect();
    store.add_document(path.to_path_buf(), stems_per_line);
    Ok(())
}

/// Split a document into lines the way a line-wise reader would: `\n`
/// terminated, optional `\r` stripped, and no phantom empty line after a
/// trailing newline.
fn byte_lines(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    let mut lines: Vec<&[u8]> = bytes.split(|&b| b == b'\n').collect();
    if lines.last() == Some(&&b""[..]) {
        lines.pop();
    }
    lines
        .into_iter()
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}
