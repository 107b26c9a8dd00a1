// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Line tokenization.
//!
//! Splits a line of text into position-tagged surface words, drops stop
//! words and words shorter than three bytes, and hands the survivors to the
//! stemmer. Columns are byte offsets into the original line, so a UI can
//! point at the exact spot a term came from even though the term itself has
//! been lowercased and stemmed.
//!
//! Tokenization operates on raw bytes. Lines that are not valid UTF-8 are
//! still tokenized; the surface form of each word is recovered lossily, and
//! column arithmetic stays on the bytes.
//!
//! # Invariants
//!
//! 1. **MONOTONIC_COLUMNS**: stems come out in strictly increasing column
//!    order within a line.
//! 2. **NO_EMPTY_STEMS**: every emitted stem has a non-empty `stemmed` form.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::stemmer::stem;
use crate::types::Stem;

/// Words shorter than this are never stemmed or indexed.
pub const MIN_STEMMABLE_LEN: usize = 3;

/// English stop words, ignored during tokenization.
///
/// The lookup is against the surface word as written: the list is lowercase,
/// so an uppercase surface form ("The") passes the filter and is only
/// lowercased at stemming time. Queries and documents go through the same
/// check.
const STOP_WORD_LIST: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you",
    "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "her", "hers", "herself", "it", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this",
    "that", "these", "those", "am", "is", "are", "was", "were", "be", "been",
    "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a",
    "an", "the", "and", "but", "if", "or", "because", "as", "until", "while",
    "of", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "further", "then", "once", "here", "there", "when", "where", "why", "how",
    "all", "any", "both", "each", "few", "more", "most", "other", "some",
    "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too",
    "very", "s", "t", "can", "will", "just", "don", "should", "now",
];

static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORD_LIST.iter().copied().collect());

/// Check if a word is a stop word.
#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// True iff the word is long enough to index and is not a stop word.
///
/// Takes the raw surface bytes; a word that is not valid UTF-8 cannot equal
/// any stop word, so it passes on length alone.
pub fn check_stemmable(word: &[u8]) -> bool {
    word.len() >= MIN_STEMMABLE_LEN
        && std::str::from_utf8(word).map_or(true, |w| !is_stop_word(w))
}

/// Is this byte a word delimiter inside a fragment? All ASCII punctuation
/// plus the space (spaces are consumed by the outer split and never reach
/// the inner scan, but they belong to the documented delimiter set).
#[inline]
fn is_delimiter(byte: u8) -> bool {
    byte.is_ascii_punctuation() || byte == b' '
}

#[inline]
fn is_line_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

/// Tokenize one line into position-tagged stems.
///
/// Leading whitespace is trimmed but counted, so the first word's column is
/// its real offset in the line. The line is split on spaces; each fragment
/// is split again on punctuation, every punctuation byte advancing the
/// column by one. Punctuation at the edge of a word just falls away
/// (`"dog."` yields `dog`), punctuation in the middle splits the word
/// (`"hello#world"` yields both halves).
pub fn tokenize(line: &[u8]) -> Vec<Stem> {
    let Some(leading) = line.iter().position(|&b| !is_line_whitespace(b)) else {
        return Vec::new();
    };
    let trailing = line.iter().rposition(|&b| !is_line_whitespace(b)).unwrap() + 1;
    let trimmed = &line[leading..trailing];

    let mut stems = Vec::new();
    let mut column = leading;

    for word in trimmed.split(|&b| b == b' ') {
        let mut start = 0;
        while let Some(offset) = word[start..].iter().position(|&b| is_delimiter(b)) {
            let end = start + offset;
            if end > start {
                push_stem(&mut stems, &word[start..end], column);
                column += end - start;
            }
            column += 1; // the delimiter byte itself
            start = end + 1;
        }

        let tail = &word[start..];
        push_stem(&mut stems, tail, column);
        column += tail.len() + 1; // +1 for the space consumed by the split
    }

    stems
}

fn push_stem(stems: &mut Vec<Stem>, word: &[u8], column: usize) {
    if !check_stemmable(word) {
        return;
    }
    let original = String::from_utf8_lossy(word).into_owned();
    let stemmed = stem(&original);
    stems.push(Stem {
        index: column,
        original,
        stemmed,
    });
}
