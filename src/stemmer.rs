// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Porter stemming.
//!
//! Maps inflected English words onto a common stem so that "connect",
//! "connects", "connection", and "connecting" all index under one term.
//! The algorithm is the classic five-step suffix-stripping procedure from
//! Porter's 1980 paper; each step either rewrites a suffix or falls through,
//! and only the first matching rule inside a step fires.
//!
//! The word is treated as a byte string. Anything that is not a lowercase
//! ASCII vowel counts as a consonant, with the usual exception for `y`: it
//! is a consonant at position 0 or after a vowel, and a vowel after a
//! consonant.
//!
//! # Invariants
//!
//! 1. **NO_GROWTH**: the stem is never longer than the input word.
//! 2. **SLICE_MEASURE**: measure and the `*v*` / `*d*` / `*o*` predicates
//!    take an explicit stem length and never mutate the word under test.
//! 3. **FIRST_MATCH**: within a step, a rule whose suffix matches but whose
//!    measure condition fails does not stop the scan; a later (shorter)
//!    suffix may still fire.

/// Suffix rewrites for step 2, first match wins.
///
/// Ordered by the penultimate character of the suffix so a bucketed lookup
/// stays possible; the linear scan relies only on longer suffixes preceding
/// their own tails (`ational` before `tional`, `ization` before `ation`).
const STEP_2_SUFFIXES: &[(&[u8], &[u8])] = &[
    (b"ational", b"ate"),
    (b"tional", b"tion"),
    (b"enci", b"ence"),
    (b"anci", b"ance"),
    (b"izer", b"ize"),
    (b"abli", b"able"),
    (b"alli", b"al"),
    (b"entli", b"ent"),
    (b"eli", b"e"),
    (b"ousli", b"ous"),
    (b"ization", b"ize"),
    (b"ation", b"ate"),
    (b"ator", b"ate"),
    (b"alism", b"al"),
    (b"iveness", b"ive"),
    (b"fulness", b"ful"),
    (b"ousness", b"ous"),
    (b"aliti", b"al"),
    (b"iviti", b"ive"),
    (b"biliti", b"ble"),
];

/// Suffix rewrites for step 3.
const STEP_3_SUFFIXES: &[(&[u8], &[u8])] = &[
    (b"icate", b"ic"),
    (b"ative", b""),
    (b"alize", b"al"),
    (b"iciti", b"ic"),
    (b"ical", b"ic"),
    (b"ful", b""),
    (b"ness", b""),
];

/// Suffixes stripped outright in step 4 when the stem measure exceeds 1.
/// `ion` is not in this table; it needs the preceding-letter check and is
/// handled separately.
const STEP_4_SUFFIXES: &[(&[u8], &[u8])] = &[
    (b"al", b""),
    (b"ance", b""),
    (b"ence", b""),
    (b"er", b""),
    (b"ic", b""),
    (b"able", b""),
    (b"ible", b""),
    (b"ant", b""),
    (b"ement", b""),
    (b"ment", b""),
    (b"ent", b""),
    (b"ou", b""),
    (b"ism", b""),
    (b"ate", b""),
    (b"iti", b""),
    (b"ous", b""),
    (b"ive", b""),
    (b"ize", b""),
];

/// Lowercase the word (ASCII) and return its Porter stem.
///
/// Empty input returns empty. Non-letter bytes are treated as consonants;
/// the tokenizer strips punctuation before words get here, so in practice
/// the input is a run of ASCII letters.
pub fn stem(word: &str) -> String {
    let mut w = word.to_ascii_lowercase().into_bytes();
    if w.is_empty() {
        return String::new();
    }

    step_1a(&mut w);
    step_1b(&mut w);
    step_1c(&mut w);
    step_2(&mut w);
    step_3(&mut w);
    step_4(&mut w);
    step_5a(&mut w);
    step_5b(&mut w);

    String::from_utf8_lossy(&w).into_owned()
}

// =============================================================================
// CONSONANT / MEASURE PREDICATES
// =============================================================================

/// Is the byte at `i` a consonant?
///
/// Vowels are `a e i o u`. A `y` is a consonant at position 0 or after a
/// vowel, and a vowel after a consonant (`toy` has consonants t, y; in
/// `syzygy` every y is a vowel).
fn is_consonant(w: &[u8], i: usize) -> bool {
    match w[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => false,
        b'y' => i == 0 || !is_consonant(w, i - 1),
        _ => true,
    }
}

/// The Porter measure *m* of the first `stem_len` bytes of `w`.
///
/// Viewing the stem as `[C](VC)^m[V]`, *m* counts vowel-group to
/// consonant-group transitions. `tree` and `by` measure 0, `trouble` and
/// `oats` measure 1, `private` and `orrery` measure 2.
fn measure(w: &[u8], stem_len: usize) -> usize {
    let stem = &w[..stem_len];

    // First vowel; a stem with no vowel group measures 0.
    let Some(start) = (0..stem.len()).find(|&i| !is_consonant(stem, i)) else {
        return 0;
    };
    // Last consonant after it; no trailing consonant group also means 0.
    let Some(end) = (start + 1..stem.len()).rev().find(|&i| is_consonant(stem, i)) else {
        return 0;
    };

    let mut m = 0;
    let mut in_vowel_group = true;
    for i in start..=end {
        if is_consonant(stem, i) && in_vowel_group {
            m += 1;
            in_vowel_group = false;
        } else if !is_consonant(stem, i) && !in_vowel_group {
            in_vowel_group = true;
        }
    }
    m
}

/// `*v*`: does the first `stem_len` bytes of `w` contain a vowel?
///
/// A `y` preceded by a consonant counts.
fn contains_vowel(w: &[u8], stem_len: usize) -> bool {
    let stem = &w[..stem_len];
    if stem
        .iter()
        .any(|&b| matches!(b, b'a' | b'e' | b'i' | b'o' | b'u'))
    {
        return true;
    }
    match stem.iter().position(|&b| b == b'y') {
        None | Some(0) => false,
        Some(i) => is_consonant(stem, i - 1),
    }
}

/// `*d*`: does the stem end in two identical consonants? (`fuzz`, `buzz`
/// yes; `boys` no.)
fn ends_double_consonant(w: &[u8], stem_len: usize) -> bool {
    let stem = &w[..stem_len];
    if stem.len() < 2 {
        return false;
    }
    let last = stem.len() - 1;
    stem[last] == stem[last - 1] && is_consonant(stem, last)
}

/// `*o*`: does the stem end consonant-vowel-consonant, where the final
/// consonant is not `w`, `x`, or `y`? (`hop`, `wil`, `fil` yes; `fail`,
/// `fix` no.)
fn ends_cvc(w: &[u8], stem_len: usize) -> bool {
    let stem = &w[..stem_len];
    if stem.len() < 3 {
        return false;
    }
    let n = stem.len();
    is_consonant(stem, n - 3)
        && !is_consonant(stem, n - 2)
        && is_consonant(stem, n - 1)
        && !matches!(stem[n - 1], b'w' | b'x' | b'y')
}

// =============================================================================
// STEPS
// =============================================================================

/// Step 1a: plurals. `sses → ss`, `ies → i`, bare `s → ∅` (but `ss` stays).
fn step_1a(w: &mut Vec<u8>) {
    if w.ends_with(b"sses") {
        w.truncate(w.len() - 2);
    } else if w.ends_with(b"ies") {
        w.truncate(w.len() - 2);
    } else if w.ends_with(b"s") && !w.ends_with(b"ss") {
        w.pop();
    }
}

/// Step 1b: past tense and gerunds. `eed → ee` needs measure; `ed` and
/// `ing` need a vowel in the stem and trigger the cleanup pass.
fn step_1b(w: &mut Vec<u8>) {
    let mut cleanup = false;

    if w.ends_with(b"eed") {
        if measure(w, w.len() - 3) > 0 {
            w.pop();
        }
    } else if w.ends_with(b"ing") {
        if contains_vowel(w, w.len() - 3) {
            w.truncate(w.len() - 3);
            cleanup = true;
        }
    } else if w.ends_with(b"ed") {
        if contains_vowel(w, w.len() - 2) {
            w.truncate(w.len() - 2);
            cleanup = true;
        }
    }

    // Only after ed/ing stripping: restore an elided e (conflat → conflate),
    // undouble a consonant (hopp → hop, but fall/hiss/fizz stay), or close a
    // short CVC stem with e (hop + ing stripped from hoping → hope).
    if cleanup {
        if w.ends_with(b"at") || w.ends_with(b"bl") || w.ends_with(b"iz") {
            w.push(b'e');
        } else if ends_double_consonant(w, w.len()) {
            if !matches!(w.last().copied(), Some(b'l' | b's' | b'z')) {
                w.pop();
            }
        } else if ends_cvc(w, w.len()) && measure(w, w.len()) == 1 {
            w.push(b'e');
        }
    }
}

/// Step 1c: terminal `y → i` when the stem holds a vowel (`happy → happi`,
/// `sky` stays).
fn step_1c(w: &mut Vec<u8>) {
    if w.ends_with(b"y") && contains_vowel(w, w.len() - 1) {
        let last = w.len() - 1;
        w[last] = b'i';
    }
}

/// Scan a rule table in order and apply the first suffix whose stem measure
/// exceeds `min_measure`. A matching suffix that fails the measure test does
/// not end the scan.
fn apply_rules(w: &mut Vec<u8>, rules: &[(&[u8], &[u8])], min_measure: usize) {
    for &(suffix, replacement) in rules {
        if w.ends_with(suffix) && measure(w, w.len() - suffix.len()) > min_measure {
            w.truncate(w.len() - suffix.len());
            w.extend_from_slice(replacement);
            break;
        }
    }
}

/// Step 2: double suffixes map to single ones (`ization → ize`,
/// `ational → ate`, ...). Requires m > 0.
fn step_2(w: &mut Vec<u8>) {
    if w.len() < 2 {
        return;
    }
    apply_rules(w, STEP_2_SUFFIXES, 0);
}

/// Step 3: `icate → ic`, `ful → ∅`, `ness → ∅`, ... Requires m > 0.
fn step_3(w: &mut Vec<u8>) {
    if w.is_empty() {
        return;
    }
    apply_rules(w, STEP_3_SUFFIXES, 0);
}

/// Step 4: strip residual suffixes outright when m > 1. `ion` only comes
/// off after `s` or `t` (adoption stays, adhesion loses it).
fn step_4(w: &mut Vec<u8>) {
    if w.len() < 2 {
        return;
    }

    if w.ends_with(b"ion") {
        let stem_len = w.len() - 3;
        if stem_len > 0
            && matches!(w[stem_len - 1], b's' | b't')
            && measure(w, stem_len) > 1
        {
            w.truncate(stem_len);
        }
        return;
    }

    apply_rules(w, STEP_4_SUFFIXES, 1);
}

/// Step 5a: drop a terminal `e` when m > 1, or when m == 1 and the stem
/// does not end CVC (`probate → probat`, `cease → ceas`, but `rate` keeps
/// its e).
fn step_5a(w: &mut Vec<u8>) {
    if w.ends_with(b"e") {
        let m = measure(w, w.len() - 1);
        if m > 1 || (m == 1 && !ends_cvc(w, w.len() - 1)) {
            w.pop();
        }
    }
}

/// Step 5b: undouble a terminal `ll` when m > 1 (`controll → control`,
/// `roll` stays).
fn step_5b(w: &mut Vec<u8>) {
    let m = measure(w, w.len());
    if m > 1 && ends_double_consonant(w, w.len()) && w.ends_with(b"l") {
        w.pop();
    }
}
