//! Tokenizer behavior through the public API.

use quarry::{check_stemmable, is_stop_word, tokenize, MIN_STEMMABLE_LEN};

#[test]
fn stems_carry_surface_form_position_and_term() {
    let stems = tokenize(b"Hopping rabbits");
    assert_eq!(stems.len(), 2);

    assert_eq!(stems[0].index, 0);
    assert_eq!(stems[0].original, "Hopping");
    assert_eq!(stems[0].stemmed, "hop");

    assert_eq!(stems[1].index, 8);
    assert_eq!(stems[1].original, "rabbits");
    assert_eq!(stems[1].stemmed, "rabbit");
}

#[test]
fn punctuation_splits_and_costs_one_column_each() {
    let stems = tokenize(b"foo-bar...baz");
    let got: Vec<(usize, &str)> = stems
        .iter()
        .map(|s| (s.index, s.original.as_str()))
        .collect();
    assert_eq!(got, [(0, "foo"), (4, "bar"), (10, "baz")]);
}

#[test]
fn a_query_tokenizes_like_a_document_line() {
    // The same path serves both sides of the search, so "cat AND dog"
    // produces a stem for the uppercase AND (the stop list is lowercase)
    // while lowercase "and" disappears.
    let query = tokenize(b"cat AND dog");
    let terms: Vec<&str> = query.iter().map(|s| s.stemmed.as_str()).collect();
    assert_eq!(terms, ["cat", "and", "dog"]);

    let line = tokenize(b"cats and dogs");
    let terms: Vec<&str> = line.iter().map(|s| s.stemmed.as_str()).collect();
    assert_eq!(terms, ["cat", "dog"]);
}

#[test]
fn stop_word_predicate_matches_the_fixed_list() {
    for word in ["the", "and", "because", "now", "s", "t"] {
        assert!(is_stop_word(word), "{:?} should be a stop word", word);
    }
    for word in ["cat", "never", "stone", "quarry"] {
        assert!(!is_stop_word(word), "{:?} should not be a stop word", word);
    }
}

#[test]
fn stemmability_needs_three_bytes_and_no_stop_match() {
    assert_eq!(MIN_STEMMABLE_LEN, 3);
    assert!(check_stemmable(b"cat"));
    assert!(!check_stemmable(b"ox"));
    assert!(!check_stemmable(b"the"));
    assert!(check_stemmable(b"The"));
}

#[test]
fn tabs_do_not_split_words_mid_line() {
    // Only the space splits fragments; a tab inside a line is not a
    // delimiter (leading tabs are trimmed like any whitespace).
    let stems = tokenize(b"\tdogs cats");
    assert_eq!(stems[0].index, 1);
    assert_eq!(stems[0].stemmed, "dog");
    assert_eq!(stems[1].index, 6);
}
