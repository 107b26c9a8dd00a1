//! End-to-end stemmer behavior: words through the whole pipeline.
//!
//! The per-step rules have their own tests next to the implementation;
//! these check what a caller of `stem()` actually sees.

use quarry::stem;

fn assert_stems(cases: &[(&str, &str)]) {
    for (word, expected) in cases {
        assert_eq!(&stem(word), expected, "stem({:?})", word);
    }
}

#[test]
fn plurals() {
    assert_stems(&[
        ("caresses", "caress"),
        ("ponies", "poni"),
        ("ties", "ti"),
        ("caress", "caress"),
        ("cats", "cat"),
        ("cat", "cat"),
    ]);
}

#[test]
fn past_tense_and_gerunds() {
    assert_stems(&[
        ("feed", "feed"),
        ("plastered", "plaster"),
        ("motoring", "motor"),
        ("hopping", "hop"),
        ("tanned", "tan"),
        ("falling", "fall"),
        ("hissing", "hiss"),
        ("fizzing", "fizz"),
        ("failing", "fail"),
        ("filing", "file"),
        ("hoping", "hope"),
    ]);
}

#[test]
fn terminal_y() {
    assert_stems(&[("happy", "happi"), ("sky", "sky"), ("may", "mai")]);
}

#[test]
fn compound_suffixes_come_all_the_way_off() {
    assert_stems(&[
        ("formative", "form"),
        ("hopeful", "hope"),
        ("goodness", "good"),
        ("triplicate", "triplic"),
        ("revival", "reviv"),
        ("allowance", "allow"),
        ("inference", "infer"),
        ("adjustable", "adjust"),
        ("homologous", "homolog"),
        ("effective", "effect"),
    ]);
}

#[test]
fn terminal_e_and_double_l() {
    assert_stems(&[
        ("probate", "probat"),
        ("rate", "rate"),
        ("cease", "ceas"),
        ("controll", "control"),
        ("roll", "roll"),
    ]);
}

#[test]
fn the_connect_family_collapses() {
    for word in [
        "connect",
        "connects",
        "connected",
        "connecting",
        "connection",
        "connections",
    ] {
        assert_eq!(stem(word), "connect", "stem({:?})", word);
    }
}

#[test]
fn stemming_is_case_insensitive() {
    assert_eq!(stem("Motoring"), stem("motoring"));
    assert_eq!(stem("CONNECTED"), stem("connected"));
}

#[test]
fn already_stemmed_words_are_stable() {
    for word in [
        "caress", "cat", "poni", "ti", "feed", "plaster", "motor", "hop", "tan",
        "fall", "hiss", "fizz", "fail", "file", "happi", "sky", "mai", "form",
        "hope", "good", "triplic", "reviv", "allow", "infer", "adjust",
        "homolog", "effect", "rate", "control", "roll", "connect", "stone",
    ] {
        assert_eq!(stem(word), word, "stem({:?}) should be a fixed point", word);
    }
}

#[test]
fn empty_and_tiny_inputs() {
    // Even two-letter words go through step 1a: "is" loses its s.
    assert_stems(&[("", ""), ("a", "a"), ("is", "i"), ("ox", "ox"), ("be", "be")]);
}
