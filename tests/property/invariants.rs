//! Randomized checks of the promises the index and pipeline make.

use proptest::prelude::*;

use super::common::fixture;
use quarry::{common_documents, rank, stem, tokenize, SearchStrategy};

/// Random corpus: up to 6 documents, each up to 5 lines of short words.
fn corpus_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    let word = "[a-z]{1,8}";
    let line = prop::collection::vec(word, 0..6).prop_map(|words| words.join(" "));
    let doc = prop::collection::vec(line, 0..5);
    prop::collection::vec(doc, 1..6)
}

fn write_corpus(docs: &[Vec<String>]) -> super::common::Fixture {
    let files: Vec<(String, String)> = docs
        .iter()
        .enumerate()
        .map(|(i, lines)| (format!("doc{}.txt", i), lines.join("\n")))
        .collect();
    let borrowed: Vec<(&str, &str)> = files
        .iter()
        .map(|(n, c)| (n.as_str(), c.as_str()))
        .collect();
    fixture(&borrowed)
}

proptest! {
    #[test]
    fn stems_never_grow_and_stay_ascii_lowercase(word in "[a-zA-Z]{1,16}") {
        let stemmed = stem(&word);
        prop_assert!(stemmed.len() <= word.len());
        prop_assert!(stemmed.bytes().all(|b| b.is_ascii_lowercase()));
    }

    #[test]
    fn tokenizer_columns_increase_and_stems_are_nonempty(line in "[ a-zA-Z.,;#!-]{0,80}") {
        let stems = tokenize(line.as_bytes());
        for stem in &stems {
            prop_assert!(!stem.stemmed.is_empty());
            prop_assert!(stem.original.len() >= 3);
        }
        for pair in stems.windows(2) {
            prop_assert!(pair[0].index < pair[1].index);
        }
    }

    #[test]
    fn tokenizer_columns_point_at_their_surface_forms(line in "[ a-z.,#]{0,60}") {
        // For pure-ASCII input, the column must find the original verbatim.
        let stems = tokenize(line.as_bytes());
        for stem in &stems {
            let at = &line.as_bytes()[stem.index..stem.index + stem.original.len()];
            prop_assert_eq!(at, stem.original.as_bytes());
        }
    }

    #[test]
    fn built_indexes_always_verify(docs in corpus_strategy()) {
        let mut fx = write_corpus(&docs);
        fx.engine.index_corpus(false).unwrap();
        fx.engine.store().verify().unwrap();
        prop_assert_eq!(fx.engine.index_size(), docs.len());
    }

    #[test]
    fn save_load_round_trips_exactly(docs in corpus_strategy()) {
        let mut fx = write_corpus(&docs);
        fx.engine.index_corpus(false).unwrap();
        let mut reloaded = fx.fresh_engine();
        reloaded.index_corpus(true).unwrap();
        prop_assert_eq!(reloaded.store(), fx.engine.store());
    }

    #[test]
    fn and_results_are_a_subset_of_or_results(
        docs in corpus_strategy(),
        query in "[a-z]{1,8}( [a-z]{1,8})?",
    ) {
        let mut fx = write_corpus(&docs);
        fx.engine.index_corpus(false).unwrap();

        let and_docs: std::collections::BTreeSet<_> = fx
            .engine
            .search(&query, SearchStrategy::And)
            .iter()
            .map(|r| r.document_id)
            .collect();
        let or_docs: std::collections::BTreeSet<_> = fx
            .engine
            .search(&query, SearchStrategy::Or)
            .iter()
            .map(|r| r.document_id)
            .collect();

        prop_assert!(and_docs.is_subset(&or_docs));
    }

    #[test]
    fn intersection_matches_a_naive_check(docs in corpus_strategy(), query in "[a-z]{1,8} [a-z]{1,8}") {
        let mut fx = write_corpus(&docs);
        fx.engine.index_corpus(false).unwrap();
        let store = fx.engine.store();

        let stems = tokenize(query.as_bytes());
        let common = common_documents(store, &stems);

        for (id, _) in store.documents() {
            let holds_all = stems.iter().all(|s| {
                store
                    .documents_for_term(&s.stemmed)
                    .is_some_and(|docs| docs.contains(&id))
            });
            prop_assert_eq!(common.contains(&id), holds_all && !stems.is_empty());
        }

        // rank() agrees with the set it was handed.
        let hits = rank(store, &stems, SearchStrategy::And);
        for hit in hits {
            prop_assert!(common.contains(&hit.document_id));
        }
    }
}
