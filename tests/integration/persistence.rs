//! Round-tripping the index through its JSON artifacts.

use std::fs;

use super::common::{cats_and_dogs, fixture};
use quarry::{persist, Error, IndexPaths, SearchStrategy};

#[test]
fn a_fresh_engine_reloads_an_identical_index() {
    let mut fx = fixture(&[
        ("a.txt", "cats and dogs"),
        ("nested/b.txt", "the dog runs\nand runs again"),
        ("empty.txt", ""),
    ]);
    fx.engine.index_corpus(true).unwrap();

    let mut reloaded = fx.fresh_engine();
    reloaded.index_corpus(true).unwrap();

    assert_eq!(reloaded.store(), fx.engine.store());
    assert_eq!(reloaded.index_size(), 3);

    // Queries behave identically against the reloaded index.
    let before = fx.engine.search("dog", SearchStrategy::Or);
    let after = reloaded.search("dog", SearchStrategy::Or);
    assert_eq!(before.len(), after.len());
    for (b, a) in before.iter().zip(&after) {
        assert_eq!(b.document_id, a.document_id);
        assert_eq!(b.relevance_score, a.relevance_score);
        assert_eq!(b.occurrences, a.occurrences);
    }
}

#[test]
fn loading_skips_the_corpus_walk() {
    let mut fx = cats_and_dogs();
    fx.engine.index_corpus(true).unwrap();

    // Remove the corpus entirely; the cached artifacts must carry the day.
    fs::remove_dir_all(fx.corpus_dir()).unwrap();
    fs::create_dir_all(fx.corpus_dir()).unwrap();

    let mut reloaded = fx.fresh_engine();
    reloaded.index_corpus(true).unwrap();
    assert_eq!(reloaded.index_size(), 2);
    assert_eq!(reloaded.search("cat", SearchStrategy::And).len(), 1);
}

#[test]
fn a_missing_artifact_forces_a_rebuild() {
    let mut fx = cats_and_dogs();
    fx.engine.index_corpus(true).unwrap();

    let paths = IndexPaths::new(fx.index_dir());
    fs::remove_file(paths.term_documents()).unwrap();
    assert!(!persist::exists_on_disk(&paths));

    // With one artifact gone the cache does not count, so this walks the
    // corpus again and rewrites all three files.
    let mut reloaded = fx.fresh_engine();
    reloaded.index_corpus(true).unwrap();
    assert_eq!(reloaded.index_size(), 2);
    assert!(persist::exists_on_disk(&paths));
}

#[test]
fn corrupt_artifacts_fail_the_cached_load() {
    let mut fx = cats_and_dogs();
    fx.engine.index_corpus(true).unwrap();

    let paths = IndexPaths::new(fx.index_dir());
    fs::write(paths.term_occurrences(), b"[1, 2, 3]").unwrap();

    let mut reloaded = fx.fresh_engine();
    match reloaded.index_corpus(true) {
        Err(Error::CorruptIndex { artifact, .. }) => {
            assert_eq!(artifact, persist::TERM_OCCURRENCES_FILE);
        }
        other => panic!("expected corrupt index, got {:?}", other.err()),
    }

    // The documented escape hatch: reindex without the cache.
    reloaded.index_corpus(false).unwrap();
    assert_eq!(reloaded.index_size(), 2);
    assert_eq!(reloaded.search("cat", SearchStrategy::And).len(), 1);
}

#[test]
fn cross_artifact_inconsistency_is_rejected() {
    let mut fx = cats_and_dogs();
    fx.engine.index_corpus(true).unwrap();

    // Drop one document from documents.json while its occurrences remain.
    let paths = IndexPaths::new(fx.index_dir());
    let mut documents: serde_json::Value =
        serde_json::from_slice(&fs::read(paths.documents()).unwrap()).unwrap();
    let map = documents.as_object_mut().unwrap();
    let first_key = map.keys().next().unwrap().clone();
    map.remove(&first_key);
    fs::write(paths.documents(), serde_json::to_vec(&documents).unwrap()).unwrap();

    let mut reloaded = fx.fresh_engine();
    assert!(matches!(
        reloaded.index_corpus(true),
        Err(Error::CorruptIndex { .. })
    ));
}

#[test]
fn artifacts_use_the_documented_schemas() {
    let mut fx = cats_and_dogs();
    fx.engine.index_corpus(true).unwrap();
    let paths = IndexPaths::new(fx.index_dir());

    // documents.json: path string -> integer id
    let documents: serde_json::Value =
        serde_json::from_slice(&fs::read(paths.documents()).unwrap()).unwrap();
    assert!(documents.as_object().unwrap().values().all(|v| v.is_u64()));

    // term_occurrences.json: id string -> term -> [{line, index, original}]
    let occurrences: serde_json::Value =
        serde_json::from_slice(&fs::read(paths.term_occurrences()).unwrap()).unwrap();
    for (doc_key, terms) in occurrences.as_object().unwrap() {
        doc_key.parse::<u32>().expect("document keys are decimal ids");
        for (_term, list) in terms.as_object().unwrap() {
            for occ in list.as_array().unwrap() {
                let occ = occ.as_object().unwrap();
                assert!(occ.contains_key("line"));
                assert!(occ.contains_key("index"));
                assert!(occ.contains_key("original"));
                assert_eq!(occ.len(), 3, "no stray fields on disk");
            }
        }
    }

    // term_documents.json: term -> [ids], no duplicates
    let term_docs: serde_json::Value =
        serde_json::from_slice(&fs::read(paths.term_documents()).unwrap()).unwrap();
    for (_term, ids) in term_docs.as_object().unwrap() {
        let ids = ids.as_array().unwrap();
        let mut seen: Vec<u64> = ids.iter().map(|v| v.as_u64().unwrap()).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), ids.len());
    }
}
