//! Shared test fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use quarry::SearchEngine;
use tempfile::TempDir;

/// A corpus on disk plus an engine wired to it.
///
/// The temp directory holds `corpus/` and `index/` side by side; dropping
/// the fixture removes both.
pub struct Fixture {
    pub dir: TempDir,
    pub engine: SearchEngine,
}

impl Fixture {
    pub fn corpus_dir(&self) -> PathBuf {
        self.dir.path().join("corpus")
    }

    pub fn index_dir(&self) -> PathBuf {
        self.dir.path().join("index")
    }

    /// A second engine over the same directories, with its own empty
    /// in-memory index. Used to exercise the cache path.
    pub fn fresh_engine(&self) -> SearchEngine {
        SearchEngine::with_index_dir(self.corpus_dir(), self.index_dir()).unwrap()
    }
}

/// Lay out a corpus of `(relative_path, contents)` files and build an
/// engine over it. Nothing is indexed yet; call `index_corpus` yourself.
pub fn fixture(files: &[(&str, &str)]) -> Fixture {
    let dir = TempDir::new().unwrap();
    let corpus = dir.path().join("corpus");
    let index = dir.path().join("index");
    fs::create_dir_all(&corpus).unwrap();
    fs::create_dir_all(&index).unwrap();

    for (name, contents) in files {
        write_file(&corpus, name, contents);
    }

    let engine = SearchEngine::with_index_dir(&corpus, &index).unwrap();
    Fixture { dir, engine }
}

/// Write one file under a root, creating parent directories as needed.
pub fn write_file(root: &Path, name: &str, contents: &str) {
    let path = root.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// The two-file corpus from the engine's acceptance scenarios.
pub fn cats_and_dogs() -> Fixture {
    fixture(&[("a.txt", "cats and dogs"), ("b.txt", "the dog runs")])
}
