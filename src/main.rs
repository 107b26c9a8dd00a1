// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Quarry CLI: index a corpus of text files and search it.
//!
//! ```bash
//! # Build the index (cached on later runs)
//! quarry index --corpus ./docs --index-dir ./index
//!
//! # Query it; AND semantics by default
//! quarry search --corpus ./docs --index-dir ./index "hopping rabbits"
//!
//! # Inspect the persisted artifacts
//! quarry stats --index-dir ./index
//! ```

use std::fs;

use clap::Parser;

use quarry::{persist, IndexPaths, Result, SearchEngine, SearchStrategy};

mod cli;
use cli::display::{format_size, score, section, styled, truncate_path, BOLD, CYAN, DIM, YELLOW};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Index {
            corpus,
            index_dir,
            rebuild,
        } => run_index(&corpus, &index_dir, rebuild),
        Commands::Search {
            corpus,
            index_dir,
            any,
            limit,
            query,
        } => run_search(&corpus, &index_dir, any, limit, &query),
        Commands::Stats { index_dir } => run_stats(&index_dir),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run_index(corpus: &str, index_dir: &str, rebuild: bool) -> Result<()> {
    let mut engine = SearchEngine::with_index_dir(corpus, index_dir)?;
    engine.index_corpus(!rebuild)?;
    Ok(())
}

fn run_search(corpus: &str, index_dir: &str, any: bool, limit: usize, query: &str) -> Result<()> {
    let strategy = if any {
        SearchStrategy::Or
    } else {
        SearchStrategy::And
    };

    let mut engine = SearchEngine::with_index_dir(corpus, index_dir)?;
    engine.index_corpus(true)?;

    let results = engine.search(query, strategy);

    println!();
    println!("{}", section(&format!("RESULTS ({})", results.len())));

    if results.is_empty() {
        println!("  no matches for {:?}", query);
        println!();
        return Ok(());
    }

    for (rank, result) in results.iter().take(limit).enumerate() {
        let path = engine.document_path(result.document_id)?;
        println!(
            "  {:>2}  {}  {}  {}",
            rank + 1,
            score(result.relevance_score),
            styled(BOLD, &truncate_path(&path.to_string_lossy(), 44)),
            styled(DIM, &format!("({})", result.query_term.stemmed)),
        );
        for occ in &result.occurrences {
            println!(
                "        {}  {}",
                styled(CYAN, &format!("{}:{}", occ.line, occ.index)),
                occ.original
            );
        }
    }

    if results.len() > limit {
        println!(
            "  {}",
            styled(DIM, &format!("… and {} more", results.len() - limit))
        );
    }
    println!();
    Ok(())
}

fn run_stats(index_dir: &str) -> Result<()> {
    let paths = IndexPaths::new(index_dir);
    if !persist::exists_on_disk(&paths) {
        println!(
            "{}",
            styled(
                YELLOW,
                &format!(
                    "No index artifacts under {}; run `quarry index` first.",
                    paths.root().display()
                )
            )
        );
        return Ok(());
    }

    let store = persist::load(&paths)?;

    println!();
    println!("{}", section("INDEX"));
    println!("  documents    {}", styled(BOLD, &store.document_count().to_string()));
    println!("  terms        {}", styled(BOLD, &store.term_count().to_string()));
    println!("  occurrences  {}", styled(BOLD, &store.occurrence_count().to_string()));
    println!();
    println!("{}", section("ARTIFACTS"));
    for path in [
        paths.documents(),
        paths.term_occurrences(),
        paths.term_documents(),
    ] {
        let size = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        println!(
            "  {:<24} {:>10}",
            path.file_name().and_then(|n| n.to_str()).unwrap_or("?"),
            format_size(size)
        );
    }
    println!();
    Ok(())
}
