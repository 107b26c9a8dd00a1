// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the quarry command-line interface.
//!
//! Three subcommands: `index` to build or refresh the corpus index,
//! `search` to query it, and `stats` to examine the persisted artifacts.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "quarry",
    about = "Full-text search over a directory of plain-text files",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the corpus index, or load the cached one if present
    Index {
        /// Directory containing the .txt corpus
        #[arg(short, long)]
        corpus: String,

        /// Directory holding the three index artifacts
        #[arg(long, default_value = ".")]
        index_dir: String,

        /// Ignore cached artifacts and rebuild from the corpus
        #[arg(long)]
        rebuild: bool,
    },

    /// Query the corpus and print ranked hits with their locations
    Search {
        /// Directory containing the .txt corpus
        #[arg(short, long)]
        corpus: String,

        /// Directory holding the three index artifacts
        #[arg(long, default_value = ".")]
        index_dir: String,

        /// Match documents containing any query term instead of all of them
        #[arg(long)]
        any: bool,

        /// Maximum number of results to print
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// The search query
        query: String,
    },

    /// Show document/term counts and artifact sizes for a persisted index
    Stats {
        /// Directory holding the three index artifacts
        #[arg(long, default_value = ".")]
        index_dir: String,
    },
}
