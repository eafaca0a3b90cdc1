// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the satchel command-line interface.
//!
//! Three subcommands: `index` to scan a site and write its search index,
//! `search` to run a query against an index the way the site's search box
//! does, and `inspect` to summarise an index file.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "satchel",
    about = "Search index builder and ranked query engine for a static review site",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a site and (re)write its search index
    Index {
        /// Site root containing articles/, categories/ and the top-level pages
        #[arg(short, long)]
        root: PathBuf,

        /// Index file to write (default: <root>/search-index.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON build manifest overriding the default scan configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Hide the progress bar
        #[arg(long)]
        quiet: bool,
    },

    /// Run a query against an index file and print ranked results
    Search {
        /// Path to the index file
        index: PathBuf,

        /// Search query
        query: String,

        /// JSON manifest whose `query` section sets weights and matching options
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Maximum number of results to print (default: manifest limit, else 10)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Also match against record URLs
        #[arg(long)]
        include_url: bool,

        /// Match regardless of accents (articulos finds artículos)
        #[arg(long)]
        fold_diacritics: bool,
    },

    /// Summarise an index file: records, dates, categories, tags, size
    Inspect {
        /// Path to the index file
        index: PathBuf,
    },
}
