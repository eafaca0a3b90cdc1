// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use satchel::browse::{self, DEFAULT_LATEST, DEFAULT_POPULAR_TERMS};
use satchel::build::{run_build, BuildConfig, BuildReport, InputManifest};
use satchel::config::QueryConfig;
use satchel::index::store;
use satchel::search::{SearchOutcome, Searcher};

mod cli;
use cli::display::*;
use cli::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("satchel=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Index {
            root,
            output,
            config,
            quiet,
        } => cmd_index(&root, output.as_deref(), config.as_deref(), quiet),
        Commands::Search {
            index,
            query,
            config,
            limit,
            include_url,
            fold_diacritics,
        } => query_config(config.as_deref()).and_then(|base| {
            let mut config = base.with_overrides(include_url, fold_diacritics, limit);
            config.limit = config.limit.or(Some(DEFAULT_SEARCH_LIMIT));
            cmd_search(&index, &query, config)
        }),
        Commands::Inspect { index } => cmd_inspect(&index),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", themed(RED, &[BOLD], "error:"), e);
        std::process::exit(1);
    }
}

const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Query settings from a manifest, or the defaults when none is given.
fn query_config(manifest: Option<&Path>) -> Result<QueryConfig> {
    match manifest {
        Some(path) => {
            let manifest = InputManifest::load(path)
                .with_context(|| format!("loading manifest {}", path.display()))?;
            Ok(manifest.query)
        }
        None => Ok(QueryConfig::default()),
    }
}

fn cmd_index(root: &Path, output: Option<&Path>, config: Option<&Path>, quiet: bool) -> Result<()> {
    let mut build = BuildConfig::new(root);
    if let Some(path) = config {
        let manifest = InputManifest::load(path)
            .with_context(|| format!("loading build manifest {}", path.display()))?;
        build = build.with_manifest(&manifest);
    }
    if let Some(output) = output {
        build.output = output.to_path_buf();
    }
    build.progress = !quiet && atty::is(atty::Stream::Stderr);

    let report = run_build(&build)
        .with_context(|| format!("building search index for {}", root.display()))?;
    print_build_report(&report);
    Ok(())
}

fn print_build_report(report: &BuildReport) {
    section_top("BUILD");
    row(&format!(" pages found   {}", report.files_found));
    row(&format!(" records       {}", report.records));
    row(&format!(" skipped       {}", report.skipped.len()));
    row(&format!(" dates         {}", date_tiers(&report.dates)));
    let written = &report.written;
    row(&format!(
        " written       {} ({}, crc32 {:08x})",
        written.path.display(),
        format_size(written.bytes),
        written.crc32
    ));
    if report.records == 0 {
        row(&format!(" {}", themed(YELLOW, &[], "no pages indexed; index is empty")));
    }
    if !report.skipped.is_empty() {
        section_mid("SKIPPED");
        for skipped in &report.skipped {
            row(&format!(
                " {}  {}",
                truncate(&skipped.path.display().to_string(), 40),
                styled(&[DIM], &skipped.reason.to_string())
            ));
        }
    }
    section_bot();
}

fn cmd_search(index: &Path, query: &str, config: QueryConfig) -> Result<()> {
    let collection = store::load(index)?;
    let searcher = Searcher::new(&collection, config);

    match searcher.search(query) {
        SearchOutcome::EmptyQuery => {
            println!("{}", styled(&[DIM], "empty query; nothing searched"));
        }
        SearchOutcome::Matches(hits) => {
            title(&format!("{} result(s) for \"{}\"", hits.len(), query.trim()));
            for (rank, hit) in hits.iter().enumerate() {
                println!(
                    "{} {} {} {}",
                    pad_left(&(rank + 1).to_string(), 3),
                    score_value(hit.score),
                    pad_right(&truncate(&hit.record.title, 48), 48),
                    category_badge(hit.record.category)
                );
                println!(
                    "           {}  {}",
                    styled(&[DIM], &hit.record.date),
                    themed(BLUE, &[], &hit.record.url)
                );
            }
        }
        SearchOutcome::NoMatches => {
            title(&format!("No results for \"{}\"", query.trim()));
            let fallback = browse::fallback(&collection, DEFAULT_LATEST);
            section_top("BROWSE BY CATEGORY");
            for (category, count) in &fallback.categories {
                row(&format!(" {} {}", pad_right(&category_badge(*category), 16), count));
            }
            section_mid("LATEST");
            for record in &fallback.latest {
                row(&format!(" {}  {}", record.date, truncate(&record.title, 56)));
            }
            let suggestions = browse::suggest(&collection, query, DEFAULT_POPULAR_TERMS);
            if !suggestions.terms.is_empty() {
                section_mid("POPULAR TERMS");
                row(&format!(" {}", suggestions.terms.join(", ")));
            }
            section_bot();
        }
    }
    Ok(())
}

fn cmd_inspect(index: &Path) -> Result<()> {
    let summary = store::inspect(index)?;
    let collection = &summary.collection;

    title(&index.display().to_string());
    section_top("RECORDS");
    row(&format!(" count         {}", collection.len()));
    if let Some((oldest, newest)) = collection.date_range() {
        row(&format!(" dates         {} .. {}", oldest, newest));
    }
    let order = if collection.is_sorted_newest_first() {
        themed(GREEN, &[], "newest first")
    } else {
        themed(RED, &[BOLD], "NOT sorted by date")
    };
    row(&format!(" order         {}", order));
    let duplicates = collection.duplicate_urls();
    if !duplicates.is_empty() {
        row(&format!(
            " duplicates    {}",
            themed(YELLOW, &[], &duplicates.join(", "))
        ));
    }

    section_mid("CATEGORIES");
    let categories = collection.category_counts();
    let max = categories.values().copied().max().unwrap_or(0);
    for (category, count) in &categories {
        row(&format!(
            " {} {} {}",
            pad_right(&category_badge(*category), 16),
            pad_left(&count.to_string(), 4),
            bar(*count, max, 40)
        ));
    }

    section_mid("TAGS");
    let mut tags: Vec<(&str, usize)> = collection.tag_counts().into_iter().collect();
    tags.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    let max = tags.first().map_or(0, |(_, n)| *n);
    for (tag, count) in tags.iter().take(15) {
        row(&format!(
            " {} {} {}",
            pad_right(tag, 16),
            pad_left(&count.to_string(), 4),
            bar(*count, max, 40)
        ));
    }

    section_mid("FILE");
    row(&format!(" raw           {}", format_size(summary.raw_bytes)));
    row(&format!(
        " brotli        {} ({} smaller)",
        format_size(summary.brotli_bytes),
        savings_colored(summary.raw_bytes, summary.brotli_bytes)
    ));
    row(&format!(" crc32         {:08x}", summary.crc32));
    section_bot();
    Ok(())
}
