// Copyright 2026-present Jeevika Services
// SPDX-License-Identifier: Apache-2.0

//! Entry point for the khoja CLI.

use std::fs;

use anyhow::Context;
use clap::Parser;
use log::info;

use khoja::{
    build_search_url, default_pages, match_local, resolve_icon, resolve_link, CategoryNode,
    GroupedResults, IconQuery, MatchMode, SearchSelection, SuggestClient, DEFAULT_ICON,
};

mod cli;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Suggest {
            query,
            base_url,
            sources,
            all,
            limit,
            local_only,
            corpus,
            json,
        } => {
            let mode = if all { MatchMode::All } else { MatchMode::Any };
            let source_keys = split_sources(sources.as_deref());

            let client = SuggestClient::new(&base_url)?;
            let categories = load_categories(&client, corpus.as_deref()).await?;
            info!("category corpus: {} top-level categories", categories.len());

            let remote = if local_only {
                GroupedResults::new()
            } else {
                client.suggestions(&query, mode, &source_keys, limit).await
            };
            let local = match_local(&query, &default_pages(), &categories);
            let merged = khoja::merge(&remote, &local);

            if json {
                println!("{}", serde_json::to_string_pretty(&merged)?);
            } else {
                print_results(&query, &merged);
            }

            let selection = SearchSelection {
                query,
                mode,
                sources: source_keys.iter().map(|k| (k.clone(), true)).collect(),
            };
            println!(
                "\nfull results: {}",
                build_search_url(&selection.query, selection.mode, &selection.enabled_sources())
            );
        }

        Commands::Sources { base_url, json } => {
            let client = SuggestClient::new(&base_url)?;
            let sources = client.sources().await;
            if json {
                println!("{}", serde_json::to_string_pretty(&sources)?);
            } else if sources.is_empty() {
                println!("no sources (backend unreachable or none configured)");
            } else {
                for source in &sources {
                    match &source.label {
                        Some(label) => println!("{:<28} {}", source.key, label),
                        None => println!("{}", source.key),
                    }
                }
            }
        }

        Commands::Icon { name } => {
            let resolved = resolve_icon(&IconQuery::named(&name));
            match resolved {
                Some(icon) => println!("{icon}"),
                None => println!("(none, caller default: {DEFAULT_ICON})"),
            }
        }

        Commands::Url { query, all, sources } => {
            let mode = if all { MatchMode::All } else { MatchMode::Any };
            let source_keys = split_sources(sources.as_deref());
            println!("{}", build_search_url(&query, mode, &source_keys));
        }
    }

    Ok(())
}

fn split_sources(sources: Option<&str>) -> Vec<String> {
    sources
        .map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Category corpus: a JSON file when given, the backend otherwise. A dead
/// backend means an empty corpus, not a failure.
async fn load_categories(
    client: &SuggestClient,
    corpus: Option<&str>,
) -> anyhow::Result<Vec<CategoryNode>> {
    match corpus {
        Some(path) => {
            let body = fs::read_to_string(path)
                .with_context(|| format!("reading category corpus {path}"))?;
            serde_json::from_str(&body).with_context(|| format!("parsing category corpus {path}"))
        }
        None => Ok(client.categories().await),
    }
}

fn print_results(query: &str, results: &GroupedResults) {
    if results.is_empty() {
        println!("no results for \"{query}\"");
        return;
    }
    println!("{} results for \"{query}\"", results.total_len());
    for (group, items) in results.groups() {
        if items.is_empty() {
            continue;
        }
        println!("\n{} ({})", group, items.len());
        for item in items {
            let name = item.display_name().unwrap_or("Untitled");
            let icon = resolve_icon(&IconQuery::from(item)).unwrap_or(DEFAULT_ICON);
            println!("  [{icon}] {name}  →  {}", resolve_link(group, item));
            if let Some(summary) = item.summary() {
                println!("        {summary}");
            }
        }
    }
}
