// Copyright 2026-present Jeevika Services
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the khoja command-line interface.
//!
//! Four subcommands: `suggest` runs a unified query against a backend (and
//! the local nav/category corpus), `sources` lists the searchable sources,
//! `icon` shows how a category name resolves, and `url` prints the
//! consumer-facing search URL for a selection.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "khoja",
    about = "Unified search suggestion aggregation for the Jeevika marketplace",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Query the backend and local corpus, print merged grouped results
    Suggest {
        /// Search query (two characters minimum to hit the backend)
        query: String,

        /// Backend base URL
        #[arg(long, default_value = khoja::DEFAULT_BASE_URL)]
        base_url: String,

        /// Comma-separated source keys to scope the search to
        #[arg(long)]
        sources: Option<String>,

        /// Require all query tokens to match (default: any)
        #[arg(long)]
        all: bool,

        /// Maximum results per group
        #[arg(short, long, default_value_t = khoja::SUGGESTION_LIMIT)]
        limit: usize,

        /// Skip the backend, match only the local corpus
        #[arg(long)]
        local_only: bool,

        /// Load the category tree from a JSON file instead of the backend
        #[arg(long)]
        corpus: Option<String>,

        /// Emit raw JSON instead of the human-readable listing
        #[arg(long)]
        json: bool,
    },

    /// List the search sources the backend exposes
    Sources {
        /// Backend base URL
        #[arg(long, default_value = khoja::DEFAULT_BASE_URL)]
        base_url: String,

        /// Emit raw JSON
        #[arg(long)]
        json: bool,
    },

    /// Show which icon a category or subcategory name resolves to
    Icon {
        /// Free-text name, slug, or icon field value
        name: String,
    },

    /// Print the consumer-facing search URL for a query
    Url {
        /// Search query
        query: String,

        /// Require all query tokens to match (default: any)
        #[arg(long)]
        all: bool,

        /// Comma-separated source keys
        #[arg(long)]
        sources: Option<String>,
    },
}
