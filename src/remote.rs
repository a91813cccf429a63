// Copyright 2026-present Jeevika Services
// SPDX-License-Identifier: Apache-2.0

//! The HTTP side of unified search: fetching suggestions, sources, and the
//! category tree from the backend.
//!
//! Error policy: callers always receive a valid (possibly empty) value,
//! never an error. A failed or malformed fetch is
//! indistinguishable from a legitimately empty result, which keeps the UI
//! path total. Failures surface at `debug!` only. There is no retry; the
//! next query change triggers the next attempt.

use std::time::Duration;

use log::debug;
use serde::de::DeserializeOwned;

use crate::links::encode_component;
use crate::local::match_local;
use crate::merge::merge;
use crate::types::{
    CategoryNode, GroupedResults, MatchMode, Page, SearchResponse, SearchSelection, SearchSource,
    SourcesResponse,
};

/// Default backend address (the Express dev server).
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Result limit for the global suggestion dropdown.
pub const SUGGESTION_LIMIT: usize = 8;

/// Result limit for the per-category search box.
pub const CATEGORY_SUGGESTION_LIMIT: usize = 6;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Category slugs the backend accepts as a search filter; anything else
/// searches unscoped.
const CATEGORY_FILTERS: &[&str] = &[
    "education-learning",
    "electronics-technology",
    "fashion-lifestyle",
    "real-estate-property",
    "vehicles-transportation",
    "services",
    "furniture-home",
];

/// Map a category slug to its backend filter value, if it has one.
pub fn category_filter(slug: &str) -> Option<&'static str> {
    CATEGORY_FILTERS.iter().copied().find(|f| *f == slug)
}

/// Request path for `/api/search`. `mode=all` is only rendered in AND mode
/// (the backend treats absence as OR); `sources` is omitted when empty.
pub fn suggestions_path<S: AsRef<str>>(
    query: &str,
    mode: MatchMode,
    sources: &[S],
    limit: usize,
) -> String {
    let mut path = format!("/api/search?q={}&limit={}", encode_component(query), limit);
    if mode == MatchMode::All {
        path.push_str("&mode=all");
    }
    if !sources.is_empty() {
        let joined = sources
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join(",");
        path.push_str("&sources=");
        path.push_str(&encode_component(&joined));
    }
    path
}

/// Request path for a category-scoped search.
pub fn category_suggestions_path(query: &str, category_slug: &str, limit: usize) -> String {
    let mut path = format!("/api/search?q={}&limit={}", encode_component(query), limit);
    if let Some(filter) = category_filter(category_slug) {
        path.push_str("&category=");
        path.push_str(&encode_component(filter));
    }
    path
}

/// Decode a `/api/search` body; malformed JSON is empty results.
pub(crate) fn decode_results(body: &str) -> GroupedResults {
    match serde_json::from_str::<SearchResponse>(body) {
        Ok(response) => response.results,
        Err(err) => {
            debug!("malformed search response: {err}");
            GroupedResults::new()
        }
    }
}

/// Async client for the backend search endpoints.
#[derive(Clone)]
pub struct SuggestClient {
    http: reqwest::Client,
    base_url: String,
}

impl SuggestClient {
    /// Build a client against `base_url` (scheme + host, no trailing slash
    /// required).
    pub fn new(base_url: impl Into<String>) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(SuggestClient { http, base_url })
    }

    /// Fetch grouped suggestions for a query. Queries shorter than two
    /// characters mean "no search yet" and skip the request entirely; any
    /// fetch failure yields empty results.
    pub async fn suggestions<S: AsRef<str>>(
        &self,
        query: &str,
        mode: MatchMode,
        sources: &[S],
        limit: usize,
    ) -> GroupedResults {
        if query.chars().count() < 2 {
            return GroupedResults::new();
        }
        let path = suggestions_path(query, mode, sources, limit);
        match self.get_text(&path).await {
            Some(body) => decode_results(&body),
            None => GroupedResults::new(),
        }
    }

    /// Category-scoped variant of [`SuggestClient::suggestions`].
    pub async fn category_suggestions(
        &self,
        query: &str,
        category_slug: &str,
        limit: usize,
    ) -> GroupedResults {
        if query.chars().count() < 2 {
            return GroupedResults::new();
        }
        let path = category_suggestions_path(query, category_slug, limit);
        match self.get_text(&path).await {
            Some(body) => decode_results(&body),
            None => GroupedResults::new(),
        }
    }

    /// The search sources the backend can scope to; empty on failure.
    pub async fn sources(&self) -> Vec<SearchSource> {
        self.get_json::<SourcesResponse>("/api/search/sources")
            .await
            .map(|response| response.sources)
            .unwrap_or_default()
    }

    /// The full category tree; empty on failure ("tree not loaded" is the
    /// no-data state, not an error).
    pub async fn categories(&self) -> Vec<CategoryNode> {
        self.get_json::<Vec<CategoryNode>>("/api/admin/categories")
            .await
            .unwrap_or_default()
    }

    /// The end-to-end operation: remote suggestions for the selection,
    /// local matches over the given corpus, merged remote-first.
    pub async fn unified_suggestions(
        &self,
        selection: &SearchSelection,
        pages: &[Page],
        categories: &[CategoryNode],
    ) -> GroupedResults {
        let remote = if selection.is_searchable() {
            self.suggestions(
                &selection.query,
                selection.mode,
                &selection.enabled_sources(),
                SUGGESTION_LIMIT,
            )
            .await
        } else {
            GroupedResults::new()
        };
        let local = match_local(&selection.query, pages, categories);
        merge(&remote, &local)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Option<T> {
        let body = self.get_text(path).await?;
        match serde_json::from_str(&body) {
            Ok(value) => Some(value),
            Err(err) => {
                debug!("malformed response from {path}: {err}");
                None
            }
        }
    }

    async fn get_text(&self, path: &str) -> Option<String> {
        let url = format!("{}{}", self.base_url, path);
        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(err) => {
                debug!("request to {url} failed: {err}");
                return None;
            }
        };
        if !response.status().is_success() {
            debug!("request to {url} returned {}", response.status());
            return None;
        }
        match response.text().await {
            Ok(body) => Some(body),
            Err(err) => {
                debug!("reading body from {url} failed: {err}");
                None
            }
        }
    }
}
