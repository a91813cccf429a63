// Copyright 2026-present Jeevika Services
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of unified search: queries, result items, and the
//! grouped maps everything flows through.
//!
//! The backend returns loosely-shaped JSON rows, so nearly every field here
//! is optional. Consumers must treat absence as normal, not exceptional;
//! the resolvers in [`crate::links`] and [`crate::icons`] are written to be
//! total over whatever shows up.
//!
//! # Invariants
//!
//! - **GroupedResults**: per-group order is concatenation order; group
//!   iteration order is deterministic (sorted by name).
//! - **ResultItem**: no field is guaranteed present. The `kind` discriminant
//!   is `Listing` for anything the backend returned untagged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How query tokens combine on the backend: OR (`any`) or AND (`all`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    #[default]
    Any,
    All,
}

impl MatchMode {
    /// Parameter value for consumer-facing `/search` URLs.
    pub fn as_url_param(self) -> &'static str {
        match self {
            MatchMode::Any => "or",
            MatchMode::All => "all",
        }
    }
}

/// The explicit, serializable search state: query text, per-source
/// enablement, and match mode.
///
/// Held by the UI layer and recreated on every keystroke; everything in this
/// crate takes it by reference and never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchSelection {
    pub query: String,
    #[serde(default)]
    pub mode: MatchMode,
    /// Source key → enabled. Absent keys count as disabled.
    #[serde(default)]
    pub sources: BTreeMap<String, bool>,
}

impl SearchSelection {
    /// Selection with every listed source enabled (the default state seeded
    /// from `/api/search/sources`).
    pub fn with_all_sources(query: impl Into<String>, sources: &[SearchSource]) -> Self {
        SearchSelection {
            query: query.into(),
            mode: MatchMode::Any,
            sources: sources.iter().map(|s| (s.key.clone(), true)).collect(),
        }
    }

    /// Enabled source keys, in deterministic (sorted) order.
    pub fn enabled_sources(&self) -> Vec<String> {
        self.sources
            .iter()
            .filter(|(_, on)| **on)
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Queries shorter than two characters mean "no search yet".
    pub fn is_searchable(&self) -> bool {
        self.query.chars().count() >= 2
    }
}

/// Discriminant for result items, so renderers and the link resolver can
/// pattern-match instead of probing for field presence.
///
/// Remote rows arrive untagged and default to `Listing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Page,
    Category,
    Subcategory,
    #[default]
    Listing,
}

/// One search hit, remote or local. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResultItem {
    pub kind: ResultKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Direct navigation target, carried by static page hits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub matched_words: Vec<String>,
    /// The backend row this hit was derived from, verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<RawRecord>,
    /// Parent category, attached to subcategory hits for display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<ResultItem>>,
}

impl ResultItem {
    /// Best available display text, probing the same fallback chain the
    /// original renderer used.
    pub fn display_name(&self) -> Option<&str> {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .or(self.label.as_deref())
            .or_else(|| self.raw.as_ref().and_then(|r| r.title.as_deref()))
            .or_else(|| self.raw.as_ref().and_then(|r| r.name.as_deref()))
            .or_else(|| self.raw.as_ref().and_then(|r| r.username.as_deref()))
    }

    /// Short descriptive text: the backend snippet if present, otherwise a
    /// summary of the raw row truncated to 140 characters.
    pub fn summary(&self) -> Option<String> {
        if let Some(snippet) = &self.snippet {
            return Some(snippet.clone());
        }
        self.raw.as_ref().and_then(RawRecord::summarize)
    }

    /// Matched words with duplicates removed, first occurrence wins.
    pub fn unique_matched_words(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for word in &self.matched_words {
            if !seen.contains(&word.as_str()) {
                seen.push(word.as_str());
            }
        }
        seen
    }
}

/// The untyped backend row behind a result item.
///
/// Named fields are the ones the resolvers and renderers probe; anything
/// else the backend sends is preserved in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_number: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl RawRecord {
    /// First of description / address / summary, truncated to 140 chars.
    pub fn summarize(&self) -> Option<String> {
        let text = self
            .description
            .as_deref()
            .or(self.address.as_deref())
            .or(self.summary.as_deref())?;
        Some(text.chars().take(140).collect())
    }
}

/// Grouped search results: group or source name → ordered hits.
///
/// This is the shape both the backend and the local matcher produce, and
/// what [`crate::merge`] consumes and returns. Transparent serde so it
/// round-trips the backend's `results` JSON object directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupedResults(BTreeMap<String, Vec<ResultItem>>);

impl GroupedResults {
    pub fn new() -> Self {
        GroupedResults::default()
    }

    /// Append one item to a group, creating the group if needed.
    pub fn push(&mut self, group: impl Into<String>, item: ResultItem) {
        self.0.entry(group.into()).or_default().push(item);
    }

    /// Append many items to a group. A group touched with zero items still
    /// exists afterwards (merge must not drop keys).
    pub fn extend_group<I>(&mut self, group: impl Into<String>, items: I)
    where
        I: IntoIterator<Item = ResultItem>,
    {
        self.0.entry(group.into()).or_default().extend(items);
    }

    pub fn get(&self, group: &str) -> Option<&[ResultItem]> {
        self.0.get(group).map(Vec::as_slice)
    }

    /// Iterate groups in sorted-name order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[ResultItem])> {
        self.0
            .iter()
            .map(|(name, items)| (name.as_str(), items.as_slice()))
    }

    /// Number of groups, including empty ones.
    pub fn group_count(&self) -> usize {
        self.0.len()
    }

    /// Total hits across all groups.
    pub fn total_len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// True when there is nothing to show (no groups, or all groups empty).
    pub fn is_empty(&self) -> bool {
        self.total_len() == 0
    }
}

impl FromIterator<(String, Vec<ResultItem>)> for GroupedResults {
    fn from_iter<T: IntoIterator<Item = (String, Vec<ResultItem>)>>(iter: T) -> Self {
        GroupedResults(iter.into_iter().collect())
    }
}

/// A static navigation page, part of the local match corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub label: String,
    pub href: String,
}

impl Page {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Page {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// A top-level listing category with its subcategories, as served by
/// `/api/admin/categories`. Fetched wholesale; never mutated client-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryNode {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subcategories: Vec<SubcategoryNode>,
}

/// A child of a [`CategoryNode`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubcategoryNode {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// One entry from `/api/search/sources`, used to seed the default
/// "all sources enabled" selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchSource {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Wire shape of `/api/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub results: GroupedResults,
}

/// Wire shape of `/api/search/sources`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourcesResponse {
    #[serde(default)]
    pub sources: Vec<SearchSource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_item_deserializes_loose_backend_row() {
        let json = r#"{
            "id": "abc",
            "title": "Cricket Academy",
            "snippet": "Learn cricket...",
            "raw": {"id": "abc", "contactPhone": "98000", "whatsappNumber": "98001", "views": 12}
        }"#;
        let item: ResultItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, ResultKind::Listing);
        assert_eq!(item.display_name(), Some("Cricket Academy"));
        let raw = item.raw.unwrap();
        assert_eq!(raw.contact_phone.as_deref(), Some("98000"));
        assert_eq!(raw.extra["views"], serde_json::json!(12));
    }

    #[test]
    fn display_name_falls_through_to_raw_username() {
        let item = ResultItem {
            raw: Some(RawRecord {
                username: Some("ram_t".into()),
                ..RawRecord::default()
            }),
            ..ResultItem::default()
        };
        assert_eq!(item.display_name(), Some("ram_t"));
    }

    #[test]
    fn summary_prefers_snippet_then_truncates_description() {
        let long = "x".repeat(200);
        let item = ResultItem {
            raw: Some(RawRecord {
                description: Some(long),
                ..RawRecord::default()
            }),
            ..ResultItem::default()
        };
        assert_eq!(item.summary().unwrap().chars().count(), 140);

        let with_snippet = ResultItem {
            snippet: Some("short".into()),
            ..item
        };
        assert_eq!(with_snippet.summary().as_deref(), Some("short"));
    }

    #[test]
    fn unique_matched_words_keeps_first_occurrence() {
        let item = ResultItem {
            matched_words: vec!["yoga".into(), "gym".into(), "yoga".into()],
            ..ResultItem::default()
        };
        assert_eq!(item.unique_matched_words(), vec!["yoga", "gym"]);
    }

    #[test]
    fn category_node_is_active_defaults_true() {
        let node: CategoryNode =
            serde_json::from_str(r#"{"id": "1", "name": "Education", "slug": "education"}"#)
                .unwrap();
        assert!(node.is_active);
        assert!(node.subcategories.is_empty());
    }

    #[test]
    fn selection_with_all_sources_enables_everything() {
        let sources = vec![
            SearchSource {
                key: "properties".into(),
                ..SearchSource::default()
            },
            SearchSource {
                key: "cars".into(),
                ..SearchSource::default()
            },
        ];
        let selection = SearchSelection::with_all_sources("flat", &sources);
        assert_eq!(selection.enabled_sources(), vec!["cars", "properties"]);
        assert!(selection.is_searchable());
        assert!(!SearchSelection::default().is_searchable());
    }
}
