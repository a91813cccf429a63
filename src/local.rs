// Copyright 2026-present Jeevika Services
// SPDX-License-Identifier: Apache-2.0

//! Local matching over static navigation pages and the cached category tree.
//!
//! The query is lowercased and split on whitespace, and an item matches
//! when **any** token is a substring of its lowercased display name. No
//! ranking and no edit distance: the corpus is a dozen pages and a few
//! hundred category names, and the remote search handles the heavy lifting.

use crate::types::{CategoryNode, GroupedResults, Page, ResultItem, ResultKind, SubcategoryNode};

/// Match `query` against navigation pages and the category tree, producing
/// groups `pages`, `categories`, and `subcategories`.
///
/// An empty or whitespace-only query yields an empty map, never the whole
/// corpus. Inactive categories and subcategories are not candidates.
pub fn match_local(query: &str, pages: &[Page], categories: &[CategoryNode]) -> GroupedResults {
    let lowered = query.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();
    let mut results = GroupedResults::new();
    if tokens.is_empty() {
        return results;
    }

    for page in pages {
        if matches_any_token(&page.label, &tokens) {
            results.push("pages", page_item(page));
        }
    }

    for category in categories.iter().filter(|c| c.is_active) {
        if matches_any_token(&category.name, &tokens) {
            results.push("categories", category_item(category));
        }
        for sub in category.subcategories.iter().filter(|s| s.is_active) {
            if matches_any_token(&sub.name, &tokens) {
                results.push("subcategories", subcategory_item(sub, category));
            }
        }
    }

    results
}

/// OR-of-tokens substring test against the lowercased display name.
fn matches_any_token(name: &str, tokens: &[&str]) -> bool {
    let lowered = name.to_lowercase();
    tokens.iter().any(|token| lowered.contains(token))
}

fn page_item(page: &Page) -> ResultItem {
    ResultItem {
        kind: ResultKind::Page,
        label: Some(page.label.clone()),
        href: Some(page.href.clone()),
        ..ResultItem::default()
    }
}

fn category_item(category: &CategoryNode) -> ResultItem {
    ResultItem {
        kind: ResultKind::Category,
        id: Some(category.id.clone()),
        name: Some(category.name.clone()),
        slug: Some(category.slug.clone()),
        icon: category.icon.clone(),
        ..ResultItem::default()
    }
}

fn subcategory_item(sub: &SubcategoryNode, parent: &CategoryNode) -> ResultItem {
    ResultItem {
        kind: ResultKind::Subcategory,
        id: Some(sub.id.clone()),
        name: Some(sub.name.clone()),
        slug: Some(sub.slug.clone()),
        icon: sub.icon.clone(),
        parent: Some(Box::new(category_item(parent))),
        ..ResultItem::default()
    }
}
