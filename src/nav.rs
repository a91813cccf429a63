// Copyright 2026-present Jeevika Services
// SPDX-License-Identifier: Apache-2.0

//! The static navigation corpus: the site pages the local matcher scans.

use crate::types::Page;

const NAV_PAGES: &[(&str, &str)] = &[
    ("Properties", "/properties"),
    ("Vehicles", "/vehicles"),
    ("Jobs", "/jobs"),
    ("Services", "/services"),
    ("Education", "/education"),
    ("Health", "/health"),
    ("Agents", "/agents"),
    ("Agencies", "/agencies"),
    ("Blog", "/blog"),
    ("Articles", "/articles"),
    ("Contact", "/contact"),
];

/// The default page corpus, matching the site header navigation.
pub fn default_pages() -> Vec<Page> {
    NAV_PAGES
        .iter()
        .map(|(label, href)| Page::new(*label, *href))
        .collect()
}
