// Copyright 2026-present Jeevika Services
// SPDX-License-Identifier: Apache-2.0

//! Icon resolution for dynamically-named categories and subcategories.
//!
//! Category names are free text entered by admins ("Dance, Karate, Gym &
//! Yoga", "Cyber Café / Internet Services"), so resolution is a cascade of
//! normalized lookups, suffix-stripped retries, and keyword fallbacks. The
//! resolver is total: every input, including the empty query, maps to an
//! icon identifier or `None`. Callers substitute [`DEFAULT_ICON`] for
//! `None`, so a blank render never happens.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::types::{CategoryNode, ResultItem, SubcategoryNode};

/// The neutral icon callers fall back to when resolution yields `None`.
pub const DEFAULT_ICON: &str = "home";

/// Name suffixes stripped before retrying lookups: "Language Classes" and
/// "Language" should resolve identically.
const STRIP_SUFFIXES: &[&str] = &[
    "-classes",
    "-courses",
    "-course",
    "-services",
    "-training",
    "-institutes",
    "-admissions",
    "-online",
];

/// Canonical icon identifiers, keyed by every normalized spelling we accept.
/// Multi-word identifiers also get token-merged aliases so "Book Open",
/// "book_open", and "bookopen" all land on `book-open`.
static ICONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("home", "home"),
        ("house", "house"),
        ("building", "building"),
        ("building2", "building2"),
        ("globe", "globe"),
        ("globe2", "globe2"),
        ("bus", "bus"),
        ("users", "users"),
        ("graduation-cap", "graduation-cap"),
        ("graduationcap", "graduation-cap"),
        ("list", "list"),
        ("map", "map"),
        ("map-pin", "map-pin"),
        ("mappin", "map-pin"),
        ("briefcase", "briefcase"),
        ("laptop", "laptop"),
        ("smartphone", "smartphone"),
        ("shirt", "shirt"),
        ("sofa", "sofa"),
        ("car", "car"),
        ("book-open", "book-open"),
        ("bookopen", "book-open"),
        ("book-marked", "book-marked"),
        ("bookmarked", "book-marked"),
        ("monitor", "monitor"),
        ("sparkles", "sparkles"),
        ("dumbbell", "dumbbell"),
        ("languages", "languages"),
        ("music", "music"),
        ("award", "award"),
        ("school", "school"),
        ("trophy", "trophy"),
        ("brain", "brain"),
    ])
});

/// Top-level category names → icons, keyed by normalized name.
static CATEGORY_ICONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("real-estate-property", "building"),
        ("properties", "home"),
        ("education-learning", "graduation-cap"),
        ("education", "graduation-cap"),
        ("electronics-technology", "laptop"),
        ("fashion-lifestyle", "shirt"),
        ("vehicles-transportation", "car"),
        ("vehicles", "car"),
        ("services", "briefcase"),
        ("furniture-home", "sofa"),
        ("health", "sparkles"),
        ("jobs", "users"),
    ])
});

/// Subcategory names → icons, keyed by normalized name. Takes precedence
/// over [`CATEGORY_ICONS`] when both tables could match.
static SUBCATEGORY_ICONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("fashion-beauty-products", "sparkles"),
        ("jewelry-accessories", "sparkles"),
        ("saree-clothing-shopping", "shirt"),
        ("furniture-interior-decor", "sofa"),
        ("electronics-gadgets", "laptop"),
        ("phones-tablets-accessories", "smartphone"),
        ("second-hand-phones-accessories", "smartphone"),
        ("computer-mobile-laptop-repair-services", "monitor"),
        ("cyber-caf-internet-services", "globe"),
        ("telecommunication-services", "smartphone"),
        ("service-centre-warranty", "briefcase"),
        ("household-services", "house"),
        ("event-decoration-services", "sparkles"),
        ("health-wellness-services", "sparkles"),
        ("pharmacy-medical-stores", "briefcase"),
        ("tuition-private-classes", "book-open"),
        ("language-classes", "languages"),
        ("dance-karate-gym-yoga", "dumbbell"),
        ("academies-music-arts-sports", "music"),
        ("skill-training-certification", "award"),
        ("schools-colleges-coaching", "school"),
        ("educational-consultancy-study-abroad", "globe2"),
        ("e-books-online-courses", "book-marked"),
        ("cricket-sports-training", "trophy"),
        ("second-hand-cars-bikes", "car"),
        ("showrooms", "building2"),
        ("car-bike-rentals", "car"),
        ("vehicle-license-classes", "list"),
        ("transportation-moving-services", "bus"),
        ("construction-materials", "briefcase"),
        ("hostel-pg", "building"),
        ("rental-listings", "home"),
    ])
});

/// Ordered keyword-containment fallbacks, checked against the lowercased
/// name as a last resort. First match wins.
const KEYWORD_ICONS: &[(&[&str], &str)] = &[
    (&["cyber", "internet", "cafe", "café"], "globe"),
    (&["showroom"], "building2"),
    (&["hostel"], "building"),
    (&["rental", "rent"], "home"),
    (&["property", "real estate"], "building"),
    (&["phone", "mobile", "tablet"], "smartphone"),
    (&["computer", "laptop", "repair"], "monitor"),
    (&["yoga", "gym", "karate", "dance", "fitness"], "dumbbell"),
    (&["language"], "languages"),
    (&["school", "college", "coaching"], "school"),
    (&["tuition", "class"], "book-open"),
    (&["music", "arts"], "music"),
    (&["sport", "cricket"], "trophy"),
    (&["saree", "cloth", "fashion"], "shirt"),
    (&["furniture", "interior", "decor"], "sofa"),
    (&["transport", "moving"], "bus"),
    (&["car", "bike", "vehicle"], "car"),
    (&["ebook", "course"], "book-marked"),
    (&["electronic", "gadget"], "laptop"),
    (&["job", "career"], "users"),
];

/// The fields icon resolution reads. All optional; an all-empty query
/// resolves to `None` immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct IconQuery<'a> {
    pub name: Option<&'a str>,
    pub slug: Option<&'a str>,
    pub icon: Option<&'a str>,
}

impl<'a> IconQuery<'a> {
    pub fn named(name: &'a str) -> Self {
        IconQuery {
            name: Some(name),
            ..IconQuery::default()
        }
    }
}

impl<'a> From<&'a CategoryNode> for IconQuery<'a> {
    fn from(node: &'a CategoryNode) -> Self {
        IconQuery {
            name: Some(&node.name),
            slug: Some(&node.slug),
            icon: node.icon.as_deref(),
        }
    }
}

impl<'a> From<&'a SubcategoryNode> for IconQuery<'a> {
    fn from(node: &'a SubcategoryNode) -> Self {
        IconQuery {
            name: Some(&node.name),
            slug: Some(&node.slug),
            icon: node.icon.as_deref(),
        }
    }
}

impl<'a> From<&'a ResultItem> for IconQuery<'a> {
    fn from(item: &'a ResultItem) -> Self {
        IconQuery {
            name: item.name.as_deref().or(item.label.as_deref()),
            slug: item.slug.as_deref(),
            icon: item.icon.as_deref(),
        }
    }
}

/// Resolve an icon identifier for a category, subcategory, or result item.
///
/// Resolution order: the explicit `icon` field, the slug, the normalized
/// name, a suffix-stripped retry, the static subcategory and category name
/// tables, then keyword fallbacks. Returns `None` when nothing matches;
/// never panics, whatever the input.
pub fn resolve_icon(query: &IconQuery<'_>) -> Option<&'static str> {
    let icon = nonempty(query.icon);
    let slug = nonempty(query.slug);
    let name = nonempty(query.name);
    if icon.is_none() && slug.is_none() && name.is_none() {
        return None;
    }

    if let Some(found) = icon.and_then(lookup_variants) {
        return Some(found);
    }
    if let Some(found) = slug.and_then(lookup_variants) {
        return Some(found);
    }
    if let Some(found) = name.and_then(lookup_variants) {
        return Some(found);
    }

    // Suffix-stripped retry: "language-classes" → "language".
    let normalized = name.or(slug).map(normalize_name).unwrap_or_default();
    let stem = strip_suffix(&normalized);
    if let Some(stem) = stem {
        if let Some(found) = lookup_variants(stem) {
            return Some(found);
        }
    }

    for key in [Some(normalized.as_str()), stem].into_iter().flatten() {
        if let Some(found) = SUBCATEGORY_ICONS.get(key) {
            return Some(found);
        }
        if let Some(found) = CATEGORY_ICONS.get(key) {
            return Some(found);
        }
    }

    if let Some(name) = name {
        let lowered = name.to_lowercase();
        for (keywords, icon) in KEYWORD_ICONS {
            if keywords.iter().any(|kw| lowered.contains(kw)) {
                return Some(icon);
            }
        }
    }

    None
}

/// Collapse a free-text name to a lookup key: lowercase, non-alphanumeric
/// runs become a single dash, leading/trailing dashes trimmed.
pub fn normalize_name(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c.is_ascii_alphanumeric() {
            out.extend(c.to_lowercase());
        } else if !out.ends_with('-') && !out.is_empty() {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// Try one value against the icon table under all accepted spellings:
/// raw, lowercased, dash-normalized, token-merged, underscores-as-dashes.
fn lookup_variants(value: &str) -> Option<&'static str> {
    let lowered = value.to_lowercase();
    let normalized = normalize_name(value);
    let merged: String = lowered.chars().filter(char::is_ascii_alphanumeric).collect();
    let underscored = lowered.replace('_', "-");

    for key in [value, lowered.as_str(), normalized.as_str(), merged.as_str(), underscored.as_str()] {
        if let Some(found) = ICONS.get(key) {
            return Some(found);
        }
    }
    None
}

fn strip_suffix(normalized: &str) -> Option<&str> {
    STRIP_SUFFIXES
        .iter()
        .find_map(|suffix| normalized.strip_suffix(suffix))
        .filter(|stem| !stem.is_empty())
}

fn nonempty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_icon_field_wins() {
        let q = IconQuery {
            name: Some("Whatever"),
            slug: Some("whatever"),
            icon: Some("Book Open"),
        };
        assert_eq!(resolve_icon(&q), Some("book-open"));
    }

    #[test]
    fn icon_variants_all_land_on_the_canonical_id() {
        for spelling in ["graduation-cap", "Graduation Cap", "graduation_cap", "GraduationCap"] {
            let q = IconQuery {
                icon: Some(spelling),
                ..IconQuery::default()
            };
            assert_eq!(resolve_icon(&q), Some("graduation-cap"), "{spelling}");
        }
    }

    #[test]
    fn subcategory_name_resolves_via_static_table() {
        assert_eq!(
            resolve_icon(&IconQuery::named("Saree & Clothing Shopping")),
            Some("shirt")
        );
        assert_eq!(
            resolve_icon(&IconQuery::named("Dance, Karate, Gym & Yoga")),
            Some("dumbbell")
        );
    }

    #[test]
    fn suffix_stripping_recovers_the_stem() {
        // "languages-classes" is in no table; the stem "languages" is an icon id.
        assert_eq!(
            resolve_icon(&IconQuery::named("Languages Classes")),
            Some("languages")
        );
    }

    #[test]
    fn keyword_fallback_catches_freeform_names() {
        assert_eq!(
            resolve_icon(&IconQuery::named("Nepal Internet Point")),
            Some("globe")
        );
        assert_eq!(
            resolve_icon(&IconQuery::named("City Motor Showroom")),
            Some("building2")
        );
    }

    #[test]
    fn unknown_name_returns_none() {
        assert_eq!(resolve_icon(&IconQuery::named("Totally Unknown Thing")), None);
    }

    #[test]
    fn empty_query_short_circuits() {
        assert_eq!(resolve_icon(&IconQuery::default()), None);
        let blank = IconQuery {
            name: Some("   "),
            slug: Some(""),
            icon: None,
        };
        assert_eq!(resolve_icon(&blank), None);
    }

    #[test]
    fn normalize_collapses_punctuation_runs() {
        assert_eq!(
            normalize_name("Cyber Café / Internet Services"),
            "cyber-caf-internet-services"
        );
        assert_eq!(normalize_name("  E-Books & Online Courses!  "), "e-books-online-courses");
        assert_eq!(normalize_name("---"), "");
    }
}
