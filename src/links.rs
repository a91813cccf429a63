// Copyright 2026-present Jeevika Services
// SPDX-License-Identifier: Apache-2.0

//! Navigation resolution: turning a result group and item into a path.
//!
//! Known groups have hand-written routes. Anything else falls back to the
//! generic `/<category-label>/<id>` pattern, and when even the `id` is
//! missing the resolver returns the `"#"` sentinel, a non-navigating
//! placeholder. There is no error path here.

use std::collections::HashMap;
use std::sync::LazyLock;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::types::{MatchMode, ResultItem};

/// Non-navigating placeholder returned when no path can be derived.
pub const UNRESOLVED: &str = "#";

/// Characters left intact by JavaScript's `encodeURIComponent`; paths built
/// here must match what the original client produced byte for byte.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Source key → human-readable category label, used by the generic
/// `/<label>/<id>` fallback route.
static GROUP_LABELS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("fashion", "Fashion & Beauty Products"),
        ("jewelry", "Jewelry & Accessories"),
        ("sareeClothing", "Saree & Clothing Shopping"),
        ("furniture", "Furniture & Interior Decor"),
        ("electronics", "Electronics & Gadgets"),
        ("phones", "Phones, Tablets & Accessories"),
        ("secondHandPhones", "Second Hand Phones & Accessories"),
        ("computerRepair", "Computer, Mobile & Laptop Repair Services"),
        ("cyberCafe", "Cyber Café / Internet Services"),
        ("telecommunication", "Telecommunication Services"),
        ("serviceCentre", "Service Centre / Warranty"),
        ("household", "Household Services"),
        ("eventDecoration", "Event & Decoration Services"),
        ("healthWellness", "Health & Wellness Services"),
        ("pharmacy", "Pharmacy & Medical Stores"),
        ("tuition", "Tuition & Private Classes"),
        ("languageClasses", "Language Classes"),
        ("dance", "Dance, Karate, Gym & Yoga"),
        ("academies", "Academies - Music, Arts, Sports"),
        ("skillTraining", "Skill Training & Certification"),
        ("schools", "Schools, Colleges & Coaching"),
        ("educationalConsultancy", "Educational Consultancy & Study Abroad"),
        ("ebooks", "E-Books & Online Courses"),
        ("cricketTraining", "Cricket & Sports Training"),
        ("secondHandCars", "Second Hand Cars & Bikes"),
        ("showrooms", "Showrooms"),
        ("carBikeRentals", "Car & Bike Rentals"),
        ("vehicleLicense", "Vehicle License Classes"),
        ("transportation", "Transportation & Moving Services"),
        ("constructionMaterials", "Construction Materials"),
        ("hostelPg", "Hostel & PG"),
        ("rentalListings", "Rental Listings"),
    ])
});

/// Encode a single path or query component, `encodeURIComponent`-style.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Resolve the navigable path for a result item within a group.
///
/// Link fields come from the item's `raw` row when one is present, else from
/// the item itself. Total: every input maps to a path or to [`UNRESOLVED`].
pub fn resolve_link(group: &str, item: &ResultItem) -> String {
    let record = LinkRecord::of(item);

    match group {
        "properties" => record.id_route("/properties"),
        "rentals" => record.id_route("/properties/rent"),
        "propertyDeals" => record.id_route("/properties/deal"),
        "commercialProperties" => record.id_route("/properties/commercial"),
        "officeSpaces" => record.id_route("/properties/office"),
        "cars" => record.id_route("/vehicles"),
        "articles" => record.id_route("/articles"),
        "users" => record.id_route("/profile"),
        "blogPosts" => record.slug_route("/blog"),
        "categories" => record.slug_route("/category"),
        "subcategories" => record.slug_route("/subcategory"),
        "pages" => item
            .href
            .clone()
            .unwrap_or_else(|| UNRESOLVED.to_string()),
        _ => match record.id {
            Some(id) => {
                let label = GROUP_LABELS
                    .get(group)
                    .copied()
                    .or(record.category_label)
                    .unwrap_or(group);
                format!("/{}/{}", encode_component(label), id)
            }
            None => UNRESOLVED.to_string(),
        },
    }
}

/// Build the consumer-facing search URL for a query, mode, and source list:
/// `/search?q=<enc>&mode=<all|or>&sources=<enc-list>`.
///
/// The `sources` parameter is the comma-joined key list encoded as one
/// component; it is omitted when no sources are selected.
pub fn build_search_url<S: AsRef<str>>(query: &str, mode: MatchMode, sources: &[S]) -> String {
    let mut url = format!(
        "/search?q={}&mode={}",
        encode_component(query),
        mode.as_url_param()
    );
    if !sources.is_empty() {
        let joined = sources
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join(",");
        url.push_str("&sources=");
        url.push_str(&encode_component(&joined));
    }
    url
}

/// The fields link resolution reads, after the `raw || item` selection.
struct LinkRecord<'a> {
    id: Option<&'a str>,
    slug: Option<&'a str>,
    category_label: Option<&'a str>,
}

impl<'a> LinkRecord<'a> {
    fn of(item: &'a ResultItem) -> Self {
        match &item.raw {
            Some(raw) => LinkRecord {
                id: raw.id.as_deref(),
                slug: raw.slug.as_deref(),
                category_label: raw
                    .category
                    .as_deref()
                    .or(raw.category_name.as_deref())
                    .or(raw.subcategory.as_deref())
                    .or(raw.subcategory_name.as_deref()),
            },
            None => LinkRecord {
                id: item.id.as_deref(),
                slug: item.slug.as_deref(),
                category_label: None,
            },
        }
    }

    /// `<prefix>/<id>`, or the sentinel when the id is missing.
    fn id_route(&self, prefix: &str) -> String {
        match self.id {
            Some(id) => format!("{prefix}/{id}"),
            None => UNRESOLVED.to_string(),
        }
    }

    /// `<prefix>/<slug>`, falling back to the id, then the sentinel.
    fn slug_route(&self, prefix: &str) -> String {
        match self.slug.or(self.id) {
            Some(tail) => format!("{prefix}/{tail}"),
            None => UNRESOLVED.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawRecord;

    fn with_id(id: &str) -> ResultItem {
        ResultItem {
            id: Some(id.to_string()),
            ..ResultItem::default()
        }
    }

    #[test]
    fn fixed_routes_use_the_hand_written_paths() {
        assert_eq!(resolve_link("cars", &with_id("abc123")), "/vehicles/abc123");
        assert_eq!(
            resolve_link("rentals", &with_id("r1")),
            "/properties/rent/r1"
        );
        assert_eq!(resolve_link("users", &with_id("u9")), "/profile/u9");
    }

    #[test]
    fn slug_routes_prefer_slug_over_id() {
        let item = ResultItem {
            id: Some("42".into()),
            slug: Some("market-outlook".into()),
            ..ResultItem::default()
        };
        assert_eq!(resolve_link("blogPosts", &item), "/blog/market-outlook");
        assert_eq!(resolve_link("blogPosts", &with_id("42")), "/blog/42");
    }

    #[test]
    fn raw_record_takes_precedence_over_item_fields() {
        let item = ResultItem {
            id: Some("outer".into()),
            raw: Some(RawRecord {
                id: Some("inner".into()),
                ..RawRecord::default()
            }),
            ..ResultItem::default()
        };
        assert_eq!(resolve_link("properties", &item), "/properties/inner");
    }

    #[test]
    fn unknown_group_with_label_entry_encodes_the_label() {
        assert_eq!(
            resolve_link("cricketTraining", &with_id("1")),
            "/Cricket%20%26%20Sports%20Training/1"
        );
        assert_eq!(
            resolve_link("cyberCafe", &with_id("7")),
            "/Cyber%20Caf%C3%A9%20%2F%20Internet%20Services/7"
        );
    }

    #[test]
    fn unknown_group_without_label_uses_the_group_name() {
        assert_eq!(resolve_link("unknownGroup", &with_id("x9")), "/unknownGroup/x9");
    }

    #[test]
    fn unknown_group_prefers_record_category_over_group_name() {
        let item = ResultItem {
            raw: Some(RawRecord {
                id: Some("5".into()),
                category_name: Some("Local Crafts".into()),
                ..RawRecord::default()
            }),
            ..ResultItem::default()
        };
        assert_eq!(resolve_link("crafts", &item), "/Local%20Crafts/5");
    }

    #[test]
    fn missing_id_yields_the_sentinel() {
        assert_eq!(resolve_link("unknownGroup", &ResultItem::default()), "#");
        assert_eq!(resolve_link("properties", &ResultItem::default()), "#");
    }

    #[test]
    fn page_items_navigate_via_their_own_href() {
        let item = ResultItem {
            href: Some("/vehicles".into()),
            ..ResultItem::default()
        };
        assert_eq!(resolve_link("pages", &item), "/vehicles");
        assert_eq!(resolve_link("pages", &ResultItem::default()), "#");
    }

    #[test]
    fn search_url_encodes_query_and_sources() {
        let url = build_search_url(
            "flat in kathmandu",
            MatchMode::Any,
            &["properties", "rentalListings"],
        );
        assert_eq!(
            url,
            "/search?q=flat%20in%20kathmandu&mode=or&sources=properties%2CrentalListings"
        );
    }

    #[test]
    fn search_url_omits_sources_when_empty() {
        let url = build_search_url("yoga", MatchMode::All, &[] as &[&str]);
        assert_eq!(url, "/search?q=yoga&mode=all");
    }
}
