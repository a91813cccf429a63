//! Unified search suggestion aggregation and navigation resolution.
//!
//! This crate implements the client-side search core of a classified-ads
//! marketplace: backend suggestions and locally computed matches over the
//! static navigation/category data are merged into one grouped result map,
//! and per-item display is resolved from there (navigable path, icon,
//! display name).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  remote.rs  │     │   local.rs   │     │   merge.rs  │
//! │ (/api/search│────▶│ (pages +     │────▶│ (remote ++  │
//! │  fetcher)   │     │ category tree│     │  local)     │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                                                 │
//!                     ┌──────────────┐     ┌──────▼──────┐
//!                     │   icons.rs   │◀────│  links.rs   │
//!                     │ (name → icon │     │ (group/item │
//!                     │  cascade)    │     │  → path)    │
//!                     └──────────────┘     └─────────────┘
//! ```
//!
//! Everything except the fetch in `remote.rs` is a pure function; the
//! surrounding UI owns all mutable state and recomputes the merge on every
//! render. Failures never escape: a dead backend or malformed response is
//! indistinguishable from a legitimately empty result.
//!
//! # Usage
//!
//! ```
//! use khoja::{default_pages, match_local, merge, resolve_link};
//! use khoja::types::GroupedResults;
//!
//! let local = match_local("vehic", &default_pages(), &[]);
//! let merged = merge(&GroupedResults::new(), &local);
//!
//! let pages = merged.get("pages").unwrap();
//! assert_eq!(resolve_link("pages", &pages[0]), "/vehicles");
//! ```

// Module declarations
pub mod icons;
pub mod links;
pub mod local;
pub mod merge;
pub mod nav;
pub mod remote;
pub mod types;

// Re-exports for public API
pub use icons::{resolve_icon, IconQuery, DEFAULT_ICON};
pub use links::{build_search_url, encode_component, resolve_link, UNRESOLVED};
pub use local::match_local;
pub use merge::merge;
pub use nav::default_pages;
pub use remote::{
    category_filter, category_suggestions_path, suggestions_path, SuggestClient,
    CATEGORY_SUGGESTION_LIMIT, DEFAULT_BASE_URL, SUGGESTION_LIMIT,
};
pub use types::{
    CategoryNode, GroupedResults, MatchMode, Page, RawRecord, ResultItem, ResultKind,
    SearchResponse, SearchSelection, SearchSource, SubcategoryNode,
};
