// Copyright 2026-present Jeevika Services
// SPDX-License-Identifier: Apache-2.0

//! Merging remote and local result maps.
//!
//! **Invariant**: the merge never drops a group present in either input, and
//! never mutates its inputs. For every group, remote hits come first, then
//! local hits, each side keeping its own internal order.
//!
//! No de-duplication is performed. The remote and local corpora are disjoint
//! today, so the same logical entity cannot appear on both sides; if the
//! corpora ever overlap, duplicates will render twice.

use crate::types::GroupedResults;

/// Union the groups of `remote` and `local`, concatenating per-group arrays
/// (remote first). Pure: same inputs always yield the same output.
pub fn merge(remote: &GroupedResults, local: &GroupedResults) -> GroupedResults {
    let mut merged = GroupedResults::new();
    for (group, items) in remote.groups() {
        merged.extend_group(group, items.iter().cloned());
    }
    for (group, items) in local.groups() {
        merged.extend_group(group, items.iter().cloned());
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ResultItem;

    fn item(id: &str) -> ResultItem {
        ResultItem {
            id: Some(id.to_string()),
            ..ResultItem::default()
        }
    }

    #[test]
    fn keeps_groups_from_both_sides() {
        let mut remote = GroupedResults::new();
        remote.push("properties", item("p1"));
        let mut local = GroupedResults::new();
        local.push("pages", item("page1"));

        let merged = merge(&remote, &local);
        assert_eq!(merged.group_count(), 2);
        assert_eq!(merged.get("properties").unwrap().len(), 1);
        assert_eq!(merged.get("pages").unwrap().len(), 1);
    }

    #[test]
    fn remote_items_precede_local_items_in_shared_groups() {
        let mut remote = GroupedResults::new();
        remote.push("categories", item("r1"));
        remote.push("categories", item("r2"));
        let mut local = GroupedResults::new();
        local.push("categories", item("l1"));

        let merged = merge(&remote, &local);
        let ids: Vec<_> = merged
            .get("categories")
            .unwrap()
            .iter()
            .map(|i| i.id.as_deref().unwrap())
            .collect();
        assert_eq!(ids, vec!["r1", "r2", "l1"]);
    }

    #[test]
    fn preserves_empty_groups() {
        let mut remote = GroupedResults::new();
        remote.extend_group("rentals", std::iter::empty());
        let merged = merge(&remote, &GroupedResults::new());
        assert_eq!(merged.group_count(), 1);
        assert!(merged.get("rentals").unwrap().is_empty());
    }

    #[test]
    fn does_not_mutate_inputs() {
        let mut remote = GroupedResults::new();
        remote.push("cars", item("c1"));
        let mut local = GroupedResults::new();
        local.push("cars", item("c2"));
        let before_remote = remote.clone();
        let before_local = local.clone();

        let first = merge(&remote, &local);
        let second = merge(&remote, &local);

        assert_eq!(remote, before_remote);
        assert_eq!(local, before_local);
        assert_eq!(first, second);
    }

    #[test]
    fn duplicates_are_kept_as_is() {
        let mut remote = GroupedResults::new();
        remote.push("cars", item("same"));
        let mut local = GroupedResults::new();
        local.push("cars", item("same"));

        let merged = merge(&remote, &local);
        assert_eq!(merged.get("cars").unwrap().len(), 2);
    }
}
