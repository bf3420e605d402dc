//! Filter state and the composite query over the enriched list.
//!
//! Three independent filter fields (owner name, category title, free-text
//! search) compose by conjunction into the visible row set. Each field holds
//! either its "All" sentinel (`None` / empty string) or one concrete value;
//! no field depends on another, so the predicates commute. The visible set is
//! recomputed eagerly on every state change, which is fine at fixture scale.

use crate::models::EnrichedProduct;

/// The three filter fields, owned by the top-level view.
///
/// `None` for `owner`/`category` and an empty `query` are the "All" sentinels:
/// a field at its sentinel admits every row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Selected owner name, exact match, case-sensitive.
    pub owner: Option<String>,
    /// Selected category title, exact match, case-sensitive.
    pub category: Option<String>,
    /// Free-text search over product names.
    pub query: String,
}

impl FilterState {
    /// Returns all three fields to their sentinels in one action.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Case-insensitive substring match of the trimmed query against a product
/// name. An empty (or all-whitespace) query matches everything.
#[must_use]
pub fn matches_search(name: &str, query: &str) -> bool {
    let needle = query.trim();
    if needle.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&needle.to_lowercase())
}

/// Exact, case-sensitive owner-name match; `None` admits every row.
#[must_use]
pub fn matches_owner(row: &EnrichedProduct, owner: Option<&str>) -> bool {
    owner.is_none_or(|name| row.user.name == name)
}

/// Exact, case-sensitive category-title match; `None` admits every row.
#[must_use]
pub fn matches_category(row: &EnrichedProduct, category: Option<&str>) -> bool {
    category.is_none_or(|title| row.category.title == title)
}

/// Applies the composite query: the conjunction of the search, owner, and
/// category predicates over the enriched list.
///
/// Row order is preserved from the enriched list (stable filter, no
/// re-sorting). With every field at its sentinel this is the identity.
#[must_use]
pub fn visible_rows<'a>(
    catalog: &'a [EnrichedProduct],
    state: &FilterState,
) -> Vec<&'a EnrichedProduct> {
    catalog
        .iter()
        .filter(|row| matches_search(&row.name, &state.query))
        .filter(|row| matches_owner(row, state.owner.as_deref()))
        .filter(|row| matches_category(row, state.category.as_deref()))
        .collect()
}

/// Distinct owner names for the filter bar, de-duplicated while preserving
/// first-occurrence order in the enriched list.
#[must_use]
pub fn owner_names(catalog: &[EnrichedProduct]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for row in catalog {
        if !names.contains(&row.user.name) {
            names.push(row.user.name.clone());
        }
    }
    names
}
