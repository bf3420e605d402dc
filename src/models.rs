//! Catalog record types.
//!
//! The three fixture collections (users, categories, products) deserialize
//! straight into these structs from TOML. `EnrichedProduct` is the one derived
//! type: a product with its category and that category's owner resolved, built
//! once at startup by [`crate::core::enrich::build_catalog`].

use serde::{Deserialize, Serialize};

/// Owner sex, serialized as `"m"` / `"f"` in fixture data.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    M,
    F,
}

/// A catalog owner.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub sex: Sex,
}

/// A product category, owned by a single user.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: u32,
    pub title: String,
    /// Short emoji used as the category marker in the table.
    pub icon: String,
    pub owner_id: u32,
}

/// A catalog product, belonging to a single category.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category_id: u32,
}

/// Category data carried on an enriched row.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CategoryInfo {
    pub id: u32,
    pub title: String,
    pub icon: String,
}

/// Owner data carried on an enriched row.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct OwnerInfo {
    pub id: u32,
    pub name: String,
    pub sex: Sex,
}

/// A product with its category and owner resolved.
///
/// The enriched list is computed once from the fixtures and treated as
/// read-only for the remainder of the process; every query runs against it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct EnrichedProduct {
    pub id: u32,
    pub name: String,
    pub category: CategoryInfo,
    pub user: OwnerInfo,
}
