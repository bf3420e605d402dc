//! Join stage - Builds the denormalized product view.
//!
//! This module resolves each product's category and that category's owning
//! user, producing the enriched list every query runs against. Lookups go
//! through id-keyed maps built once from the fixture collections, and any
//! dangling reference or duplicate id fails the whole build: the fixture set
//! either fully resolves or the program refuses to proceed.

use crate::{
    config::fixtures::Fixtures,
    errors::{Error, Result},
    models::{Category, CategoryInfo, EnrichedProduct, OwnerInfo, User},
};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Builds an id-keyed index over a fixture collection, rejecting duplicates.
fn index_users(users: &[User]) -> Result<HashMap<u32, &User>> {
    let mut index = HashMap::with_capacity(users.len());
    for user in users {
        if index.insert(user.id, user).is_some() {
            return Err(Error::DuplicateId {
                collection: "user",
                id: user.id,
            });
        }
    }
    Ok(index)
}

fn index_categories(categories: &[Category]) -> Result<HashMap<u32, &Category>> {
    let mut index = HashMap::with_capacity(categories.len());
    for category in categories {
        if index.insert(category.id, category).is_some() {
            return Err(Error::DuplicateId {
                collection: "category",
                id: category.id,
            });
        }
    }
    Ok(index)
}

/// Builds the enriched product list from the fixture collections.
///
/// The result is an order-preserving map over the product collection:
/// `output[i]` corresponds to `input.products[i]`. The function is pure and
/// deterministic; re-running it over the same fixtures yields an identical
/// list.
///
/// # Errors
/// Returns an error if:
/// - A product references a category id with no matching category
/// - A category references an owner id with no matching user
/// - Any collection contains a duplicate id
pub fn build_catalog(fixtures: &Fixtures) -> Result<Vec<EnrichedProduct>> {
    let users = index_users(&fixtures.users)?;
    let categories = index_categories(&fixtures.categories)?;

    let mut seen_products = HashSet::with_capacity(fixtures.products.len());
    let mut catalog = Vec::with_capacity(fixtures.products.len());

    for product in &fixtures.products {
        if !seen_products.insert(product.id) {
            return Err(Error::DuplicateId {
                collection: "product",
                id: product.id,
            });
        }

        let category =
            categories
                .get(&product.category_id)
                .ok_or(Error::UnknownCategory {
                    product_id: product.id,
                    category_id: product.category_id,
                })?;

        let owner = users.get(&category.owner_id).ok_or(Error::UnknownOwner {
            category_id: category.id,
            owner_id: category.owner_id,
        })?;

        catalog.push(EnrichedProduct {
            id: product.id,
            name: product.name.clone(),
            category: CategoryInfo {
                id: category.id,
                title: category.title.clone(),
                icon: category.icon.clone(),
            },
            user: OwnerInfo {
                id: owner.id,
                name: owner.name.clone(),
                sex: owner.sex,
            },
        });
    }

    debug!(
        "Enriched {} products against {} categories and {} users",
        catalog.len(),
        fixtures.categories.len(),
        fixtures.users.len()
    );

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::models::Sex;
    use crate::test_utils::{
        create_test_category, create_test_product, create_test_user, sample_fixtures,
    };

    #[test]
    fn test_build_catalog_preserves_product_order() {
        let fixtures = sample_fixtures();
        let catalog = build_catalog(&fixtures).unwrap();

        assert_eq!(catalog.len(), fixtures.products.len());
        for (row, product) in catalog.iter().zip(&fixtures.products) {
            assert_eq!(row.id, product.id);
            assert_eq!(row.name, product.name);
        }
    }

    #[test]
    fn test_build_catalog_resolves_category_and_owner() {
        let fixtures = sample_fixtures();
        let catalog = build_catalog(&fixtures).unwrap();

        let apple = &catalog[0];
        assert_eq!(apple.name, "Apple");
        assert_eq!(apple.category.title, "Grocery");
        assert_eq!(apple.category.icon, "🍞");
        assert_eq!(apple.user.name, "Roma");
        assert_eq!(apple.user.sex, Sex::M);

        let phone = &catalog[1];
        assert_eq!(phone.name, "Phone");
        assert_eq!(phone.category.title, "Electronics");
        assert_eq!(phone.user.name, "Anna");
        assert_eq!(phone.user.sex, Sex::F);
    }

    #[test]
    fn test_build_catalog_is_idempotent() {
        let fixtures = sample_fixtures();
        let first = build_catalog(&fixtures).unwrap();
        let second = build_catalog(&fixtures).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_catalog_fails_on_unknown_category() {
        let mut fixtures = sample_fixtures();
        fixtures.products.push(create_test_product(99, "Orphan", 42));

        let result = build_catalog(&fixtures);
        assert!(matches!(
            result.unwrap_err(),
            Error::UnknownCategory {
                product_id: 99,
                category_id: 42,
            }
        ));
    }

    #[test]
    fn test_build_catalog_fails_on_unknown_owner() {
        let mut fixtures = sample_fixtures();
        fixtures
            .categories
            .push(create_test_category(7, "Ghost", "👻", 42));
        fixtures.products.push(create_test_product(99, "Orphan", 7));

        let result = build_catalog(&fixtures);
        assert!(matches!(
            result.unwrap_err(),
            Error::UnknownOwner {
                category_id: 7,
                owner_id: 42,
            }
        ));
    }

    #[test]
    fn test_build_catalog_fails_on_duplicate_user_id() {
        let mut fixtures = sample_fixtures();
        fixtures.users.push(create_test_user(1, "Roma Again", Sex::M));

        let result = build_catalog(&fixtures);
        assert!(matches!(
            result.unwrap_err(),
            Error::DuplicateId {
                collection: "user",
                id: 1,
            }
        ));
    }

    #[test]
    fn test_build_catalog_fails_on_duplicate_product_id() {
        let mut fixtures = sample_fixtures();
        let duplicate = fixtures.products[0].clone();
        fixtures.products.push(duplicate);

        let result = build_catalog(&fixtures);
        assert!(matches!(
            result.unwrap_err(),
            Error::DuplicateId {
                collection: "product",
                id: 1,
            }
        ));
    }

    #[test]
    fn test_build_catalog_empty_products_is_empty_catalog() {
        let mut fixtures = sample_fixtures();
        fixtures.products.clear();

        let catalog = build_catalog(&fixtures).unwrap();
        assert!(catalog.is_empty());
    }
}
