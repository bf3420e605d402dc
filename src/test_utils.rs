//! Shared test utilities for `catalog-browser`.
//!
//! This module provides common helper functions for building fixture
//! collections and catalog records with sensible defaults.

use crate::config::fixtures::Fixtures;
use crate::models::{Category, Product, Sex, User};

/// Creates a test user.
pub fn create_test_user(id: u32, name: &str, sex: Sex) -> User {
    User {
        id,
        name: name.to_string(),
        sex,
    }
}

/// Creates a test category with the given icon and owner.
pub fn create_test_category(id: u32, title: &str, icon: &str, owner_id: u32) -> Category {
    Category {
        id,
        title: title.to_string(),
        icon: icon.to_string(),
        owner_id,
    }
}

/// Creates a test product in the given category.
pub fn create_test_product(id: u32, name: &str, category_id: u32) -> Product {
    Product {
        id,
        name: name.to_string(),
        category_id,
    }
}

/// The minimal two-of-everything fixture set used across the filter and
/// enrichment tests:
///
/// * users: Roma (m), Anna (f)
/// * categories: Grocery owned by Roma, Electronics owned by Anna
/// * products: Apple in Grocery, Phone in Electronics
pub fn sample_fixtures() -> Fixtures {
    Fixtures {
        users: vec![
            create_test_user(1, "Roma", Sex::M),
            create_test_user(2, "Anna", Sex::F),
        ],
        categories: vec![
            create_test_category(1, "Grocery", "🍞", 1),
            create_test_category(2, "Electronics", "💻", 2),
        ],
        products: vec![
            create_test_product(1, "Apple", 1),
            create_test_product(2, "Phone", 2),
        ],
    }
}
