//! Fixture catalog loading from TOML
//!
//! This module loads the three fixture collections (users, categories,
//! products) from a TOML file. The file path is taken from the
//! `CATALOG_FIXTURES` environment variable, falling back to `fixtures.toml`
//! in the working directory, falling back to a fixture set compiled into the
//! binary so the browser runs out of the box.

use crate::errors::{Error, Result};
use crate::models::{Category, Product, User};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Default fixture file looked up when `CATALOG_FIXTURES` is not set.
const DEFAULT_FIXTURE_PATH: &str = "fixtures.toml";

/// Fixture set compiled into the binary.
const EMBEDDED_FIXTURES: &str = include_str!("../../fixtures.toml");

/// The three fixture collections, as deserialized from a fixture file.
///
/// Collections are immutable for the process lifetime; referential integrity
/// between them is checked by [`crate::core::enrich::build_catalog`], not here.
#[derive(Debug, Deserialize, Clone)]
pub struct Fixtures {
    /// Catalog owners
    pub users: Vec<User>,
    /// Product categories, each owned by one user
    pub categories: Vec<Category>,
    /// The products themselves
    pub products: Vec<Product>,
}

/// Loads fixture collections from a TOML file.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_fixtures<P: AsRef<Path>>(path: P) -> Result<Fixtures> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read fixture file: {e}"),
    })?;

    parse_fixtures(&contents)
}

/// Parses fixture collections from a TOML string.
///
/// # Errors
/// Returns an error if the TOML syntax is invalid or required fields are
/// missing.
pub fn parse_fixtures(contents: &str) -> Result<Fixtures> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse fixtures: {e}"),
    })
}

/// Resolves and loads the fixture set for this run.
///
/// Resolution order: the `CATALOG_FIXTURES` environment variable (an
/// unreadable explicit path is an error), then `fixtures.toml` next to the
/// binary, then the compiled-in default set.
///
/// # Errors
/// Returns an error if an explicitly configured path cannot be loaded, or if
/// the selected fixture file fails to parse.
pub fn resolve_fixtures() -> Result<Fixtures> {
    if let Ok(path) = std::env::var("CATALOG_FIXTURES") {
        info!("Loading fixtures from CATALOG_FIXTURES={path}");
        return load_fixtures(&path);
    }

    if Path::new(DEFAULT_FIXTURE_PATH).exists() {
        info!("Loading fixtures from {DEFAULT_FIXTURE_PATH}");
        return load_fixtures(DEFAULT_FIXTURE_PATH);
    }

    info!("No fixture file found, using embedded fixtures");
    parse_fixtures(EMBEDDED_FIXTURES)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::models::Sex;

    #[test]
    fn test_parse_fixtures() {
        let toml_str = r#"
            [[users]]
            id = 1
            name = "Roma"
            sex = "m"

            [[users]]
            id = 2
            name = "Anna"
            sex = "f"

            [[categories]]
            id = 1
            title = "Grocery"
            icon = "🍞"
            owner_id = 2

            [[products]]
            id = 1
            name = "Bread"
            category_id = 1
        "#;

        let fixtures = parse_fixtures(toml_str).unwrap();
        assert_eq!(fixtures.users.len(), 2);
        assert_eq!(fixtures.users[0].name, "Roma");
        assert_eq!(fixtures.users[0].sex, Sex::M);
        assert_eq!(fixtures.users[1].sex, Sex::F);

        assert_eq!(fixtures.categories.len(), 1);
        assert_eq!(fixtures.categories[0].title, "Grocery");
        assert_eq!(fixtures.categories[0].icon, "🍞");
        assert_eq!(fixtures.categories[0].owner_id, 2);

        assert_eq!(fixtures.products.len(), 1);
        assert_eq!(fixtures.products[0].category_id, 1);
    }

    #[test]
    fn test_parse_fixtures_rejects_bad_sex_value() {
        let toml_str = r#"
            [[users]]
            id = 1
            name = "Roma"
            sex = "x"

            [[categories]]
            id = 1
            title = "Grocery"
            icon = "🍞"
            owner_id = 1

            [[products]]
            id = 1
            name = "Bread"
            category_id = 1
        "#;

        let result = parse_fixtures(toml_str);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }

    #[test]
    fn test_embedded_fixtures_parse() {
        let fixtures = parse_fixtures(EMBEDDED_FIXTURES).unwrap();
        assert!(!fixtures.users.is_empty());
        assert!(!fixtures.categories.is_empty());
        assert!(!fixtures.products.is_empty());
    }

    #[test]
    fn test_load_fixtures_missing_file_is_config_error() {
        let result = load_fixtures("no/such/fixtures.toml");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }
}
