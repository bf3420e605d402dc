/// Fixture catalog loading from TOML
pub mod fixtures;
