use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("product {product_id} references unknown category {category_id}")]
    UnknownCategory { product_id: u32, category_id: u32 },

    #[error("category {category_id} references unknown owner {owner_id}")]
    UnknownOwner { category_id: u32, owner_id: u32 },

    #[error("duplicate {collection} id {id} in fixture data")]
    DuplicateId { collection: &'static str, id: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
