//! Error types for the caffcheck_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for caffcheck_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog validation error
    #[error("Catalog validation error: {0}")]
    CatalogValidation(String),

    /// Limit policy validation error
    #[error("Limit policy error: {0}")]
    Policy(String),

    /// Age or weight is non-positive or non-finite
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    /// A consumption entry references an item absent from the catalog
    #[error("Unknown item id {item_id}: not present in the catalog")]
    UnknownItem { item_id: u32 },

    /// A consumption entry carries a non-positive quantity
    #[error("Invalid quantity {quantity} for item id {item_id}: must be at least 1")]
    InvalidQuantity { item_id: u32, quantity: u32 },
}
