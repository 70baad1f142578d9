//! Error types for inventory reconciliation.

use thiserror::Error;
use zbxvault_api::ApiError;

/// Result type for inventory operations.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Errors that can occur while reconciling host inventory.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// API failure.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Reference table could not be read or parsed.
    #[error("reference table error: {0}")]
    Table(#[from] csv::Error),

    /// No reference row matches the host's tag values.
    #[error("no reference row for group {group:?}, customer {customer:?}")]
    NoReferenceRow { group: String, customer: String },

    /// Inventory field serialization failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
