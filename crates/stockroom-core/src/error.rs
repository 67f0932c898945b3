//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── LedgerError      - Rejected ledger operations                     │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  stockroom-report errors (separate crate)                              │
//! │  └── ReportError      - Rendering / config failures                    │
//! │                                                                         │
//! │  Flow: ValidationError → LedgerError → caller                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant is recoverable. A failed operation never leaves a partial
//! mutation behind, so callers can report the error and carry on.

use thiserror::Error;

// =============================================================================
// Ledger Error
// =============================================================================

/// Errors returned by [`InventoryLedger`](crate::ledger::InventoryLedger)
/// operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Input failed validation (empty name, non-positive quantity, ...).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A uniqueness rule was violated.
    ///
    /// ## When This Occurs
    /// - Registering a product whose name is already taken
    /// - Registering a category whose name is already taken
    #[error("{entity} '{name}' already exists")]
    Duplicate { entity: &'static str, name: String },

    /// A referenced entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: u32 },

    /// Removing more stock than the product holds.
    ///
    /// ## User Workflow
    /// ```text
    /// remove_stock(product 1, qty 50)
    ///      │
    ///      ▼
    /// Check stock: available=30
    ///      │
    ///      ▼
    /// InsufficientStock { product_id: 1, available: 30, requested: 50 }
    /// ```
    #[error("Insufficient stock for product {product_id}: available {available}, requested {requested}")]
    InsufficientStock {
        product_id: u32,
        available: i64,
        requested: i64,
    },
}

impl LedgerError {
    /// Creates a Duplicate error for the given entity kind.
    pub fn duplicate(entity: &'static str, name: impl Into<String>) -> Self {
        LedgerError::Duplicate {
            entity,
            name: name.into(),
        }
    }

    /// Creates a NotFound error for the given entity kind.
    pub fn not_found(entity: &'static str, id: impl Into<u32>) -> Self {
        LedgerError::NotFound {
            entity,
            id: id.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any table is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g. an unparsable price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Arithmetic would leave the representable range.
    #[error("{field} would overflow")]
    Overflow { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for ledger results.
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LedgerError::InsufficientStock {
            product_id: 1,
            available: 30,
            requested: 50,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for product 1: available 30, requested 50"
        );

        assert_eq!(
            LedgerError::duplicate("Product", "Tablet").to_string(),
            "Product 'Tablet' already exists"
        );
        assert_eq!(
            LedgerError::not_found("Product", 999u32).to_string(),
            "Product not found: 999"
        );
    }

    #[test]
    fn test_validation_converts_to_ledger_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(validation_err.to_string(), "name is required");

        let ledger_err: LedgerError = validation_err.into();
        assert!(matches!(ledger_err, LedgerError::Validation(_)));
    }
}
