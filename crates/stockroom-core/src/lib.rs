//! # stockroom-core: Inventory Ledger
//!
//! Products, categories and stock movements held in memory, together with
//! the rules that keep the three tables consistent.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Caller (service, job, test)                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  ledger   │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │ Inventory │  │   rules   │  │   │
//! │  │   │ Movement  │  │           │  │  Ledger   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • NO OUTPUT FORMATTING               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ snapshots (Vec<Product>, ...)          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              stockroom-report (table rendering)                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`ledger`] - The `InventoryLedger` and its operations
//! - [`types`] - Domain types (Product, Category, Movement, ids)
//! - [`money`] - Integer-cents money type for prices
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{InventoryLedger, Money, NewProduct};
//!
//! let mut ledger = InventoryLedger::new();
//! let electronics = ledger.register_category("Eletrônicos").unwrap();
//! let headphones = ledger
//!     .register_product(
//!         NewProduct::named("Fone de Ouvido")
//!             .category(electronics)
//!             .quantity(25)
//!             .price("300.00".parse::<Money>().unwrap()),
//!     )
//!     .unwrap();
//!
//! ledger.remove_stock(headphones.id, 5).unwrap();
//! assert_eq!(ledger.list_movements().len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod ledger;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{LedgerError, LedgerResult, ValidationError};
pub use ledger::InventoryLedger;
pub use money::Money;
pub use types::*;
