//! # Domain Types
//!
//! The rows of the ledger's three tables and their identifiers.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Category     │   │    Movement     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name (unique)  │   │  name (unique)  │   │  product_id(FK) │       │
//! │  │  category_id?───┼──►│                 │   │  kind           │       │
//! │  │  quantity >= 0  │   └─────────────────┘   │  quantity       │       │
//! │  │  price >= 0     │◄────────────────────────┤  timestamp      │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Identifiers are sequential, starting at 1, and never reused.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Identifiers
// =============================================================================

macro_rules! sequential_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Wraps a raw identifier.
            #[inline]
            pub const fn new(raw: u32) -> Self {
                $name(raw)
            }

            /// Returns the raw identifier.
            #[inline]
            pub const fn get(&self) -> u32 {
                self.0
            }

            /// Identifier for the row appended after `len` existing rows.
            ///
            /// Fails with `Overflow` once the table outgrows `u32`.
            pub(crate) fn next_after(len: usize) -> Result<Self, ValidationError> {
                u32::try_from(len)
                    .ok()
                    .and_then(|n| n.checked_add(1))
                    .map($name)
                    .ok_or_else(|| ValidationError::Overflow {
                        field: stringify!($name).to_string(),
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> u32 {
                id.0
            }
        }
    };
}

sequential_id!(
    /// Product identifier.
    ProductId
);

sequential_id!(
    /// Category identifier.
    CategoryId
);

sequential_id!(
    /// Movement identifier.
    MovementId
);

// =============================================================================
// Product
// =============================================================================

/// A product tracked by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    /// Display name, unique across products (case-sensitive).
    pub name: String,

    /// Category reference, cleared when registration named an unknown one.
    pub category_id: Option<CategoryId>,

    /// Units on hand. Never negative.
    pub quantity: i64,

    /// Unit price. Never negative.
    pub price: Money,
}

impl Product {
    /// Checks whether `requested` units can be taken out.
    pub fn can_remove(&self, requested: i64) -> bool {
        self.quantity >= requested
    }
}

// =============================================================================
// Category
// =============================================================================

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

// =============================================================================
// Movement Kind
// =============================================================================

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    /// Stock coming in.
    Inflow,
    /// Stock going out.
    Outflow,
}

impl MovementKind {
    /// Returns the lowercase name used in reports.
    pub const fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Inflow => "inflow",
            MovementKind::Outflow => "outflow",
        }
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovementKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inflow" | "in" | "entrada" => Ok(MovementKind::Inflow),
            "outflow" | "out" | "saida" | "saída" => Ok(MovementKind::Outflow),
            other => Err(ValidationError::InvalidFormat {
                field: "kind".to_string(),
                reason: format!("unknown movement kind '{}', expected inflow or outflow", other),
            }),
        }
    }
}

// =============================================================================
// Movement
// =============================================================================

/// An immutable record of a single stock change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    pub id: MovementId,
    pub product_id: ProductId,
    pub kind: MovementKind,
    pub quantity: i64,
    pub timestamp: DateTime<Utc>,
}

// =============================================================================
// Registration Input / Outcome
// =============================================================================

/// Arguments for [`InventoryLedger::register_product`](crate::ledger::InventoryLedger::register_product).
///
/// Category, quantity and price are optional and default to none, zero and
/// zero.
///
/// ## Example
/// ```rust
/// use stockroom_core::{Money, NewProduct};
///
/// let tablet = NewProduct::named("Tablet")
///     .quantity(20)
///     .price(Money::from_major_minor(2000, 0));
/// assert_eq!(tablet.quantity, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub category_id: Option<CategoryId>,
    pub quantity: i64,
    pub price: Money,
}

impl NewProduct {
    /// Starts a registration with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        NewProduct {
            name: name.into(),
            category_id: None,
            quantity: 0,
            price: Money::zero(),
        }
    }

    /// Sets the category reference.
    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Sets the opening quantity.
    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the unit price.
    pub fn price(mut self, price: Money) -> Self {
        self.price = price;
        self
    }
}

/// Outcome of a successful product registration.
///
/// `dropped_category` carries the soft-fail warning: the caller asked for a
/// category that does not exist, and the product was registered without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductRegistration {
    pub id: ProductId,
    pub dropped_category: Option<CategoryId>,
}

impl ProductRegistration {
    /// True when the requested category was unknown and got cleared.
    pub fn has_warning(&self) -> bool {
        self.dropped_category.is_some()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        assert_eq!(ProductId::next_after(0).unwrap(), ProductId::new(1));
        assert_eq!(MovementId::next_after(4).unwrap().get(), 5);
        assert_eq!(CategoryId::new(7).to_string(), "7");
        assert_eq!(u32::from(ProductId::new(3)), 3);
    }

    #[test]
    fn test_next_id_overflow_is_an_error() {
        assert_eq!(
            CategoryId::next_after(u32::MAX as usize - 1).unwrap(),
            CategoryId::new(u32::MAX)
        );
        assert_eq!(
            CategoryId::next_after(u32::MAX as usize).unwrap_err(),
            ValidationError::Overflow {
                field: "CategoryId".to_string()
            }
        );
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_next_id_rejects_lengths_beyond_u32() {
        assert!(MovementId::next_after(u32::MAX as usize + 5).is_err());
    }

    #[test]
    fn test_movement_kind_parsing() {
        assert_eq!("inflow".parse::<MovementKind>().unwrap(), MovementKind::Inflow);
        assert_eq!("Entrada".parse::<MovementKind>().unwrap(), MovementKind::Inflow);
        assert_eq!("outflow".parse::<MovementKind>().unwrap(), MovementKind::Outflow);
        assert_eq!("saida".parse::<MovementKind>().unwrap(), MovementKind::Outflow);
        assert!("sideways".parse::<MovementKind>().is_err());
    }

    #[test]
    fn test_movement_kind_serializes_lowercase() {
        let json = serde_json::to_string(&MovementKind::Outflow).unwrap();
        assert_eq!(json, "\"outflow\"");
        assert_eq!(MovementKind::Inflow.to_string(), "inflow");
    }

    #[test]
    fn test_new_product_defaults() {
        let product = NewProduct::named("TV");
        assert_eq!(product.category_id, None);
        assert_eq!(product.quantity, 0);
        assert_eq!(product.price, Money::zero());

        let product = product.category(CategoryId::new(1)).quantity(10);
        assert_eq!(product.category_id, Some(CategoryId::new(1)));
        assert_eq!(product.quantity, 10);
    }

    #[test]
    fn test_can_remove() {
        let product = Product {
            id: ProductId::new(1),
            name: "Tablet".to_string(),
            category_id: None,
            quantity: 30,
            price: Money::zero(),
        };
        assert!(product.can_remove(30));
        assert!(!product.can_remove(50));
    }
}
