//! # Inventory Ledger
//!
//! The in-memory aggregate of products, categories and movements, plus every
//! operation that mutates them.
//!
//! ## Operation Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        InventoryLedger                                  │
//! │                                                                         │
//! │  register_category ──► categories (append)                             │
//! │                                                                         │
//! │  register_product ───► products (append)                               │
//! │        │                                                                │
//! │        └── unknown category? → registered without one + warning        │
//! │                                                                         │
//! │  add_stock ──────────► product.quantity += q ──► record_movement(in)   │
//! │  remove_stock ───────► product.quantity -= q ──► record_movement(out)  │
//! │                                                                         │
//! │  record_movement ────► movements (append only)                         │
//! │                                                                         │
//! │  list_* ─────────────► snapshot copies for reporting                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Model
//! Every check runs before the first write, so a rejected operation leaves
//! all three tables exactly as they were.
//!
//! ## Usage
//! ```rust
//! use stockroom_core::{InventoryLedger, LedgerError, Money, NewProduct};
//!
//! let mut ledger = InventoryLedger::new();
//! let tablet = ledger
//!     .register_product(NewProduct::named("Tablet").quantity(20).price(Money::from_major_minor(2000, 0)))
//!     .unwrap()
//!     .id;
//!
//! ledger.add_stock(tablet, 10).unwrap();
//! assert_eq!(ledger.product(tablet).unwrap().quantity, 30);
//!
//! let err = ledger.remove_stock(tablet, 50).unwrap_err();
//! assert!(matches!(err, LedgerError::InsufficientStock { .. }));
//! ```

use chrono::Utc;
use tracing::{debug, warn};

use crate::error::{LedgerError, LedgerResult, ValidationError};
use crate::types::{
    Category, CategoryId, Movement, MovementId, MovementKind, NewProduct, Product, ProductId,
    ProductRegistration,
};
use crate::validation::{validate_initial_quantity, validate_name, validate_price, validate_quantity};

/// In-memory inventory ledger.
///
/// Owns three ordered tables. Create one per process (or per test) with
/// [`InventoryLedger::new`]. Mutation takes `&mut self`; callers sharing a
/// ledger across threads wrap it in a single `Mutex` so each public
/// operation runs as one unit.
#[derive(Debug, Clone, Default)]
pub struct InventoryLedger {
    products: Vec<Product>,
    categories: Vec<Category>,
    movements: Vec<Movement>,
}

impl InventoryLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Registers a new product.
    ///
    /// ## Rules
    /// - Blank name → `Validation`
    /// - Negative opening quantity or price → `Validation`
    /// - Name already taken (exact, case-sensitive) → `Duplicate`
    /// - Unknown category → product registered with no category; the dropped
    ///   id is reported in [`ProductRegistration::dropped_category`]
    pub fn register_product(&mut self, new: NewProduct) -> LedgerResult<ProductRegistration> {
        validate_name("product name", &new.name)?;

        if self.product_by_name(&new.name).is_some() {
            return Err(LedgerError::duplicate("Product", new.name));
        }

        validate_initial_quantity(new.quantity)?;
        validate_price(new.price)?;

        let (category_id, dropped_category) = match new.category_id {
            Some(id) if self.category(id).is_none() => {
                warn!(
                    product = %new.name,
                    category_id = %id,
                    "Category not found, registering product without a category"
                );
                (None, Some(id))
            }
            other => (other, None),
        };

        let id = ProductId::next_after(self.products.len())?;
        debug!(%id, name = %new.name, quantity = new.quantity, price = %new.price, "Product registered");

        self.products.push(Product {
            id,
            name: new.name,
            category_id,
            quantity: new.quantity,
            price: new.price,
        });

        Ok(ProductRegistration {
            id,
            dropped_category,
        })
    }

    /// Registers a new category.
    ///
    /// Only a name already taken (exact match) is rejected, with `Duplicate`.
    /// Blank names are stored as given.
    pub fn register_category(&mut self, name: impl Into<String>) -> LedgerResult<CategoryId> {
        let name = name.into();

        if self.categories.iter().any(|c| c.name == name) {
            return Err(LedgerError::duplicate("Category", name));
        }

        let id = CategoryId::next_after(self.categories.len())?;
        debug!(%id, name = %name, "Category registered");

        self.categories.push(Category { id, name });
        Ok(id)
    }

    // =========================================================================
    // Movements & Stock Adjustment
    // =========================================================================

    /// Appends a movement for an existing product.
    ///
    /// Kind and quantity are stored as given; the product's quantity is not
    /// touched. Use [`add_stock`](Self::add_stock) /
    /// [`remove_stock`](Self::remove_stock) to change stock.
    pub fn record_movement(
        &mut self,
        product_id: ProductId,
        kind: MovementKind,
        quantity: i64,
    ) -> LedgerResult<MovementId> {
        if self.product(product_id).is_none() {
            return Err(LedgerError::not_found("Product", product_id));
        }

        if quantity <= 0 {
            warn!(%product_id, %kind, quantity, "Recording movement with non-positive quantity");
        }

        self.append_movement(product_id, kind, quantity)
    }

    /// Adds `quantity` units to a product and logs an inflow movement.
    ///
    /// ## Flow
    /// ```text
    /// add_stock(1, 10)
    ///      │
    ///      ├── product 1 missing?  → NotFound
    ///      ├── 10 <= 0?            → Validation
    ///      ├── stock + 10 overflow → Validation
    ///      │
    ///      ▼
    /// stock 20 → 30, Movement { product 1, inflow, 10 }
    /// ```
    pub fn add_stock(&mut self, product_id: ProductId, quantity: i64) -> LedgerResult<MovementId> {
        let index = self.product_index(product_id)?;
        validate_quantity(quantity)?;

        let stock = self.products[index]
            .quantity
            .checked_add(quantity)
            .ok_or_else(|| ValidationError::Overflow {
                field: "quantity".to_string(),
            })?;

        let movement_id = self.append_movement(product_id, MovementKind::Inflow, quantity)?;
        self.products[index].quantity = stock;

        debug!(%product_id, added = quantity, stock, "Stock added");
        Ok(movement_id)
    }

    /// Removes `quantity` units from a product and logs an outflow movement.
    ///
    /// Fails with `InsufficientStock` (and changes nothing) when the product
    /// holds fewer than `quantity` units.
    pub fn remove_stock(&mut self, product_id: ProductId, quantity: i64) -> LedgerResult<MovementId> {
        let index = self.product_index(product_id)?;
        validate_quantity(quantity)?;

        let product = &self.products[index];
        if !product.can_remove(quantity) {
            return Err(LedgerError::InsufficientStock {
                product_id: product_id.get(),
                available: product.quantity,
                requested: quantity,
            });
        }
        let stock = product.quantity - quantity;

        let movement_id = self.append_movement(product_id, MovementKind::Outflow, quantity)?;
        self.products[index].quantity = stock;

        debug!(%product_id, removed = quantity, stock, "Stock removed");
        Ok(movement_id)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Snapshot of all products in registration order.
    pub fn list_products(&self) -> Vec<Product> {
        self.products.clone()
    }

    /// Snapshot of all categories in registration order.
    pub fn list_categories(&self) -> Vec<Category> {
        self.categories.clone()
    }

    /// Snapshot of the movement log in insertion order.
    pub fn list_movements(&self) -> Vec<Movement> {
        self.movements.clone()
    }

    /// Movements of a single product, in insertion order.
    pub fn movements_for(&self, product_id: ProductId) -> Vec<Movement> {
        self.movements
            .iter()
            .filter(|m| m.product_id == product_id)
            .cloned()
            .collect()
    }

    /// Looks up a product by id.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Looks up a product by exact name.
    pub fn product_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Looks up a category by id.
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn product_index(&self, product_id: ProductId) -> LedgerResult<usize> {
        self.products
            .iter()
            .position(|p| p.id == product_id)
            .ok_or_else(|| LedgerError::not_found("Product", product_id))
    }

    /// Appends to the log. The caller has already checked the product exists.
    ///
    /// Runs before any stock change so a failed id leaves the ledger untouched.
    fn append_movement(
        &mut self,
        product_id: ProductId,
        kind: MovementKind,
        quantity: i64,
    ) -> LedgerResult<MovementId> {
        let id = MovementId::next_after(self.movements.len())?;
        self.movements.push(Movement {
            id,
            product_id,
            kind,
            quantity,
            timestamp: Utc::now(),
        });

        debug!(%id, %product_id, %kind, quantity, "Movement recorded");
        Ok(id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
