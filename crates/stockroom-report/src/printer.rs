//! # Report Printer
//!
//! Builds product, category and movement reports from ledger snapshots and
//! hands them to a [`TableRenderer`] (or serializes them as JSON).
//!
//! ## Report Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ledger.list_products()  ──►  Vec<Product>                              │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │                        empty? ──► "No products registered."            │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │                          ProductRow (category name, price text)        │
//! │                                   │                                     │
//! │                 ┌─────────────────┴─────────────────┐                   │
//! │                 ▼                                   ▼                   │
//! │        format = table                       format = json              │
//! │        TableRenderer::render                serde_json::to_writer      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt::Write as _;
use std::io::Write;

use stockroom_core::{Category, CategoryId, Money, Movement, Product, ProductId};

use crate::config::{ReportConfig, ReportFormat};
use crate::error::{ReportError, ReportResult};
use crate::renderer::{Column, GridRenderer, TableRenderer};

pub const NO_PRODUCTS: &str = "No products registered.";
pub const NO_CATEGORIES: &str = "No categories registered.";
pub const NO_MOVEMENTS: &str = "No movements recorded.";

const PRODUCT_COLUMNS: [Column; 5] = [
    Column::numeric("id"),
    Column::text("name"),
    Column::text("category"),
    Column::numeric("quantity"),
    Column::numeric("price"),
];

const CATEGORY_COLUMNS: [Column; 2] = [Column::numeric("id"), Column::text("name")];

const MOVEMENT_COLUMNS: [Column; 5] = [
    Column::numeric("id"),
    Column::numeric("product_id"),
    Column::text("kind"),
    Column::numeric("quantity"),
    Column::text("timestamp"),
];

// =============================================================================
// Rows
// =============================================================================

#[derive(Serialize)]
struct ProductRow<'a> {
    id: ProductId,
    name: &'a str,
    category: Option<&'a str>,
    quantity: i64,
    #[serde(serialize_with = "as_decimal")]
    price: Money,
}

#[derive(Serialize)]
struct CategoryRow<'a> {
    id: CategoryId,
    name: &'a str,
}

fn as_decimal<S: Serializer>(amount: &Money, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(amount)
}

// =============================================================================
// Printer
// =============================================================================

/// Prints ledger reports to any writer.
///
/// ## Usage
/// ```rust
/// use stockroom_core::{InventoryLedger, NewProduct};
/// use stockroom_report::{ReportConfig, ReportPrinter};
///
/// let mut ledger = InventoryLedger::new();
/// ledger.register_product(NewProduct::named("Tablet").quantity(20)).unwrap();
///
/// let printer = ReportPrinter::from_config(ReportConfig::default());
/// let mut out = Vec::new();
/// printer
///     .print_products(&mut out, &ledger.list_products(), &ledger.list_categories())
///     .unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("Tablet"));
/// ```
#[derive(Debug, Clone)]
pub struct ReportPrinter<R = GridRenderer> {
    renderer: R,
    config: ReportConfig,
}

impl ReportPrinter<GridRenderer> {
    /// Printer using the grid renderer in the configured style.
    pub fn from_config(config: ReportConfig) -> Self {
        ReportPrinter {
            renderer: GridRenderer::new(config.style),
            config,
        }
    }
}

impl<R: TableRenderer> ReportPrinter<R> {
    /// Printer with a caller-supplied renderer.
    pub fn new(renderer: R, config: ReportConfig) -> Self {
        ReportPrinter { renderer, config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Product stock report. `categories` resolves category names.
    pub fn print_products(
        &self,
        out: &mut dyn Write,
        products: &[Product],
        categories: &[Category],
    ) -> ReportResult<()> {
        if products.is_empty() {
            writeln!(out, "{}", NO_PRODUCTS)?;
            return Ok(());
        }

        let rows: Vec<ProductRow<'_>> = products
            .iter()
            .map(|p| ProductRow {
                id: p.id,
                name: &p.name,
                category: p.category_id.and_then(|id| {
                    categories
                        .iter()
                        .find(|c| c.id == id)
                        .map(|c| c.name.as_str())
                }),
                quantity: p.quantity,
                price: p.price,
            })
            .collect();

        self.emit(out, "Product Stock Report", &PRODUCT_COLUMNS, &rows, |row| {
            Ok(vec![
                row.id.to_string(),
                row.name.to_string(),
                row.category.unwrap_or("-").to_string(),
                row.quantity.to_string(),
                self.config.format_currency(row.price),
            ])
        })
    }

    /// Category listing.
    pub fn print_categories(&self, out: &mut dyn Write, categories: &[Category]) -> ReportResult<()> {
        if categories.is_empty() {
            writeln!(out, "{}", NO_CATEGORIES)?;
            return Ok(());
        }

        let rows: Vec<CategoryRow<'_>> = categories
            .iter()
            .map(|c| CategoryRow {
                id: c.id,
                name: &c.name,
            })
            .collect();

        self.emit(out, "Categories", &CATEGORY_COLUMNS, &rows, |row| {
            Ok(vec![row.id.to_string(), row.name.to_string()])
        })
    }

    /// Movement log report.
    pub fn print_movements(&self, out: &mut dyn Write, movements: &[Movement]) -> ReportResult<()> {
        if movements.is_empty() {
            writeln!(out, "{}", NO_MOVEMENTS)?;
            return Ok(());
        }

        // Movements already serialize in report shape.
        self.emit(out, "Stock Movement Report", &MOVEMENT_COLUMNS, movements, |row| {
            Ok(vec![
                row.id.to_string(),
                row.product_id.to_string(),
                row.kind.to_string(),
                row.quantity.to_string(),
                self.format_timestamp(&row.timestamp)?,
            ])
        })
    }

    fn emit<T: Serialize>(
        &self,
        out: &mut dyn Write,
        title: &str,
        columns: &[Column],
        rows: &[T],
        cells: impl Fn(&T) -> ReportResult<Vec<String>>,
    ) -> ReportResult<()> {
        match self.config.format {
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, rows)?;
                writeln!(out)?;
            }
            ReportFormat::Table => {
                let cells = rows.iter().map(cells).collect::<ReportResult<Vec<_>>>()?;
                if self.config.show_titles {
                    writeln!(out, "\n{}:", title)?;
                }
                self.renderer.render(out, columns, &cells)?;
            }
        }
        Ok(())
    }

    /// Formats a timestamp without panicking on a bad pattern.
    fn format_timestamp(&self, timestamp: &DateTime<Utc>) -> ReportResult<String> {
        let mut text = String::new();
        write!(text, "{}", timestamp.format(&self.config.timestamp_format)).map_err(|_| {
            ReportError::InvalidConfig(format!(
                "timestamp_format '{}' is not a valid strftime pattern",
                self.config.timestamp_format
            ))
        })?;
        Ok(text)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::TableStyle;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use stockroom_core::{InventoryLedger, MovementId, MovementKind, NewProduct};

    fn print<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> ReportResult<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn ascii_printer() -> ReportPrinter {
        ReportPrinter::from_config(ReportConfig {
            style: TableStyle::Ascii,
            show_titles: false,
            ..ReportConfig::default()
        })
    }

    fn sample_ledger() -> InventoryLedger {
        let mut ledger = InventoryLedger::new();
        ledger
            .register_product(NewProduct::named("Tablet").quantity(20).price(Money::from_major_minor(2000, 0)))
            .unwrap();
        let electronics = ledger.register_category("Eletrônicos").unwrap();
        ledger
            .register_product(
                NewProduct::named("Fone de Ouvido")
                    .category(electronics)
                    .quantity(25)
                    .price(Money::from_major_minor(300, 0)),
            )
            .unwrap();
        ledger
    }

    #[test]
    fn test_empty_reports_print_distinct_messages() {
        let printer = ReportPrinter::from_config(ReportConfig::default());

        assert_eq!(print(|out| printer.print_products(out, &[], &[])), "No products registered.\n");
        assert_eq!(print(|out| printer.print_movements(out, &[])), "No movements recorded.\n");
        assert_eq!(print(|out| printer.print_categories(out, &[])), "No categories registered.\n");
    }

    #[test]
    fn test_product_report_resolves_categories() {
        let ledger = sample_ledger();
        let printer = ascii_printer();

        let output = print(|out| {
            printer.print_products(out, &ledger.list_products(), &ledger.list_categories())
        });

        let expected = "\
+----+----------------+-------------+----------+----------+
| id | name           | category    | quantity |    price |
+====+================+=============+==========+==========+
|  1 | Tablet         | -           |       20 | $2000.00 |
+----+----------------+-------------+----------+----------+
|  2 | Fone de Ouvido | Eletrônicos |       25 |  $300.00 |
+----+----------------+-------------+----------+----------+
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_product_report_tolerates_unknown_category_ids() {
        let product = Product {
            id: ProductId::new(1),
            name: "TV".to_string(),
            category_id: Some(CategoryId::new(42)),
            quantity: 10,
            price: Money::from_major_minor(5000, 0),
        };

        let output = print(|out| ascii_printer().print_products(out, &[product], &[]));
        assert!(output.contains("| -        |"));
    }

    #[test]
    fn test_titles_precede_tables() {
        let ledger = sample_ledger();
        let printer = ReportPrinter::from_config(ReportConfig::default());

        let output = print(|out| printer.print_categories(out, &ledger.list_categories()));
        assert!(output.starts_with("\nCategories:\n╒"));
        assert!(output.contains("│ Eletrônicos │"));
    }

    #[test]
    fn test_movement_report_uses_timestamp_format() {
        let movement = Movement {
            id: MovementId::new(1),
            product_id: ProductId::new(1),
            kind: MovementKind::Inflow,
            quantity: 10,
            timestamp: Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap(),
        };

        let printer = ReportPrinter::from_config(ReportConfig {
            style: TableStyle::Ascii,
            show_titles: false,
            timestamp_format: "%d/%m/%Y %H:%M".to_string(),
            ..ReportConfig::default()
        });

        let output = print(|out| printer.print_movements(out, &[movement]));
        let expected = "\
+----+------------+--------+----------+------------------+
| id | product_id | kind   | quantity | timestamp        |
+====+============+========+==========+==================+
|  1 |          1 | inflow |       10 | 09/03/2024 14:05 |
+----+------------+--------+----------+------------------+
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_invalid_timestamp_format_is_an_error_not_a_panic() {
        let mut ledger = sample_ledger();
        ledger.add_stock(ProductId::new(1), 1).unwrap();

        let printer = ReportPrinter::from_config(ReportConfig {
            timestamp_format: "%Q".to_string(),
            ..ReportConfig::default()
        });

        let mut buf = Vec::new();
        let result = printer.print_movements(&mut buf, &ledger.list_movements());
        assert!(matches!(result, Err(ReportError::InvalidConfig(_))));
    }

    #[test]
    fn test_json_report_contains_every_row() {
        let mut ledger = sample_ledger();
        ledger.add_stock(ProductId::new(1), 10).unwrap();
        ledger.remove_stock(ProductId::new(2), 5).unwrap();

        let printer = ReportPrinter::from_config(ReportConfig {
            format: ReportFormat::Json,
            ..ReportConfig::default()
        });

        let products = print(|out| {
            printer.print_products(out, &ledger.list_products(), &ledger.list_categories())
        });
        let parsed: serde_json::Value = serde_json::from_str(&products).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["name"], "Tablet");
        assert_eq!(rows[0]["quantity"], 30);
        assert_eq!(rows[0]["price"], "2000.00");
        assert_eq!(rows[0]["category"], serde_json::Value::Null);
        assert_eq!(rows[1]["category"], "Eletrônicos");

        let movements = print(|out| printer.print_movements(out, &ledger.list_movements()));
        let parsed: serde_json::Value = serde_json::from_str(&movements).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["kind"], "inflow");
        assert_eq!(rows[1]["kind"], "outflow");
        assert_eq!(rows[1]["quantity"], 5);
        assert_eq!(rows[1]["id"], 2);
        assert_eq!(rows[1]["product_id"], 2);
        assert!(rows[1]["timestamp"].is_string());
    }

    struct CountingRenderer(std::cell::Cell<usize>);

    impl TableRenderer for CountingRenderer {
        fn render(&self, _out: &mut dyn Write, columns: &[Column], rows: &[Vec<String>]) -> ReportResult<()> {
            assert_eq!(columns.len(), 5);
            self.0.set(self.0.get() + rows.len());
            Ok(())
        }
    }

    #[test]
    fn test_custom_renderer_receives_rows_and_headers() {
        let ledger = sample_ledger();
        let printer = ReportPrinter::new(CountingRenderer(std::cell::Cell::new(0)), ReportConfig::default());

        let mut sink = Vec::new();
        printer
            .print_products(&mut sink, &ledger.list_products(), &ledger.list_categories())
            .unwrap();

        assert_eq!(printer.renderer.0.get(), 2);
    }
}
