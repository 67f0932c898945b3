//! # stockroom-report: Ledger Reports
//!
//! Prints products, categories and stock movements from an
//! [`InventoryLedger`](stockroom_core::InventoryLedger) as bordered tables
//! or JSON.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        stockroom-report                                 │
//! │                                                                         │
//! │   ReportConfig ─────────┐   (defaults → report.toml → STOCKROOM_* env) │
//! │                         ▼                                               │
//! │   snapshots ──►  ReportPrinter  ──►  TableRenderer  ──►  io::Write     │
//! │                         │             (GridRenderer)                    │
//! │                         └──────────►  serde_json    ──►  io::Write     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`printer`] - Product, category and movement reports
//! - [`renderer`] - The `TableRenderer` seam and the grid implementation
//! - [`config`] - Report configuration
//! - [`telemetry`] - Tracing subscriber setup
//! - [`error`] - Report error types

pub mod config;
pub mod error;
pub mod printer;
pub mod renderer;
pub mod telemetry;

pub use config::{ReportConfig, ReportFormat};
pub use error::{ReportError, ReportResult};
pub use printer::ReportPrinter;
pub use renderer::{Align, Column, GridRenderer, TableRenderer, TableStyle};
pub use telemetry::init_tracing;
