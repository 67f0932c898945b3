//! # Report Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  io::Error / toml / serde_json                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ReportError (this module) ← Adds context and categorization           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Caller decides: retry on another writer, fall back to defaults, ...   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Failures while rendering reports or handling report configuration.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Writing to the output stream failed.
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file could not be parsed.
    #[error("Failed to load config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config could not be serialized.
    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Config values are inconsistent.
    #[error("Invalid report configuration: {0}")]
    InvalidConfig(String),

    /// A row handed to a renderer does not match the column count.
    #[error("Row has {cells} cells but table has {columns} columns")]
    RaggedRow { cells: usize, columns: usize },

    /// No place to save the config to.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),
}
