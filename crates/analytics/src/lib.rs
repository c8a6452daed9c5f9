//! `salesgrid-analytics`: sales log analytics engine.
//!
//! Pure engine crate: parses CSV text into a dataset, derives the unoffered
//! products matrix and the seller effectiveness / coverage tables, and formats
//! them for display. No filesystem or CLI dependencies.

pub mod config;
pub mod coverage;
pub mod effectiveness;
pub mod engine;
pub mod error;
pub mod format;
pub mod loader;
pub mod model;
pub mod seller;
pub mod table;
pub mod unoffered;

pub use config::AnalyzerConfig;
pub use engine::{run, ReportSet};
pub use error::{AnalyticsError, AnalyticsResult};
pub use format::{format_table, TextGrid};
pub use loader::load_csv_dataset;
pub use model::{Dataset, OfferRecord};
pub use table::{Cell, Column, ColumnKind, ReportTable};
