//! `salesgrid-io`: file IO around the analytics engine: decoding sales logs
//! from disk and writing formatted reports.

pub mod error;
pub mod export;
pub mod input;

pub use error::IoError;
pub use export::{create_results_dir, export_grids, render_text, ExportFormat};
pub use input::{read_sales_log, SalesLog};
