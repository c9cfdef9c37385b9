//! Built-in visualization methods.
//!
//! Each method pairs a [`Visualizer`] with the [`DataTransformer`] that
//! prepares its payload. [`create`] looks the pair up by name so an
//! application can wire a [`CodeGenerator`](vizgen_codegen::CodeGenerator)
//! without naming concrete types.

pub mod series;
pub mod table;

pub use series::{BarChart, Series, SeriesData, SeriesTransformer};
pub use table::{DataTable, TableData, TableTransformer};

use vizgen_codegen::{DataTransformer, Visualizer};

/// Names accepted by [`create`], in presentation order.
const METHOD_NAMES: &[&str] = &["bar-chart", "data-table"];

pub fn method_names() -> &'static [&'static str] {
    METHOD_NAMES
}

/// Instantiate the visualizer/transformer pair registered under `name`.
pub fn create(name: &str) -> Option<(Box<dyn Visualizer>, Box<dyn DataTransformer>)> {
    match name {
        "bar-chart" => Some((Box::new(BarChart), Box::new(SeriesTransformer))),
        "data-table" => Some((Box::new(DataTable), Box::new(TableTransformer))),
        _ => None,
    }
}
