//! Plugin contract for visualization code generation.
//!
//! A visualization method is a [`Visualizer`] (schema hooks plus a rendering
//! hook) paired with a [`DataTransformer`] (column data in, an opaque
//! [`TransformedData`] payload out). The [`CodeGenerator`] orchestrates one
//! method: it validates an externally supplied port configuration against the
//! visualizer's input schema, projects the external dataset's columns onto a
//! working copy of that schema, runs the transformer on the copy, and hands
//! the result to the rendering hook, which emits a client-side code string.
//!
//! ```
//! use vizgen_codegen::{
//!     CodeGenerator, DataTransformer, RenderError, RenderParams, TransformError,
//!     TransformedData, Visualizer,
//! };
//! use vizgen_dataset::{ColumnSpec, Dataset, PortConfiguration, PortId, ValueType};
//!
//! struct Sum;
//!
//! impl DataTransformer for Sum {
//!     fn transform(&self, dataset: &Dataset) -> Result<TransformedData, TransformError> {
//!         let values = dataset
//!             .values(&PortId::from_static("val"))
//!             .ok_or(TransformError::MissingPort(PortId::from_static("val")))?;
//!         let total: i64 = values.iter().filter_map(|v| v.as_i64()).sum();
//!         Ok(TransformedData::new(total))
//!     }
//! }
//!
//! struct Chart;
//!
//! impl Visualizer for Chart {
//!     fn input_schema(&self) -> Dataset {
//!         Dataset::from_specs(vec![ColumnSpec::required(
//!             PortId::from_static("val"),
//!             ValueType::Integer,
//!         )])
//!     }
//!
//!     fn render(
//!         &self,
//!         data: &TransformedData,
//!         _params: &RenderParams,
//!     ) -> Result<String, RenderError> {
//!         Ok(format!("chart({})", data.payload::<i64>()?))
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut external = Dataset::from_specs(vec![ColumnSpec::optional(
//!     PortId::from_static("A"),
//!     ValueType::Integer,
//! )]);
//! external.set_values(&PortId::from_static("A"), vec![1_i64.into(), 2_i64.into()])?;
//!
//! let generator = CodeGenerator::new(Chart);
//! let config = PortConfiguration::from_pairs([("val", "A")])?;
//! let code = generator.generate_code(&external, &config, &Sum, &RenderParams::new())?;
//! assert_eq!(code, "chart(3)");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod generator;
pub mod mapping;
pub mod params;
pub mod transformed;
pub mod transformer;
pub mod visualizer;

pub use error::{GenerationError, RenderError, Result, TransformError, ValidationError};
pub use generator::CodeGenerator;
pub use mapping::project_columns;
pub use params::RenderParams;
pub use transformed::TransformedData;
pub use transformer::DataTransformer;
pub use visualizer::Visualizer;
