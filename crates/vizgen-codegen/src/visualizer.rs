use vizgen_dataset::Dataset;

use crate::error::RenderError;
use crate::params::RenderParams;
use crate::transformed::TransformedData;

/// The plugin contract a visualization method implements.
///
/// `input_schema` and `render` are required; `output_schema` and
/// `library_script` are optional capabilities with no-op defaults. Schema
/// hooks are pure: they describe the port layout and are invoked once, when
/// a [`crate::CodeGenerator`] is constructed.
pub trait Visualizer {
    /// The port/column layout this visualizer consumes. Columns carry no
    /// rows; they declare ids, types, and which ports are required.
    fn input_schema(&self) -> Dataset;

    /// Schema of data this visualizer emits, for methods that track one.
    fn output_schema(&self) -> Option<Dataset> {
        None
    }

    /// Produce the client-side visualization code for transformed data.
    fn render(&self, data: &TransformedData, params: &RenderParams)
    -> Result<String, RenderError>;

    /// Supporting script the generated code depends on, if any.
    fn library_script(&self) -> Option<String> {
        None
    }
}

impl<V: Visualizer + ?Sized> Visualizer for Box<V> {
    fn input_schema(&self) -> Dataset {
        (**self).input_schema()
    }

    fn output_schema(&self) -> Option<Dataset> {
        (**self).output_schema()
    }

    fn render(
        &self,
        data: &TransformedData,
        params: &RenderParams,
    ) -> Result<String, RenderError> {
        (**self).render(data, params)
    }

    fn library_script(&self) -> Option<String> {
        (**self).library_script()
    }
}
