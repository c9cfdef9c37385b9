//! The orchestrator tying schema validation, projection, transformation, and
//! rendering together.

use tracing::debug;

use vizgen_dataset::{Dataset, PortConfiguration, ValidationOutcome};

use crate::error::{GenerationError, ValidationError};
use crate::mapping::project_columns;
use crate::params::RenderParams;
use crate::transformer::DataTransformer;
use crate::visualizer::Visualizer;

/// Drives the validate -> project -> transform -> render pipeline for one
/// visualization method.
///
/// Construction resolves the visualizer's schema hooks immediately, so a
/// generator always holds a usable input schema. The pipeline itself takes
/// `&self` and operates on a per-invocation working copy of that schema;
/// one generator can serve concurrent requests when its visualizer is
/// `Send + Sync`.
pub struct CodeGenerator<V> {
    visualizer: V,
    input: Dataset,
    output: Option<Dataset>,
}

impl<V: Visualizer> CodeGenerator<V> {
    pub fn new(visualizer: V) -> Self {
        let input = visualizer.input_schema();
        let output = visualizer.output_schema();
        Self {
            visualizer,
            input,
            output,
        }
    }

    /// Check whether a port configuration satisfies the input schema.
    ///
    /// On failure the returned error carries the schema validator's message
    /// without modification.
    pub fn is_data_processable(
        &self,
        config: &PortConfiguration,
    ) -> Result<(), ValidationError> {
        match self.input.validate_configuration(config) {
            ValidationOutcome::Valid => Ok(()),
            ValidationOutcome::Invalid { message } => Err(ValidationError::new(message)),
        }
    }

    /// Run the full pipeline against an external dataset.
    ///
    /// The external dataset is never handed to the transformer directly: its
    /// columns are first projected onto a working copy of the input schema
    /// according to `config`, and the transformer sees only that copy.
    pub fn generate_code<T>(
        &self,
        dataset: &Dataset,
        config: &PortConfiguration,
        transformer: &T,
        params: &RenderParams,
    ) -> Result<String, GenerationError>
    where
        T: DataTransformer + ?Sized,
    {
        self.is_data_processable(config)?;
        debug!(mappings = config.len(), "port configuration accepted");

        let projected = project_columns(&self.input, dataset, config)?;
        let transformed = transformer.transform(&projected)?;
        debug!(shape = transformed.shape(), "data transformed");

        let code = self.visualizer.render(&transformed, params)?;
        debug!(bytes = code.len(), "visualization code generated");
        Ok(code)
    }

    /// Supporting script of the underlying visualizer, if it declares one.
    pub fn library_script(&self) -> Option<String> {
        self.visualizer.library_script()
    }

    pub fn visualizer(&self) -> &V {
        &self.visualizer
    }

    pub fn input(&self) -> &Dataset {
        &self.input
    }

    pub fn set_input(&mut self, input: Dataset) {
        self.input = input;
    }

    pub fn output(&self) -> Option<&Dataset> {
        self.output.as_ref()
    }

    pub fn set_output(&mut self, output: Dataset) {
        self.output = Some(output);
    }

    /// Input schema as JSON. Falls back to the empty string if serialization
    /// fails; this helper serves diagnostics, not interchange.
    pub fn input_as_json(&self) -> String {
        serde_json::to_string(&self.input).unwrap_or_default()
    }

    /// Output schema as JSON. The empty string when no output schema is
    /// declared or serialization fails.
    pub fn output_as_json(&self) -> String {
        self.output
            .as_ref()
            .and_then(|output| serde_json::to_string(output).ok())
            .unwrap_or_default()
    }
}
