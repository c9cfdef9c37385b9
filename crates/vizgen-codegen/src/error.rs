//! Error taxonomy for the code-generation pipeline.
//!
//! Validation and transformation failures interrupt the pipeline as typed
//! errors; they are never folded into a successful-looking result. The sole
//! exception is the JSON schema helpers on the generator, which fall back to
//! an empty string because they serve diagnostics, not interchange.

use thiserror::Error;

use vizgen_dataset::PortId;

/// The port configuration does not match the input schema, or references a
/// column absent from the supplied dataset.
///
/// Carries the schema validator's message verbatim; `Display` adds nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The transformer could not produce a result for this dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("dataset has no rows to transform")]
    EmptyDataset,
    #[error("port {0} carries no usable data")]
    MissingPort(PortId),
    #[error("{0}")]
    IncompatibleData(String),
}

/// The rendering hook failed after a successful transformation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("expected {expected} payload but transformer produced {found}")]
    UnexpectedShape {
        expected: &'static str,
        found: &'static str,
    },
    #[error("missing parameter {0}")]
    MissingParam(String),
    #[error("{0}")]
    Failed(String),
}

/// Umbrella error for [`crate::CodeGenerator::generate_code`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Transform(#[from] TransformError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type Result<T> = std::result::Result<T, GenerationError>;
