use std::any::{Any, type_name};
use std::fmt;

use crate::error::RenderError;

/// Single-slot container for the output of a transformation stage.
///
/// The payload is opaque to the pipeline; only the rendering hook knows its
/// concrete type and recovers it with a checked downcast. The container is
/// created fresh per transformation and treated as read-only afterwards.
pub struct TransformedData {
    payload: Box<dyn Any + Send + Sync>,
    shape: &'static str,
}

impl TransformedData {
    pub fn new<T: Any + Send + Sync>(payload: T) -> Self {
        Self {
            payload: Box::new(payload),
            shape: type_name::<T>(),
        }
    }

    /// Type name of the payload, for diagnostics on failed downcasts.
    pub fn shape(&self) -> &'static str {
        self.shape
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref()
    }

    /// Checked view of the payload for rendering hooks; a mismatched type
    /// yields [`RenderError::UnexpectedShape`] naming both shapes.
    pub fn payload<T: Any>(&self) -> Result<&T, RenderError> {
        self.downcast_ref().ok_or(RenderError::UnexpectedShape {
            expected: type_name::<T>(),
            found: self.shape,
        })
    }
}

impl fmt::Debug for TransformedData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformedData")
            .field("shape", &self.shape)
            .finish_non_exhaustive()
    }
}
