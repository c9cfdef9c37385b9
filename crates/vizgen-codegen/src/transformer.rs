use vizgen_dataset::Dataset;

use crate::error::TransformError;
use crate::transformed::TransformedData;

/// Pluggable strategy converting schema-shaped column data into a
/// visualizer-specific intermediate form.
///
/// The dataset a transformer receives has already been projected onto the
/// visualizer's own port layout; implementations read columns by the port
/// ids of the input schema, never by the external producer's names.
///
/// A transformer either returns a populated [`TransformedData`] or fails
/// with a [`TransformError`]. There is no silent-empty result: a dataset
/// that cannot be transformed is an error, not an empty success.
pub trait DataTransformer {
    fn transform(&self, dataset: &Dataset) -> Result<TransformedData, TransformError>;
}

impl<T: DataTransformer + ?Sized> DataTransformer for Box<T> {
    fn transform(&self, dataset: &Dataset) -> Result<TransformedData, TransformError> {
        (**self).transform(dataset)
    }
}
