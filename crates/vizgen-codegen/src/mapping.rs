//! Column projection: moving data from a producer's ports onto a consumer's.

use tracing::{debug, warn};

use vizgen_dataset::{Dataset, PortConfiguration};

use crate::error::ValidationError;

/// Copy column data from `source` onto a working copy of `schema`.
///
/// Mappings are applied in list order: the values at each mapping's output
/// port in `source` replace the values of the copy's column at the mapping's
/// input port. A later mapping onto an already-filled input port overwrites
/// the earlier copy, so with duplicate input ports the last mapping wins.
/// Values are copied verbatim; no type coercion happens here. Values that
/// do not fit the target port's declared type are still copied, with one
/// warning logged per affected mapping.
///
/// `schema` itself is never touched, which keeps concurrent projections from
/// the same schema race-free.
pub fn project_columns(
    schema: &Dataset,
    source: &Dataset,
    config: &PortConfiguration,
) -> Result<Dataset, ValidationError> {
    let mut projected = schema.clone();
    for mapping in &config.mappings {
        let Some(values) = source.values(&mapping.output_port) else {
            return Err(ValidationError::new(format!(
                "Output port {} not found in supplied dataset",
                mapping.output_port
            )));
        };
        debug!(
            input_port = %mapping.input_port,
            output_port = %mapping.output_port,
            rows = values.len(),
            "projecting column"
        );
        if let Some(column) = projected.column(&mapping.input_port) {
            let declared = column.spec.value_type;
            let mismatched = values
                .iter()
                .filter(|value| !declared.accepts(value))
                .count();
            if mismatched > 0 {
                warn!(
                    input_port = %mapping.input_port,
                    declared = %declared,
                    mismatched,
                    "copied values do not fit the declared port type"
                );
            }
        }
        if projected
            .set_values(&mapping.input_port, values.to_vec())
            .is_err()
        {
            return Err(ValidationError::new(format!(
                "Input port {} not found in schema",
                mapping.input_port
            )));
        }
    }
    Ok(projected)
}
