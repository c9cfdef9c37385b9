//! Tabular rendering: every cell stringified, no numeric interpretation.

use serde::Serialize;

use vizgen_codegen::{
    DataTransformer, RenderError, RenderParams, TransformError, TransformedData, Visualizer,
};
use vizgen_dataset::{ColumnSpec, Dataset, PortId, Value, ValueType};

const ITEMS_PORT: &str = "items";
const COUNTS_PORT: &str = "counts";

/// Row-major table payload. Missing cells render as empty strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Stringifies every column of the projected dataset into [`TableData`].
///
/// Column titles become headers where present, port ids otherwise. Ragged
/// columns are padded with empty cells to the tallest column's height.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableTransformer;

impl DataTransformer for TableTransformer {
    fn transform(&self, dataset: &Dataset) -> Result<TransformedData, TransformError> {
        if dataset.row_count() == 0 {
            return Err(TransformError::EmptyDataset);
        }

        let headers: Vec<String> = dataset
            .columns()
            .iter()
            .map(|column| {
                column
                    .spec
                    .title
                    .clone()
                    .unwrap_or_else(|| column.id().to_string())
            })
            .collect();

        let rows: Vec<Vec<String>> = (0..dataset.row_count())
            .map(|row| {
                dataset
                    .columns()
                    .iter()
                    .map(|column| column.values.get(row).map(Value::render).unwrap_or_default())
                    .collect()
            })
            .collect();

        Ok(TransformedData::new(TableData { headers, rows }))
    }
}

/// Plain data table over [`TableData`]; needs no library script.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataTable;

impl Visualizer for DataTable {
    fn input_schema(&self) -> Dataset {
        Dataset::from_specs(vec![
            ColumnSpec::required(PortId::from_static(ITEMS_PORT), ValueType::Text)
                .with_title("Items"),
            ColumnSpec::optional(PortId::from_static(COUNTS_PORT), ValueType::Integer)
                .with_title("Counts"),
        ])
    }

    fn render(
        &self,
        data: &TransformedData,
        params: &RenderParams,
    ) -> Result<String, RenderError> {
        let payload = data.payload::<TableData>()?;
        let payload_json =
            serde_json::to_string(payload).map_err(|e| RenderError::Failed(e.to_string()))?;
        let params_json = params.to_json();
        Ok(format!("vizgen.dataTable({payload_json}, {params_json});"))
    }
}
