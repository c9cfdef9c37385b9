//! Labelled numeric series and the bar chart method built on them.
//!
//! [`SeriesTransformer`] digests a projected dataset into [`SeriesData`]
//! (one label axis plus one series per numeric port), and [`BarChart`]
//! renders that payload as a `vizgen.barChart(...)` call for the charting
//! runtime loaded via its library script.

use serde::Serialize;

use vizgen_codegen::{
    DataTransformer, RenderError, RenderParams, TransformError, TransformedData, Visualizer,
};
use vizgen_dataset::{ColumnSpec, Dataset, PortId, Value, ValueType};

const LABELS_PORT: &str = "labels";
const VALUES_PORT: &str = "values";

const CHART_LIBRARY_URL: &str =
    "https://cdn.jsdelivr.net/npm/vizgen-charts@1/dist/vizgen-charts.min.js";

/// One named run of numeric values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

/// Chart-ready payload: a label axis plus one or more numeric series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesData {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

/// Collects the `labels` port and every numeric port into [`SeriesData`].
///
/// Ports whose declared type is not numeric are skipped, as are numeric
/// ports that carry no convertible values. Fails when the dataset has no
/// rows or when no series survives the collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeriesTransformer;

impl DataTransformer for SeriesTransformer {
    fn transform(&self, dataset: &Dataset) -> Result<TransformedData, TransformError> {
        if dataset.row_count() == 0 {
            return Err(TransformError::EmptyDataset);
        }

        let labels_port = PortId::from_static(LABELS_PORT);
        let labels: Vec<String> = dataset
            .values(&labels_port)
            .map(|values| values.iter().map(Value::render).collect())
            .unwrap_or_default();

        let mut series = Vec::new();
        for column in dataset.columns() {
            if *column.id() == labels_port || !column.spec.value_type.is_numeric() {
                continue;
            }
            let values: Vec<f64> = column.values.iter().filter_map(Value::as_f64).collect();
            if values.is_empty() {
                continue;
            }
            series.push(Series {
                name: column.id().to_string(),
                values,
            });
        }

        if series.is_empty() {
            return Err(TransformError::IncompatibleData(
                "No numeric series found in mapped data".to_string(),
            ));
        }

        Ok(TransformedData::new(SeriesData { labels, series }))
    }
}

/// Bar chart over [`SeriesData`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BarChart;

impl Visualizer for BarChart {
    fn input_schema(&self) -> Dataset {
        Dataset::from_specs(vec![
            ColumnSpec::required(PortId::from_static(LABELS_PORT), ValueType::Text)
                .with_title("Category labels"),
            ColumnSpec::required(PortId::from_static(VALUES_PORT), ValueType::Float)
                .with_title("Bar heights"),
        ])
    }

    fn render(
        &self,
        data: &TransformedData,
        params: &RenderParams,
    ) -> Result<String, RenderError> {
        let payload = data.payload::<SeriesData>()?;
        let payload_json =
            serde_json::to_string(payload).map_err(|e| RenderError::Failed(e.to_string()))?;
        let params_json = params.to_json();
        Ok(format!("vizgen.barChart({payload_json}, {params_json});"))
    }

    fn library_script(&self) -> Option<String> {
        Some(format!(r#"<script src="{CHART_LIBRARY_URL}"></script>"#))
    }
}
