//! Dataset, port configuration, and parameter loading.
//!
//! Datasets arrive either as JSON (the serialized [`Dataset`] form) or as
//! CSV, in which case headers become port ids and each column's value type
//! is inferred from its cells (integer, then float, then boolean, then text).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;

use vizgen_codegen::RenderParams;
use vizgen_dataset::{
    ColumnSpec, DataColumn, Dataset, PortConfiguration, PortId, Value, ValueType,
};

/// Load a dataset from `path`, dispatching on the file extension.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let contents =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    match extension.as_str() {
        "json" => serde_json::from_str(&contents)
            .with_context(|| format!("parse dataset: {}", path.display())),
        "csv" => dataset_from_csv(contents.as_bytes())
            .with_context(|| format!("parse dataset: {}", path.display())),
        other => bail!("unsupported dataset format '{other}' (expected .json or .csv)"),
    }
}

/// Load a port configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<PortConfiguration> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("parse port configuration: {}", path.display()))
}

/// Load rendering parameters from a JSON file.
pub fn load_params(path: &Path) -> Result<RenderParams> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("parse render parameters: {}", path.display()))
}

/// Build a column-oriented dataset from CSV text.
///
/// Headers become port ids (BOM stripped, whitespace trimmed) and cells are
/// trimmed before inference. Empty cells become [`Value::Missing`].
pub fn dataset_from_csv(bytes: &[u8]) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(bytes);
    let headers = reader.headers().context("read csv headers")?.clone();

    let mut ports = Vec::with_capacity(headers.len());
    for header in &headers {
        ports.push(PortId::new(header.trim_matches('\u{feff}'))?);
    }

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); ports.len()];
    for record in reader.records() {
        let record = record.context("read csv record")?;
        for (index, column) in cells.iter_mut().enumerate() {
            column.push(record.get(index).unwrap_or("").trim().to_string());
        }
    }

    let mut dataset = Dataset::new();
    for (port, column) in ports.into_iter().zip(cells) {
        let value_type = infer_type(&column);
        let values = column
            .iter()
            .map(|cell| parse_cell(cell, value_type))
            .collect();
        dataset.add_column(
            DataColumn::new(ColumnSpec::optional(port, value_type)).with_values(values),
        )?;
    }
    Ok(dataset)
}

/// Pick the narrowest type that fits every non-empty cell of a column.
fn infer_type(cells: &[String]) -> ValueType {
    let mut populated = cells.iter().filter(|cell| !cell.is_empty()).peekable();
    if populated.peek().is_none() {
        return ValueType::Text;
    }
    if populated.clone().all(|cell| cell.parse::<i64>().is_ok()) {
        return ValueType::Integer;
    }
    if populated.clone().all(|cell| cell.parse::<f64>().is_ok()) {
        return ValueType::Float;
    }
    if populated.all(|cell| parse_bool(cell).is_some()) {
        return ValueType::Boolean;
    }
    ValueType::Text
}

fn parse_cell(cell: &str, value_type: ValueType) -> Value {
    if cell.is_empty() {
        return Value::Missing;
    }
    match value_type {
        ValueType::Integer => cell.parse::<i64>().map_or(Value::Missing, Value::Integer),
        ValueType::Float => cell.parse::<f64>().map_or(Value::Missing, Value::Float),
        ValueType::Boolean => parse_bool(cell).map_or(Value::Missing, Value::Boolean),
        ValueType::Text | ValueType::DateTime => Value::Text(cell.to_string()),
    }
}

fn parse_bool(cell: &str) -> Option<bool> {
    if cell.eq_ignore_ascii_case("true") {
        Some(true)
    } else if cell.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column<'a>(dataset: &'a Dataset, id: &'static str) -> &'a DataColumn {
        dataset.column(&PortId::from_static(id)).unwrap()
    }

    #[test]
    fn infers_integer_float_and_text_columns() {
        let dataset = dataset_from_csv(b"id,score,label\n1,1.5,alpha\n2,2,beta\n").unwrap();

        let id = column(&dataset, "id");
        assert_eq!(id.spec.value_type, ValueType::Integer);
        assert_eq!(id.values, vec![Value::Integer(1), Value::Integer(2)]);

        let score = column(&dataset, "score");
        assert_eq!(score.spec.value_type, ValueType::Float);
        assert_eq!(score.values, vec![Value::Float(1.5), Value::Float(2.0)]);

        let label = column(&dataset, "label");
        assert_eq!(label.spec.value_type, ValueType::Text);
        assert_eq!(label.values, vec!["alpha".into(), "beta".into()]);
    }

    #[test]
    fn infers_boolean_column() {
        let dataset = dataset_from_csv(b"flag\ntrue\nFALSE\n").unwrap();
        let flag = column(&dataset, "flag");
        assert_eq!(flag.spec.value_type, ValueType::Boolean);
        assert_eq!(
            flag.values,
            vec![Value::Boolean(true), Value::Boolean(false)]
        );
    }

    #[test]
    fn empty_cells_become_missing_without_breaking_inference() {
        let dataset = dataset_from_csv(b"n\n4\n\n7\n").unwrap();
        let n = column(&dataset, "n");
        assert_eq!(n.spec.value_type, ValueType::Integer);
        assert_eq!(
            n.values,
            vec![Value::Integer(4), Value::Missing, Value::Integer(7)]
        );
    }

    #[test]
    fn all_empty_column_defaults_to_text() {
        let dataset = dataset_from_csv(b"a,b\nx,\ny,\n").unwrap();
        assert_eq!(column(&dataset, "b").spec.value_type, ValueType::Text);
        assert_eq!(
            column(&dataset, "b").values,
            vec![Value::Missing, Value::Missing]
        );
    }

    #[test]
    fn headers_are_trimmed_and_bom_stripped() {
        let dataset = dataset_from_csv("\u{feff}month, hits\njan,3\n".as_bytes()).unwrap();
        assert!(dataset.column(&PortId::from_static("month")).is_some());
        assert!(dataset.column(&PortId::from_static("hits")).is_some());
    }

    #[test]
    fn duplicate_header_is_rejected() {
        assert!(dataset_from_csv(b"a,a\n1,2\n").is_err());
    }

    #[test]
    fn mixed_numbers_widen_to_float() {
        let dataset = dataset_from_csv(b"n\n1\n2.5\n").unwrap();
        let n = column(&dataset, "n");
        assert_eq!(n.spec.value_type, ValueType::Float);
        assert_eq!(n.values, vec![Value::Float(1.0), Value::Float(2.5)]);
    }
}
