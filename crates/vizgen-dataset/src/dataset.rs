//! The column-oriented dataset and its configuration validation.

use serde::{Deserialize, Serialize};

use crate::column::{ColumnSpec, DataColumn};
use crate::config::PortConfiguration;
use crate::error::DatasetError;
use crate::port::PortId;
use crate::value::Value;

/// Outcome of validating a port configuration against a dataset schema.
///
/// The invalid case carries a single human-readable sentence naming the
/// offending port. Callers that surface validation failures must pass the
/// message through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ValidationOutcome {
    Valid,
    Invalid { message: String },
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid { message } => Some(message),
        }
    }
}

/// An ordered collection of typed columns addressed by port id.
///
/// Column order is preserved as inserted; ids are unique. A dataset with
/// empty value vectors doubles as a schema declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColumnList")]
pub struct Dataset {
    columns: Vec<DataColumn>,
}

/// Mirror of the wire shape. Deserialization funnels every column through
/// [`Dataset::add_column`], so serialized input obeys the same uniqueness
/// rule as direct construction.
#[derive(Deserialize)]
struct ColumnList {
    columns: Vec<DataColumn>,
}

impl TryFrom<ColumnList> for Dataset {
    type Error = DatasetError;

    fn try_from(list: ColumnList) -> Result<Self, Self::Error> {
        let mut dataset = Self::new();
        for column in list.columns {
            dataset.add_column(column)?;
        }
        Ok(dataset)
    }
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a schema from column specs. Later specs reusing an id are ignored.
    pub fn from_specs(specs: impl IntoIterator<Item = ColumnSpec>) -> Self {
        let mut dataset = Self::new();
        for spec in specs {
            let _ = dataset.add_column(DataColumn::new(spec));
        }
        dataset
    }

    pub fn add_column(&mut self, column: DataColumn) -> Result<(), DatasetError> {
        if self.column(column.id()).is_some() {
            return Err(DatasetError::DuplicateColumn(column.id().clone()));
        }
        self.columns.push(column);
        Ok(())
    }

    pub fn column(&self, port: &PortId) -> Option<&DataColumn> {
        self.columns.iter().find(|column| column.id() == port)
    }

    pub fn column_mut(&mut self, port: &PortId) -> Option<&mut DataColumn> {
        self.columns.iter_mut().find(|column| column.id() == port)
    }

    pub fn values(&self, port: &PortId) -> Option<&[Value]> {
        self.column(port).map(|column| column.values.as_slice())
    }

    /// Replace the cell values of an existing column.
    pub fn set_values(&mut self, port: &PortId, values: Vec<Value>) -> Result<(), DatasetError> {
        match self.column_mut(port) {
            Some(column) => {
                column.values = values;
                Ok(())
            }
            None => Err(DatasetError::UnknownPort(port.clone())),
        }
    }

    pub fn columns(&self) -> &[DataColumn] {
        &self.columns
    }

    pub fn ports(&self) -> impl Iterator<Item = &PortId> {
        self.columns.iter().map(DataColumn::id)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Height of the tallest column. Columns may be ragged; consumers that
    /// need rectangular data check for themselves.
    pub fn row_count(&self) -> usize {
        self.columns
            .iter()
            .map(DataColumn::len)
            .max()
            .unwrap_or(0)
    }

    /// Check a port configuration against this dataset as the input schema.
    ///
    /// Two rules: every mapping must name an input port declared here, and
    /// every required column here must be fed by at least one mapping.
    pub fn validate_configuration(&self, config: &PortConfiguration) -> ValidationOutcome {
        for mapping in &config.mappings {
            if self.column(&mapping.input_port).is_none() {
                return ValidationOutcome::Invalid {
                    message: format!("Input port {} not found in schema", mapping.input_port),
                };
            }
        }
        for column in &self.columns {
            if column.spec.required && !config.covers(column.id()) {
                return ValidationOutcome::Invalid {
                    message: format!("Required port {} has no mapping", column.id()),
                };
            }
        }
        ValidationOutcome::Valid
    }
}
