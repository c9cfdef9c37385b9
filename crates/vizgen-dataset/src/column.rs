use serde::{Deserialize, Serialize};

use crate::port::PortId;
use crate::value::{Value, ValueType};

/// Declared shape of one port: id, expected type, and presentation metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub id: PortId,
    #[serde(rename = "type")]
    pub value_type: ValueType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ColumnSpec {
    /// A port the consumer cannot work without.
    pub fn required(id: PortId, value_type: ValueType) -> Self {
        Self {
            id,
            value_type,
            required: true,
            title: None,
            description: None,
        }
    }

    /// A port the consumer can fall back to defaults for.
    pub fn optional(id: PortId, value_type: ValueType) -> Self {
        Self {
            id,
            value_type,
            required: false,
            title: None,
            description: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One column of a dataset: its spec plus the current cell values.
///
/// Schema-only datasets (as returned by visualizer schema hooks) carry
/// empty value vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataColumn {
    #[serde(flatten)]
    pub spec: ColumnSpec,
    #[serde(default)]
    pub values: Vec<Value>,
}

impl DataColumn {
    pub fn new(spec: ColumnSpec) -> Self {
        Self {
            spec,
            values: Vec::new(),
        }
    }

    pub fn with_values(mut self, values: Vec<Value>) -> Self {
        self.values = values;
        self
    }

    pub fn id(&self) -> &PortId {
        &self.spec.id
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
