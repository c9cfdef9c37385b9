//! Port configurations: how an external dataset's columns feed a consumer's ports.

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;
use crate::port::PortId;

/// A declared correspondence between a consumer input port and a producer
/// output port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortMapping {
    pub input_port: PortId,
    pub output_port: PortId,
}

impl PortMapping {
    pub fn new(input_port: PortId, output_port: PortId) -> Self {
        Self {
            input_port,
            output_port,
        }
    }
}

/// Ordered list of port mappings.
///
/// Order is significant: mappings are applied first to last, and a later
/// mapping onto an already-filled input port overwrites the earlier one.
/// Duplicates are not rejected here; avoiding them is the caller's call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortConfiguration {
    pub mappings: Vec<PortMapping>,
}

impl PortConfiguration {
    pub fn new(mappings: Vec<PortMapping>) -> Self {
        Self { mappings }
    }

    /// Build a configuration from `(input_port, output_port)` name pairs.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, DatasetError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut mappings = Vec::new();
        for (input, output) in pairs {
            mappings.push(PortMapping::new(PortId::new(input)?, PortId::new(output)?));
        }
        Ok(Self { mappings })
    }

    pub fn push(&mut self, mapping: PortMapping) {
        self.mappings.push(mapping);
    }

    /// Returns true if any mapping feeds the given input port.
    pub fn covers(&self, input_port: &PortId) -> bool {
        self.mappings
            .iter()
            .any(|mapping| &mapping.input_port == input_port)
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}
