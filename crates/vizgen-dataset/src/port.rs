#![deny(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use crate::error::DatasetError;

/// Identifier of one logical column slot in a dataset schema.
///
/// Port ids are non-empty and stored trimmed. Use [`PortId::new`] for
/// externally supplied names (config files, CSV headers) and
/// [`PortId::from_static`] for literals in schema declarations.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String")]
pub struct PortId(String);

impl PortId {
    pub fn new(value: impl Into<String>) -> Result<Self, DatasetError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DatasetError::EmptyPortId);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Build a port id from a compile-time literal.
    ///
    /// # Panics
    ///
    /// Panics if the literal is empty or whitespace-only.
    pub fn from_static(value: &'static str) -> Self {
        match Self::new(value) {
            Ok(id) => id,
            Err(_) => panic!("port id literal must not be empty"),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PortId {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PortId {
    type Error = DatasetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
