//! Column-oriented dataset model with typed ports.
//!
//! A [`Dataset`] is an ordered set of columns, each addressed by a [`PortId`]
//! and carrying a declared [`ValueType`] plus dynamically typed cells. Port
//! configurations declare how a producer's output columns feed a consumer's
//! input ports; [`Dataset::validate_configuration`] checks one against a
//! schema before any data moves.

pub mod column;
pub mod config;
pub mod dataset;
pub mod error;
pub mod port;
pub mod value;

pub use column::{ColumnSpec, DataColumn};
pub use config::{PortConfiguration, PortMapping};
pub use dataset::{Dataset, ValidationOutcome};
pub use error::{DatasetError, Result};
pub use port::PortId;
pub use value::{Value, ValueType};
