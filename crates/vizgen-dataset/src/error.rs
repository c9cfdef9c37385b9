use thiserror::Error;

use crate::port::PortId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    #[error("port id must not be empty")]
    EmptyPortId,
    #[error("column {0} already exists")]
    DuplicateColumn(PortId),
    #[error("unknown port {0}")]
    UnknownPort(PortId),
}

pub type Result<T> = std::result::Result<T, DatasetError>;
