//! CLI library components for the visualization code generator.

pub mod load;
pub mod logging;
