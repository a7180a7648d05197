//! Schema module - Configuration and result types for SEMO experiments.

mod config;
mod grid;
mod outcome;

pub use config::*;
pub use grid::*;
pub use outcome::*;
