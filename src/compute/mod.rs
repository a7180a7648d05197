//! Compute module - Archive maintenance, SEMO search and coverage metrics.

mod archive;
mod coverage;
mod dominance;
mod field;
mod search;
mod stagnation;
mod topology;
mod trials;

#[cfg(test)]
mod test_support;

pub use archive::*;
pub use dominance::*;
pub use field::*;
pub use search::*;
pub use stagnation::*;
pub use topology::*;
pub use trials::*;
