//! Tabular inputs and row-aligned results
//!
//! This module provides the realization table supplied by the simulation
//! layer and the row-aligned series returned by selection operations.

pub mod realization;
pub mod series;

pub mod prelude {
    pub use super::realization::*;
    pub use super::series::*;
}
