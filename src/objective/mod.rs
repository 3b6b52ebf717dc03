//! Objective classification
//!
//! This module provides the objective registry: direction parsing, the
//! user-supplied objective specification, and constraint tagging.

pub mod direction;
pub mod registry;
pub mod spec;

pub mod prelude {
    pub use super::direction::*;
    pub use super::registry::*;
    pub use super::spec::*;
}
