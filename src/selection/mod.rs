//! Pareto selection
//!
//! This module provides feasibility evaluation, non-dominated sorting and
//! crowding-distance computation over realization tables.

pub mod crowding;
pub mod dominance;
pub mod feasibility;
pub mod selector;

pub mod prelude {
    pub use super::crowding::*;
    pub use super::dominance::*;
    pub use super::feasibility::*;
    pub use super::selector::*;
}
