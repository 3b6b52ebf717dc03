//! # pareto-select
//!
//! Objective classification and Pareto selection for ensemble-based
//! multi-objective model calibration.
//!
//! Given a population of candidate parameter sets and their simulated
//! responses, this crate classifies response quantities as objectives or
//! one-sided inequality constraints, flags each candidate's feasibility,
//! partitions candidates into dominance fronts and computes crowding
//! distances for diversity-preserving selection. The surrounding
//! evolutionary-algorithm driver (population generation, distributed run
//! dispatch, iteration control) is an external collaborator that supplies
//! the per-generation tables and consumes the results.
//!
//! ## Core Concepts
//!
//! - **Objective registry**: maps response-quantity names to max/min
//!   directions and derives constraints from group-name markers
//! - **Realization tables**: row-aligned observation-space and
//!   parameter-space projections of the same candidate realizations
//! - **Selection results**: feasibility flags, dominance fronts and
//!   crowding distances, row-aligned to the input table
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pareto_select::prelude::*;
//!
//! let problem = ProblemDef::new(observations, prior_info);
//! let spec: ObjectiveSpec = [("obs1", "max"), ("obs2", "min")].into_iter().collect();
//! let registry = ObjectiveRegistry::classify(&problem, &spec)?;
//!
//! let selector = ParetoSelector::new(&registry);
//! let feasible = selector.is_feasible(&obs_table, &par_table)?;
//! let fronts = selector.is_dominated(&obs_table)?;
//! let distances = selector.crowd_distance(&obs_table)?;
//! ```

pub mod error;
pub mod objective;
pub mod problem;
pub mod selection;
pub mod table;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::*;
    pub use crate::objective::prelude::*;
    pub use crate::problem::prelude::*;
    pub use crate::selection::prelude::*;
    pub use crate::table::prelude::*;
}
