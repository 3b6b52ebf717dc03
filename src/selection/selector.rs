//! Pareto selector
//!
//! The per-generation entry point: holds a registry reference and exposes
//! feasibility, dominance and crowding-distance evaluation over the
//! current population's tables.

use std::cmp::Ordering;

use crate::error::DataError;
use crate::objective::registry::ObjectiveRegistry;
use crate::selection::crowding::crowding_distances;
use crate::selection::dominance::{fast_non_dominated_sort, ParetoFronts};
use crate::selection::feasibility::evaluate_feasibility;
use crate::table::realization::RealizationTable;
use crate::table::series::RowSeries;

/// Selection operations over a classified objective registry
///
/// All operations are pure: they never mutate the registry or the supplied
/// tables, and repeated calls on the same inputs return identical results.
#[derive(Debug, Clone)]
pub struct ParetoSelector<'a> {
    registry: &'a ObjectiveRegistry,
    boundary_bonus: f64,
}

impl<'a> ParetoSelector<'a> {
    /// Default crowding bonus for boundary realizations, several orders of
    /// magnitude beyond any realistic objective range
    pub const DEFAULT_BOUNDARY_BONUS: f64 = 1.0e30;

    /// Create a selector over a registry
    pub fn new(registry: &'a ObjectiveRegistry) -> Self {
        Self {
            registry,
            boundary_bonus: Self::DEFAULT_BOUNDARY_BONUS,
        }
    }

    /// Override the boundary bonus
    pub fn with_boundary_bonus(mut self, boundary_bonus: f64) -> Self {
        self.boundary_bonus = boundary_bonus;
        self
    }

    /// The registry this selector evaluates against
    pub fn registry(&self) -> &ObjectiveRegistry {
        self.registry
    }

    /// The configured boundary bonus
    pub fn boundary_bonus(&self) -> f64 {
        self.boundary_bonus
    }

    /// Flag each realization as feasible or not
    ///
    /// See [`evaluate_feasibility`] for the contract.
    pub fn is_feasible(
        &self,
        obs_table: &RealizationTable,
        par_table: &RealizationTable,
    ) -> Result<RowSeries<bool>, DataError> {
        evaluate_feasibility(self.registry, obs_table, par_table)
    }

    /// Partition realizations into dominance fronts
    ///
    /// Uses the observation-objective map only. See
    /// [`fast_non_dominated_sort`] for the contract.
    pub fn is_dominated(&self, obs_table: &RealizationTable) -> Result<ParetoFronts, DataError> {
        fast_non_dominated_sort(self.registry.observation_objectives(), obs_table)
    }

    /// Compute per-realization crowding distances
    ///
    /// See [`crowding_distances`] for the contract.
    pub fn crowd_distance(&self, obs_table: &RealizationTable) -> Result<RowSeries<f64>, DataError> {
        crowding_distances(
            self.registry.observation_objectives(),
            obs_table,
            self.boundary_bonus,
        )
    }
}

/// Environmental-selection order for two ranked realizations
///
/// `Less` means the first realization is preferred: ascending rank, ties
/// broken by descending crowding distance. The driver can sort a
/// generation's (rank, distance) pairs with this to fill the next
/// population.
pub fn crowded_compare(
    rank_a: usize,
    distance_a: f64,
    rank_b: usize,
    distance_b: f64,
) -> Ordering {
    rank_a
        .cmp(&rank_b)
        .then_with(|| distance_b.partial_cmp(&distance_a).unwrap_or(Ordering::Equal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::spec::ObjectiveSpec;
    use crate::problem::catalog::{ProblemDef, ResponseCatalog, ResponseDef};

    fn test_registry() -> ObjectiveRegistry {
        let observations: ResponseCatalog = [
            ("obs1", ResponseDef::new("obs", 0.0)),
            ("obs2", ResponseDef::new("obs", 0.0)),
        ]
        .into_iter()
        .collect();
        let problem = ProblemDef::new(observations, ResponseCatalog::new());
        let spec: ObjectiveSpec = [("obs1", "max"), ("obs2", "min")].into_iter().collect();
        ObjectiveRegistry::classify(&problem, &spec).unwrap()
    }

    #[test]
    fn test_default_boundary_bonus() {
        let registry = test_registry();
        let selector = ParetoSelector::new(&registry);
        assert_eq!(selector.boundary_bonus(), 1.0e30);
    }

    #[test]
    fn test_with_boundary_bonus() {
        let registry = test_registry();
        let selector = ParetoSelector::new(&registry).with_boundary_bonus(1.0e6);
        assert_eq!(selector.boundary_bonus(), 1.0e6);
    }

    #[test]
    fn test_crowded_compare_rank_first() {
        assert_eq!(crowded_compare(0, 1.0, 1, 9.0), Ordering::Less);
        assert_eq!(crowded_compare(2, 9.0, 1, 1.0), Ordering::Greater);
    }

    #[test]
    fn test_crowded_compare_distance_breaks_ties() {
        assert_eq!(crowded_compare(0, 5.0, 0, 2.0), Ordering::Less);
        assert_eq!(crowded_compare(0, 2.0, 0, 5.0), Ordering::Greater);
        assert_eq!(crowded_compare(0, 3.0, 0, 3.0), Ordering::Equal);
    }
}
