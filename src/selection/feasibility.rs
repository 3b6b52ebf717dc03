//! Feasibility evaluation
//!
//! Evaluates every derived one-sided constraint against the per-generation
//! tables and flags each realization as feasible or not.

use crate::error::DataError;
use crate::objective::registry::{Constraint, ObjectiveRegistry};
use crate::table::realization::RealizationTable;
use crate::table::series::RowSeries;

/// Evaluate all derived constraints for every realization
///
/// The result covers `obs_table`'s rows in table order. Observation-space
/// constraints read `obs_table`; prior-information constraints read
/// `par_table` at the same row identifiers (the tables are row-aligned
/// projections of the same realizations). A realization is feasible iff it
/// satisfies every applicable constraint; with no applicable constraints it
/// is feasible by definition. A constraint whose column is absent, or whose
/// row is absent from `par_table`, fails the call with [`DataError`] rather
/// than being skipped.
pub fn evaluate_feasibility(
    registry: &ObjectiveRegistry,
    obs_table: &RealizationTable,
    par_table: &RealizationTable,
) -> Result<RowSeries<bool>, DataError> {
    let mut feasible = vec![true; obs_table.len()];

    apply_observation_constraints(registry.observation_less_than(), obs_table, &mut feasible, le)?;
    apply_observation_constraints(
        registry.observation_greater_than(),
        obs_table,
        &mut feasible,
        ge,
    )?;
    apply_prior_constraints(
        registry.prior_less_than(),
        obs_table.row_ids(),
        par_table,
        &mut feasible,
        le,
    )?;
    apply_prior_constraints(
        registry.prior_greater_than(),
        obs_table.row_ids(),
        par_table,
        &mut feasible,
        ge,
    )?;

    Ok(obs_table
        .row_ids()
        .iter()
        .zip(&feasible)
        .map(|(id, &flag)| (id.clone(), flag))
        .collect())
}

fn apply_observation_constraints(
    constraints: &[Constraint],
    table: &RealizationTable,
    feasible: &mut [bool],
    satisfies: fn(f64, f64) -> bool,
) -> Result<(), DataError> {
    for constraint in constraints {
        let values = table.column_values(&constraint.name)?;
        for (flag, value) in feasible.iter_mut().zip(&values) {
            *flag &= satisfies(*value, constraint.threshold);
        }
    }
    Ok(())
}

fn apply_prior_constraints(
    constraints: &[Constraint],
    rows: &[String],
    table: &RealizationTable,
    feasible: &mut [bool],
    satisfies: fn(f64, f64) -> bool,
) -> Result<(), DataError> {
    for constraint in constraints {
        for (row, flag) in rows.iter().zip(feasible.iter_mut()) {
            *flag &= satisfies(table.value(row, &constraint.name)?, constraint.threshold);
        }
    }
    Ok(())
}

// NaN satisfies neither inequality.
fn le(value: f64, threshold: f64) -> bool {
    value <= threshold
}

fn ge(value: f64, threshold: f64) -> bool {
    value >= threshold
}
