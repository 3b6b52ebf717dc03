//! Crowding distance
//!
//! Per-realization diversity metric: the sum over objectives of the local
//! neighbor-gap width, with a large boundary bonus protecting the extremes
//! of each objective from a diversity-based cut.

use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::DataError;
use crate::objective::direction::Direction;
use crate::table::realization::RealizationTable;
use crate::table::series::RowSeries;

/// Compute crowding distances over a realization table
///
/// For each objective independently, rows are sorted by value descending
/// (the metric measures gaps, not goodness, so direction is irrelevant);
/// the first and last row in sort order receive `boundary_bonus`, every
/// interior row receives the gap between its sort neighbors,
/// `value(previous) - value(next)`. Contributions are summed across
/// objectives, un-normalized: objectives are assumed pre-scaled to
/// comparable ranges by the caller.
///
/// A single row collects the bonus for both ends of the sort. A registered
/// objective missing from the table fails with
/// [`DataError::MissingColumn`].
pub fn crowding_distances(
    objectives: &[(String, Direction)],
    table: &RealizationTable,
    boundary_bonus: f64,
) -> Result<RowSeries<f64>, DataError> {
    let columns: Vec<Vec<f64>> = objectives
        .iter()
        .map(|(name, _)| table.column_values(name))
        .collect::<Result<_, _>>()?;

    let contributions = objective_contributions(&columns, boundary_bonus);

    // summed in objective order, so the parallel path matches the
    // sequential one exactly
    let mut distances = vec![0.0f64; table.len()];
    for contribution in &contributions {
        for (total, gap) in distances.iter_mut().zip(contribution) {
            *total += gap;
        }
    }

    Ok(table
        .row_ids()
        .iter()
        .zip(&distances)
        .map(|(id, &distance)| (id.clone(), distance))
        .collect())
}

#[cfg(not(feature = "parallel"))]
fn objective_contributions(columns: &[Vec<f64>], boundary_bonus: f64) -> Vec<Vec<f64>> {
    columns
        .iter()
        .map(|values| objective_contribution(values, boundary_bonus))
        .collect()
}

#[cfg(feature = "parallel")]
fn objective_contributions(columns: &[Vec<f64>], boundary_bonus: f64) -> Vec<Vec<f64>> {
    columns
        .par_iter()
        .map(|values| objective_contribution(values, boundary_bonus))
        .collect()
}

fn objective_contribution(values: &[f64], boundary_bonus: f64) -> Vec<f64> {
    let n = values.len();
    let mut contribution = vec![0.0f64; n];
    if n == 0 {
        return contribution;
    }

    // stable descending sort keeps tied rows in table order
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| values[b].partial_cmp(&values[a]).unwrap_or(Ordering::Equal));

    contribution[order[0]] += boundary_bonus;
    contribution[order[n - 1]] += boundary_bonus;

    for k in 1..n.saturating_sub(1) {
        contribution[order[k]] += values[order[k - 1]] - values[order[k + 1]];
    }

    contribution
}
