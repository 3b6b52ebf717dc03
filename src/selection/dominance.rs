//! Non-dominated sorting
//!
//! Implements fast non-dominated sorting over the registered observation
//! objectives, with direction-adjusted comparison.
//!
//! Reference: Deb, K., Pratap, A., Agarwal, S., & Meyarivan, T. (2002).
//! A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II.
//! IEEE Transactions on Evolutionary Computation, 6(2).

use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::DataError;
use crate::objective::direction::Direction;
use crate::table::realization::RealizationTable;
use crate::table::series::RowSeries;

/// Partition of realizations into dominance fronts
///
/// Rank 0 is the non-dominated set; rank r holds the realizations dominated
/// only by rows of rank < r. Every input row appears in exactly one front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParetoFronts {
    ranks: RowSeries<usize>,
    fronts: Vec<Vec<String>>,
}

impl ParetoFronts {
    /// Rank of a realization, if present
    pub fn rank_of(&self, row: &str) -> Option<usize> {
        self.ranks.get(row).copied()
    }

    /// Per-realization ranks in table row order
    pub fn ranks(&self) -> &RowSeries<usize> {
        &self.ranks
    }

    /// Fronts in ascending rank order
    pub fn fronts(&self) -> &[Vec<String>] {
        &self.fronts
    }

    /// Realizations of one front
    pub fn front(&self, rank: usize) -> Option<&[String]> {
        self.fronts.get(rank).map(Vec::as_slice)
    }

    /// Number of fronts
    pub fn num_fronts(&self) -> usize {
        self.fronts.len()
    }

    /// Check whether a realization is dominated by any other (rank > 0)
    pub fn is_dominated(&self, row: &str) -> Option<bool> {
        self.rank_of(row).map(|rank| rank > 0)
    }

    /// Number of realizations across all fronts
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Check if the partition is empty
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

/// Check if objective vector `a` dominates `b`
///
/// `a` dominates `b` iff it is no worse on every objective and strictly
/// better on at least one, with per-objective goodness direction. Identical
/// vectors do not dominate each other.
pub fn dominates(a: &[f64], b: &[f64], directions: &[Direction]) -> bool {
    let mut strictly_better = false;
    for ((&va, &vb), &direction) in a.iter().zip(b).zip(directions) {
        if !direction.no_worse(va, vb) {
            return false;
        }
        if direction.better(va, vb) {
            strictly_better = true;
        }
    }
    strictly_better
}

/// Fast non-dominated sort over a realization table
///
/// Peels fronts by repeatedly removing the currently non-dominated rows.
/// With zero registered objectives nothing dominates anything and every row
/// lands in rank 0. A registered objective missing from the table's columns
/// fails with [`DataError::MissingColumn`]. O(n²·m) in rows and objectives.
pub fn fast_non_dominated_sort(
    objectives: &[(String, Direction)],
    table: &RealizationTable,
) -> Result<ParetoFronts, DataError> {
    let n = table.len();
    let directions: Vec<Direction> = objectives.iter().map(|(_, d)| *d).collect();
    let columns: Vec<Vec<f64>> = objectives
        .iter()
        .map(|(name, _)| table.column_values(name))
        .collect::<Result<_, _>>()?;

    let points: Vec<Vec<f64>> = (0..n)
        .map(|row| columns.iter().map(|column| column[row]).collect())
        .collect();

    // dominated[i] = rows that i dominates
    let dominated = dominated_sets(&points, &directions);

    let mut domination_count = vec![0usize; n];
    for set in &dominated {
        for &j in set {
            domination_count[j] += 1;
        }
    }

    let mut ranks = vec![0usize; n];
    let mut fronts: Vec<Vec<usize>> = Vec::new();
    let mut current: Vec<usize> = (0..n).filter(|&i| domination_count[i] == 0).collect();
    let mut rank = 0;
    while !current.is_empty() {
        for &i in &current {
            ranks[i] = rank;
        }

        let mut next = Vec::new();
        for &i in &current {
            for &j in &dominated[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    next.push(j);
                }
            }
        }

        fronts.push(current);
        current = next;
        rank += 1;
    }

    let ids = table.row_ids();
    let rank_series: RowSeries<usize> = ids
        .iter()
        .zip(&ranks)
        .map(|(id, &rank)| (id.clone(), rank))
        .collect();
    let front_ids: Vec<Vec<String>> = fronts
        .into_iter()
        .map(|front| front.into_iter().map(|i| ids[i].clone()).collect())
        .collect();

    Ok(ParetoFronts {
        ranks: rank_series,
        fronts: front_ids,
    })
}

#[cfg(not(feature = "parallel"))]
fn dominated_sets(points: &[Vec<f64>], directions: &[Direction]) -> Vec<Vec<usize>> {
    (0..points.len())
        .map(|i| dominated_rows(i, points, directions))
        .collect()
}

// Row-pair comparisons are independent; per-row sets collect in row order,
// so the result is identical to the sequential path.
#[cfg(feature = "parallel")]
fn dominated_sets(points: &[Vec<f64>], directions: &[Direction]) -> Vec<Vec<usize>> {
    (0..points.len())
        .into_par_iter()
        .map(|i| dominated_rows(i, points, directions))
        .collect()
}

fn dominated_rows(i: usize, points: &[Vec<f64>], directions: &[Direction]) -> Vec<usize> {
    (0..points.len())
        .filter(|&j| j != i && dominates(&points[i], &points[j], directions))
        .collect()
}
