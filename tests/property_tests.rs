//! Property-based tests for pareto-select
//!
//! Uses proptest to verify invariants of non-dominated sorting, crowding
//! distance and feasibility evaluation.

use pareto_select::prelude::*;
use proptest::prelude::*;

const BONUS: f64 = 1.0e30;

/// Strategy: a rectangular objective matrix with 1..12 rows and 1..4 columns
fn objective_matrix() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (1usize..4).prop_flat_map(|width| {
        prop::collection::vec(
            prop::collection::vec(-100.0..100.0f64, width..=width),
            1..12,
        )
    })
}

fn build_table(rows: &[Vec<f64>]) -> RealizationTable {
    let width = rows[0].len();
    let columns: Vec<String> = (0..width).map(|c| format!("f{c}")).collect();
    RealizationTable::from_rows(
        columns,
        rows.iter()
            .enumerate()
            .map(|(r, values)| (format!("r{r}"), values.clone())),
    )
    .unwrap()
}

/// Alternate directions across columns so both comparisons are exercised
fn build_objectives(width: usize) -> Vec<(String, Direction)> {
    (0..width)
        .map(|c| {
            let direction = if c % 2 == 0 {
                Direction::Maximize
            } else {
                Direction::Minimize
            };
            (format!("f{c}"), direction)
        })
        .collect()
}

proptest! {
    // ==================== Dominance Properties ====================

    #[test]
    fn dominance_partition_is_total(rows in objective_matrix()) {
        let table = build_table(&rows);
        let objectives = build_objectives(rows[0].len());

        let fronts = fast_non_dominated_sort(&objectives, &table).unwrap();

        let total: usize = fronts.fronts().iter().map(Vec::len).sum();
        prop_assert_eq!(total, table.len());
        for id in table.row_ids() {
            prop_assert!(fronts.rank_of(id).is_some());
        }
    }

    #[test]
    fn dominating_row_has_strictly_lower_rank(rows in objective_matrix()) {
        let table = build_table(&rows);
        let objectives = build_objectives(rows[0].len());
        let directions: Vec<Direction> =
            objectives.iter().map(|(_, d)| *d).collect();

        let fronts = fast_non_dominated_sort(&objectives, &table).unwrap();

        for (a, row_a) in rows.iter().enumerate() {
            for (b, row_b) in rows.iter().enumerate() {
                if a != b && dominates(row_a, row_b, &directions) {
                    let rank_a = fronts.rank_of(&format!("r{a}")).unwrap();
                    let rank_b = fronts.rank_of(&format!("r{b}")).unwrap();
                    prop_assert!(rank_a < rank_b);
                }
            }
        }
    }

    #[test]
    fn every_front_is_nonempty(rows in objective_matrix()) {
        let table = build_table(&rows);
        let objectives = build_objectives(rows[0].len());

        let fronts = fast_non_dominated_sort(&objectives, &table).unwrap();

        for rank in 0..fronts.num_fronts() {
            prop_assert!(!fronts.front(rank).unwrap().is_empty());
        }
    }

    #[test]
    fn sorting_is_deterministic(rows in objective_matrix()) {
        let table = build_table(&rows);
        let objectives = build_objectives(rows[0].len());

        let first = fast_non_dominated_sort(&objectives, &table).unwrap();
        let second = fast_non_dominated_sort(&objectives, &table).unwrap();
        prop_assert_eq!(first, second);
    }

    // ==================== Crowding Properties ====================

    #[test]
    fn crowding_covers_every_row(rows in objective_matrix()) {
        let table = build_table(&rows);
        let objectives = build_objectives(rows[0].len());

        let distances = crowding_distances(&objectives, &table, BONUS).unwrap();

        prop_assert_eq!(distances.len(), table.len());
        prop_assert_eq!(distances.ids(), table.row_ids());
    }

    #[test]
    fn crowding_distances_are_non_negative(rows in objective_matrix()) {
        let table = build_table(&rows);
        let objectives = build_objectives(rows[0].len());

        let distances = crowding_distances(&objectives, &table, BONUS).unwrap();

        // descending sort makes every neighbor gap non-negative
        for (_, distance) in distances.iter() {
            prop_assert!(*distance >= 0.0);
        }
    }

    #[test]
    fn each_objective_hands_out_two_bonuses(rows in objective_matrix()) {
        let table = build_table(&rows);
        let objectives = build_objectives(rows[0].len());

        let distances = crowding_distances(&objectives, &table, BONUS).unwrap();

        // gaps are bounded by the value range and vanish next to the bonus
        let total: f64 = distances.values().iter().sum();
        let expected = 2.0 * BONUS * objectives.len() as f64;
        prop_assert!(total >= expected * 0.999);
    }

    #[test]
    fn crowding_is_deterministic(rows in objective_matrix()) {
        let table = build_table(&rows);
        let objectives = build_objectives(rows[0].len());

        let first = crowding_distances(&objectives, &table, BONUS).unwrap();
        let second = crowding_distances(&objectives, &table, BONUS).unwrap();
        prop_assert_eq!(first, second);
    }

    // ==================== Feasibility Properties ====================

    #[test]
    fn unconstrained_population_is_feasible(rows in objective_matrix()) {
        let table = build_table(&rows);
        let observations: ResponseCatalog = table
            .column_names()
            .iter()
            .map(|name| (name.clone(), ResponseDef::new("obs", 0.0)))
            .collect();
        let problem = ProblemDef::new(observations, ResponseCatalog::new());
        let registry =
            ObjectiveRegistry::classify(&problem, &ObjectiveSpec::new()).unwrap();
        let par = RealizationTable::new(["unused"]).unwrap();

        let feasible = evaluate_feasibility(&registry, &table, &par).unwrap();

        prop_assert_eq!(feasible.ids(), table.row_ids());
        for (_, flag) in feasible.iter() {
            prop_assert!(*flag);
        }
    }

    #[test]
    fn threshold_splits_feasibility(threshold in -50.0..50.0f64, values in prop::collection::vec(-100.0..100.0f64, 1..12)) {
        let observations: ResponseCatalog =
            [("q", ResponseDef::new("l_band", threshold))].into_iter().collect();
        let problem = ProblemDef::new(observations, ResponseCatalog::new());
        let registry =
            ObjectiveRegistry::classify(&problem, &ObjectiveSpec::new()).unwrap();

        let table = RealizationTable::from_rows(
            ["q"],
            values
                .iter()
                .enumerate()
                .map(|(r, value)| (format!("r{r}"), vec![*value])),
        )
        .unwrap();
        let par = RealizationTable::new(["unused"]).unwrap();

        let feasible = evaluate_feasibility(&registry, &table, &par).unwrap();

        for (r, value) in values.iter().enumerate() {
            prop_assert_eq!(
                feasible.get(&format!("r{r}")),
                Some(&(*value <= threshold))
            );
        }
    }
}
