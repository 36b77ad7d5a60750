#![cfg(test)]
//! Properties which have to hold across all solver variants.

use crate::basic_types::HashSet;
use crate::conflict;
use crate::conflicts::Conflict;
use crate::conflicts::Element;
use crate::solvers::BaselineSolver;
use crate::solvers::GF2Solver;
use crate::solvers::GreedySolver;
use crate::solvers::HittingSetSolver;

fn elements(values: impl IntoIterator<Item = u32>) -> HashSet<Element> {
    values.into_iter().map(Element::new).collect()
}

/// A collection of conflict collections which covers single conflicts,
/// overlapping conflicts, duplicates, disjoint singletons and a collection
/// with more than one word of distinct elements.
fn collections() -> Vec<Vec<Conflict>> {
    let chain = (0..100).map(|id| conflict![id, id + 1]).collect();

    vec![
        vec![conflict![1, 2, 3]],
        vec![conflict![1, 2], conflict![2, 3], conflict![1, 3]],
        vec![conflict![5, 6], conflict![5, 6]],
        vec![conflict![0], conflict![1], conflict![2]],
        vec![
            conflict![1, 2],
            conflict![1, 3],
            conflict![2, 4],
            conflict![3, 4],
            conflict![7, 8, 9],
        ],
        chain,
    ]
}

fn solve_with<Solver: HittingSetSolver + Default>(
    conflicts: &[Conflict],
) -> (Solver, HashSet<Element>) {
    let mut solver = Solver::default();
    for conflict in conflicts {
        solver.add_conflict(conflict.clone());
    }

    let solution = solver.find_minimal_hitting_set();
    (solver, solution)
}

fn assert_one_minimal(solver: &impl HittingSetSolver, solution: &HashSet<Element>) {
    for &element in solution {
        let mut reduced = solution.clone();
        let _ = reduced.remove(&element);
        assert!(
            !solver.is_hitting_set(&reduced),
            "element {element} is redundant in the returned solution"
        );
    }
}

#[test]
fn every_variant_returns_a_valid_hitting_set() {
    for conflicts in collections() {
        let (baseline, solution) = solve_with::<BaselineSolver>(&conflicts);
        assert!(baseline.is_hitting_set(&solution));

        let (greedy, solution) = solve_with::<GreedySolver>(&conflicts);
        assert!(greedy.is_hitting_set(&solution));

        // The elimination reads its result off the pivot columns without
        // re-checking it against the conflicts, so validity is asserted here
        // independently.
        let (gf2, solution) = solve_with::<GF2Solver>(&conflicts);
        assert!(gf2.is_hitting_set(&solution));
    }
}

#[test]
fn baseline_and_greedy_results_are_one_minimal() {
    for conflicts in collections() {
        let (baseline, solution) = solve_with::<BaselineSolver>(&conflicts);
        assert_one_minimal(&baseline, &solution);

        let (greedy, solution) = solve_with::<GreedySolver>(&conflicts);
        assert_one_minimal(&greedy, &solution);
    }
}

#[test]
fn every_variant_returns_the_empty_set_without_conflicts() {
    assert!(BaselineSolver::default()
        .find_minimal_hitting_set()
        .is_empty());
    assert!(GreedySolver::default().find_minimal_hitting_set().is_empty());
    assert!(GF2Solver::default().find_minimal_hitting_set().is_empty());
}

#[test]
fn every_variant_is_forced_on_disjoint_singletons() {
    let conflicts = vec![conflict![0], conflict![1], conflict![2]];
    let forced = elements([0, 1, 2]);

    assert_eq!(solve_with::<BaselineSolver>(&conflicts).1, forced);
    assert_eq!(solve_with::<GreedySolver>(&conflicts).1, forced);
    assert_eq!(solve_with::<GF2Solver>(&conflicts).1, forced);
}

#[test]
fn the_same_conflict_sequence_gives_the_same_result_on_repeated_runs() {
    for conflicts in collections() {
        assert_eq!(
            solve_with::<BaselineSolver>(&conflicts).1,
            solve_with::<BaselineSolver>(&conflicts).1
        );
        assert_eq!(
            solve_with::<GreedySolver>(&conflicts).1,
            solve_with::<GreedySolver>(&conflicts).1
        );
        assert_eq!(
            solve_with::<GF2Solver>(&conflicts).1,
            solve_with::<GF2Solver>(&conflicts).1
        );
    }
}

#[test]
fn repeated_solves_without_new_conflicts_are_idempotent() {
    for conflicts in collections() {
        let (mut baseline, solution) = solve_with::<BaselineSolver>(&conflicts);
        assert_eq!(baseline.find_minimal_hitting_set(), solution);

        let (mut greedy, solution) = solve_with::<GreedySolver>(&conflicts);
        assert_eq!(greedy.find_minimal_hitting_set(), solution);

        let (mut gf2, solution) = solve_with::<GF2Solver>(&conflicts);
        assert_eq!(gf2.find_minimal_hitting_set(), solution);
    }
}

#[test]
fn get_solution_matches_the_returned_solution_for_every_variant() {
    let conflicts = vec![conflict![1, 2], conflict![2, 3]];

    let (baseline, solution) = solve_with::<BaselineSolver>(&conflicts);
    assert_eq!(baseline.get_solution(), solution);

    let (greedy, solution) = solve_with::<GreedySolver>(&conflicts);
    assert_eq!(greedy.get_solution(), solution);

    let (gf2, solution) = solve_with::<GF2Solver>(&conflicts);
    assert_eq!(gf2.get_solution(), solution);
}
