#![cfg(test)]
use crate::basic_types::HashSet;
use crate::conflict;
use crate::conflicts::Element;
use crate::solvers::BaselineSolver;
use crate::solvers::HittingSetSolver;

fn elements(values: impl IntoIterator<Item = u32>) -> HashSet<Element> {
    values.into_iter().map(Element::new).collect()
}

#[test]
fn no_conflicts_give_an_empty_hitting_set() {
    let mut solver = BaselineSolver::default();

    assert!(solver.find_minimal_hitting_set().is_empty());
}

#[test]
fn a_single_conflict_is_hit_by_a_single_element() {
    let mut solver = BaselineSolver::default();
    solver.add_conflict(conflict![1, 2, 3]);

    // The sweep removes 1 and 2; removing 3 as well would leave the conflict
    // unhit.
    assert_eq!(solver.find_minimal_hitting_set(), elements([3]));
}

#[test]
fn a_triangle_of_conflicts_requires_two_elements() {
    let mut solver = BaselineSolver::default();
    solver.add_conflict(conflict![1, 2]);
    solver.add_conflict(conflict![2, 3]);
    solver.add_conflict(conflict![1, 3]);

    let solution = solver.find_minimal_hitting_set();

    assert_eq!(solution, elements([2, 3]));
    assert!(solver.is_hitting_set(&solution));
}

#[test]
fn duplicate_conflicts_do_not_grow_the_solution() {
    let mut with_duplicate = BaselineSolver::default();
    with_duplicate.add_conflict(conflict![5, 6]);
    with_duplicate.add_conflict(conflict![5, 6]);

    let mut without_duplicate = BaselineSolver::default();
    without_duplicate.add_conflict(conflict![5, 6]);

    let solution = with_duplicate.find_minimal_hitting_set();

    assert!(with_duplicate.is_hitting_set(&solution));
    assert_eq!(
        solution.len(),
        without_duplicate.find_minimal_hitting_set().len()
    );
}

#[test]
fn disjoint_singleton_conflicts_require_every_element() {
    let mut solver = BaselineSolver::default();
    solver.add_conflict(conflict![0]);
    solver.add_conflict(conflict![1]);
    solver.add_conflict(conflict![2]);

    assert_eq!(solver.find_minimal_hitting_set(), elements([0, 1, 2]));
}

#[test]
fn the_result_is_one_minimal() {
    let mut solver = BaselineSolver::default();
    solver.add_conflict(conflict![1, 2]);
    solver.add_conflict(conflict![2, 3]);
    solver.add_conflict(conflict![1, 3]);
    solver.add_conflict(conflict![4, 5]);

    let solution = solver.find_minimal_hitting_set();

    for &element in &solution {
        let mut reduced = solution.clone();
        let _ = reduced.remove(&element);
        assert!(
            !solver.is_hitting_set(&reduced),
            "element {element} is redundant in the returned solution"
        );
    }
}

#[test]
fn get_solution_returns_the_last_computed_result() {
    let mut solver = BaselineSolver::default();
    solver.add_conflict(conflict![1, 2]);

    assert!(solver.get_solution().is_empty());

    let solution = solver.find_minimal_hitting_set();

    assert_eq!(solver.get_solution(), solution);
}
