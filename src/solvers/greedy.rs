use std::cmp::Reverse;

use log::trace;

use crate::basic_types::HashMap;
use crate::basic_types::HashSet;
use crate::conflicts::Conflict;
use crate::conflicts::ConflictStore;
use crate::conflicts::Element;
use crate::hitset_assert_moderate;
use crate::solvers::HittingSetSolver;
use crate::statistics::log_statistic_postfix;

/// Hitting set solver based on a frequency-guided greedy cover.
///
/// The solver maintains an index from every element to the number of stored
/// conflicts it occurs in. A solve ranks the elements by descending
/// frequency, breaking ties towards the smaller element, and picks elements
/// while uncovered conflicts remain. A pruning pass then sweeps the picked
/// elements in ascending order and drops every element whose removal keeps
/// the set a hitting set, which makes the result 1-minimal like that of
/// [`crate::solvers::BaselineSolver`] despite the different construction
/// order.
#[derive(Clone, Debug, Default)]
pub struct GreedySolver {
    store: ConflictStore,
    /// For every element, the number of stored conflicts which contain it.
    frequencies: HashMap<Element, usize>,
}

impl GreedySolver {
    /// Logs the statistics currently present in the solver.
    pub fn log_statistics(&self) {
        self.store.log_statistics();
        log_statistic_postfix();
    }

    /// The elements ordered by descending frequency; ties are broken towards
    /// the smaller element to keep the ranking deterministic.
    fn ranked_elements(&self) -> Vec<Element> {
        let mut ranked: Vec<(Element, usize)> = self
            .frequencies
            .iter()
            .map(|(&element, &count)| (element, count))
            .collect();
        ranked.sort_unstable_by_key(|&(element, count)| (Reverse(count), element));

        ranked.into_iter().map(|(element, _)| element).collect()
    }
}

impl HittingSetSolver for GreedySolver {
    fn add_conflict(&mut self, conflict: Conflict) {
        for &element in conflict.elements() {
            *self.frequencies.entry(element).or_insert(0) += 1;
        }

        self.store.add_conflict(conflict);
    }

    fn is_hitting_set(&self, candidate: &HashSet<Element>) -> bool {
        self.store.is_hitting_set(candidate)
    }

    fn find_minimal_hitting_set(&mut self) -> HashSet<Element> {
        if self.store.is_empty() {
            self.store.record_solution(HashSet::default());
            return HashSet::default();
        }

        let mut solution: HashSet<Element> = HashSet::default();
        let mut remaining: Vec<&Conflict> = self.store.conflicts().iter().collect();

        // Cover phase: frequent elements hit many conflicts per pick. Removing
        // the conflicts which contain a picked element also removes any
        // duplicates of those conflicts, since equal conflicts contain the
        // same elements.
        for element in self.ranked_elements() {
            if remaining.iter().any(|conflict| conflict.contains(element)) {
                let _ = solution.insert(element);
                remaining.retain(|conflict| !conflict.contains(element));
                trace!(
                    "picked element {element}, {} conflicts remain uncovered",
                    remaining.len()
                );
            }

            if remaining.is_empty() {
                break;
            }
        }

        // Pruning phase: a pick may have become redundant through later
        // picks; sweep in ascending order and drop every such element.
        let mut picked: Vec<Element> = solution.iter().copied().collect();
        picked.sort_unstable();
        for element in picked {
            let _ = solution.remove(&element);
            if !self.store.is_hitting_set(&solution) {
                let _ = solution.insert(element);
            } else {
                trace!("pruned redundant element {element}");
            }
        }

        hitset_assert_moderate!(
            self.store.is_hitting_set(&solution),
            "the pruned cover has to hit every conflict"
        );

        self.store.record_solution(solution.clone());
        solution
    }

    fn get_solution(&self) -> HashSet<Element> {
        self.store.last_solution()
    }
}
