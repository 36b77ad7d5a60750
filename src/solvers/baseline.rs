use log::trace;

use crate::basic_types::HashSet;
use crate::conflicts::Conflict;
use crate::conflicts::ConflictStore;
use crate::conflicts::Element;
use crate::hitset_assert_moderate;
use crate::solvers::HittingSetSolver;
use crate::statistics::log_statistic_postfix;

/// Hitting set solver based on destructive reduction.
///
/// The solver starts from the union of all elements and sweeps over them in
/// ascending order, tentatively removing each element; a removal is committed
/// only if the remainder still hits every conflict. The sweep runs once from
/// left to right and an element which survives it is never reconsidered, so
/// the result is 1-minimal with respect to the visited order.
///
/// The cost of a solve is `O(|universe| * total conflict size)`.
#[derive(Clone, Debug, Default)]
pub struct BaselineSolver {
    store: ConflictStore,
}

impl BaselineSolver {
    /// Logs the statistics currently present in the solver.
    pub fn log_statistics(&self) {
        self.store.log_statistics();
        log_statistic_postfix();
    }
}

impl HittingSetSolver for BaselineSolver {
    fn add_conflict(&mut self, conflict: Conflict) {
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

        let universe = self.store.universe();
        let mut current: HashSet<Element> = universe.iter().copied().collect();

        for element in universe {
            let _ = current.remove(&element);
            if self.store.is_hitting_set(&current) {
                trace!("removed element {element} from the candidate");
            } else {
                let _ = current.insert(element);
            }
        }

        hitset_assert_moderate!(
            self.store.is_hitting_set(&current),
            "the reduced candidate has to hit every conflict"
        );

        self.store.record_solution(current.clone());
        current
    }

    fn get_solution(&self) -> HashSet<Element> {
        self.store.last_solution()
    }
}
