use log::debug;

use crate::basic_types::HashSet;
use crate::conflicts::Conflict;
use crate::conflicts::Element;
use crate::statistics::log_statistic;

/// Append-only storage for [`Conflict`]s, composed into every solver variant.
///
/// Conflicts are kept in insertion order and are never deduplicated: the same
/// conflict may be added multiple times and is then stored, and iterated,
/// redundantly. Next to the conflicts, the store tracks the solution which
/// was computed most recently by the owning solver.
#[derive(Clone, Debug, Default)]
pub struct ConflictStore {
    conflicts: Vec<Conflict>,
    solution: HashSet<Element>,
}

impl ConflictStore {
    /// Append a conflict to the store.
    pub fn add_conflict(&mut self, conflict: Conflict) {
        debug!("added conflict {conflict}");
        self.conflicts.push(conflict);
    }

    /// Whether `candidate` intersects every stored conflict.
    ///
    /// Vacuously true when the store contains no conflicts. This predicate is
    /// pure and runs in time proportional to the total size of the stored
    /// conflicts.
    pub fn is_hitting_set(&self, candidate: &HashSet<Element>) -> bool {
        self.conflicts.iter().all(|conflict| {
            conflict
                .elements()
                .iter()
                .any(|element| candidate.contains(element))
        })
    }

    /// The number of stored conflicts, counting duplicates.
    pub fn num_conflicts(&self) -> usize {
        self.conflicts.len()
    }

    /// Whether no conflicts have been added yet.
    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// The stored conflicts in insertion order.
    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    /// The distinct elements which occur in at least one stored conflict, in
    /// ascending order.
    pub fn universe(&self) -> Vec<Element> {
        let mut universe: Vec<Element> = self
            .conflicts
            .iter()
            .flat_map(|conflict| conflict.elements().iter().copied())
            .collect();
        universe.sort_unstable();
        universe.dedup();
        universe
    }

    /// Record `solution` as the most recently computed solution.
    pub(crate) fn record_solution(&mut self, solution: HashSet<Element>) {
        debug!("recorded a solution of size {}", solution.len());
        self.solution = solution;
    }

    /// A copy of the most recently recorded solution; the empty set if no
    /// solution has been recorded yet.
    pub fn last_solution(&self) -> HashSet<Element> {
        self.solution.clone()
    }

    /// Logs the statistics of the store.
    pub(crate) fn log_statistics(&self) {
        log_statistic("numberOfConflicts", self.num_conflicts());
        log_statistic("numberOfElements", self.universe().len());
        log_statistic("solutionSize", self.solution.len());
    }
}
