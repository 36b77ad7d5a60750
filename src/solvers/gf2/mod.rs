pub(crate) mod matrix;

use log::trace;

use crate::basic_types::HashSet;
use crate::conflicts::Conflict;
use crate::conflicts::ConflictStore;
use crate::conflicts::Element;
use crate::hitset_assert_extreme;
use crate::solvers::gf2::matrix::IncidenceMatrix;
use crate::solvers::HittingSetSolver;
use crate::statistics::log_statistic_postfix;

/// Hitting set solver based on Gaussian elimination over GF(2).
///
/// The conflict collection is materialised as a 0/1 incidence matrix with one
/// row per conflict and one column per distinct element. Forward elimination
/// walks the rows top to bottom; for every row the first set column becomes a
/// pivot, the corresponding element is added to the solution, and the column
/// is eliminated from all later rows by XOR-ing the pivot row into them. Rows
/// which have become all-zero contribute no pivot and are skipped; rows are
/// never swapped.
///
/// The solution is read off the pivots directly: the solver does **not**
/// verify the result against the stored conflicts afterwards, and it provides
/// no minimality guarantee beyond what the elimination order produces. See
/// for instance the collection `{1, 2}, {2, 3}`, for which the elimination
/// selects both `1` and `2` even though `2` on its own hits both conflicts.
#[derive(Clone, Debug, Default)]
pub struct GF2Solver {
    store: ConflictStore,
    /// The incidence matrix of the stored conflicts; rebuilt whenever a
    /// conflict is added, since adding a conflict changes the dimensions of
    /// the matrix.
    matrix: Option<IncidenceMatrix>,
}

impl GF2Solver {
    /// Logs the statistics currently present in the solver.
    pub fn log_statistics(&self) {
        self.store.log_statistics();
        log_statistic_postfix();
    }
}

impl HittingSetSolver for GF2Solver {
    fn add_conflict(&mut self, conflict: Conflict) {
        self.store.add_conflict(conflict);
        self.matrix = Some(IncidenceMatrix::from_conflicts(self.store.conflicts()));
    }

    fn is_hitting_set(&self, candidate: &HashSet<Element>) -> bool {
        self.store.is_hitting_set(candidate)
    }

    fn find_minimal_hitting_set(&mut self) -> HashSet<Element> {
        if self.store.is_empty() {
            self.store.record_solution(HashSet::default());
            return HashSet::default();
        }

        let matrix = self
            .matrix
            .get_or_insert_with(|| IncidenceMatrix::from_conflicts(self.store.conflicts()));

        // The elimination operates on a copy of the rows so that repeated
        // solves start from the same matrix.
        let mut rows = matrix.rows();
        let mut solution: HashSet<Element> = HashSet::default();

        trace!(
            "running forward elimination on a {}x{} incidence matrix",
            rows.len(),
            matrix.num_columns()
        );

        for pivot_row_index in 0..rows.len() {
            let Some(pivot_column) = rows[pivot_row_index].first_set_bit() else {
                continue;
            };

            let element = matrix.element_at(pivot_column);
            hitset_assert_extreme!(
                matrix.column_of(element) == Some(pivot_column),
                "the column mapping has to round-trip for the pivot element"
            );

            let _ = solution.insert(element);
            trace!("the pivot in column {pivot_column} selects element {element}");

            let (processed, below) = rows.split_at_mut(pivot_row_index + 1);
            let pivot_row = &processed[pivot_row_index];
            for row in below {
                if row.get(pivot_column) {
                    row.xor_assign(pivot_row);
                }
            }
        }

        self.store.record_solution(solution.clone());
        solution
    }

    fn get_solution(&self) -> HashSet<Element> {
        self.store.last_solution()
    }
}
