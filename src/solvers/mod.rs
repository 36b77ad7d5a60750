//! The hitting set solver variants.
//!
//! All variants implement [`HittingSetSolver`] and share the same storage
//! through [`crate::conflicts::ConflictStore`], which makes their results
//! directly comparable on the same sequence of conflicts:
//!
//! - [`BaselineSolver`] establishes the correctness floor with a destructive
//!   reduction sweep.
//! - [`GreedySolver`] ranks elements by frequency and prunes redundant picks
//!   afterwards.
//! - [`GF2Solver`] reads a solution off the pivot columns of a forward
//!   Gaussian elimination over GF(2).
//!
//! None of the variants computes a globally minimum hitting set; finding one
//! is NP-hard and out of scope for these procedures.

pub(crate) mod baseline;
pub(crate) mod gf2;
pub(crate) mod greedy;

pub use baseline::BaselineSolver;
pub use gf2::GF2Solver;
pub use greedy::GreedySolver;

use crate::basic_types::HashSet;
use crate::conflicts::Conflict;
use crate::conflicts::Element;

/// The capability which is shared by all hitting set solver variants.
///
/// A caller constructs a solver of a chosen variant, feeds it conflicts one
/// at a time through [`HittingSetSolver::add_conflict`], and then requests a
/// hitting set with [`HittingSetSolver::find_minimal_hitting_set`].
pub trait HittingSetSolver {
    /// Append a conflict to the solver.
    ///
    /// Duplicate conflicts are kept and have to be hit independently; since
    /// equal conflicts contain the same elements, they are automatically hit
    /// together.
    fn add_conflict(&mut self, conflict: Conflict);

    /// Whether `candidate` intersects every conflict added so far; vacuously
    /// true when no conflicts were added.
    fn is_hitting_set(&self, candidate: &HashSet<Element>) -> bool;

    /// Compute a hitting set for the conflicts added so far; the empty set
    /// when no conflicts were added.
    ///
    /// The strength of the minimality guarantee differs per variant; see the
    /// documentation of the implementing solver. Repeated calls without
    /// intervening calls to [`HittingSetSolver::add_conflict`] return the
    /// same result.
    fn find_minimal_hitting_set(&mut self) -> HashSet<Element>;

    /// A copy of the solution computed by the most recent call to
    /// [`HittingSetSolver::find_minimal_hitting_set`]; the empty set if no
    /// solution has been computed yet.
    fn get_solution(&self) -> HashSet<Element>;
}
