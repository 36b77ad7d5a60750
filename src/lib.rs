//! Hitting set solvers for families of conflict sets.
//!
//! A *conflict* is a finite set of [`Element`]s of which at least one has to
//! be selected to resolve it; a *hitting set* is a set of elements which
//! intersects every conflict in a collection. Hitting sets certify that a
//! chosen subset of elements breaks every forbidden combination.
//!
//! # Solver Variants
//! The crate implements three solver variants which share the
//! [`HittingSetSolver`] contract and can therefore be compared directly on
//! the same sequence of conflicts:
//!
//! - [`BaselineSolver`] starts from the union of all elements and
//!   destructively removes elements while the remainder still hits every
//!   conflict.
//! - [`GreedySolver`] covers conflicts greedily by element frequency and
//!   prunes picks which later picks made redundant.
//! - [`GF2Solver`] runs forward Gaussian elimination on the conflict/element
//!   incidence matrix over GF(2) and reads the solution off the pivot
//!   columns.
//!
//! None of the variants computes a globally *minimum* hitting set, which is
//! an NP-hard optimisation problem. [`BaselineSolver`] and [`GreedySolver`]
//! return a 1-minimal set, meaning that no single element can be removed
//! from the result without breaking it; [`GF2Solver`] provides no minimality
//! guarantee beyond what its elimination order produces.
//!
//! # Using the Solvers
//! ```rust
//! use hitset::conflict;
//! use hitset::GreedySolver;
//! use hitset::HittingSetSolver;
//!
//! let mut solver = GreedySolver::default();
//!
//! solver.add_conflict(conflict![1, 2]);
//! solver.add_conflict(conflict![2, 3]);
//! solver.add_conflict(conflict![1, 3]);
//!
//! let hitting_set = solver.find_minimal_hitting_set();
//!
//! assert!(solver.is_hitting_set(&hitting_set));
//! assert_eq!(hitting_set.len(), 2);
//! assert_eq!(solver.get_solution(), hitting_set);
//! ```
//!
//! Conflicts with identifiers from a signed domain are validated at the
//! boundary:
//! ```rust
//! use hitset::conflicts::Conflict;
//!
//! assert!(Conflict::try_from_signed([0, 3]).is_ok());
//! assert!(Conflict::try_from_signed([-1]).is_err());
//! ```

pub mod basic_types;
pub mod conflicts;
pub mod hitset_asserts;
pub mod solvers;
pub mod statistics;

mod tests;

pub use conflicts::Conflict;
pub use conflicts::ConflictStore;
pub use conflicts::Element;
pub use solvers::BaselineSolver;
pub use solvers::GF2Solver;
pub use solvers::GreedySolver;
pub use solvers::HittingSetSolver;
