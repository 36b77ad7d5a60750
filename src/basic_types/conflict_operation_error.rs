use thiserror::Error;

/// Errors related to the construction of conflicts.
///
/// All validation happens when a [`crate::conflicts::Conflict`] is
/// constructed; once a conflict value exists, no solver operation can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConflictOperationError {
    /// A conflict has to contain at least one element, otherwise no selection
    /// of elements can ever resolve it.
    #[error("a conflict has to contain at least one element")]
    EmptyConflict,
    /// Elements are identified by non-negative integers which fit in 32 bits;
    /// the provided identifier is outside of that domain.
    #[error("the element identifier {0} is not a non-negative 32-bit integer")]
    InvalidElement(i64),
}
