use std::fmt::Display;
use std::fmt::Formatter;

use crate::basic_types::ConflictOperationError;

/// An element of the universe over which conflicts are expressed.
///
/// An element is identified by a non-negative integer and carries no other
/// attributes; the numeric order of the identifiers is the order which is
/// used for deterministic tie-breaking in all solvers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Element {
    id: u32,
}

impl Element {
    /// Create an element with the provided identifier.
    pub fn new(id: u32) -> Element {
        Element { id }
    }

    /// The numeric identifier of this element.
    pub fn id(&self) -> u32 {
        self.id
    }
}

impl From<u32> for Element {
    fn from(id: u32) -> Element {
        Element { id }
    }
}

impl TryFrom<i64> for Element {
    type Error = ConflictOperationError;

    /// Validate a signed identifier at the boundary of the crate; negative
    /// identifiers and identifiers which do not fit in 32 bits are rejected.
    fn try_from(value: i64) -> Result<Element, ConflictOperationError> {
        u32::try_from(value)
            .map(Element::new)
            .map_err(|_| ConflictOperationError::InvalidElement(value))
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}
