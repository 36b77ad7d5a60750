use std::fmt::Display;
use std::fmt::Formatter;

use crate::basic_types::ConflictOperationError;
use crate::conflicts::Element;

/// A set of elements of which at least one has to be selected to resolve the
/// conflict.
///
/// A conflict is immutable once constructed. Its elements are stored sorted
/// and deduplicated, so two conflicts compare equal exactly when they contain
/// the same elements.
///
/// Constructing a conflict without elements fails with
/// [`ConflictOperationError::EmptyConflict`]: such a conflict could never be
/// resolved, and rejecting it up front means the solvers only ever operate on
/// well-formed input.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Conflict {
    elements: Box<[Element]>,
}

impl Conflict {
    /// Create a conflict from the provided elements.
    ///
    /// Duplicate elements are collapsed.
    ///
    /// # Example
    /// ```rust
    /// # use hitset::conflicts::Conflict;
    /// # use hitset::conflicts::Element;
    /// let conflict = Conflict::new([Element::new(2), Element::new(1), Element::new(2)]).unwrap();
    /// assert_eq!(conflict.len(), 2);
    ///
    /// let empty = Conflict::new(std::iter::empty());
    /// assert!(empty.is_err());
    /// ```
    pub fn new(
        elements: impl IntoIterator<Item = Element>,
    ) -> Result<Conflict, ConflictOperationError> {
        let mut elements: Vec<Element> = elements.into_iter().collect();
        elements.sort_unstable();
        elements.dedup();

        if elements.is_empty() {
            return Err(ConflictOperationError::EmptyConflict);
        }

        Ok(Conflict {
            elements: elements.into_boxed_slice(),
        })
    }

    /// Create a conflict from signed integer identifiers.
    ///
    /// This is the entry point for callers whose element identifiers come
    /// from a signed domain; every identifier is validated through
    /// [`Element::try_from`] and the first invalid identifier is reported.
    pub fn try_from_signed(
        values: impl IntoIterator<Item = i64>,
    ) -> Result<Conflict, ConflictOperationError> {
        let elements = values
            .into_iter()
            .map(Element::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Conflict::new(elements)
    }

    /// Whether the provided element occurs in this conflict.
    pub fn contains(&self, element: Element) -> bool {
        self.elements.binary_search(&element).is_ok()
    }

    /// The elements of this conflict in ascending order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// The number of distinct elements in this conflict.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always `false`: constructing an empty conflict is rejected.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Display for Conflict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (index, element) in self.elements.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, "}}")
    }
}

/// A macro which creates a [`Conflict`] from non-negative integer
/// identifiers; at least one identifier has to be provided.
///
/// # Example
/// ```rust
/// # use hitset::conflict;
/// # use hitset::conflicts::Element;
/// let conflict = conflict![1, 2, 3];
/// assert!(conflict.contains(Element::new(2)));
/// ```
#[macro_export]
macro_rules! conflict {
    ($($element:expr),+ $(,)?) => {
        $crate::conflicts::Conflict::new([$($crate::conflicts::Element::new($element)),+])
            .expect("the macro requires at least one element")
    };
}
