use crate::conflicts::Conflict;
use crate::conflicts::Element;
use crate::hitset_assert_simple;

const WORD_BITS: usize = u64::BITS as usize;

/// A row of an [`IncidenceMatrix`]: a vector over GF(2) packed into machine
/// words, one bit per column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct BitRow {
    words: Box<[u64]>,
}

impl BitRow {
    /// A row of `num_columns` zero bits.
    pub(crate) fn zeros(num_columns: usize) -> BitRow {
        BitRow {
            words: vec![0; num_columns.div_ceil(WORD_BITS)].into_boxed_slice(),
        }
    }

    /// Set the bit in the provided column to 1.
    pub(crate) fn set(&mut self, column: usize) {
        self.words[column / WORD_BITS] |= 1 << (column % WORD_BITS);
    }

    /// Whether the bit in the provided column is 1.
    pub(crate) fn get(&self, column: usize) -> bool {
        self.words[column / WORD_BITS] & (1 << (column % WORD_BITS)) != 0
    }

    /// The column of the lowest set bit, or [`None`] for an all-zero row.
    pub(crate) fn first_set_bit(&self) -> Option<usize> {
        self.words
            .iter()
            .enumerate()
            .find(|(_, &word)| word != 0)
            .map(|(index, &word)| index * WORD_BITS + word.trailing_zeros() as usize)
    }

    /// Add `other` to this row; addition over GF(2) is XOR.
    pub(crate) fn xor_assign(&mut self, other: &BitRow) {
        hitset_assert_simple!(
            self.words.len() == other.words.len(),
            "rows have to be of the same width"
        );

        for (word, &other_word) in self.words.iter_mut().zip(other.words.iter()) {
            *word ^= other_word;
        }
    }
}

/// The 0/1 incidence matrix of a conflict collection over GF(2).
///
/// Rows correspond to the conflicts in insertion order; columns correspond to
/// the distinct elements in ascending order.
#[derive(Clone, Debug)]
pub(crate) struct IncidenceMatrix {
    rows: Vec<BitRow>,
    /// The element corresponding to every column, in ascending order.
    columns: Box<[Element]>,
}

impl IncidenceMatrix {
    /// Materialise the incidence matrix of the provided conflicts.
    pub(crate) fn from_conflicts(conflicts: &[Conflict]) -> IncidenceMatrix {
        let mut columns: Vec<Element> = conflicts
            .iter()
            .flat_map(|conflict| conflict.elements().iter().copied())
            .collect();
        columns.sort_unstable();
        columns.dedup();

        let rows = conflicts
            .iter()
            .map(|conflict| {
                let mut row = BitRow::zeros(columns.len());
                for &element in conflict.elements() {
                    // The element is guaranteed to be present in `columns`.
                    if let Ok(column) = columns.binary_search(&element) {
                        row.set(column);
                    }
                }
                row
            })
            .collect();

        IncidenceMatrix {
            rows,
            columns: columns.into_boxed_slice(),
        }
    }

    /// A copy of the matrix rows, used as the working set for elimination.
    pub(crate) fn rows(&self) -> Vec<BitRow> {
        self.rows.clone()
    }

    /// The element corresponding to the provided column.
    pub(crate) fn element_at(&self, column: usize) -> Element {
        self.columns[column]
    }

    /// The column corresponding to the provided element, if the element
    /// occurs in any conflict.
    pub(crate) fn column_of(&self, element: Element) -> Option<usize> {
        self.columns.binary_search(&element).ok()
    }

    /// The number of columns, one per distinct element.
    pub(crate) fn num_columns(&self) -> usize {
        self.columns.len()
    }
}
