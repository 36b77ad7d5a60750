//! Basic types which are used throughout the solvers.

mod conflict_operation_error;

pub use conflict_operation_error::ConflictOperationError;

/// A [`std::collections::HashMap`] remapped to the FNV hasher; the solvers
/// only hash small integer keys, for which FNV is considerably faster than
/// the default hasher. FNV is unseeded, so iteration order is stable across
/// runs given the same insertions.
pub type HashMap<K, V> = fnv::FnvHashMap<K, V>;

/// A [`std::collections::HashSet`] remapped to the FNV hasher; see
/// [`HashMap`] for the motivation.
pub type HashSet<K> = fnv::FnvHashSet<K>;
