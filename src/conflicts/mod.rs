//! The representation of conflicts and their storage.
//!
//! A [`Conflict`] is a finite set of [`Element`]s of which at least one has to
//! be selected to resolve it. The [`ConflictStore`] keeps an append-only
//! collection of conflicts and provides the hitting set membership predicate
//! shared by all solver variants.

pub(crate) mod conflict;
pub(crate) mod element;
pub(crate) mod store;

pub use conflict::Conflict;
pub use element::Element;
pub use store::ConflictStore;
