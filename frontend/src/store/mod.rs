//! Per-collection operations against the hosted database.
//!
//! Components call these from `spawn_local` and feed the outcome back into
//! their `CollectionState` as a message; the functions themselves never
//! touch component state.

pub mod categories;
pub mod firms;
pub mod reviews;
