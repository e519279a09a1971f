//! Pure renumbering algorithm for the hero tile list.
//!
//! Rank is not a stored field here: it is the 1-based position of an id in
//! the ordering sequence. Modeling rank as sequence position makes the dense
//! `{1..N}` invariant hold by construction, so append, move and delete reduce
//! to plain sequence edits and the caller persists the whole result in one
//! atomic batch.

mod compute;

pub use compute::{compute_append, compute_move, compute_remove, ranks, OrderingError};
