//! Single-removal connectivity queries over an undirected [`Graph`].
//!
//! The queries are deliberately brute force: each candidate vertex or edge
//! is deleted in turn and the remainder is re-traversed from scratch, the
//! O(V·(V+E)) / O(E·(V+E)) baseline that linear-time algorithms are
//! measured against. All three entry points are pure functions over an
//! immutable graph snapshot.
//!
//! [`Graph`]: crate::Graph

mod articulation;
mod bridges;
mod reachability;

pub use articulation::find_articulation_points;
pub use bridges::find_bridges;
pub use reachability::count_reachable;
