use std::fmt;

use serde::Serialize;

/// An undirected edge, stored with canonical (min, max) endpoint order.
///
/// The two directional adjacency entries `(u, v)` and `(v, u)` map to the
/// same `Edge`, so a set of edges deduplicates an undirected edge list.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
pub struct Edge(usize, usize);

impl Edge {
    /// Build the canonical form of the edge between `u` and `v`.
    pub fn new(u: usize, v: usize) -> Self {
        if u <= v { Self(u, v) } else { Self(v, u) }
    }

    /// Get the lower endpoint.
    #[inline] pub fn lo(&self) -> usize { self.0 }

    /// Get the higher endpoint.
    #[inline] pub fn hi(&self) -> usize { self.1 }
}

impl fmt::Display for Edge {
    /// Format as a pair: (lo, hi)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
