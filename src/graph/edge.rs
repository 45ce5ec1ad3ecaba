//! Directed edge value pair.
//!
//! A [`Graph`](crate::Graph) does not store [`Edge`] values; it stores target indices per
//! source node. `Edge` is what the graph hands out when edges are enumerated, and what the
//! node-list importer consumes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One directed edge, expressed in node values rather than indices.
///
/// # Examples
///
/// ```rust
/// use keygraph::{Edge, Graph};
///
/// let mut graph: Graph<u32> = Graph::new();
/// graph.add_edge(1, 2);
///
/// let edges = graph.edges();
/// assert_eq!(edges, vec![Edge::new(1, 2)]);
/// assert_eq!(edges[0].to_string(), "1 -> 2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge<T> {
    /// Source node
    pub from: T,
    /// Target node
    pub to: T,
}

impl<T> Edge<T> {
    /// Creates an edge from `from` to `to`.
    #[must_use]
    pub const fn new(from: T, to: T) -> Self {
        Edge { from, to }
    }

    /// Returns the same edge pointing the other way.
    #[must_use]
    pub fn reversed(self) -> Self {
        Edge {
            from: self.to,
            to: self.from,
        }
    }

    /// Splits the edge into its `(from, to)` pair.
    #[must_use]
    pub fn into_pair(self) -> (T, T) {
        (self.from, self.to)
    }
}

impl<T: PartialEq> Edge<T> {
    /// Returns `true` if the edge starts and ends at the same node.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl<T> From<(T, T)> for Edge<T> {
    fn from((from, to): (T, T)) -> Self {
        Edge { from, to }
    }
}

impl<T> From<Edge<T>> for (T, T) {
    fn from(edge: Edge<T>) -> Self {
        edge.into_pair()
    }
}

impl<T: fmt::Display> fmt::Display for Edge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
