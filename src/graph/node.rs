//! Node index type.
//!
//! [`NodeId`] is the dense position a [`Graph`](crate::Graph) assigns to a node value on
//! first insertion. It doubles as the position of that node in a [`GraphDto`](crate::GraphDto)
//! export, which is why the adjacency lists of the transfer representation are plain indices.

use std::fmt;

/// A strongly-typed index for a node within a [`Graph`](crate::Graph).
///
/// Indices are handed out sequentially starting at 0 and are never reused or renumbered.
/// Since the graph has no removal operation, any `NodeId` obtained from a graph stays valid
/// for that graph.
///
/// # Examples
///
/// ```rust
/// use keygraph::{Graph, NodeId};
///
/// let mut graph: Graph<&str> = Graph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
///
/// assert_eq!(a, NodeId::new(0));
/// assert_eq!(b, NodeId::new(1));
/// assert_eq!(graph.add_node("A"), a);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a `NodeId` from a raw index.
    ///
    /// Useful for addressing positions in a [`GraphDto`](crate::GraphDto). Nothing checks that
    /// the index exists in any particular graph; [`Graph::node`](crate::Graph::node) returns
    /// `None` for unknown indices.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw index.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_roundtrips_index() {
        let node = NodeId::new(42);
        assert_eq!(node.index(), 42);
        assert_eq!(usize::from(node), 42);
        assert_eq!(NodeId::from(42usize), node);
    }

    #[test]
    fn test_node_id_ordering_follows_index() {
        let mut ids = vec![NodeId::new(3), NodeId::new(0), NodeId::new(7)];
        ids.sort();
        assert_eq!(ids, vec![NodeId::new(0), NodeId::new(3), NodeId::new(7)]);
    }

    #[test]
    fn test_node_id_formatting() {
        let node = NodeId::new(5);
        assert_eq!(format!("{node:?}"), "NodeId(5)");
        assert_eq!(format!("{node}"), "n5");
    }
}
