//! Bulk construction from domain objects.
//!
//! Domain models often already know their own identity and what they point at: a module
//! and its imports, a task and its dependencies. [`NodeSource`] captures that capability,
//! and [`Graph::from_sources`] turns a sequence of such objects into a graph. The graph
//! copies the identities and edges out and keeps no reference to the source objects.

use std::hash::Hash;

use crate::graph::{Edge, Graph};

/// A domain object that can describe itself as a node with outgoing edges.
///
/// The edges are taken at face value by the importer: nothing checks that an edge's
/// `from` equals [`identity`](Self::identity), and endpoints that no item declares are
/// still added as nodes.
///
/// The trait is object safe, so heterogeneous collections such as
/// `Vec<Box<dyn NodeSource<T>>>` can be imported directly.
///
/// # Examples
///
/// ```rust
/// use keygraph::{Edge, Graph, NodeSource};
///
/// struct Task {
///     id: u32,
///     depends_on: Vec<u32>,
/// }
///
/// impl NodeSource<u32> for Task {
///     fn identity(&self) -> u32 {
///         self.id
///     }
///
///     fn edges(&self) -> Vec<Edge<u32>> {
///         self.depends_on.iter().map(|&dep| Edge::new(self.id, dep)).collect()
///     }
/// }
///
/// let tasks = vec![
///     Task { id: 1, depends_on: vec![2, 3] },
///     Task { id: 2, depends_on: vec![] },
/// ];
///
/// let graph: Graph<u32> = Graph::from_sources(&tasks);
/// assert!(graph.has_edge(&1, &3));
/// assert!(graph.has_node(&3));
/// assert_eq!(graph.node_count(), 3);
/// ```
pub trait NodeSource<T> {
    /// Returns the node value this object stands for.
    fn identity(&self) -> T;

    /// Returns this object's outgoing edges as value pairs.
    fn edges(&self) -> Vec<Edge<T>>;
}

impl<T, S> NodeSource<T> for &S
where
    S: NodeSource<T> + ?Sized,
{
    fn identity(&self) -> T {
        (**self).identity()
    }

    fn edges(&self) -> Vec<Edge<T>> {
        (**self).edges()
    }
}

impl<T, S> NodeSource<T> for Box<S>
where
    S: NodeSource<T> + ?Sized,
{
    fn identity(&self) -> T {
        (**self).identity()
    }

    fn edges(&self) -> Vec<Edge<T>> {
        (**self).edges()
    }
}

impl<T> Graph<T>
where
    T: Hash + Eq + Clone,
{
    /// Builds a graph from a sequence of node sources.
    ///
    /// Items are processed in order. For each item its identity is added as a node, then
    /// each of its edges is added, creating endpoints as needed. Later items may refer to
    /// nodes introduced by earlier ones or introduce new ones.
    ///
    /// # Arguments
    ///
    /// * `items` - The domain objects to import
    ///
    /// # Returns
    ///
    /// A new graph containing every identity and edge reported by `items`.
    #[must_use]
    pub fn from_sources<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: NodeSource<T>,
    {
        let mut graph = Graph::new();
        graph.extend_from_sources(items);
        graph
    }

    /// Adds the identities and edges of `items` to this graph.
    ///
    /// Behaves like [`from_sources`](Self::from_sources) but keeps the nodes and edges
    /// already present. Indices of existing nodes are unchanged.
    pub fn extend_from_sources<I>(&mut self, items: I)
    where
        I: IntoIterator,
        I::Item: NodeSource<T>,
    {
        let mut imported = 0usize;
        for item in items {
            self.add_node(item.identity());
            for edge in item.edges() {
                self.add_edge(edge.from, edge.to);
            }
            imported += 1;
        }

        tracing::debug!(
            items = imported,
            nodes = self.node_count(),
            edges = self.edge_count(),
            "imported node sources"
        );
    }
}
