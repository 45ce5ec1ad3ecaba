//! Core keyed directed graph implementation.
//!
//! This module provides [`Graph`], an adjacency-list graph addressed by node value.
//! Three parallel tables make up the structure:
//!
//! - a hash map from node value to [`NodeId`] (forward index)
//! - a vector of node values indexed by [`NodeId`] (reverse index)
//! - a vector of target lists indexed by [`NodeId`] (adjacency)
//!
//! The reverse index keeps neighbor resolution and edge enumeration linear in the
//! number of edges.

use std::{borrow::Borrow, collections::HashMap, hash::Hash};

use crate::graph::{Edge, NodeId};

/// A directed graph over node values of type `T`.
///
/// `Graph` stores each distinct node value once and refers to it internally by a dense
/// [`NodeId`]. Edges are kept per source node in insertion order; adding the same edge
/// twice stores it twice.
///
/// # Type Parameters
///
/// * `T` - The node type. Identity is value equality, so `T` must be `Hash + Eq`. Values
///   are cloned into both the forward and reverse index, hence `Clone`.
///
/// # Absent Nodes
///
/// Queries never fail. [`has_node`](Self::has_node) and [`has_edge`](Self::has_edge) return
/// `false` for values that were never added, and [`neighbors`](Self::neighbors) returns an
/// empty vector.
///
/// # Thread Safety
///
/// `Graph<T>` is [`Send`] and [`Sync`] when `T` is. It has no interior mutability; wrap
/// it in a lock if several threads need to mutate it.
///
/// # Examples
///
/// ```rust
/// use keygraph::Graph;
///
/// let mut graph: Graph<String> = Graph::new();
/// graph.add_edge("A".to_string(), "B".to_string());
/// graph.add_edge("A".to_string(), "B".to_string());
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 2);
/// assert!(graph.has_edge("A", "B"));
/// assert!(!graph.has_edge("B", "A"));
/// assert!(graph.neighbors("missing").is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<T>
where
    T: Hash + Eq + Clone,
{
    /// Map from node value to its index
    index: HashMap<T, NodeId>,
    /// Node values by index
    values: Vec<T>,
    /// Outgoing targets per node, in insertion order
    adjacency: Vec<Vec<NodeId>>,
    /// Total number of stored edges
    edge_count: usize,
}

impl<T> Default for Graph<T>
where
    T: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T>
where
    T: Hash + Eq + Clone,
{
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Graph {
            index: HashMap::new(),
            values: Vec::new(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates a new empty graph with room for `node_capacity` nodes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keygraph::Graph;
    ///
    /// let graph: Graph<u32> = Graph::with_capacity(128);
    /// assert!(graph.is_empty());
    /// ```
    #[must_use]
    pub fn with_capacity(node_capacity: usize) -> Self {
        Graph {
            index: HashMap::with_capacity(node_capacity),
            values: Vec::with_capacity(node_capacity),
            adjacency: Vec::with_capacity(node_capacity),
            edge_count: 0,
        }
    }

    /// Adds a node, or returns the index of the equal node already present.
    ///
    /// A new node receives the next sequential index (the current node count) and an empty
    /// adjacency list. Existing indices are never changed.
    ///
    /// # Arguments
    ///
    /// * `node` - The node value
    ///
    /// # Returns
    ///
    /// The `NodeId` of the node, newly assigned or pre-existing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keygraph::{Graph, NodeId};
    ///
    /// let mut graph: Graph<&str> = Graph::new();
    /// assert_eq!(graph.add_node("x"), NodeId::new(0));
    /// assert_eq!(graph.add_node("y"), NodeId::new(1));
    /// assert_eq!(graph.add_node("x"), NodeId::new(0));
    /// assert_eq!(graph.node_count(), 2);
    /// ```
    pub fn add_node(&mut self, node: T) -> NodeId {
        if let Some(&id) = self.index.get(&node) {
            return id;
        }

        let id = NodeId::new(self.values.len());
        self.index.insert(node.clone(), id);
        self.values.push(node);
        self.adjacency.push(Vec::new());
        id
    }

    /// Adds a directed edge from `from` to `to`, creating either node if needed.
    ///
    /// Self-loops are allowed. Repeating an edge stores it again rather than merging it,
    /// so every call increases [`edge_count`](Self::edge_count) by one.
    ///
    /// # Arguments
    ///
    /// * `from` - The source node value
    /// * `to` - The target node value
    ///
    /// # Returns
    ///
    /// The `(source, target)` indices of the endpoints.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keygraph::Graph;
    ///
    /// let mut graph: Graph<i32> = Graph::new();
    /// graph.add_edge(1, 2);
    /// graph.add_edge(2, 1);
    ///
    /// assert_eq!(graph.node_count(), 2);
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    pub fn add_edge(&mut self, from: T, to: T) -> (NodeId, NodeId) {
        let source = self.add_node(from);
        let target = self.add_node(to);
        self.push_edge(source, target);
        (source, target)
    }

    /// Appends `target` to the adjacency list of `source`.
    ///
    /// Both ids must come from this graph.
    pub(crate) fn push_edge(&mut self, source: NodeId, target: NodeId) {
        debug_assert!(target.index() < self.values.len());
        self.adjacency[source.index()].push(target);
        self.edge_count += 1;
    }

    /// Returns the index of a node value, if present.
    #[must_use]
    pub fn node_id<Q>(&self, node: &Q) -> Option<NodeId>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(node).copied()
    }

    /// Returns the node value stored at `id`, if any.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&T> {
        self.values.get(id.index())
    }

    /// Returns `true` if the graph contains `node`.
    #[must_use]
    pub fn has_node<Q>(&self, node: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(node)
    }

    /// Returns `true` if at least one edge runs from `from` to `to`.
    ///
    /// Returns `false` straight away when either endpoint is absent. Parallel edges are not
    /// distinguished; use [`out_degree`](Self::out_degree) or [`edges`](Self::edges) to count
    /// them.
    #[must_use]
    pub fn has_edge<Q>(&self, from: &Q, to: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (Some(source), Some(target)) = (self.node_id(from), self.node_id(to)) else {
            return false;
        };
        self.adjacency[source.index()].contains(&target)
    }

    /// Returns a snapshot of all node values.
    ///
    /// The order is implementation-defined and should not be relied upon. This
    /// implementation yields nodes by ascending index, which is also the export order of
    /// [`to_dto`](Self::to_dto).
    #[must_use]
    pub fn nodes(&self) -> Vec<T> {
        self.values.clone()
    }

    /// Returns an iterator over `(NodeId, &T)` pairs by ascending index.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &T)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, value)| (NodeId::new(i), value))
    }

    /// Returns a snapshot of every edge.
    ///
    /// Edges are listed by ascending source index, and within a source in the order they
    /// were added. Parallel edges appear once per insertion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keygraph::{Edge, Graph};
    ///
    /// let mut graph: Graph<&str> = Graph::new();
    /// graph.add_edge("b", "a");
    /// graph.add_edge("a", "b");
    /// graph.add_edge("b", "b");
    ///
    /// assert_eq!(
    ///     graph.edges(),
    ///     vec![Edge::new("b", "a"), Edge::new("b", "b"), Edge::new("a", "b")]
    /// );
    /// ```
    #[must_use]
    pub fn edges(&self) -> Vec<Edge<T>> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for (from, targets) in self.values.iter().zip(&self.adjacency) {
            edges.extend(
                targets
                    .iter()
                    .map(|target| Edge::new(from.clone(), self.values[target.index()].clone())),
            );
        }
        edges
    }

    /// Returns the targets of all outgoing edges from `node`, in insertion order.
    ///
    /// A node that was never added has no neighbors, so the result is empty.
    #[must_use]
    pub fn neighbors<Q>(&self, node: &Q) -> Vec<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.node_id(node).map_or_else(Vec::new, |id| {
            self.adjacency[id.index()]
                .iter()
                .map(|target| self.values[target.index()].clone())
                .collect()
        })
    }

    /// Returns the target indices of `id`'s outgoing edges.
    ///
    /// Unknown ids yield an empty slice.
    #[must_use]
    pub fn neighbor_ids(&self, id: NodeId) -> &[NodeId] {
        self.adjacency
            .get(id.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns the number of outgoing edges from `node`, counting parallel edges.
    ///
    /// Absent nodes have an out-degree of 0.
    #[must_use]
    pub fn out_degree<Q>(&self, node: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.node_id(node)
            .map_or(0, |id| self.adjacency[id.index()].len())
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.values.len()
    }

    /// Returns the number of edges, counting parallel edges separately.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T> Extend<Edge<T>> for Graph<T>
where
    T: Hash + Eq + Clone,
{
    fn extend<I: IntoIterator<Item = Edge<T>>>(&mut self, edges: I) {
        for edge in edges {
            self.add_edge(edge.from, edge.to);
        }
    }
}

impl<T> Extend<(T, T)> for Graph<T>
where
    T: Hash + Eq + Clone,
{
    fn extend<I: IntoIterator<Item = (T, T)>>(&mut self, edges: I) {
        for (from, to) in edges {
            self.add_edge(from, to);
        }
    }
}

impl<T> FromIterator<Edge<T>> for Graph<T>
where
    T: Hash + Eq + Clone,
{
    fn from_iter<I: IntoIterator<Item = Edge<T>>>(edges: I) -> Self {
        let mut graph = Graph::new();
        graph.extend(edges);
        graph
    }
}

impl<T> FromIterator<(T, T)> for Graph<T>
where
    T: Hash + Eq + Clone,
{
    fn from_iter<I: IntoIterator<Item = (T, T)>>(edges: I) -> Self {
        let mut graph = Graph::new();
        graph.extend(edges);
        graph
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{Edge, Graph, NodeId};

    /// Creates a diamond graph: A -> B, A -> C, B -> D, C -> D
    fn create_diamond_graph() -> Graph<&'static str> {
        let mut graph = Graph::new();
        graph.add_edge("A", "B");
        graph.add_edge("A", "C");
        graph.add_edge("B", "D");
        graph.add_edge("C", "D");
        graph
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph: Graph<i32> = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.nodes().is_empty());
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(Graph::<i32>::default(), Graph::new());
    }

    #[test]
    fn test_int_and_string_graphs() {
        let mut ints: Graph<i32> = Graph::new();
        ints.add_node(1);
        ints.add_node(2);
        ints.add_edge(1, 2);

        assert!(ints.has_node(&1));
        assert!(ints.has_node(&2));
        assert!(!ints.has_node(&3));
        assert!(ints.has_edge(&1, &2));
        assert!(!ints.has_edge(&2, &1));
        assert_eq!(ints.neighbors(&1), vec![2]);

        let mut strings: Graph<String> = Graph::new();
        strings.add_node("A".to_string());
        strings.add_node("B".to_string());
        strings.add_edge("A".to_string(), "B".to_string());

        assert!(strings.has_node("A"));
        assert!(strings.has_edge("A", "B"));
    }

    #[test]
    fn test_add_node_is_idempotent() {
        let mut graph: Graph<i32> = Graph::new();
        let first = graph.add_node(1);
        graph.add_edge(1, 5);
        let edges_before = graph.edges();

        let second = graph.add_node(1);

        assert_eq!(first, second);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.nodes(), vec![1, 5]);
        assert_eq!(graph.edges(), edges_before);
    }

    #[test]
    fn test_indices_follow_insertion_order() {
        let mut graph: Graph<char> = Graph::new();
        graph.add_edge('z', 'y');
        graph.add_node('x');
        graph.add_edge('x', 'z');

        assert_eq!(graph.node_id(&'z'), Some(NodeId::new(0)));
        assert_eq!(graph.node_id(&'y'), Some(NodeId::new(1)));
        assert_eq!(graph.node_id(&'x'), Some(NodeId::new(2)));
        assert_eq!(graph.node(NodeId::new(2)), Some(&'x'));
        assert_eq!(graph.node(NodeId::new(3)), None);
    }

    #[test]
    fn test_add_edge_creates_endpoints() {
        let mut graph: Graph<i32> = Graph::new();
        let (source, target) = graph.add_edge(7, 9);

        assert_eq!(source, NodeId::new(0));
        assert_eq!(target, NodeId::new(1));
        assert!(graph.has_node(&7));
        assert!(graph.has_node(&9));
        assert!(graph.has_edge(&7, &9));
    }

    #[test]
    fn test_edge_count_counts_calls() {
        let mut graph: Graph<i32> = Graph::new();
        graph.add_edge(1, 2);
        graph.add_edge(2, 1);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let mut graph: Graph<&str> = Graph::new();
        graph.add_edge("A", "B");
        graph.add_edge("A", "B");

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.out_degree("A"), 2);
        assert_eq!(graph.neighbors("A"), vec!["B", "B"]);
        assert!(graph.has_edge("A", "B"));
    }

    #[test]
    fn test_self_loop() {
        let mut graph: Graph<&str> = Graph::new();
        let (source, target) = graph.add_edge("A", "A");

        assert_eq!(source, target);
        assert_eq!(graph.node_count(), 1);
        assert!(graph.has_edge("A", "A"));
        assert_eq!(graph.edges(), vec![Edge::new("A", "A")]);
    }

    #[test]
    fn test_absent_nodes() {
        let graph: Graph<i32> = Graph::new();

        assert!(!graph.has_edge(&1, &2));
        assert!(graph.neighbors(&999).is_empty());
        assert_eq!(graph.out_degree(&999), 0);
        assert!(graph.neighbor_ids(NodeId::new(999)).is_empty());
    }

    #[test]
    fn test_has_edge_with_one_absent_endpoint() {
        let mut graph: Graph<i32> = Graph::new();
        graph.add_edge(1, 2);

        assert!(!graph.has_edge(&1, &3));
        assert!(!graph.has_edge(&3, &2));
    }

    #[test]
    fn test_neighbors_of_isolated_node() {
        let mut graph: Graph<i32> = Graph::new();
        graph.add_node(1);
        assert!(graph.neighbors(&1).is_empty());
    }

    #[test]
    fn test_neighbors_preserve_insertion_order() {
        let graph = create_diamond_graph();
        assert_eq!(graph.neighbors("A"), vec!["B", "C"]);
        assert_eq!(graph.neighbors("B"), vec!["D"]);
        assert!(graph.neighbors("D").is_empty());
    }

    #[test]
    fn test_edges_in_source_index_order() {
        let graph = create_diamond_graph();
        assert_eq!(
            graph.edges(),
            vec![
                Edge::new("A", "B"),
                Edge::new("A", "C"),
                Edge::new("B", "D"),
                Edge::new("C", "D"),
            ]
        );
    }

    #[test]
    fn test_results_are_snapshots() {
        let mut graph = create_diamond_graph();
        let nodes = graph.nodes();
        let edges = graph.edges();
        let neighbors = graph.neighbors("A");

        graph.add_edge("A", "E");

        assert_eq!(nodes.len(), 4);
        assert_eq!(edges.len(), 4);
        assert_eq!(neighbors, vec!["B", "C"]);
        assert_eq!(graph.neighbors("A"), vec!["B", "C", "E"]);
    }

    #[test]
    fn test_iter_pairs_ids_with_values() {
        let graph = create_diamond_graph();
        let pairs: Vec<(NodeId, &&str)> = graph.iter().collect();
        assert_eq!(pairs[0], (NodeId::new(0), &"A"));
        assert_eq!(pairs[3], (NodeId::new(3), &"D"));
    }

    #[test]
    fn test_neighbor_ids() {
        let graph = create_diamond_graph();
        assert_eq!(
            graph.neighbor_ids(NodeId::new(0)),
            &[NodeId::new(1), NodeId::new(2)]
        );
    }

    #[test]
    fn test_collect_from_pairs_and_edges() {
        let from_pairs: Graph<i32> = vec![(1, 2), (2, 3)].into_iter().collect();
        let from_edges: Graph<i32> = vec![Edge::new(1, 2), Edge::new(2, 3)]
            .into_iter()
            .collect();

        assert_eq!(from_pairs, from_edges);
        assert_eq!(from_pairs.edge_count(), 2);
    }

    #[test]
    fn test_extend_appends_edges() {
        let mut graph = create_diamond_graph();
        graph.extend([("D", "A"), ("D", "A")]);

        assert_eq!(graph.edge_count(), 6);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.out_degree("D"), 2);
    }

    #[test]
    fn test_graph_clone_is_independent() {
        let original = create_diamond_graph();
        let mut cloned = original.clone();
        cloned.add_edge("D", "E");

        assert_eq!(original.node_count(), 4);
        assert_eq!(cloned.node_count(), 5);
        assert_ne!(original, cloned);
    }

    #[test]
    fn test_large_graph() {
        let mut graph: Graph<usize> = Graph::with_capacity(1000);
        for i in 0..999 {
            graph.add_edge(i, i + 1);
        }

        assert_eq!(graph.node_count(), 1000);
        assert_eq!(graph.edge_count(), 999);
        assert_eq!(graph.out_degree(&0), 1);
        assert_eq!(graph.out_degree(&999), 0);
        assert_eq!(graph.node_id(&999), Some(NodeId::new(999)));
    }
}
