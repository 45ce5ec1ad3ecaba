//! Keyed adjacency-list directed graph.
//!
//! This module provides [`Graph`], a directed graph whose nodes are arbitrary hashable
//! values. Every distinct value is mapped to a dense [`NodeId`] when it is first seen,
//! and edges are stored as per-node lists of target indices.
//!
//! # Architecture
//!
//! - **Core Types**: [`Graph`], [`NodeId`] and [`Edge`]
//! - **Import**: the [`NodeSource`] capability and [`Graph::from_sources`] build a graph
//!   from domain objects that know their own identity and outgoing edges
//! - **Rendering**: a [`Display`](std::fmt::Display) impl with one line per node, and
//!   [`Graph::to_dot`] for Graphviz output
//!
//! # Design Principles
//!
//! ## Identity by Value
//!
//! Callers address nodes by value. The index assigned to a value never changes, and
//! adding a value that is already present is a no-op that hands back the existing index.
//!
//! ## Multigraph Semantics
//!
//! Adding the same `(from, to)` pair twice stores two edges. [`Graph::edge_count`]
//! counts both; [`Graph::has_edge`] reports only presence.
//!
//! ## Snapshot Results
//!
//! Queries such as [`Graph::nodes`], [`Graph::edges`] and [`Graph::neighbors`] return
//! owned vectors. Mutating the graph afterwards does not affect them.
//!
//! # Usage Examples
//!
//! ```rust
//! use keygraph::graph::{Edge, Graph};
//!
//! let mut graph: Graph<char> = Graph::new();
//! graph.add_edge('a', 'b');
//! graph.add_edge('a', 'c');
//! graph.add_edge('c', 'a');
//!
//! assert_eq!(graph.neighbors(&'a'), vec!['b', 'c']);
//! assert_eq!(
//!     graph.edges(),
//!     vec![Edge::new('a', 'b'), Edge::new('a', 'c'), Edge::new('c', 'a')]
//! );
//! ```

mod directed;
mod edge;
mod node;
mod render;
mod source;

pub use directed::Graph;
pub use edge::Edge;
pub use node::NodeId;
pub use source::NodeSource;
