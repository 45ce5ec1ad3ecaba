//! Transfer representation for graphs.
//!
//! A [`GraphDto`] is the flat, index-based form of a [`Graph`] meant for serialization
//! and interchange. It has exactly two fields:
//!
//! - `nodes` - the node values, where a node's position is its index
//! - `adj` - one row per node, holding the indices of that node's successors
//!
//! ```json
//! {"nodes": ["A", "B"], "adj": [[1], []]}
//! ```
//!
//! # Conversions
//!
//! - [`Graph::to_dto`] exports a graph whose node type converts into [`DtoValue`]
//! - [`Graph::try_to_dto`] exports a graph whose node conversion can fail
//! - [`Graph::from_dto`] imports into a `Graph<DtoValue>`, skipping unresolvable entries
//! - [`Graph::try_from_dto`] imports into a typed graph under an [`ImportConfig`]
//!
//! Exported index order is the graph's insertion order, so a round trip reproduces the
//! same [`NodeId`](crate::NodeId) assignment and the same neighbor order.
//!
//! # Malformed Input
//!
//! Neighbor indices at or past `nodes.len()` cannot be resolved. The lenient import drops
//! them. Adjacency rows past the end of the node list have no source; they are dropped as
//! well. Producers that pre-allocate rows emit such surplus rows empty, so empty surplus
//! rows are accepted even by [`GraphDto::validate`].

mod config;
mod value;

pub use config::ImportConfig;
pub use value::{DtoValue, ValueKind};

use std::{convert::Infallible, hash::Hash};

use serde::{Deserialize, Serialize};

use crate::{graph::NodeId, Error, Graph, Result};

/// The serializable, index-based form of a graph.
///
/// Both fields default to empty when missing from the input, so `{}` decodes to the empty
/// graph.
///
/// # Examples
///
/// ```rust
/// use keygraph::{DtoValue, Graph, GraphDto};
///
/// let mut graph: Graph<&str> = Graph::new();
/// graph.add_edge("A", "B");
///
/// let dto = graph.to_dto();
/// assert_eq!(dto.nodes, vec![DtoValue::from("A"), DtoValue::from("B")]);
/// assert_eq!(dto.adj, vec![vec![1], vec![]]);
/// assert_eq!(dto.to_json()?, r#"{"nodes":["A","B"],"adj":[[1],[]]}"#);
/// # Ok::<(), keygraph::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDto {
    /// Node values, positioned by index
    #[serde(default)]
    pub nodes: Vec<DtoValue>,
    /// Successor indices per node
    #[serde(default)]
    pub adj: Vec<Vec<usize>>,
}

impl GraphDto {
    /// Creates an empty transfer representation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of adjacency entries, valid or not.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    /// Checks that every adjacency entry resolves to a node.
    ///
    /// Rows past the end of the node list are accepted only if they are empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AdjacencyMismatch`] if a surplus row carries entries, or
    /// [`Error::InvalidIndex`] for the first neighbor index outside the node list.
    pub fn validate(&self) -> Result<()> {
        let len = self.nodes.len();

        if self.adj.iter().skip(len).any(|row| !row.is_empty()) {
            return Err(Error::AdjacencyMismatch {
                rows: self.adj.len(),
                nodes: len,
            });
        }

        for (row, targets) in self.adj.iter().enumerate().take(len) {
            if let Some(&index) = targets.iter().find(|&&index| index >= len) {
                return Err(Error::InvalidIndex { row, index, len });
            }
        }

        Ok(())
    }

    /// Encodes this representation as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if a value cannot be encoded.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encodes this representation as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if a value cannot be encoded.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decodes a representation from JSON text.
    ///
    /// Decoding checks shape only. Call [`validate`](Self::validate) or import with a strict
    /// [`ImportConfig`] to check the indices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the text is not a valid representation.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decodes a representation from JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the bytes are not a valid representation.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

impl<T> From<&Graph<T>> for GraphDto
where
    T: Hash + Eq + Clone + Into<DtoValue>,
{
    fn from(graph: &Graph<T>) -> Self {
        graph.to_dto()
    }
}

impl From<&GraphDto> for Graph<DtoValue> {
    fn from(dto: &GraphDto) -> Self {
        Graph::from_dto(dto)
    }
}

impl From<GraphDto> for Graph<DtoValue> {
    fn from(dto: GraphDto) -> Self {
        build(dto.nodes, &dto.adj)
    }
}

impl<T> Graph<T>
where
    T: Hash + Eq + Clone,
{
    /// Exports this graph into its transfer representation.
    ///
    /// `nodes` lists every node by ascending index and `adj[i]` lists the indices of the
    /// successors of node `i` in insertion order, parallel edges included.
    ///
    /// Node types whose conversion can fail, such as `u64` and `usize`, export through
    /// [`try_to_dto`](Self::try_to_dto) instead.
    #[must_use]
    pub fn to_dto(&self) -> GraphDto
    where
        T: Into<DtoValue>,
    {
        match self.export(|node| Ok::<_, Infallible>(node.into())) {
            Ok(dto) => dto,
            Err(never) => match never {},
        }
    }

    /// Exports this graph, converting each node with `DtoValue::try_from`.
    ///
    /// Produces the same layout as [`to_dto`](Self::to_dto) and accepts every node type
    /// that it does.
    ///
    /// # Errors
    ///
    /// Returns the first conversion error, for example [`Error::OutOfRange`] for a `u64`
    /// node above `i64::MAX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keygraph::{Graph, ImportConfig};
    ///
    /// let mut graph: Graph<usize> = Graph::new();
    /// graph.add_edge(3, 4);
    ///
    /// let dto = graph.try_to_dto()?;
    /// let restored = Graph::<usize>::try_from_dto(&dto, &ImportConfig::strict())?;
    /// assert_eq!(restored, graph);
    /// # Ok::<(), keygraph::Error>(())
    /// ```
    pub fn try_to_dto(&self) -> Result<GraphDto>
    where
        DtoValue: TryFrom<T>,
        Error: From<<DtoValue as TryFrom<T>>::Error>,
    {
        Ok(self.export(|node| DtoValue::try_from(node))?)
    }

    fn export<E>(
        &self,
        mut convert: impl FnMut(T) -> std::result::Result<DtoValue, E>,
    ) -> std::result::Result<GraphDto, E> {
        let mut dto = GraphDto {
            nodes: Vec::with_capacity(self.node_count()),
            adj: Vec::with_capacity(self.node_count()),
        };

        for (id, node) in self.iter() {
            dto.nodes.push(convert(node.clone())?);
            dto.adj
                .push(self.neighbor_ids(id).iter().map(|t| t.index()).collect());
        }

        tracing::trace!(
            nodes = dto.nodes.len(),
            edges = self.edge_count(),
            "exported transfer representation"
        );

        Ok(dto)
    }

    /// Imports a transfer representation into a typed graph.
    ///
    /// Each node value is converted with `T::try_from`. The first failed conversion aborts
    /// the import. Adjacency handling follows `config`: with `strict_indices` the
    /// representation must pass [`GraphDto::validate`], otherwise unresolvable entries are
    /// skipped as in [`from_dto`](Graph::from_dto).
    ///
    /// # Arguments
    ///
    /// * `dto` - The transfer representation
    /// * `config` - Index checking and size limits
    ///
    /// # Errors
    ///
    /// - [`Error::LimitExceeded`] if the node list is longer than `config.max_nodes`
    /// - [`Error::AdjacencyMismatch`] or [`Error::InvalidIndex`] under strict checking
    /// - any error produced by the node conversion, such as [`Error::ValueKind`] or
    ///   [`Error::OutOfRange`]
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keygraph::{Graph, GraphDto, ImportConfig};
    ///
    /// let dto = GraphDto::from_json(r#"{"nodes":[10,20],"adj":[[1],[0]]}"#)?;
    /// let graph = Graph::<u16>::try_from_dto(&dto, &ImportConfig::strict())?;
    ///
    /// assert!(graph.has_edge(&10, &20));
    /// assert!(graph.has_edge(&20, &10));
    /// # Ok::<(), keygraph::Error>(())
    /// ```
    pub fn try_from_dto(dto: &GraphDto, config: &ImportConfig) -> Result<Self>
    where
        T: TryFrom<DtoValue>,
        Error: From<T::Error>,
    {
        if let Some(limit) = config.max_nodes {
            if dto.nodes.len() > limit {
                return Err(Error::LimitExceeded {
                    count: dto.nodes.len(),
                    limit,
                });
            }
        }

        if config.strict_indices {
            dto.validate()?;
        }

        let nodes = dto
            .nodes
            .iter()
            .cloned()
            .map(T::try_from)
            .collect::<std::result::Result<Vec<T>, T::Error>>()?;

        tracing::debug!(
            nodes = nodes.len(),
            rows = dto.adj.len(),
            strict = config.strict_indices,
            "importing transfer representation"
        );

        Ok(build(nodes, &dto.adj))
    }
}

impl Graph<DtoValue> {
    /// Imports a transfer representation without type conversion.
    ///
    /// This never fails. Neighbor indices outside the node list and adjacency rows past
    /// the end of the node list are skipped. Duplicate node values collapse into one node
    /// whose adjacency collects the rows of every copy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keygraph::{DtoValue, Graph, GraphDto};
    ///
    /// let dto = GraphDto {
    ///     nodes: vec![DtoValue::from("A"), DtoValue::from("B")],
    ///     adj: vec![vec![1, 7], vec![]],
    /// };
    ///
    /// let graph = Graph::from_dto(&dto);
    /// assert_eq!(graph.edge_count(), 1);
    /// assert!(graph.has_edge(&DtoValue::from("A"), &DtoValue::from("B")));
    /// ```
    #[must_use]
    pub fn from_dto(dto: &GraphDto) -> Self {
        build(dto.nodes.clone(), &dto.adj)
    }
}

/// Builds a graph from positioned node values and index rows, skipping entries that do
/// not resolve.
fn build<T>(nodes: Vec<T>, adj: &[Vec<usize>]) -> Graph<T>
where
    T: Hash + Eq + Clone,
{
    let mut graph = Graph::with_capacity(nodes.len());
    let ids: Vec<NodeId> = nodes.into_iter().map(|node| graph.add_node(node)).collect();

    if let Some(surplus) = adj.get(ids.len()..) {
        let dropped: usize = surplus.iter().map(Vec::len).sum();
        if dropped > 0 {
            tracing::warn!(
                rows = surplus.len(),
                dropped,
                "adjacency rows without a source node"
            );
        }
    }

    let mut skipped = 0usize;
    for (source, targets) in ids.iter().zip(adj) {
        for &index in targets {
            match ids.get(index) {
                Some(&target) => graph.push_edge(*source, target),
                None => skipped += 1,
            }
        }
    }

    if skipped > 0 {
        tracing::debug!(skipped, "skipped out-of-range adjacency entries");
    }

    graph
}
