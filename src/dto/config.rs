//! Import configuration for the transfer representation
//!
//! The default import is lenient: adjacency entries that point past the node list are
//! dropped without complaint. Consumers reading untrusted or hand-edited input can opt
//! into strict checking and a size limit instead.

/// Configuration for converting a [`GraphDto`](crate::GraphDto) into a typed graph
///
/// Used by [`Graph::try_from_dto`](crate::Graph::try_from_dto).
/// [`Graph::from_dto`](crate::Graph::from_dto) always behaves like [`ImportConfig::lenient`].
///
/// # Examples
///
/// ```rust
/// use keygraph::{Graph, GraphDto, ImportConfig};
///
/// let dto = GraphDto::from_json(r#"{"nodes":[1,2],"adj":[[1,5]]}"#)?;
///
/// let lenient = Graph::<i64>::try_from_dto(&dto, &ImportConfig::lenient())?;
/// assert_eq!(lenient.edge_count(), 1);
///
/// assert!(Graph::<i64>::try_from_dto(&dto, &ImportConfig::strict()).is_err());
/// # Ok::<(), keygraph::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportConfig {
    /// Reject out-of-range neighbor indices and non-empty surplus adjacency rows
    /// instead of skipping them
    pub strict_indices: bool,

    /// Maximum number of nodes accepted (default: unlimited)
    pub max_nodes: Option<usize>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self::lenient()
    }
}

impl ImportConfig {
    /// Creates a lenient configuration
    ///
    /// Invalid adjacency entries are skipped and no size limit applies.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            strict_indices: false,
            max_nodes: None,
        }
    }

    /// Creates a strict configuration
    ///
    /// Any adjacency entry that cannot be resolved fails the import.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            strict_indices: true,
            max_nodes: None,
        }
    }

    /// Returns this configuration with a node limit
    #[must_use]
    pub const fn with_max_nodes(mut self, limit: usize) -> Self {
        self.max_nodes = Some(limit);
        self
    }
}
