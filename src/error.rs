use std::convert::Infallible;

use thiserror::Error;

use crate::dto::ValueKind;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Graph mutation and queries never fail. Errors only arise at the conversion boundary:
/// decoding a transfer representation, converting its loosely typed values into a concrete
/// node type, or validating it under a strict [`ImportConfig`](crate::ImportConfig).
///
/// # Error Categories
///
/// ## Structural Errors
/// - [`Error::InvalidIndex`] - An adjacency entry points past the end of the node list
/// - [`Error::AdjacencyMismatch`] - More adjacency rows than nodes
/// - [`Error::LimitExceeded`] - The node list is larger than the configured limit
///
/// ## Value Errors
/// - [`Error::ValueKind`] - A node value has the wrong kind for the target type
/// - [`Error::OutOfRange`] - An integer node value does not fit the target type
/// - [`Error::NotAChar`] - A string node value does not hold exactly one character
///
/// ## Encoding Errors
/// - [`Error::Json`] - The JSON text could not be encoded or decoded
///
/// # Examples
///
/// ```rust
/// use keygraph::{Error, Graph, GraphDto, ImportConfig};
///
/// let dto = GraphDto::from_json(r#"{"nodes":["a"],"adj":[[0]]}"#)?;
///
/// match Graph::<i64>::try_from_dto(&dto, &ImportConfig::default()) {
///     Err(Error::ValueKind { expected, found }) => {
///         println!("expected {expected}, found {found}");
///     }
///     Err(e) => println!("other error: {e}"),
///     Ok(graph) => println!("{} nodes", graph.node_count()),
/// }
/// # Ok::<(), Error>(())
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// An adjacency row references a node index outside the node list.
    ///
    /// Only reported when strict index checking is enabled. The lenient import skips
    /// such entries instead.
    #[error("adjacency row {row} references node index {index}, but only {len} nodes exist")]
    InvalidIndex {
        /// Position of the offending adjacency row
        row: usize,
        /// The out-of-range neighbor index
        index: usize,
        /// Number of nodes in the transfer representation
        len: usize,
    },

    /// The adjacency table has more rows than there are nodes.
    ///
    /// Rows past the end of the node list have no source node to attach to.
    #[error("adjacency table has {rows} rows for {nodes} nodes")]
    AdjacencyMismatch {
        /// Number of adjacency rows
        rows: usize,
        /// Number of nodes
        nodes: usize,
    },

    /// A node value could not be converted because it is of the wrong kind.
    #[error("expected {expected} value, found {found}")]
    ValueKind {
        /// The kind the target type accepts
        expected: ValueKind,
        /// The kind actually present
        found: ValueKind,
    },

    /// An integer does not fit the requested integer type.
    ///
    /// Raised on import when narrowing a decoded integer, and on export when an unsigned
    /// node value exceeds `i64::MAX`.
    #[error("integer {value} is out of range for {target}")]
    OutOfRange {
        /// The offending value
        value: i128,
        /// Name of the target type
        target: &'static str,
    },

    /// A string node value was imported as `char` but is not exactly one character long.
    #[error("string {value:?} is not a single character")]
    NotAChar {
        /// The decoded string
        value: String,
    },

    /// The transfer representation holds more nodes than allowed.
    #[error("transfer representation has {count} nodes, exceeding the limit of {limit}")]
    LimitExceeded {
        /// Number of nodes present
        count: usize,
        /// Configured maximum
        limit: usize,
    },

    /// JSON encoding or decoding failed.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
