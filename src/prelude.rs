//! # keygraph Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the keygraph library. Import this module to get quick access to the graph
//! container and its conversions.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all keygraph operations
pub use crate::Error;

/// The result type used throughout keygraph
pub use crate::Result;

// ================================================================================================
// Graph Container
// ================================================================================================

/// The keyed directed graph and its index and edge types
pub use crate::graph::{Edge, Graph, NodeId};

/// Bulk construction from domain objects
pub use crate::graph::NodeSource;

// ================================================================================================
// Transfer Representation
// ================================================================================================

/// Serializable graph form and its loosely typed node values
pub use crate::dto::{DtoValue, GraphDto, ValueKind};

/// Configuration for typed import
pub use crate::dto::ImportConfig;
