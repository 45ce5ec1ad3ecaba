// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # keygraph
//!
//! A generic, keyed, adjacency-list directed graph. Nodes are arbitrary hashable values;
//! each distinct value is assigned a dense [`NodeId`] on first insertion and keeps it for
//! the lifetime of the graph. Edges are stored per source node as lists of target indices,
//! so parallel edges and self-loops are represented naturally.
//!
//! On top of the container sit two stateless conversions:
//!
//! - **Node-list import** - build a graph from domain objects implementing [`NodeSource`]
//! - **Transfer representation** - convert to and from [`GraphDto`], a flat
//!   `{ "nodes": [...], "adj": [[...]] }` record that serializes with serde
//!
//! ## Quick Start
//!
//! ```rust
//! use keygraph::prelude::*;
//!
//! let mut graph: Graph<&str> = Graph::new();
//! graph.add_edge("parse", "lower");
//! graph.add_edge("lower", "emit");
//!
//! assert!(graph.has_edge("parse", "lower"));
//! assert_eq!(graph.neighbors("lower"), vec!["emit"]);
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edge_count(), 2);
//! ```
//!
//! ## Round-Tripping Through JSON
//!
//! ```rust
//! use keygraph::prelude::*;
//!
//! let mut graph: Graph<i64> = Graph::new();
//! graph.add_edge(1, 2);
//!
//! let json = graph.to_dto().to_json()?;
//! let restored = Graph::<DtoValue>::from_dto(&GraphDto::from_json(&json)?);
//!
//! assert!(restored.has_node(&DtoValue::Integer(1)));
//! assert!(restored.has_edge(&DtoValue::Integer(1), &DtoValue::Integer(2)));
//! # Ok::<(), keygraph::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - the [`Graph`] container, [`NodeId`], [`Edge`] and the [`NodeSource`] importer
//! - [`dto`] - the transfer representation, [`DtoValue`] and [`ImportConfig`]
//! - [`prelude`] - re-exports of the commonly used types
//! - [`Error`] and [`Result`] - errors raised at the conversion boundary
//!
//! ## Error Handling
//!
//! Graph operations are total: adding a duplicate node is a no-op and querying an
//! absent node yields `false` or an empty result. Only decoding and typed import can
//! fail, and they return [`Result`].
//!
//! ## Thread Safety
//!
//! [`Graph<T>`] is [`Send`] and [`Sync`] whenever `T` is. Mutation requires `&mut self`,
//! so shared mutation needs external synchronization supplied by the caller.

pub(crate) mod error;

pub mod dto;
pub mod graph;
pub mod prelude;

/// `keygraph` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
///
/// # Example
///
/// ```rust
/// use keygraph::{GraphDto, Result};
///
/// fn decode(json: &str) -> Result<GraphDto> {
///     GraphDto::from_json(json)
/// }
/// # assert!(decode(r#"{"nodes":[],"adj":[]}"#).is_ok());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The error type returned by fallible `keygraph` operations.
///
/// See [`Error`](crate::Error) for the individual failure modes.
pub use error::Error;

/// Core graph types.
///
/// [`Graph`] is the container, [`NodeId`] the stable per-node index, [`Edge`] a
/// directed value pair and [`NodeSource`] the capability consumed by
/// [`Graph::from_sources`].
pub use graph::{Edge, Graph, NodeId, NodeSource};

/// Transfer representation types.
pub use dto::{DtoValue, GraphDto, ImportConfig, ValueKind};
