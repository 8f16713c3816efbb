//! Directed graphs and algorithms on their structure: classification of
//! vertices, cycle detection, strongly connected components and the minimum
//! augmentation of a graph to a strongly connected one.
//!
//! A [`Graph`] is built once from per-vertex adjacency and is never changed
//! afterwards. Every algorithm borrows the graph and returns a new value.
//!
//! Example usage:
//! ```
//! use digraph::prelude::*;
//! use digraph::{augment, scc::SccMethod};
//!
//! // 0 -> 1, 2 alone
//! let graph = Graph::from_edges(3, &[(0, 1)]).unwrap();
//! let edges = augment::completion_in_condensed(&graph).unwrap();
//! assert_eq!(edges, vec![(1, 2), (2, 0)]);
//!
//! let completed = graph.with_edges(&edges).unwrap();
//! assert_eq!(SccMethod::Tarjan.components(&completed).number_of_colors(), 1);
//! ```
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod augment;
pub mod classify;
pub mod cursor;
pub mod error;
pub mod generators;
pub mod graph;
pub mod incidence;
pub mod scc;

pub use error::{GraphError, Result};
pub use graph::Graph;

/// Commonly used types and traits
pub mod prelude {
    pub use super::{
        cursor::VertexIterator,
        error::GraphError,
        graph::Graph,
        incidence::{AdjacencyList, AdjacencyRow, Incidence},
    };
}
