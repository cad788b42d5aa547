//! Errors of the search.

use thiserror::Error;

use crate::NodeID;

/// Errors produced by [`find_path`](crate::find_path).
///
/// Not finding a Path is not an Error, see [`PathResult::NotFound`](crate::PathResult::NotFound).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The start or goal is not a Node of the Graph
    #[error("invalid node {id}: graph has {len} nodes")]
    InvalidNode {
        /// the requested Node
        id: NodeID,
        /// the number of Nodes in the Graph
        len: usize,
    },
}

/// Shorthand for results of the search.
pub type SearchResult<T> = Result<T, SearchError>;
