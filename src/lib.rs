#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find shortest Paths through a small Road Network using A*.
//!
//! ## Introduction
//! The Network is a directed Graph of named Locations. Every Edge carries a distance, which is
//! what the search minimizes, and a travel time, which is carried along but not searched on.
//! Roads that can be driven in both directions are stored as two separate Edges, and those two
//! Edges don't need to have the same distance.
//!
//! Every Location also has a Position on a 2D plane. The straight-line distance between two
//! Positions is used as the Heuristic of the A* search. Note that **the resulting Paths are only
//! guaranteed to be optimal if that Heuristic never overestimates** the actual remaining distance.
//! The Positions of the built-in Network are illustrative and are not adjusted to make that true
//! for every pair of Locations.
//!
//! ## Examples
//! Searching the built-in Network:
//! ```
//! use road_astar::prelude::*;
//!
//! let (graph, coordinates) = road_network();
//!
//! let result = find_path(&graph, &coordinates, COMSATS, I8).unwrap();
//!
//! let path = result.path().unwrap();
//! assert_eq!(path.cost(), 44);
//! assert_eq!(path.ids(), vec![COMSATS, ALIPUR, BLUE_AREA, SADAR, I8]);
//!
//! assert_eq!(
//!     result.to_string(),
//!     "Path found: I8(5)<--sadar(3)<--bluearea(4)<--alipur(1)<--comsats(0)<--"
//! );
//! ```
//!
//! ### Building a Network
//! Any other Network can be put together with a [`GraphBuilder`](graph::GraphBuilder):
//! ```
//! use road_astar::prelude::*;
//!
//! let mut builder = GraphBuilder::new(3);
//! builder
//!     .add_edge(Edge::new(0, 1, 4, 6, "home", "bakery"))
//!     .add_edge(Edge::new(1, 2, 3, 5, "bakery", "park"))
//!     .add_coordinate(0, (0, 0))
//!     .add_coordinate(1, (3, 0))
//!     .add_coordinate(2, (3, 3));
//! let (graph, coordinates) = builder.build();
//!
//! let result = find_path(&graph, &coordinates, 0, 2).unwrap();
//! assert_eq!(result.cost(), Some(7));
//!
//! // Edges are one-way
//! let result = find_path(&graph, &coordinates, 2, 0).unwrap();
//! assert_eq!(result, PathResult::NotFound);
//! ```
//!
//! ### Invalid Nodes
//! Asking for a Node that is not part of the Graph is an Error, while not finding a Path is not:
//! ```
//! use road_astar::prelude::*;
//!
//! let (graph, coordinates) = road_network();
//!
//! let err = find_path(&graph, &coordinates, COMSATS, 42).unwrap_err();
//! assert_eq!(err, SearchError::InvalidNode { id: 42, len: 11 });
//! ```
//!
//! ## Cargo Features
//! - `log`: trace the search through the [`log`](https://docs.rs/log) crate
//! - `serde`: `Serialize` and `Deserialize` for [`Edge`](graph::Edge) and
//!     [`NetworkConfig`](config::NetworkConfig)

#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)+) => { log::trace!($($arg)+) };
}
#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)+) => {
        if false {
            let _ = format_args!($($arg)+);
        }
    };
}

#[cfg(feature = "log")]
macro_rules! debug {
    ($($arg:tt)+) => { log::debug!($($arg)+) };
}
#[cfg(not(feature = "log"))]
macro_rules! debug {
    ($($arg:tt)+) => {
        if false {
            let _ = format_args!($($arg)+);
        }
    };
}

/// The Type used to reference a Node in the Graph
pub type NodeID = u32;

/// A Position on the plane, used for the Heuristic
pub type Point = (i32, i32);

/// The Type used for distances and the total Cost of a Path
pub type Cost = u32;

pub mod graph;

pub mod config;

pub mod network;

mod a_star;
pub use a_star::find_path;

mod error;
pub use error::{SearchError, SearchResult};

mod path;
pub use path::{Iter, Path, PathResult, Waypoint};

/// The prelude for this crate.
pub mod prelude {
    pub use crate::{
        config::NetworkConfig,
        find_path,
        graph::{Coordinates, Edge, Graph, GraphBuilder},
        network::*,
        Cost, NodeID, Path, PathResult, Point, SearchError, SearchResult, Waypoint,
    };
}
