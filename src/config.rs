//! A plain-data description of a Network.

use crate::graph::{Coordinates, Edge, Graph, GraphBuilder};
use crate::{NodeID, Point};

/// Everything needed to build a [`Graph`] and its [`Coordinates`], as data.
///
/// With the `serde` feature this can be stored in any format serde supports.
///
/// ```
/// # use road_astar::prelude::*;
/// let config = NetworkConfig {
///     vertices: 2,
///     edges: vec![Edge::new(0, 1, 5, 7, "depot", "market")],
///     coordinates: vec![(0, (0, 0)), (1, (3, 4))],
/// };
/// let (graph, coordinates) = config.build();
///
/// assert_eq!(graph.len(), 2);
/// assert_eq!(coordinates.heuristic(0, 1), 5.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkConfig {
    /// The number of Nodes. Edges to higher ids add more Nodes
    pub vertices: usize,
    /// All Edges, in the order they are added to their source Node
    pub edges: Vec<Edge>,
    /// The Position of each Node
    pub coordinates: Vec<(NodeID, Point)>,
}

impl NetworkConfig {
    /// Builds the Graph and Coordinates described by this config
    pub fn build(&self) -> (Graph, Coordinates) {
        let mut builder = GraphBuilder::new(self.vertices);
        for edge in self.edges.iter() {
            builder.add_edge(edge.clone());
        }
        for &(id, point) in self.coordinates.iter() {
            builder.add_coordinate(id, point);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let (graph, coordinates) = NetworkConfig::default().build();

        assert!(graph.is_empty());
        assert!(coordinates.is_empty());
    }

    #[test]
    fn keeps_edge_order() {
        let config = NetworkConfig {
            vertices: 3,
            edges: vec![
                Edge::new(0, 2, 1, 1, "x", "z"),
                Edge::new(0, 1, 2, 2, "x", "y"),
            ],
            coordinates: vec![],
        };
        let (graph, _) = config.build();

        let dests: Vec<NodeID> = graph.edges(0).iter().map(|edge| edge.dest).collect();
        assert_eq!(dests, vec![2, 1]);
        assert_eq!(graph.edge_count(), 2);
    }
}
