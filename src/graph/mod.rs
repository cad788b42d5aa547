//! The directed Graph of Locations and Roads that is searched.

mod edge;
pub use edge::Edge;

mod node;
pub use node::Node;

mod builder;
pub use builder::GraphBuilder;

mod coordinates;
pub use coordinates::{euclidean, Coordinates};

use crate::NodeID;

/// A read-only adjacency list, created by a [`GraphBuilder`].
///
/// Node ids are dense: every id in `0..len()` is a Node.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: slab::Slab<Node>,
}

impl Graph {
    pub(crate) fn from_nodes(nodes: slab::Slab<Node>) -> Graph {
        Graph { nodes }
    }

    /// The number of Nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if there are no Nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The total number of Edges
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|(_, node)| node.edges.len()).sum()
    }

    /// `true` if `id` is a Node of this Graph
    pub fn contains(&self, id: NodeID) -> bool {
        self.nodes.contains(id as usize)
    }

    /// The Node `id`, if it exists
    pub fn get(&self, id: NodeID) -> Option<&Node> {
        self.nodes.get(id as usize)
    }

    /// The outgoing Edges of `id`. Empty if `id` is not a Node
    pub fn edges(&self, id: NodeID) -> &[Edge] {
        self.get(id).map_or(&[][..], |node| node.edges.as_slice())
    }

    /// The label of `id`, if it exists
    pub fn label(&self, id: NodeID) -> Option<&str> {
        self.get(id).map(|node| node.label.as_str())
    }

    /// Iterates over all Nodes in order of their id
    pub fn iter(&self) -> impl Iterator<Item = (NodeID, &Node)> + '_ {
        self.nodes.iter().map(|(id, node)| (id as NodeID, node))
    }
}

use std::ops::Index;
impl Index<NodeID> for Graph {
    type Output = Node;
    #[track_caller]
    fn index(&self, index: NodeID) -> &Node {
        &self.nodes[index as usize]
    }
}
