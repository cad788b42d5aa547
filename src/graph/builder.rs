use super::{Coordinates, Edge, Graph, Node};
use crate::{NodeID, Point};

/// Puts together a [`Graph`] and its [`Coordinates`].
///
/// Edges are directed and never mirrored: a Road that can be driven both ways needs two Edges.
/// Adding an Edge to a Node beyond the current size grows the Graph up to that Node.
///
/// ## Labels
/// Every Node is labeled with the `source_name` of its first outgoing Edge. Nodes without outgoing
/// Edges use the `destination_name` of the first Edge leading to them, and Nodes without any Edges
/// use their id.
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    nodes: slab::Slab<Node>,
    coordinates: Coordinates,
}

impl GraphBuilder {
    /// Creates a Builder with `vertices` Nodes that have no Edges yet.
    pub fn new(vertices: usize) -> GraphBuilder {
        let mut nodes = slab::Slab::with_capacity(vertices);
        for _ in 0..vertices {
            nodes.insert(Node::default());
        }
        GraphBuilder {
            nodes,
            coordinates: Coordinates::new(),
        }
    }

    fn ensure_node(&mut self, id: NodeID) {
        while self.nodes.len() <= id as usize {
            self.nodes.insert(Node::default());
        }
    }

    /// Appends `edge` to the outgoing Edges of `edge.src`
    pub fn add_edge(&mut self, edge: Edge) -> &mut GraphBuilder {
        self.ensure_node(edge.src);
        self.ensure_node(edge.dest);
        self.nodes[edge.src as usize].edges.push(edge);
        self
    }

    /// Sets the Position of `id`, replacing any previous one
    pub fn add_coordinate(&mut self, id: NodeID, point: Point) -> &mut GraphBuilder {
        self.coordinates.insert(id, point);
        self
    }

    /// Labels all Nodes and returns the finished Graph with its Coordinates
    pub fn build(mut self) -> (Graph, Coordinates) {
        let mut labels: Vec<Option<String>> = self
            .nodes
            .iter()
            .map(|(_, node)| node.edges.first().map(|edge| edge.source_name.clone()))
            .collect();

        for (_, node) in self.nodes.iter() {
            for edge in node.edges.iter() {
                let label = &mut labels[edge.dest as usize];
                if label.is_none() {
                    *label = Some(edge.destination_name.clone());
                }
            }
        }

        for ((id, node), label) in self.nodes.iter_mut().zip(labels) {
            node.label = label.unwrap_or_else(|| id.to_string());
        }

        (Graph::from_nodes(self.nodes), self.coordinates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directed() {
        let mut builder = GraphBuilder::new(2);
        builder.add_edge(Edge::new(0, 1, 16, 40, "comsats", "alipur"));
        let (graph, _) = builder.build();

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.edges(0).len(), 1);
        assert!(graph.edges(1).is_empty());
    }

    #[test]
    fn grows_to_destination() {
        let mut builder = GraphBuilder::new(2);
        builder.add_edge(Edge::new(0, 4, 3, 5, "a", "e"));
        let (graph, _) = builder.build();

        assert_eq!(graph.len(), 5);
        assert!(graph.contains(4));
        assert!(graph.edges(4).is_empty());
        assert!(!graph.contains(5));
    }

    #[test]
    fn labels() {
        let mut builder = GraphBuilder::new(4);
        builder
            .add_edge(Edge::new(1, 2, 8, 15, "alipur", "hostel city"))
            .add_edge(Edge::new(2, 3, 9, 10, "hostelcity", "sadar"))
            .add_edge(Edge::new(2, 1, 8, 15, "hostel city", "alipur"));
        let (graph, _) = builder.build();

        // outgoing names win over incoming ones
        assert_eq!(graph.label(2), Some("hostelcity"));
        assert_eq!(graph.label(1), Some("alipur"));
        // no outgoing Edges
        assert_eq!(graph.label(3), Some("sadar"));
        // no Edges at all
        assert_eq!(graph.label(0), Some("0"));
        assert_eq!(graph.label(4), None);
    }

    #[test]
    fn coordinates() {
        let mut builder = GraphBuilder::new(1);
        builder.add_coordinate(0, (1, 1)).add_coordinate(0, (4, 5));
        let (_, coordinates) = builder.build();

        assert_eq!(coordinates.len(), 1);
        assert_eq!(coordinates.get(0), Some((4, 5)));
    }
}
