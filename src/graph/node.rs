use super::Edge;

/// A Location in the [`Graph`](super::Graph) and the Roads leaving it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    /// the name shown when printing a Path
    pub label: String,
    /// all outgoing Edges, in the order they were added
    pub edges: Vec<Edge>,
}
