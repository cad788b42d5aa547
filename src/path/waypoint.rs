use super::Path;
use crate::NodeID;
use std::fmt;

/// A Node on a [`Path`], with the label it had in the Graph.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Waypoint {
    /// the Node
    pub id: NodeID,
    /// the label of the Node
    pub label: String,
}

impl Waypoint {
    /// Creates a new Waypoint
    pub fn new(id: NodeID, label: impl Into<String>) -> Waypoint {
        Waypoint {
            id,
            label: label.into(),
        }
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}({})", self.label, self.id)
    }
}

impl Path<Waypoint> {
    /// The ids of all steps, from start to goal
    pub fn ids(&self) -> Vec<NodeID> {
        self.iter().map(|waypoint| waypoint.id).collect()
    }
}
