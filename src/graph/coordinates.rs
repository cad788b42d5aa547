use crate::{NodeID, Point};
use hashbrown::HashMap;

/// The Position of every Node, used as the Heuristic of the search.
///
/// Nodes without a Position get a Heuristic of `0`, which never overestimates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Coordinates {
    points: HashMap<NodeID, Point>,
}

impl Coordinates {
    /// Creates an empty table
    pub fn new() -> Coordinates {
        Coordinates::default()
    }

    pub(crate) fn insert(&mut self, id: NodeID, point: Point) -> Option<Point> {
        self.points.insert(id, point)
    }

    /// The Position of `id`, if it has one
    pub fn get(&self, id: NodeID) -> Option<Point> {
        self.points.get(&id).copied()
    }

    /// The number of Nodes with a Position
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` if no Node has a Position
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Estimates the distance from `point` to `goal` as the straight line between them.
    pub fn heuristic(&self, point: NodeID, goal: NodeID) -> f64 {
        match (self.get(point), self.get(goal)) {
            (Some(a), Some(b)) => euclidean(a, b),
            _ => 0.0,
        }
    }
}

impl FromIterator<(NodeID, Point)> for Coordinates {
    fn from_iter<I: IntoIterator<Item = (NodeID, Point)>>(iter: I) -> Coordinates {
        Coordinates {
            points: iter.into_iter().collect(),
        }
    }
}

/// The straight-line distance between two Points
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.0) - f64::from(b.0);
    let dy = f64::from(a.1) - f64::from(b.1);
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance() {
        assert_eq!(euclidean((0, 0), (3, 4)), 5.0);
        assert_eq!(euclidean((3, 4), (0, 0)), 5.0);
        assert_eq!(euclidean((-2, 7), (-2, 7)), 0.0);
    }

    #[test]
    fn missing_point() {
        let coordinates: Coordinates = [(0, (0, 0)), (1, (6, 8))].into_iter().collect();

        assert_eq!(coordinates.heuristic(0, 1), 10.0);
        assert_eq!(coordinates.heuristic(0, 2), 0.0);
        assert_eq!(coordinates.heuristic(2, 1), 0.0);
    }
}
