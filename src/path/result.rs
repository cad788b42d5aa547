use super::{Path, Waypoint};
use crate::Cost;
use std::fmt;

/// The outcome of a search.
///
/// Printing it gives the report of the search: the Path from goal back to start, or a notice that
/// the goal can't be reached.
/// ```
/// # use road_astar::{Path, PathResult, Waypoint};
/// let path = Path::from_goal(vec![Waypoint::new(3, "sadar"), Waypoint::new(4, "bluearea")], 3);
///
/// assert_eq!(
///     PathResult::Found(path).to_string(),
///     "Path found: sadar(3)<--bluearea(4)<--"
/// );
/// assert_eq!(PathResult::NotFound.to_string(), "No path found!");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathResult {
    /// The cheapest Path that was found, ordered from start to goal
    Found(Path<Waypoint>),
    /// The goal can't be reached from the start
    NotFound,
}

impl PathResult {
    /// `true` if a Path was found
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }

    /// The Path, if one was found
    pub fn path(&self) -> Option<&Path<Waypoint>> {
        match self {
            PathResult::Found(path) => Some(path),
            PathResult::NotFound => None,
        }
    }

    /// Converts into the Path, if one was found
    pub fn into_path(self) -> Option<Path<Waypoint>> {
        match self {
            PathResult::Found(path) => Some(path),
            PathResult::NotFound => None,
        }
    }

    /// The total Cost of the Path, if one was found
    pub fn cost(&self) -> Option<Cost> {
        self.path().map(Path::cost)
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PathResult::Found(path) => {
                write!(fmt, "Path found: ")?;
                for waypoint in path.iter().rev() {
                    write!(fmt, "{}<--", waypoint)?;
                }
                Ok(())
            }
            PathResult::NotFound => write!(fmt, "No path found!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_node() {
        let result = PathResult::Found(Path::from_goal(vec![Waypoint::new(3, "sadar")], 0));

        assert!(result.is_found());
        assert_eq!(result.cost(), Some(0));
        assert_eq!(result.to_string(), "Path found: sadar(3)<--");
    }

    #[test]
    fn not_found() {
        let result = PathResult::NotFound;

        assert!(!result.is_found());
        assert_eq!(result.cost(), None);
        assert_eq!(result.into_path(), None);
    }
}
