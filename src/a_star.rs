use crate::graph::{Coordinates, Graph};
use crate::{NodeID, Path, PathResult, SearchError, SearchResult, Waypoint};

use std::collections::BinaryHeap;

mod element;
use element::HeuristicElement;

mod search_node;
use search_node::SearchNode;

/// Searches `graph` from `start` to `goal` using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// The Cost of a Path is the sum of the `distance`s of its Edges. The Heuristic is the straight-line
/// distance between the [`Coordinates`] of a Node and the goal.
///
/// ## Examples
/// ```
/// # use road_astar::prelude::*;
/// // 0 --4--> 1 --3--> 2
/// //  \________9_______^
/// let mut builder = GraphBuilder::new(3);
/// builder
///     .add_edge(Edge::new(0, 1, 4, 0, "a", "b"))
///     .add_edge(Edge::new(1, 2, 3, 0, "b", "c"))
///     .add_edge(Edge::new(0, 2, 9, 0, "a", "c"));
/// let (graph, coordinates) = builder.build();
///
/// let result = find_path(&graph, &coordinates, 0, 2).unwrap();
/// let path = result.path().unwrap();
///
/// assert_eq!(path.ids(), vec![0, 1, 2]);
/// assert_eq!(path.cost(), 7);
/// ```
///
/// ## Optimality
/// The returned Path is only guaranteed to be the cheapest one if the Heuristic never overestimates
/// the remaining Cost. Nodes are finalized when they are first taken off the frontier and are not
/// reconsidered afterwards, even if a cheaper way to them shows up later.
///
/// ## Returns
/// - `Ok(PathResult::Found(path))` with the Path from `start` to `goal`
/// - `Ok(PathResult::NotFound)` if `goal` can't be reached
/// - `Err(SearchError::InvalidNode { .. })` if `start` or `goal` are not part of `graph`
pub fn find_path(
    graph: &Graph,
    coordinates: &Coordinates,
    start: NodeID,
    goal: NodeID,
) -> SearchResult<PathResult> {
    for id in [start, goal] {
        if !graph.contains(id) {
            return Err(SearchError::InvalidNode {
                id,
                len: graph.len(),
            });
        }
    }
    debug!("searching path {} -> {}", start, goal);

    let mut nodes = vec![SearchNode::default(); graph.len()];
    let mut next = BinaryHeap::with_capacity(graph.len());
    let mut pushed = 0;

    let start_node = &mut nodes[start as usize];
    start_node.start(coordinates.heuristic(start, goal));
    next.push(HeuristicElement(start, start_node.f_cost, pushed));

    let mut expanded = 0;
    while let Some(HeuristicElement(current_id, f_cost, _)) = next.pop() {
        let current = nodes[current_id as usize];
        if current.is_closed() {
            // outdated duplicate
            continue;
        }
        let Some(current_cost) = current.g_cost else {
            continue;
        };

        if current_id == goal {
            debug!(
                "found path {} -> {} with cost {} after expanding {} nodes",
                start, goal, current_cost, expanded
            );
            return Ok(PathResult::Found(reconstruct(graph, &nodes, goal)));
        }

        nodes[current_id as usize].close();
        expanded += 1;
        trace!("expanding {} (g = {}, f = {:.3})", current_id, current_cost, f_cost);

        for edge in graph.edges(current_id) {
            let Some(other) = nodes.get_mut(edge.dest as usize) else {
                continue;
            };
            if other.is_closed() {
                continue;
            }
            let other_cost = current_cost.saturating_add(edge.distance);
            if other.relax(
                other_cost,
                || coordinates.heuristic(edge.dest, goal),
                current_id,
            ) {
                pushed += 1;
                trace!("  {} -> {}: g = {}, f = {:.3}", current_id, edge.dest, other_cost, other.f_cost);
                next.push(HeuristicElement(edge.dest, other.f_cost, pushed));
            }
        }
    }

    debug!(
        "no path {} -> {} after expanding {} nodes",
        start, goal, expanded
    );
    Ok(PathResult::NotFound)
}

/// Follows the parents from `goal` back to the start
fn reconstruct(graph: &Graph, nodes: &[SearchNode], goal: NodeID) -> Path<Waypoint> {
    let mut steps = vec![];
    let mut current = Some(goal);
    while let Some(id) = current {
        steps.push(Waypoint::new(id, graph.label(id).unwrap_or_default()));
        current = nodes[id as usize].parent;
    }
    Path::from_goal(steps, nodes[goal as usize].g_cost.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, GraphBuilder};

    fn diamond() -> (Graph, Coordinates) {
        // 0 -1-> 1 -1-> 3
        // 0 -1-> 2 -5-> 3
        // 1 ---10-----> 2
        let mut builder = GraphBuilder::new(4);
        builder
            .add_edge(Edge::new(0, 1, 1, 0, "a", "b"))
            .add_edge(Edge::new(0, 2, 1, 0, "a", "c"))
            .add_edge(Edge::new(1, 2, 10, 0, "b", "c"))
            .add_edge(Edge::new(1, 3, 1, 0, "b", "d"))
            .add_edge(Edge::new(2, 3, 5, 0, "c", "d"));
        builder.build()
    }

    #[test]
    fn basic() {
        let (graph, coordinates) = diamond();

        let result = find_path(&graph, &coordinates, 0, 3).unwrap();
        let path = result.path().unwrap();

        assert_eq!(path.ids(), vec![0, 1, 3]);
        assert_eq!(path.cost(), 2);
        assert_eq!(path.start().unwrap().label, "a");
        assert_eq!(path.goal().unwrap().label, "d");
    }

    #[test]
    fn start_is_goal() {
        let (graph, coordinates) = diamond();

        let result = find_path(&graph, &coordinates, 2, 2).unwrap();

        assert_eq!(
            result,
            PathResult::Found(Path::new(vec![Waypoint::new(2, "c")], 0))
        );
    }

    #[test]
    fn unreachable_goal() {
        let (graph, coordinates) = diamond();

        let result = find_path(&graph, &coordinates, 3, 0).unwrap();

        assert_eq!(result, PathResult::NotFound);
    }

    #[test]
    fn invalid_nodes() {
        let (graph, coordinates) = diamond();

        assert_eq!(
            find_path(&graph, &coordinates, 4, 0),
            Err(SearchError::InvalidNode { id: 4, len: 4 })
        );
        assert_eq!(
            find_path(&graph, &coordinates, 0, NodeID::MAX),
            Err(SearchError::InvalidNode {
                id: NodeID::MAX,
                len: 4
            })
        );
    }

    #[test]
    fn empty_graph() {
        let (graph, coordinates) = GraphBuilder::new(0).build();

        assert_eq!(
            find_path(&graph, &coordinates, 0, 0),
            Err(SearchError::InvalidNode { id: 0, len: 0 })
        );
    }

    #[test]
    fn closed_nodes_are_final() {
        // The Heuristic of 1 overestimates, so 1 is only expanded after 2 was closed through the
        // expensive direct Edge. The cheaper way to 2 through 1 is then ignored.
        let mut builder = GraphBuilder::new(4);
        builder
            .add_edge(Edge::new(0, 1, 1, 0, "a", "b"))
            .add_edge(Edge::new(0, 2, 5, 0, "a", "c"))
            .add_edge(Edge::new(1, 2, 1, 0, "b", "c"))
            .add_edge(Edge::new(2, 3, 200, 0, "c", "d"))
            .add_coordinate(0, (0, 0))
            .add_coordinate(1, (0, 100))
            .add_coordinate(2, (0, 0))
            .add_coordinate(3, (0, 0));
        let (graph, coordinates) = builder.build();

        let result = find_path(&graph, &coordinates, 0, 3).unwrap();
        let path = result.path().unwrap();

        assert_eq!(path.ids(), vec![0, 2, 3]);
        assert_eq!(path.cost(), 205);
    }

    #[test]
    fn deterministic_ties() {
        // both ways cost 2, the Edge added first wins
        let mut builder = GraphBuilder::new(4);
        builder
            .add_edge(Edge::new(0, 2, 1, 0, "a", "c"))
            .add_edge(Edge::new(0, 1, 1, 0, "a", "b"))
            .add_edge(Edge::new(1, 3, 1, 0, "b", "d"))
            .add_edge(Edge::new(2, 3, 1, 0, "c", "d"));
        let (graph, coordinates) = builder.build();

        for _ in 0..3 {
            let result = find_path(&graph, &coordinates, 0, 3).unwrap();
            assert_eq!(result.path().unwrap().ids(), vec![0, 2, 3]);
        }
    }
}
