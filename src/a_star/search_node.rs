use crate::{Cost, NodeID};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NodeState {
    /// no Path found yet
    Unvisited,
    /// a Path is known, but might still improve
    Frontier,
    /// the Path is final
    Closed,
}

/// The per-search state of one Node of the Graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SearchNode {
    /// Cost of the best known Path from the start. `None` means not reached yet
    pub g_cost: Option<Cost>,
    /// `g_cost` plus the Heuristic towards the goal
    pub f_cost: f64,
    /// the previous Node on the best known Path
    pub parent: Option<NodeID>,
    pub state: NodeState,
}

impl Default for SearchNode {
    fn default() -> SearchNode {
        SearchNode {
            g_cost: None,
            f_cost: f64::INFINITY,
            parent: None,
            state: NodeState::Unvisited,
        }
    }
}

impl SearchNode {
    pub fn is_closed(&self) -> bool {
        self.state == NodeState::Closed
    }

    pub fn start(&mut self, heuristic: f64) {
        self.g_cost = Some(0);
        self.f_cost = heuristic;
        self.parent = None;
        self.state = NodeState::Frontier;
    }

    /// Takes the Path of `cost` through `parent` if it is strictly cheaper than the known one.
    ///
    /// Closed Nodes are never changed. Returns `true` if the Node was updated.
    pub fn relax(&mut self, cost: Cost, heuristic: impl FnOnce() -> f64, parent: NodeID) -> bool {
        if self.is_closed() || self.g_cost.map_or(false, |known| known <= cost) {
            return false;
        }
        self.g_cost = Some(cost);
        self.f_cost = f64::from(cost) + heuristic();
        self.parent = Some(parent);
        self.state = NodeState::Frontier;
        true
    }

    pub fn close(&mut self) {
        self.state = NodeState::Closed;
    }
}
