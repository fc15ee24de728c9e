//! Route planning strategies implementing the Strategy pattern.

use crate::map::{NodeId, WaypointGraph};
use crate::search::{astar_with, dijkstra_with, DegenerateGoal};

use super::{RouteAlgorithm, RouteRequest};

/// Trait for route planning strategies.
///
/// Each implementation encapsulates a specific pathfinding algorithm.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the pathfinding algorithm on the given graph.
    ///
    /// Returns `Some(path)` if a route is found, `None` otherwise. A route
    /// from a waypoint to itself is the single-node path.
    fn find_path(&self, graph: &WaypointGraph, start: NodeId, goal: NodeId)
        -> Option<Vec<NodeId>>;
}

/// Cost of following the cheapest link between two adjacent waypoints.
fn link_cost(graph: &WaypointGraph, from: NodeId, to: NodeId) -> f64 {
    graph.link_cost(from, to).unwrap_or(f64::INFINITY)
}

/// Straight-line distance between two waypoints when both carry positions,
/// zero otherwise.
///
/// Admissibility is the map author's contract: positions must be scaled so
/// that the straight-line distance never exceeds the cheapest link cost
/// between two waypoints.
fn heuristic_distance(graph: &WaypointGraph, from: NodeId, to: NodeId) -> f64 {
    let Some(goal) = graph.position(to) else {
        return 0.0;
    };

    match graph.position(from) {
        Some(current) => current.distance_to(&goal),
        None => 0.0,
    }
}

fn non_empty(path: Vec<NodeId>) -> Option<Vec<NodeId>> {
    if path.is_empty() {
        None
    } else {
        Some(path)
    }
}

/// Dijkstra's algorithm planner for weighted traversal without a heuristic.
#[derive(Debug, Clone, Default)]
pub struct DijkstraPlanner;

impl RoutePlanner for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_path(
        &self,
        graph: &WaypointGraph,
        start: NodeId,
        goal: NodeId,
    ) -> Option<Vec<NodeId>> {
        non_empty(dijkstra_with(
            DegenerateGoal::SingleNode,
            graph,
            start,
            goal,
            link_cost,
        ))
    }
}

/// A* planner guided by waypoint positions when the map provides them.
#[derive(Debug, Clone, Default)]
pub struct AStarPlanner;

impl RoutePlanner for AStarPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::AStar
    }

    fn find_path(
        &self,
        graph: &WaypointGraph,
        start: NodeId,
        goal: NodeId,
    ) -> Option<Vec<NodeId>> {
        non_empty(astar_with(
            DegenerateGoal::SingleNode,
            graph,
            start,
            goal,
            link_cost,
            heuristic_distance,
        ))
    }
}

/// Select the appropriate planner for a given request.
pub fn select_planner(request: &RouteRequest) -> Box<dyn RoutePlanner> {
    match request.algorithm {
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
        RouteAlgorithm::AStar => Box::new(AStarPlanner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planners_report_their_algorithm() {
        assert_eq!(DijkstraPlanner.algorithm(), RouteAlgorithm::Dijkstra);
        assert_eq!(AStarPlanner.algorithm(), RouteAlgorithm::AStar);
    }

    #[test]
    fn select_planner_chooses_correct_type() {
        let request = RouteRequest::dijkstra("A", "B");
        let planner = select_planner(&request);
        assert_eq!(planner.algorithm(), RouteAlgorithm::Dijkstra);
    }

    #[test]
    fn find_path_to_self_is_single_node() {
        let mut graph = WaypointGraph::new();
        let a = graph.add_waypoint("Solo", None).unwrap();

        let path = AStarPlanner.find_path(&graph, a, a).expect("degenerate route");
        assert_eq!(path, vec![a]);
    }
}
