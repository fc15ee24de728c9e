//! High-level route planning over named waypoint maps.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported routing algorithms (Dijkstra, A*)
//! - [`RouteRequest`] - High-level route planning request
//! - [`RoutePlan`] - Planned route result
//! - [`plan_route`] - Main entry point for computing routes
//!
//! # Strategy Pattern
//!
//! Each algorithm is encapsulated in its own planner struct behind the
//! [`RoutePlanner`] trait, so new algorithms can be added without touching
//! the orchestration logic.
//!
//! # Example
//!
//! ```ignore
//! use waypath_lib::{load_map, plan_route, RouteRequest};
//!
//! let graph = load_map(Path::new("map.json"))?;
//! let request = RouteRequest::astar("Harbor", "Summit");
//! let plan = plan_route(&graph, &request)?;
//! println!("Route: {} hops", plan.hop_count());
//! ```

mod planner;

pub use planner::{select_planner, AStarPlanner, DijkstraPlanner, RoutePlanner};

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::map::{NodeId, WaypointGraph};

/// How many fuzzy suggestions to attach to an unknown-name error.
const SUGGESTION_LIMIT: usize = 3;

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Dijkstra's algorithm (weighted graph, no heuristic).
    Dijkstra,
    /// A* search (heuristic guided).
    #[default]
    #[serde(rename = "a-star")]
    AStar,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Dijkstra => "dijkstra",
            RouteAlgorithm::AStar => "a-star",
        };
        f.write_str(value)
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub algorithm: RouteAlgorithm,
}

impl RouteRequest {
    /// Convenience constructor for A* routes.
    pub fn astar(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::AStar,
        }
    }

    /// Convenience constructor for Dijkstra routes.
    pub fn dijkstra(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::Dijkstra,
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: NodeId,
    pub goal: NodeId,
    pub steps: Vec<NodeId>,
    pub total_cost: f64,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Resolve a waypoint name to its handle, returning an error with fuzzy
/// suggestions for unknown names.
fn resolve_waypoint(graph: &WaypointGraph, name: &str) -> Result<NodeId> {
    graph.node_id_by_name(name).ok_or_else(|| {
        let suggestions = graph.fuzzy_matches(name, SUGGESTION_LIMIT);
        Error::UnknownWaypoint {
            name: name.to_string(),
            suggestions,
        }
    })
}

/// Sum of link costs along consecutive steps.
fn route_cost(graph: &WaypointGraph, steps: &[NodeId]) -> f64 {
    steps
        .windows(2)
        .filter_map(|pair| graph.link_cost(pair[0], pair[1]))
        .sum()
}

/// Compute a route using the requested algorithm.
///
/// This is the main entry point for route planning. It resolves waypoint
/// names, selects the planner strategy, executes the search, and returns a
/// plan carrying the ordered steps and their accumulated cost. A request
/// whose start and goal coincide yields a single-step plan with zero cost.
pub fn plan_route(graph: &WaypointGraph, request: &RouteRequest) -> Result<RoutePlan> {
    let start_id = resolve_waypoint(graph, &request.start)?;
    let goal_id = resolve_waypoint(graph, &request.goal)?;

    let planner = select_planner(request);
    let steps = planner
        .find_path(graph, start_id, goal_id)
        .ok_or_else(|| Error::RouteNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        })?;

    let total_cost = route_cost(graph, &steps);
    tracing::debug!(
        algorithm = %request.algorithm,
        hops = steps.len().saturating_sub(1),
        total_cost,
        "route planned"
    );

    Ok(RoutePlan {
        algorithm: request.algorithm,
        start: start_id,
        goal: goal_id,
        steps,
        total_cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_algorithm_display_names() {
        assert_eq!(RouteAlgorithm::Dijkstra.to_string(), "dijkstra");
        assert_eq!(RouteAlgorithm::AStar.to_string(), "a-star");
    }

    #[test]
    fn route_plan_hop_count() {
        let mut graph = WaypointGraph::new();
        let a = graph.add_waypoint("A", None).unwrap();
        let b = graph.add_waypoint("B", None).unwrap();
        let c = graph.add_waypoint("C", None).unwrap();

        let plan = RoutePlan {
            algorithm: RouteAlgorithm::AStar,
            start: a,
            goal: c,
            steps: vec![a, b, c],
            total_cost: 2.0,
        };
        assert_eq!(plan.hop_count(), 2);
    }

    #[test]
    fn default_algorithm_is_astar() {
        assert_eq!(RouteAlgorithm::default(), RouteAlgorithm::AStar);
    }
}
