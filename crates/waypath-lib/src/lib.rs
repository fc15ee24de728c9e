//! Waypath library entry points.
//!
//! This crate exposes a generic best-first search engine over a minimal
//! graph capability contract, two concrete graph representations (a named
//! waypoint map and a tile grid), and a high-level route planning layer.
//! Higher-level consumers (the CLI) should only depend on the items
//! exported here instead of reimplementing behavior.
//!

pub mod error;
pub mod graph;
pub mod grid;
pub mod map;
pub mod routing;
pub mod search;

pub use error::{Error, Result};
pub use graph::Graph;
pub use grid::{chebyshev, manhattan, Cell, GridGraph, Tile};
pub use map::{load_map, parse_map, Link, NodeId, Position, Waypoint, WaypointGraph};
pub use routing::{
    plan_route, select_planner, AStarPlanner, DijkstraPlanner, RouteAlgorithm, RoutePlan,
    RoutePlanner, RouteRequest,
};
pub use search::{astar, astar_with, dijkstra, dijkstra_with, DegenerateGoal};
