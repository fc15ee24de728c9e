use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Fuzzy-match scores below this are too dissimilar to suggest.
const SUGGESTION_THRESHOLD: f64 = 0.84;

/// Dense index handle for a waypoint, meaningful only to the graph that
/// issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    /// Position of the waypoint in the graph's dense storage.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cartesian coordinates for a waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    /// Calculate the Euclidean distance to another position.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// A named node with optional location data.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub name: String,
    pub position: Option<Position>,
}

/// Directed weighted connection to another waypoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub target: NodeId,
    pub cost: f64,
}

/// Adjacency-list graph over named waypoints.
#[derive(Debug, Clone, Default)]
pub struct WaypointGraph {
    waypoints: Vec<Waypoint>,
    links: Vec<Vec<Link>>,
    name_to_id: HashMap<String, NodeId>,
}

impl WaypointGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a waypoint and return its handle. Names must be unique.
    pub fn add_waypoint(
        &mut self,
        name: impl Into<String>,
        position: Option<Position>,
    ) -> Result<NodeId> {
        let name = name.into();
        if self.name_to_id.contains_key(&name) {
            return Err(Error::DuplicateWaypoint { name });
        }

        let id = NodeId(self.waypoints.len() as u32);
        self.name_to_id.insert(name.clone(), id);
        self.waypoints.push(Waypoint { name, position });
        self.links.push(Vec::new());
        Ok(id)
    }

    /// Add a directed link from `from` to `to` with a non-negative cost.
    pub fn link(&mut self, from: NodeId, to: NodeId, cost: f64) -> Result<()> {
        if cost < 0.0 {
            return Err(Error::NegativeLinkCost {
                from: self.waypoint_name(from).unwrap_or("<unknown>").to_string(),
                to: self.waypoint_name(to).unwrap_or("<unknown>").to_string(),
                cost,
            });
        }

        self.links[from.index()].push(Link { target: to, cost });
        Ok(())
    }

    /// Add links in both directions with the same cost.
    pub fn link_both(&mut self, a: NodeId, b: NodeId, cost: f64) -> Result<()> {
        self.link(a, b, cost)?;
        self.link(b, a, cost)
    }

    /// Lookup a waypoint handle by its case-sensitive name.
    pub fn node_id_by_name(&self, name: &str) -> Option<NodeId> {
        self.name_to_id.get(name).copied()
    }

    /// Lookup a waypoint name by handle.
    pub fn waypoint_name(&self, id: NodeId) -> Option<&str> {
        self.waypoints.get(id.index()).map(|w| w.name.as_str())
    }

    /// Location of a waypoint, when the map provides one.
    pub fn position(&self, id: NodeId) -> Option<Position> {
        self.waypoints.get(id.index()).and_then(|w| w.position)
    }

    /// Minimum cost across parallel links from `a` to `b`, if any link
    /// connects them.
    pub fn link_cost(&self, a: NodeId, b: NodeId) -> Option<f64> {
        self.links
            .get(a.index())?
            .iter()
            .filter(|link| link.target == b)
            .map(|link| link.cost)
            .min_by(|x, y| x.partial_cmp(y).unwrap_or(Ordering::Greater))
    }

    /// Total number of directed links in the graph.
    pub fn link_count(&self) -> usize {
        self.links.iter().map(Vec::len).sum()
    }

    /// Waypoint names similar to `name`, best match first, at most `limit`
    /// entries. Used to build "did you mean" suggestions.
    pub fn fuzzy_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .waypoints
            .iter()
            .map(|w| {
                (
                    strsim::jaro_winkler(&needle, &w.name.to_lowercase()),
                    w.name.as_str(),
                )
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
        scored.truncate(limit);
        scored.into_iter().map(|(_, n)| n.to_string()).collect()
    }
}

/// Iterator over the targets of a waypoint's outgoing links.
pub struct WaypointNeighbors<'a> {
    inner: std::slice::Iter<'a, Link>,
}

impl<'a> Iterator for WaypointNeighbors<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        self.inner.next().map(|link| link.target)
    }
}

impl Graph for WaypointGraph {
    type Node = Waypoint;
    type Handle = NodeId;
    type Neighbors<'a>
        = WaypointNeighbors<'a>
    where
        Self: 'a;

    fn lookup(&self, handle: NodeId) -> &Waypoint {
        &self.waypoints[handle.index()]
    }

    fn neighbors(&self, handle: NodeId) -> WaypointNeighbors<'_> {
        WaypointNeighbors {
            inner: self
                .links
                .get(handle.index())
                .map(Vec::as_slice)
                .unwrap_or(&[])
                .iter(),
        }
    }

    fn len(&self) -> usize {
        self.waypoints.len()
    }

    fn is_valid_handle(&self, handle: NodeId) -> bool {
        handle.index() < self.waypoints.len()
    }
}

#[derive(Debug, Deserialize)]
struct MapFile {
    waypoints: Vec<WaypointEntry>,
    #[serde(default)]
    links: Vec<LinkEntry>,
}

#[derive(Debug, Deserialize)]
struct WaypointEntry {
    name: String,
    #[serde(default)]
    position: Option<Position>,
}

#[derive(Debug, Deserialize)]
struct LinkEntry {
    from: String,
    to: String,
    cost: f64,
    #[serde(default)]
    oneway: bool,
}

/// Load a waypoint map from a JSON file.
///
/// Link endpoints are verified against the declared waypoints so corrupt
/// edges never reach the in-memory graph, and negative link costs are
/// rejected up front.
pub fn load_map(path: &Path) -> Result<WaypointGraph> {
    debug!(path = %path.display(), "loading waypoint map");
    let file = File::open(path)?;
    parse_map(BufReader::new(file))
}

/// Parse a waypoint map from a JSON reader. See [`load_map`].
pub fn parse_map(reader: impl Read) -> Result<WaypointGraph> {
    let map_file: MapFile = serde_json::from_reader(reader)?;

    let mut graph = WaypointGraph::new();
    for entry in map_file.waypoints {
        graph.add_waypoint(entry.name, entry.position)?;
    }

    for link in map_file.links {
        let from = graph
            .node_id_by_name(&link.from)
            .ok_or(Error::UnknownLinkEndpoint { name: link.from })?;
        let to = graph
            .node_id_by_name(&link.to)
            .ok_or(Error::UnknownLinkEndpoint { name: link.to })?;

        if link.oneway {
            graph.link(from, to, link.cost)?;
        } else {
            graph.link_both(from, to, link.cost)?;
        }
    }

    debug!(
        waypoints = graph.waypoints.len(),
        links = graph.link_count(),
        "parsed waypoint map"
    );
    Ok(graph)
}
