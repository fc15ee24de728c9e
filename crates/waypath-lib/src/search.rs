use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::graph::Graph;

/// Behaviour of a search whose start and target are the same node.
///
/// The default reports the degenerate query as an empty path,
/// indistinguishable from "no path exists". Callers that want the
/// trivially satisfied query reported as a one-node path opt in via
/// [`DegenerateGoal::SingleNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegenerateGoal {
    /// `start == target` yields an empty path.
    #[default]
    EmptyPath,
    /// `start == target` yields `vec![start]`.
    SingleNode,
}

/// Per-node bookkeeping for one search invocation.
///
/// The start node is its own parent; path reconstruction walks parent links
/// until it reaches a node whose parent equals itself.
#[derive(Debug, Clone, Copy)]
struct TraversalRecord<H> {
    parent: H,
    cost_so_far: f64,
    estimated_total: f64,
}

impl<H: Copy> TraversalRecord<H> {
    fn undiscovered(handle: H) -> Self {
        Self {
            parent: handle,
            cost_so_far: f64::INFINITY,
            estimated_total: f64::INFINITY,
        }
    }
}

/// Shortest path from `start` to `target` under `edge_cost`, guided by
/// `heuristic`.
///
/// Both callables share the shape `(graph, from, to) -> f64`. Edge costs
/// must be non-negative and the heuristic admissible and consistent for the
/// returned path to be cheapest; neither property is validated here.
///
/// The result runs `start, .., target` front to back. An empty vector means
/// "no path", "invalid start or target handle", or `start == target` (see
/// [`DegenerateGoal`]); the engine does not distinguish the three.
pub fn astar<G, C, E>(
    graph: &G,
    start: G::Handle,
    target: G::Handle,
    edge_cost: C,
    heuristic: E,
) -> Vec<G::Handle>
where
    G: Graph,
    C: Fn(&G, G::Handle, G::Handle) -> f64,
    E: Fn(&G, G::Handle, G::Handle) -> f64,
{
    astar_with(DegenerateGoal::default(), graph, start, target, edge_cost, heuristic)
}

/// [`astar`] with an explicit policy for the `start == target` query.
pub fn astar_with<G, C, E>(
    policy: DegenerateGoal,
    graph: &G,
    start: G::Handle,
    target: G::Handle,
    edge_cost: C,
    heuristic: E,
) -> Vec<G::Handle>
where
    G: Graph,
    C: Fn(&G, G::Handle, G::Handle) -> f64,
    E: Fn(&G, G::Handle, G::Handle) -> f64,
{
    if !graph.is_valid_handle(start) || !graph.is_valid_handle(target) {
        return Vec::new();
    }

    if start == target {
        return match policy {
            DegenerateGoal::EmptyPath => Vec::new(),
            DegenerateGoal::SingleNode => vec![start],
        };
    }

    let mut records: HashMap<G::Handle, TraversalRecord<G::Handle>> = HashMap::new();
    let mut frontier = BinaryHeap::new();

    let start_estimate = heuristic(graph, start, target);
    records.insert(
        start,
        TraversalRecord {
            parent: start,
            cost_so_far: 0.0,
            estimated_total: start_estimate,
        },
    );
    frontier.push(FrontierEntry::new(start, start_estimate));

    while let Some(entry) = frontier.pop() {
        let current = entry.node;
        let Some(&record) = records.get(&current) else {
            continue;
        };

        // A cheaper path to this node was found after the entry was queued;
        // the snapshot priority no longer matches the authoritative record.
        if entry.priority.0 > record.estimated_total {
            continue;
        }

        if current == target {
            return reconstruct_path(&records, target);
        }

        for neighbor in graph.neighbors(current) {
            let proposed = record.cost_so_far + edge_cost(graph, current, neighbor);
            let neighbor_record = records
                .entry(neighbor)
                .or_insert_with(|| TraversalRecord::undiscovered(neighbor));

            if proposed < neighbor_record.cost_so_far {
                neighbor_record.parent = current;
                neighbor_record.cost_so_far = proposed;
                neighbor_record.estimated_total = proposed + heuristic(graph, neighbor, target);
                frontier.push(FrontierEntry::new(neighbor, neighbor_record.estimated_total));
            }
        }
    }

    Vec::new()
}

/// Uniform-cost search: [`astar`] with a zero heuristic.
pub fn dijkstra<G, C>(
    graph: &G,
    start: G::Handle,
    target: G::Handle,
    edge_cost: C,
) -> Vec<G::Handle>
where
    G: Graph,
    C: Fn(&G, G::Handle, G::Handle) -> f64,
{
    dijkstra_with(DegenerateGoal::default(), graph, start, target, edge_cost)
}

/// [`dijkstra`] with an explicit policy for the `start == target` query.
pub fn dijkstra_with<G, C>(
    policy: DegenerateGoal,
    graph: &G,
    start: G::Handle,
    target: G::Handle,
    edge_cost: C,
) -> Vec<G::Handle>
where
    G: Graph,
    C: Fn(&G, G::Handle, G::Handle) -> f64,
{
    astar_with(policy, graph, start, target, edge_cost, |_, _, _| 0.0)
}

fn reconstruct_path<H: Copy + Eq + std::hash::Hash>(
    records: &HashMap<H, TraversalRecord<H>>,
    target: H,
) -> Vec<H> {
    let mut path = vec![target];
    let mut current = target;
    while let Some(record) = records.get(&current) {
        if record.parent == current {
            break;
        }
        path.push(record.parent);
        current = record.parent;
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// A `(node, priority)` pair queued on the frontier. The priority is the
/// node's estimated total at push time, a snapshot, not a live reference.
#[derive(Copy, Clone, Debug)]
struct FrontierEntry<H> {
    node: H,
    priority: FloatOrd,
}

impl<H> FrontierEntry<H> {
    fn new(node: H, priority: f64) -> Self {
        Self {
            node,
            priority: FloatOrd(priority),
        }
    }
}

impl<H> PartialEq for FrontierEntry<H> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl<H> Eq for FrontierEntry<H> {}

impl<H> Ord for FrontierEntry<H> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by priority.
        other.priority.cmp(&self.priority)
    }
}

impl<H> PartialOrd for FrontierEntry<H> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
