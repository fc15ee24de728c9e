use std::hash::Hash;

/// Capability contract for searchable graphs.
///
/// Any graph-like structure can be searched as long as it hands out stable,
/// copyable node handles and can enumerate a node's outgoing neighbours. The
/// search engine treats handles as opaque value keys and never mutates the
/// graph; node storage stays with the implementation.
///
/// Implementations in this crate: [`WaypointGraph`](crate::map::WaypointGraph)
/// (named adjacency list) and [`GridGraph`](crate::grid::GridGraph)
/// (rectangular tile grid).
pub trait Graph {
    /// Per-node data, owned by the graph and exposed by reference.
    type Node;

    /// Opaque node identifier. Small index-like values, not references into
    /// graph storage.
    type Handle: Copy + Eq + Hash;

    /// Finite iterator over the handles reachable in one hop. No ordering is
    /// guaranteed; a search must be correct under any enumeration order.
    type Neighbors<'a>: Iterator<Item = Self::Handle>
    where
        Self: 'a;

    /// Node data for `handle`. Valid only for handles that pass
    /// [`is_valid_handle`](Self::is_valid_handle); behaviour for invalid
    /// handles is unspecified.
    fn lookup(&self, handle: Self::Handle) -> &Self::Node;

    /// Enumerate the outgoing neighbours of `handle`. May be called again
    /// for the same handle to restart the enumeration.
    fn neighbors(&self, handle: Self::Handle) -> Self::Neighbors<'_>;

    /// Total node count. Informational; not required for search correctness.
    fn len(&self) -> usize;

    /// Whether the graph contains no nodes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `handle` currently refers to a live node in the graph.
    fn is_valid_handle(&self, handle: Self::Handle) -> bool;
}
