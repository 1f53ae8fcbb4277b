//! Road network representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the EdgeId range:
//!
//! ```text
//! node_out_start[n] .. node_out_start[n+1]
//! ```
//!
//! All edge arrays (`edge_from`, `edge_to`, `edge_weight`) are sorted by
//! source node and indexed by `EdgeId`.  Iteration over a node's outgoing
//! edges is therefore a contiguous memory scan, which is what both the
//! search driver and the lookahead recursion do in their inner loops.
//!
//! # Edge geometry
//!
//! Curve geometry is stored the same way: the points of edge `e` are
//!
//! ```text
//! geom_points[ edge_geom_start[e] .. edge_geom_start[e+1] ]
//! ```
//!
//! An empty range means the edge is a straight segment between its nodes.

use nav_core::{EdgeId, GeoPoint, NavError, NavResult, NodeId};

/// Weight given to edges whose length is missing or malformed.
///
/// Malformed input degrades to unweighted search instead of failing.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// Directed road graph in CSR format with optional per-edge curve geometry.
///
/// All fields are `pub` for direct indexed access on hot paths.  Do not
/// construct directly; use [`RoadNetworkBuilder`].
pub struct RoadNetwork {
    // ── Node data ─────────────────────────────────────────────────────────
    /// Planar position of each node.  Indexed by `NodeId`.
    pub node_pos: Vec<GeoPoint>,

    // ── CSR edge adjacency ────────────────────────────────────────────────
    /// CSR row pointer.  Outgoing edges of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`.
    /// Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId = position in sorted order) ──────────
    /// Source node of each edge.
    pub edge_from: Vec<NodeId>,

    /// Destination node of each edge.
    pub edge_to: Vec<NodeId>,

    /// Non-negative physical length of each edge.  Used as search cost.
    pub edge_weight: Vec<f64>,

    // ── Edge geometry ─────────────────────────────────────────────────────
    /// Geometry row pointer.  Length = `edge_count + 1`.
    pub edge_geom_start: Vec<u32>,

    /// Flattened curve points of all edges, in EdgeId order.
    pub geom_points: Vec<GeoPoint>,
}

impl RoadNetwork {
    /// Construct an empty network with no nodes or edges.
    pub fn empty() -> Self {
        RoadNetworkBuilder::new().build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    /// `true` if `node` is a valid index into this network.
    #[inline]
    pub fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }

    /// `Ok(())` if the node exists, otherwise [`NavError::NodeNotFound`].
    pub fn check_node(&self, node: NodeId) -> NavResult<()> {
        if self.contains_node(node) {
            Ok(())
        } else {
            Err(NavError::NodeNotFound(node))
        }
    }

    /// Position of `node`.
    ///
    /// # Panics
    /// Panics if `node` is not in the network.
    #[inline]
    pub fn position(&self, node: NodeId) -> GeoPoint {
        self.node_pos[node.index()]
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Out-degree of `node` (number of outgoing edges).
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    /// Outgoing `(edge, destination, weight)` triples of `node`.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (EdgeId, NodeId, f64)> + '_ {
        self.out_edges(node)
            .map(move |e| (e, self.edge_to[e.index()], self.edge_weight[e.index()]))
    }

    /// The lowest-weight directed edge `from → to`, if any.
    ///
    /// Parallel edges are allowed; the first of equally light edges wins.
    pub fn edge_between(&self, from: NodeId, to: NodeId) -> Option<EdgeId> {
        if !self.contains_node(from) {
            return None;
        }
        let mut best: Option<EdgeId> = None;
        for (e, dest, w) in self.neighbors(from) {
            if dest != to {
                continue;
            }
            match best {
                Some(b) if self.edge_weight[b.index()] <= w => {}
                _ => best = Some(e),
            }
        }
        best
    }

    /// Curve points of `edge`; empty when the edge has no geometry.
    #[inline]
    pub fn edge_geometry(&self, edge: EdgeId) -> &[GeoPoint] {
        let start = self.edge_geom_start[edge.index()] as usize;
        let end   = self.edge_geom_start[edge.index() + 1] as usize;
        &self.geom_points[start..end]
    }

    // ── Path helpers ──────────────────────────────────────────────────────

    /// `true` if every consecutive pair of `path` is joined by an edge.
    pub fn is_connected_path(&self, path: &[NodeId]) -> bool {
        path.windows(2).all(|w| self.edge_between(w[0], w[1]).is_some())
    }

    /// Sum of the lightest connecting edge weights along `path`.
    ///
    /// Returns `None` if any hop has no edge.  A single-node path weighs 0.
    pub fn path_weight(&self, path: &[NodeId]) -> Option<f64> {
        path.windows(2).try_fold(0.0, |acc, w| {
            self.edge_between(w[0], w[1])
                .map(|e| acc + self.edge_weight[e.index()])
        })
    }
}

// ── RoadNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`RoadNetwork`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts nodes and directed edges in any order.  `build()`
/// sorts edges by source node (stable, so insertion order survives among a
/// node's edges) and constructs the CSR arrays.
///
/// # Example
///
/// ```
/// use nav_core::GeoPoint;
/// use nav_graph::RoadNetworkBuilder;
///
/// let mut b = RoadNetworkBuilder::new();
/// let a = b.add_node(GeoPoint::new(30.69, -88.04));
/// let c = b.add_node(GeoPoint::new(30.70, -88.03));
/// b.add_road(a, c, Some(1.2));
/// let net = b.build();
/// assert_eq!(net.node_count(), 2);
/// assert_eq!(net.edge_count(), 2); // bidirectional
/// ```
pub struct RoadNetworkBuilder {
    nodes:     Vec<GeoPoint>,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    from:     NodeId,
    to:       NodeId,
    weight:   f64,
    geometry: Vec<GeoPoint>,
}

/// Resolve a caller-supplied weight, falling back to [`DEFAULT_EDGE_WEIGHT`]
/// for missing, negative, or non-finite values.
#[inline]
fn resolve_weight(weight: Option<f64>) -> f64 {
    match weight {
        Some(w) if w.is_finite() && w >= 0.0 => w,
        _ => DEFAULT_EDGE_WEIGHT,
    }
}

impl RoadNetworkBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), raw_edges: Vec::new() }
    }

    /// Pre-allocate for the expected number of nodes and edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes:     Vec::with_capacity(nodes),
            raw_edges: Vec::with_capacity(edges),
        }
    }

    /// Add a road node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: GeoPoint) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        id
    }

    /// Add a **directed** straight edge from `from` to `to`.
    ///
    /// `weight` is the physical length; `None` means unknown.
    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId, weight: Option<f64>) {
        self.add_directed_curve(from, to, weight, Vec::new());
    }

    /// Add a **directed** edge carrying curve geometry.
    ///
    /// `geometry` lists the edge's shape points in travel order.
    pub fn add_directed_curve(
        &mut self,
        from:     NodeId,
        to:       NodeId,
        weight:   Option<f64>,
        geometry: Vec<GeoPoint>,
    ) {
        self.raw_edges.push(RawEdge { from, to, weight: resolve_weight(weight), geometry });
    }

    /// Convenience: add straight edges in **both directions** for an
    /// undirected road segment.
    pub fn add_road(&mut self, a: NodeId, b: NodeId, weight: Option<f64>) {
        self.add_directed_edge(a, b, weight);
        self.add_directed_edge(b, a, weight);
    }

    /// Add an undirected curved road.  The reverse edge gets the geometry in
    /// reverse order.
    pub fn add_curved_road(
        &mut self,
        a:        NodeId,
        b:        NodeId,
        weight:   Option<f64>,
        geometry: Vec<GeoPoint>,
    ) {
        let reversed: Vec<GeoPoint> = geometry.iter().rev().copied().collect();
        self.add_directed_curve(a, b, weight, geometry);
        self.add_directed_curve(b, a, weight, reversed);
    }

    /// Look up the position of a node added earlier.
    pub fn node_pos(&self, id: NodeId) -> GeoPoint {
        self.nodes[id.index()]
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Consume the builder and produce a [`RoadNetwork`].
    ///
    /// Time complexity: O(E log E) for the edge sort plus O(N + E + G) for
    /// the CSR arrays, where G = total geometry points.
    pub fn build(self) -> RoadNetwork {
        let node_count = self.nodes.len();
        let edge_count = self.raw_edges.len();

        // Stable sort by source node for CSR construction.
        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let edge_from:   Vec<NodeId> = raw.iter().map(|e| e.from).collect();
        let edge_to:     Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_weight: Vec<f64>    = raw.iter().map(|e| e.weight).collect();

        // Build CSR row pointer (node_out_start).
        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        // Flatten geometry in the same EdgeId order.
        let total_points: usize = raw.iter().map(|e| e.geometry.len()).sum();
        let mut edge_geom_start = Vec::with_capacity(edge_count + 1);
        let mut geom_points     = Vec::with_capacity(total_points);
        edge_geom_start.push(0u32);
        for e in raw {
            geom_points.extend(e.geometry);
            edge_geom_start.push(geom_points.len() as u32);
        }

        RoadNetwork {
            node_pos: self.nodes,
            node_out_start,
            edge_from,
            edge_to,
            edge_weight,
            edge_geom_start,
            geom_points,
        }
    }
}

impl Default for RoadNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
