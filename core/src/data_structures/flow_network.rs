//! Capacitated flow network with arena-backed edges
//!
//! Edges live in a single arena owned by the network and are addressed by
//! [`EdgeId`]. Forward and reverse adjacency are ordered index lists into
//! that arena, so both views observe the same mutable flow state without
//! aliasing. The residual graph is never materialised: [`FlowNetwork::residual_arcs`]
//! derives it on demand from the current flow assignment.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::HashMap;
use std::fmt;

use log::trace;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Node identifier, dense in `[0, num_nodes)`
pub type NodeId = usize;

/// Index of an edge in the network's edge arena
pub type EdgeId = usize;

/// Edge capacity
pub type Capacity = i64;

/// Flow value carried by an edge or a whole network
pub type Flow = i64;

/// Construction and flow-adjustment errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("Network requires at least 2 nodes, got {0}")]
    TooFewNodes(usize),

    #[error("Cannot allocate adjacency for {0} nodes")]
    TooManyNodes(usize),

    #[error("Node index out of range: {node} (network has {num_nodes} nodes)")]
    InvalidNodeIndex { node: NodeId, num_nodes: usize },

    #[error("Invalid capacity {capacity} on edge {from}->{to}: must be non-negative")]
    InvalidCapacity { from: NodeId, to: NodeId, capacity: Capacity },

    #[error("Duplicate edge {from}->{to}: parallel edges are not supported")]
    DuplicateEdge { from: NodeId, to: NodeId },

    #[error("Unknown edge id {0}")]
    UnknownEdge(EdgeId),

    #[error(
        "Invalid flow adjustment on edge {edge}: flow {flow} + {delta} leaves [0, {capacity}]"
    )]
    InvalidFlowAdjustment {
        edge: EdgeId,
        flow: Flow,
        delta: Flow,
        capacity: Capacity,
    },

    #[error("Flow through node {node} exceeds the representable range")]
    FlowOverflow { node: NodeId },
}

/// Directed capacitated arc carrying mutable flow
///
/// Invariant: `0 <= flow <= capacity`. Flow only changes through
/// [`Edge::add_flow`], which refuses any adjustment breaking the invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    id: EdgeId,
    from: NodeId,
    to: NodeId,
    capacity: Capacity,
    flow: Flow,
}

impl Edge {
    fn new(id: EdgeId, from: NodeId, to: NodeId, capacity: Capacity) -> Self {
        Self {
            id,
            from,
            to,
            capacity,
            flow: 0,
        }
    }

    #[inline]
    pub fn id(&self) -> EdgeId {
        self.id
    }

    #[inline]
    pub fn from(&self) -> NodeId {
        self.from
    }

    #[inline]
    pub fn to(&self) -> NodeId {
        self.to
    }

    #[inline]
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    #[inline]
    pub fn flow(&self) -> Flow {
        self.flow
    }

    /// Capacity still available in the stored direction
    #[inline]
    pub fn residual_capacity(&self) -> Capacity {
        self.capacity - self.flow
    }

    /// Adjust flow by `delta`, which may be negative when cancelling flow.
    ///
    /// Leaves the edge untouched on failure.
    pub fn add_flow(&mut self, delta: Flow) -> Result<(), NetworkError> {
        let invalid = || NetworkError::InvalidFlowAdjustment {
            edge: self.id,
            flow: self.flow,
            delta,
            capacity: self.capacity,
        };

        let updated = self.flow.checked_add(delta).ok_or_else(invalid)?;
        if updated < 0 || updated > self.capacity {
            return Err(invalid());
        }

        self.flow = updated;
        Ok(())
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge({}→{}, flow={}/{})", self.from, self.to, self.flow, self.capacity)
    }
}

/// Direction in which a residual arc traverses its underlying edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResidualDirection {
    /// Along the stored direction, consuming spare capacity
    Forward,
    /// Against the stored direction, cancelling existing flow
    Backward,
}

impl ResidualDirection {
    /// Sign applied to the flow adjustment of the underlying edge
    /// * Forward  -> +1
    /// * Backward -> -1
    #[inline]
    pub fn sign(self) -> Flow {
        match self {
            ResidualDirection::Forward => 1,
            ResidualDirection::Backward => -1,
        }
    }
}

/// Virtual edge of the residual graph
///
/// Carries the underlying edge id and direction so that bottleneck
/// computation and augmentation treat both arc kinds uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidualArc {
    pub edge: EdgeId,
    pub direction: ResidualDirection,
    /// Node the arc leaves
    pub tail: NodeId,
    /// Node the arc enters
    pub head: NodeId,
    /// Directional residual capacity at the time the arc was produced
    pub residual: Capacity,
}

/// Flow assignment of one edge, as exposed to reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeFlow {
    pub from: NodeId,
    pub to: NodeId,
    pub flow: Flow,
    pub capacity: Capacity,
}

/// Flow network over a fixed node set
#[derive(Debug, Clone)]
pub struct FlowNetwork {
    num_nodes: usize,
    /// Edge arena; an edge's position is its id
    edges: Vec<Edge>,
    /// Outgoing edge ids per node, in insertion order
    forward: Vec<Vec<EdgeId>>,
    /// Incoming edge ids per node, in insertion order
    reverse: Vec<Vec<EdgeId>>,
    /// (from, to) -> unique edge between them
    lookup: HashMap<(NodeId, NodeId), EdgeId>,
}

impl FlowNetwork {
    /// Create an edgeless network over `num_nodes` nodes
    pub fn new(num_nodes: usize) -> Result<Self, NetworkError> {
        if num_nodes < 2 {
            return Err(NetworkError::TooFewNodes(num_nodes));
        }

        Ok(Self {
            num_nodes,
            edges: Vec::new(),
            forward: adjacency(num_nodes)?,
            reverse: adjacency(num_nodes)?,
            lookup: HashMap::new(),
        })
    }

    /// Add a directed edge with zero initial flow and return its id.
    ///
    /// A second edge for an existing `(from, to)` pair is rejected rather
    /// than merged or shadowed.
    pub fn add_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        capacity: Capacity,
    ) -> Result<EdgeId, NetworkError> {
        self.validate_node(from)?;
        self.validate_node(to)?;

        if capacity < 0 {
            return Err(NetworkError::InvalidCapacity { from, to, capacity });
        }
        if self.lookup.contains_key(&(from, to)) {
            return Err(NetworkError::DuplicateEdge { from, to });
        }

        let id = self.edges.len();
        self.edges.push(Edge::new(id, from, to, capacity));
        self.forward[from].push(id);
        self.reverse[to].push(id);
        self.lookup.insert((from, to), id);

        trace!("added edge #{} {}->{} capacity {}", id, from, to, capacity);
        Ok(id)
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Look up the unique edge `from -> to`, if any
    pub fn find_edge(&self, from: NodeId, to: NodeId) -> Result<Option<&Edge>, NetworkError> {
        self.validate_node(from)?;
        self.validate_node(to)?;
        Ok(self.lookup.get(&(from, to)).map(|&id| &self.edges[id]))
    }

    /// All edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    /// Edges leaving `node`, in insertion order
    pub fn outgoing_edges(
        &self,
        node: NodeId,
    ) -> Result<impl Iterator<Item = &Edge> + '_, NetworkError> {
        self.validate_node(node)?;
        Ok(self.forward[node].iter().map(move |&id| &self.edges[id]))
    }

    /// Edges entering `node`, in insertion order
    pub fn incoming_edges(
        &self,
        node: NodeId,
    ) -> Result<impl Iterator<Item = &Edge> + '_, NetworkError> {
        self.validate_node(node)?;
        Ok(self.reverse[node].iter().map(move |&id| &self.edges[id]))
    }

    /// Residual-graph neighbourhood of `node`.
    ///
    /// Forward arcs (outgoing edges with spare capacity) come first, then
    /// backward arcs (incoming edges carrying flow), each group in insertion
    /// order. This ordering is the search tie-break.
    pub fn residual_arcs(
        &self,
        node: NodeId,
    ) -> Result<impl Iterator<Item = ResidualArc> + '_, NetworkError> {
        self.validate_node(node)?;

        let forward = self.forward[node]
            .iter()
            .map(move |&id| &self.edges[id])
            .filter(|edge| edge.residual_capacity() > 0)
            .map(|edge| ResidualArc {
                edge: edge.id,
                direction: ResidualDirection::Forward,
                tail: edge.from,
                head: edge.to,
                residual: edge.residual_capacity(),
            });

        let backward = self.reverse[node]
            .iter()
            .map(move |&id| &self.edges[id])
            .filter(|edge| edge.flow > 0)
            .map(|edge| ResidualArc {
                edge: edge.id,
                direction: ResidualDirection::Backward,
                tail: edge.to,
                head: edge.from,
                residual: edge.flow,
            });

        Ok(forward.chain(backward))
    }

    /// Push `amount` units along a residual arc.
    ///
    /// Forward arcs increase flow on the underlying edge, backward arcs
    /// decrease it.
    pub fn augment(&mut self, arc: &ResidualArc, amount: Flow) -> Result<(), NetworkError> {
        let edge = self.edges.get_mut(arc.edge).ok_or(NetworkError::UnknownEdge(arc.edge))?;
        edge.add_flow(arc.direction.sign() * amount)
    }

    /// Sum of flow over edges entering `node`
    pub fn inflow(&self, node: NodeId) -> Result<Flow, NetworkError> {
        checked_flow_sum(node, self.incoming_edges(node)?)
    }

    /// Sum of flow over edges leaving `node`
    pub fn outflow(&self, node: NodeId) -> Result<Flow, NetworkError> {
        checked_flow_sum(node, self.outgoing_edges(node)?)
    }

    /// Sum of flow on all edges leaving `source`
    pub fn total_flow(&self, source: NodeId) -> Result<Flow, NetworkError> {
        self.outflow(source)
    }

    /// True when inflow equals outflow at every node other than
    /// `source` and `sink`.
    ///
    /// Sums are widened to `i128`, so nodes whose throughput exceeds the
    /// `Flow` range are still compared exactly.
    pub fn is_flow_conserved(&self, source: NodeId, sink: NodeId) -> bool {
        let wide_sum = |ids: &[EdgeId]| -> i128 {
            ids.iter().map(|&id| i128::from(self.edges[id].flow)).sum()
        };

        (0..self.num_nodes)
            .filter(|&node| node != source && node != sink)
            .all(|node| wide_sum(&self.reverse[node]) == wide_sum(&self.forward[node]))
    }

    /// Per-edge flow assignment in insertion order
    pub fn edge_flows(&self) -> Vec<EdgeFlow> {
        self.edges
            .iter()
            .map(|edge| EdgeFlow {
                from: edge.from,
                to: edge.to,
                flow: edge.flow,
                capacity: edge.capacity,
            })
            .collect()
    }

    /// Zero the flow on every edge
    pub fn reset_flows(&mut self) {
        for edge in &mut self.edges {
            edge.flow = 0;
        }
    }

    #[inline]
    pub fn validate_node(&self, node: NodeId) -> Result<(), NetworkError> {
        if node >= self.num_nodes {
            return Err(NetworkError::InvalidNodeIndex {
                node,
                num_nodes: self.num_nodes,
            });
        }
        Ok(())
    }
}

fn adjacency(num_nodes: usize) -> Result<Vec<Vec<EdgeId>>, NetworkError> {
    let mut lists = Vec::new();
    lists
        .try_reserve_exact(num_nodes)
        .map_err(|_| NetworkError::TooManyNodes(num_nodes))?;
    lists.resize_with(num_nodes, Vec::new);
    Ok(lists)
}

fn checked_flow_sum<'a>(
    node: NodeId,
    mut edges: impl Iterator<Item = &'a Edge>,
) -> Result<Flow, NetworkError> {
    edges.try_fold(0, |total: Flow, edge| {
        total
            .checked_add(edge.flow)
            .ok_or(NetworkError::FlowOverflow { node })
    })
}

impl fmt::Display for FlowNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Flow Network with {} nodes:", self.num_nodes)?;
        for node in 0..self.num_nodes {
            writeln!(f, "Node {}:", node)?;
            for &id in &self.forward[node] {
                writeln!(f, "  → {}", self.edges[id])?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> FlowNetwork {
        let mut network = FlowNetwork::new(4).unwrap();
        network.add_edge(0, 1, 3).unwrap();
        network.add_edge(0, 2, 2).unwrap();
        network.add_edge(1, 2, 1).unwrap();
        network.add_edge(1, 3, 2).unwrap();
        network.add_edge(2, 3, 3).unwrap();
        network
    }

    #[test]
    fn test_edge_flow_adjustment() {
        let mut network = FlowNetwork::new(2).unwrap();
        let id = network.add_edge(0, 1, 5).unwrap();
        let arc = network.residual_arcs(0).unwrap().next().unwrap();

        network.augment(&arc, 3).unwrap();
        let edge = network.edge(id).unwrap();
        assert_eq!(edge.flow(), 3);
        assert_eq!(edge.residual_capacity(), 2);
    }

    #[test]
    fn test_add_flow_rejects_out_of_range() {
        let mut edge = Edge::new(0, 0, 1, 4);
        assert!(edge.add_flow(4).is_ok());

        let err = edge.add_flow(1).unwrap_err();
        assert_eq!(
            err,
            NetworkError::InvalidFlowAdjustment { edge: 0, flow: 4, delta: 1, capacity: 4 }
        );
        assert_eq!(edge.flow(), 4);

        assert!(edge.add_flow(-5).is_err());
        assert_eq!(edge.flow(), 4);
        assert!(edge.add_flow(-4).is_ok());
        assert_eq!(edge.flow(), 0);
    }

    #[test]
    fn test_add_flow_overflow_is_rejected() {
        let mut edge = Edge::new(0, 0, 1, Capacity::MAX);
        edge.add_flow(Capacity::MAX).unwrap();
        assert!(edge.add_flow(1).is_err());
        assert_eq!(edge.flow(), Capacity::MAX);
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(FlowNetwork::new(1).unwrap_err(), NetworkError::TooFewNodes(1));

        let mut network = FlowNetwork::new(3).unwrap();
        assert_eq!(
            network.add_edge(0, 3, 1).unwrap_err(),
            NetworkError::InvalidNodeIndex { node: 3, num_nodes: 3 }
        );
        assert_eq!(
            network.add_edge(0, 1, -1).unwrap_err(),
            NetworkError::InvalidCapacity { from: 0, to: 1, capacity: -1 }
        );

        network.add_edge(0, 1, 1).unwrap();
        assert_eq!(
            network.add_edge(0, 1, 7).unwrap_err(),
            NetworkError::DuplicateEdge { from: 0, to: 1 }
        );
        // Opposite direction is a distinct pair
        assert!(network.add_edge(1, 0, 7).is_ok());
        assert_eq!(network.edge_count(), 2);
    }

    #[test]
    fn test_adjacency_views_preserve_insertion_order() {
        let network = diamond();

        let out: Vec<_> = network.outgoing_edges(1).unwrap().map(|e| e.to()).collect();
        assert_eq!(out, vec![2, 3]);

        let incoming: Vec<_> = network.incoming_edges(3).unwrap().map(|e| e.from()).collect();
        assert_eq!(incoming, vec![1, 2]);

        assert!(network.outgoing_edges(4).is_err());
        assert_eq!(network.find_edge(1, 2).unwrap().map(Edge::capacity), Some(1));
        assert!(network.find_edge(2, 1).unwrap().is_none());
    }

    #[test]
    fn test_residual_arcs_forward_before_backward() {
        let mut network = diamond();
        // Route one unit 0 -> 1 -> 2 so node 1 gains a backward arc to 0
        let to_one = network.residual_arcs(0).unwrap().next().unwrap();
        network.augment(&to_one, 1).unwrap();
        let to_two = network.residual_arcs(1).unwrap().find(|a| a.head == 2).unwrap();
        network.augment(&to_two, 1).unwrap();

        let arcs: Vec<_> = network.residual_arcs(1).unwrap().collect();
        let shape: Vec<_> = arcs.iter().map(|a| (a.head, a.direction, a.residual)).collect();
        // 1->2 is saturated, 1->3 open, backward to 0 carrying 1
        assert_eq!(
            shape,
            vec![(3, ResidualDirection::Forward, 2), (0, ResidualDirection::Backward, 1)]
        );
    }

    #[test]
    fn test_zero_capacity_edge_never_residual() {
        let mut network = FlowNetwork::new(2).unwrap();
        network.add_edge(0, 1, 0).unwrap();
        assert_eq!(network.residual_arcs(0).unwrap().count(), 0);
    }

    #[test]
    fn test_conservation_and_totals() {
        let mut network = diamond();
        assert!(network.is_flow_conserved(0, 3));

        let arc = network.residual_arcs(0).unwrap().next().unwrap();
        network.augment(&arc, 2).unwrap();
        assert!(!network.is_flow_conserved(0, 3));
        assert_eq!(network.total_flow(0).unwrap(), 2);
        assert_eq!(network.inflow(1).unwrap(), 2);
        assert_eq!(network.outflow(1).unwrap(), 0);

        network.reset_flows();
        assert!(network.edges().all(|e| e.flow() == 0));
    }

    #[test]
    fn test_unallocatable_node_count_is_an_error() {
        assert_eq!(
            FlowNetwork::new(usize::MAX).unwrap_err(),
            NetworkError::TooManyNodes(usize::MAX)
        );
    }

    #[test]
    fn test_flow_sums_beyond_range() {
        let edges = [(0, 1), (0, 2), (1, 2), (2, 3), (2, 4), (3, 5), (4, 5)];
        let mut network = FlowNetwork::new(6).unwrap();
        for &(from, to) in &edges {
            network.add_edge(from, to, Capacity::MAX).unwrap();
        }
        for &(from, to) in &edges {
            let arc = network.residual_arcs(from).unwrap().find(|a| a.head == to).unwrap();
            network.augment(&arc, Capacity::MAX).unwrap();
        }

        // Node 2 carries twice the representable range in and out
        assert_eq!(network.inflow(2).unwrap_err(), NetworkError::FlowOverflow { node: 2 });
        assert_eq!(network.outflow(2).unwrap_err(), NetworkError::FlowOverflow { node: 2 });
        assert!(network.is_flow_conserved(0, 5));
        assert_eq!(network.inflow(1).unwrap(), Capacity::MAX);
    }

    #[test]
    fn test_display_lists_edges() {
        let network = diamond();
        let text = network.to_string();
        assert!(text.starts_with("Flow Network with 4 nodes:"));
        assert!(text.contains("Edge(1→3, flow=0/2)"));
    }
}
