//! Post-hoc correctness verification for computed flows
//!
//! Checks a solved network against the defining properties of a feasible
//! maximum-flow assignment: capacity bounds on every edge, conservation at
//! every interior node, and agreement between the reported value, the net
//! outflow of the source and the net inflow of the sink.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data_structures::{Capacity, EdgeId, Flow, FlowNetwork, NetworkError, NodeId};

/// A single property a flow assignment fails to satisfy
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum FlowViolation {
    #[error("Edge {edge} carries {flow} above its capacity {capacity}")]
    CapacityExceeded { edge: EdgeId, flow: Flow, capacity: Capacity },

    #[error("Edge {edge} carries negative flow {flow}")]
    NegativeFlow { edge: EdgeId, flow: Flow },

    #[error("Node {node} receives {inflow} but emits {outflow}")]
    ConservationViolated { node: NodeId, inflow: Flow, outflow: Flow },

    #[error("Reported flow {reported} differs from source outflow {measured}")]
    ValueMismatch { reported: Flow, measured: Flow },

    #[error("Net source outflow {source_net} differs from net sink inflow {sink_net}")]
    SinkInflowMismatch { source_net: Flow, sink_net: Flow },
}

/// Outcome of a verification pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectnessReport {
    pub violations: Vec<FlowViolation>,
    pub edges_checked: usize,
    pub nodes_checked: usize,
}

impl CorrectnessReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Verifies flow assignments left on a network by a solver
#[derive(Debug, Clone, Copy, Default)]
pub struct FlowValidator;

impl FlowValidator {
    pub fn new() -> Self {
        Self
    }

    /// Check `network` as solved from `source` to `sink`.
    ///
    /// `reported` is the flow value the solver claims; pass the solver's
    /// total when the network started from zero flow.
    pub fn validate(
        &self,
        network: &FlowNetwork,
        source: NodeId,
        sink: NodeId,
        reported: Flow,
    ) -> Result<CorrectnessReport, NetworkError> {
        network.validate_node(source)?;
        network.validate_node(sink)?;

        let mut report = CorrectnessReport::default();

        for edge in network.edges() {
            report.edges_checked += 1;
            if edge.flow() < 0 {
                report.violations.push(FlowViolation::NegativeFlow {
                    edge: edge.id(),
                    flow: edge.flow(),
                });
            } else if edge.flow() > edge.capacity() {
                report.violations.push(FlowViolation::CapacityExceeded {
                    edge: edge.id(),
                    flow: edge.flow(),
                    capacity: edge.capacity(),
                });
            }
        }

        for node in (0..network.num_nodes()).filter(|&node| node != source && node != sink) {
            report.nodes_checked += 1;
            let inflow = network.inflow(node)?;
            let outflow = network.outflow(node)?;
            if inflow != outflow {
                report
                    .violations
                    .push(FlowViolation::ConservationViolated { node, inflow, outflow });
            }
        }

        let measured = network.total_flow(source)?;
        if measured != reported {
            report.violations.push(FlowViolation::ValueMismatch { reported, measured });
        }

        let source_net = network.outflow(source)? - network.inflow(source)?;
        let sink_net = network.inflow(sink)? - network.outflow(sink)?;
        if source_net != sink_net {
            report.violations.push(FlowViolation::SinkInflowMismatch { source_net, sink_net });
        }

        Ok(report)
    }
}
