//! FLOWTRACE core: traced Edmonds-Karp maximum flow
//!
//! The crate is organised leaves first:
//!
//! - [`data_structures`]: arena-backed [`FlowNetwork`] of capacitated [`Edge`]s
//!   and the residual arcs derived from it.
//! - [`algorithm`]: the [`MaxFlowSolver`] engine and the [`Algorithm`] trait it
//!   implements.
//! - [`execution`]: per-run execution trace and augmentation history.
//! - [`validation`]: post-hoc verification of solved networks.
//! - [`parser`]: plain-text network descriptions.
//!
//! ```
//! use flowtrace_core::{FlowNetwork, MaxFlowSolver};
//!
//! let mut network = FlowNetwork::new(2)?;
//! network.add_edge(0, 1, 5)?;
//!
//! let result = MaxFlowSolver::default().find_max_flow(&mut network, 0, 1)?;
//! assert_eq!(result.max_flow, 5);
//! assert!(network.is_flow_conserved(0, 1));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod algorithm;
pub mod data_structures;
pub mod execution;
pub mod parser;
pub mod validation;

pub use algorithm::{
    Algorithm, AlgorithmError, AugmentingPath, FlowJob, MaxFlowResult, MaxFlowSolver, MinCut,
    SolverConfig,
};
pub use data_structures::{
    Capacity, Edge, EdgeFlow, EdgeId, Flow, FlowNetwork, NetworkError, NodeId, ResidualArc,
    ResidualDirection,
};
pub use execution::{AugmentationHistory, ExecutionTrace, PathRecord, TraceStatistics};
pub use parser::{parse_file, parse_network, parse_reader, ParseError};
pub use validation::{CorrectnessReport, FlowValidator, FlowViolation};

/// Crate version, as recorded in Cargo metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Conventional terminals of a network: node `0` and node `num_nodes - 1`
pub fn default_terminals(network: &FlowNetwork) -> (NodeId, NodeId) {
    (0, network.num_nodes() - 1)
}
