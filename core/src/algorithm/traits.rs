//! Core algorithm trait definitions
//!
//! Every solver exposes the same descriptive surface: identity, complexity
//! and a string-keyed parameter interface, so front ends can configure an
//! algorithm without knowing its concrete configuration type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data_structures::{Flow, NetworkError, NodeId};

/// Universal algorithm identifier
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmId(String);

impl AlgorithmId {
    pub fn new(name: &str) -> Self {
        Self(name.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Algorithm parameter with type information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmParameter {
    pub name: String,
    pub value: String,
    pub value_type: ParameterType,
    pub description: String,
}

/// Parameter type enumeration for type-safe parameter handling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterType {
    Integer,
    Boolean,
    /// Integer that may be left unset
    OptionalInteger,
}

/// Errors raised by algorithm configuration and execution
#[derive(Debug, Error)]
pub enum AlgorithmError {
    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Invalid node: {0}")]
    InvalidNode(NodeId),

    #[error("Source and sink must differ, both are {0}")]
    SameSourceAndSink(NodeId),

    #[error("Iteration limit of {0} exceeded")]
    IterationLimitExceeded(usize),

    #[error("Flow total overflows: {current} + {added} exceeds {}", Flow::MAX)]
    FlowOverflow { current: Flow, added: Flow },

    /// A flow adjustment proposed by the solver broke an edge invariant.
    /// Indicates a defect in the solver, never bad input.
    #[error("Internal consistency failure: {0}")]
    InternalConsistency(#[source] NetworkError),

    #[error(transparent)]
    Network(#[from] NetworkError),
}

/// Algorithm complexity information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmComplexity {
    pub time_complexity: String,
    pub space_complexity: String,
    pub augmentation_bound: String,
}

/// Main algorithm trait
///
/// # Invariants
/// - State isolation between runs
/// - Deterministic behavior for given inputs
pub trait Algorithm: std::fmt::Debug + Send + Sync {
    /// Returns the algorithm's unique identifier
    fn id(&self) -> AlgorithmId {
        AlgorithmId::new(self.name())
    }

    /// Returns the algorithm's descriptive name
    fn name(&self) -> &'static str;

    /// Returns the algorithm's category (e.g. max_flow)
    fn category(&self) -> &'static str;

    /// Returns the algorithm's description
    fn description(&self) -> String;

    /// Returns the algorithm's asymptotic complexity
    fn complexity(&self) -> AlgorithmComplexity;

    /// Returns supported parameters with their current values
    fn parameters(&self) -> Vec<AlgorithmParameter>;

    /// Sets algorithm parameter with type validation
    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), AlgorithmError>;

    /// Gets algorithm parameter value
    fn get_parameter(&self, name: &str) -> Option<String>;
}
