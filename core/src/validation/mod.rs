//! Correctness verification for solved networks

pub mod correctness;

pub use self::correctness::{CorrectnessReport, FlowValidator, FlowViolation};
