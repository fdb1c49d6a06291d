//! Network flow algorithms
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod max_flow;

pub use self::max_flow::{
    AugmentingPath, FlowJob, MaxFlowResult, MaxFlowSolver, MinCut, SolverConfig,
};
