//! Core data structures for flow computation
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod flow_network;

pub use self::flow_network::{
    Capacity, Edge, EdgeFlow, EdgeId, Flow, FlowNetwork, NetworkError, NodeId, ResidualArc,
    ResidualDirection,
};
