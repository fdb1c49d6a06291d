//! Augmentation history for completed max-flow runs
//!
//! Keeps one record per augmenting path in the order the paths were pushed,
//! with a node index for locating the iterations that routed flow through a
//! given node.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data_structures::{Flow, NodeId, ResidualArc, ResidualDirection};

/// One augmenting iteration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathRecord {
    /// 1-based iteration number
    pub iteration: usize,
    /// Nodes visited from source to sink
    pub nodes: Vec<NodeId>,
    /// Residual arcs traversed, source side first
    pub arcs: Vec<ResidualArc>,
    /// Flow pushed along the path
    pub bottleneck: Flow,
    /// Accumulated flow after this iteration
    pub running_total: Flow,
    pub elapsed: Duration,
}

impl PathRecord {
    /// Number of arcs that cancelled previously pushed flow
    pub fn cancellations(&self) -> usize {
        self.arcs
            .iter()
            .filter(|arc| arc.direction == ResidualDirection::Backward)
            .count()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("Invalid iteration number: {0}")]
    InvalidIteration(usize),
}

/// Ordered augmenting-path records of one run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AugmentationHistory {
    records: Vec<PathRecord>,
    /// node -> iterations whose path visited it
    node_visits: HashMap<NodeId, Vec<usize>>,
}

impl AugmentationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: PathRecord) {
        for &node in &record.nodes {
            self.node_visits.entry(node).or_default().push(record.iteration);
        }
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PathRecord] {
        &self.records
    }

    /// Record for a 1-based iteration number
    pub fn get(&self, iteration: usize) -> Result<&PathRecord, HistoryError> {
        iteration
            .checked_sub(1)
            .and_then(|index| self.records.get(index))
            .ok_or(HistoryError::InvalidIteration(iteration))
    }

    /// Iterations whose augmenting path passed through `node`
    pub fn find_node_visits(&self, node: NodeId) -> Vec<usize> {
        self.node_visits.get(&node).cloned().unwrap_or_default()
    }

    /// Sum of bottlenecks over all records
    pub fn total_pushed(&self) -> Flow {
        self.records.iter().map(|record| record.bottleneck).sum()
    }

    /// Length of the longest augmenting path, in edges
    pub fn longest_path(&self) -> usize {
        self.records.iter().map(|record| record.arcs.len()).max().unwrap_or(0)
    }
}
