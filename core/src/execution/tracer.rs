//! Execution tracing for augmenting-path algorithms
//!
//! The tracer is created fresh for every solver run and consumed into an
//! [`ExecutionTrace`] value when the run ends, so traces never leak between
//! runs and the solver itself stays stateless.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::time::Duration;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::data_structures::{Flow, NodeId};

/// Collects trace data while a run is in progress
#[derive(Debug)]
pub struct ExecutionTracer {
    detailed: bool,
    max_path_display: usize,
    progress_interval: usize,
    steps: Vec<String>,
    iteration_times: Vec<Duration>,
    iterations: usize,
    searches: usize,
}

impl ExecutionTracer {
    pub fn new(detailed: bool, max_path_display: usize, progress_interval: usize) -> Self {
        Self {
            detailed,
            max_path_display,
            progress_interval,
            steps: Vec::new(),
            iteration_times: Vec::new(),
            iterations: 0,
            searches: 0,
        }
    }

    /// Record the start of a run
    pub fn begin(&mut self, source: NodeId, sink: NodeId) {
        if self.detailed {
            self.steps.push(format!(
                "Starting Edmonds-Karp algorithm with source={}, sink={}",
                source, sink
            ));
        } else {
            info!("Starting Edmonds-Karp algorithm (minimal logging mode)");
        }
    }

    /// Count one augmenting-path search; returns the 1-based search number
    pub fn record_search(&mut self) -> usize {
        self.searches += 1;
        self.searches
    }

    /// Record a successful augmentation along the path visiting `nodes`
    pub fn record_augmentation(
        &mut self,
        nodes: &[NodeId],
        bottleneck: Flow,
        total: Flow,
        elapsed: Duration,
    ) {
        self.iterations += 1;
        self.iteration_times.push(elapsed);

        debug!(
            "iteration {}: {} edges, bottleneck {}, total {}",
            self.iterations,
            nodes.len().saturating_sub(1),
            bottleneck,
            total
        );

        if self.detailed {
            self.steps.push(format!("Iteration {}:", self.iterations));
            self.steps
                .push(format!("  Found augmenting path: {}", self.format_path(nodes)));
            self.steps.push(format!("  Bottleneck capacity: {}", bottleneck));
            self.steps.push(format!("  Current max flow: {}", total));
            self.steps.push(format!(
                "  Iteration time: {:.3} ms",
                elapsed.as_secs_f64() * 1_000.0
            ));
        } else if self.progress_interval > 0 && self.iterations % self.progress_interval == 0 {
            info!(
                "Completed {} iterations. Current max flow: {}",
                self.iterations, total
            );
        }
    }

    /// Record the final search that failed to reach the sink
    pub fn record_exhausted(&mut self) {
        if self.detailed {
            self.steps.push(format!(
                "Iteration {}: No augmenting path found. Algorithm terminates.",
                self.searches
            ));
        }
    }

    /// Close the trace
    pub fn finish(mut self, max_flow: Flow) -> ExecutionTrace {
        if !self.detailed {
            info!(
                "Algorithm completed after {} iterations. Max flow: {}",
                self.iterations, max_flow
            );
            self.steps.push(format!(
                "Edmonds-Karp completed after {} iterations",
                self.iterations
            ));
            self.steps.push(format!("Maximum flow: {}", max_flow));
        }

        ExecutionTrace {
            iterations: self.iterations,
            searches: self.searches,
            iteration_times: self.iteration_times,
            steps: self.steps,
        }
    }

    /// Render a node sequence, collapsing paths longer than the display limit
    fn format_path(&self, nodes: &[NodeId]) -> String {
        let edges = nodes.len().saturating_sub(1);
        match (nodes.first(), nodes.last()) {
            (Some(first), Some(last)) if edges > self.max_path_display => {
                format!("{} → ... → {} ({} edges)", first, last, edges)
            }
            (Some(_), Some(_)) => nodes
                .iter()
                .map(|node| node.to_string())
                .collect::<Vec<_>>()
                .join(" → "),
            _ => "[]".to_string(),
        }
    }
}

/// Trace of one completed run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionTrace {
    /// Augmenting iterations, one per augmenting path pushed
    pub iterations: usize,
    /// Breadth-first searches run, including the final unsuccessful one
    pub searches: usize,
    /// Elapsed time of each augmenting iteration, in order
    pub iteration_times: Vec<Duration>,
    /// Human-readable step descriptions, in order
    pub steps: Vec<String>,
}

/// Summary statistics over iteration times
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceStatistics {
    pub iterations: usize,
    pub total: Duration,
    pub mean: Duration,
    pub min: Duration,
    pub max: Duration,
}

impl ExecutionTrace {
    pub fn total_iteration_time(&self) -> Duration {
        self.iteration_times.iter().sum()
    }

    /// Mean iteration time, zero when no iteration ran
    pub fn average_iteration_time(&self) -> Duration {
        if self.iteration_times.is_empty() {
            return Duration::ZERO;
        }
        let nanos = self.total_iteration_time().as_nanos() / self.iteration_times.len() as u128;
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }

    pub fn average_iteration_time_ms(&self) -> f64 {
        self.average_iteration_time().as_secs_f64() * 1_000.0
    }

    pub fn statistics(&self) -> TraceStatistics {
        TraceStatistics {
            iterations: self.iterations,
            total: self.total_iteration_time(),
            mean: self.average_iteration_time(),
            min: self.iteration_times.iter().min().copied().unwrap_or_default(),
            max: self.iteration_times.iter().max().copied().unwrap_or_default(),
        }
    }
}
