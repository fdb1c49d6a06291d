//! Edmonds-Karp Maximum Flow Implementation
//!
//! Ford-Fulkerson with breadth-first augmenting-path selection. Each
//! iteration searches the implicit residual graph for a shortest
//! source-to-sink path, pushes its bottleneck along it and accumulates the
//! total. The loop ends the first time the sink is unreachable; by the
//! max-flow/min-cut theorem the accumulated total is then maximal and the
//! nodes still reachable from the source form a minimum cut.
//!
//! Shortest-path selection bounds the number of augmentations by O(V·E).
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::VecDeque;
use std::time::Instant;

use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{
    Algorithm, AlgorithmComplexity, AlgorithmError, AlgorithmParameter, ParameterType,
};
use crate::data_structures::{Capacity, EdgeFlow, Flow, FlowNetwork, NodeId, ResidualArc};
use crate::execution::{AugmentationHistory, ExecutionTrace, ExecutionTracer, PathRecord};

/// Solver configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Record per-iteration trace steps instead of a closing summary
    pub detailed_logging: bool,
    /// Paths with more edges than this are traced as endpoints plus length
    pub max_path_display: usize,
    /// Progress log cadence (in iterations) when detailed logging is off
    pub progress_interval: usize,
    /// Optional cap on augmenting iterations
    pub max_iterations: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            detailed_logging: true,
            max_path_display: 10,
            progress_interval: 100,
            max_iterations: None,
        }
    }
}

impl SolverConfig {
    /// Parse a configuration from JSON; absent keys keep their defaults
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Augmenting path as an ordered sequence of residual arcs, source first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentingPath {
    arcs: Vec<ResidualArc>,
}

impl AugmentingPath {
    pub fn arcs(&self) -> &[ResidualArc] {
        &self.arcs
    }

    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Minimum directional residual capacity along the path.
    ///
    /// Forward arcs contribute `capacity - flow`, backward arcs the flow
    /// they would cancel, so pushing this amount never breaks an edge's
    /// capacity bounds.
    pub fn bottleneck(&self) -> Flow {
        self.arcs.iter().map(|arc| arc.residual).min().unwrap_or(0)
    }

    /// Node sequence from source to sink
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes = Vec::with_capacity(self.arcs.len() + 1);
        if let Some(first) = self.arcs.first() {
            nodes.push(first.tail);
        }
        nodes.extend(self.arcs.iter().map(|arc| arc.head));
        nodes
    }

    pub fn into_arcs(self) -> Vec<ResidualArc> {
        self.arcs
    }
}

/// Source-side minimum cut of a saturated network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinCut {
    /// Nodes reachable from the source in the final residual graph
    pub source_side: Vec<NodeId>,
    /// Edges leaving the source side
    pub cut_edges: Vec<EdgeFlow>,
    /// Total capacity of the cut edges
    pub capacity: Capacity,
}

/// Outcome of a maximum flow computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaxFlowResult {
    /// Flow added by this run
    pub max_flow: Flow,
    pub trace: ExecutionTrace,
    pub history: AugmentationHistory,
    pub min_cut: MinCut,
    /// Final flow on every edge, in insertion order
    pub edge_flows: Vec<EdgeFlow>,
}

/// Independent network to solve as part of a batch
#[derive(Debug, Clone)]
pub struct FlowJob {
    pub network: FlowNetwork,
    pub source: NodeId,
    pub sink: NodeId,
}

impl FlowJob {
    pub fn new(network: FlowNetwork, source: NodeId, sink: NodeId) -> Self {
        Self { network, source, sink }
    }
}

/// Edmonds-Karp maximum flow solver
///
/// Holds configuration only; every run builds its own search tables and
/// trace, so one solver can be reused across networks and shared between
/// threads solving different networks.
#[derive(Debug, Clone, Default)]
pub struct MaxFlowSolver {
    config: SolverConfig,
}

impl MaxFlowSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Compute the maximum flow from `source` to `sink`, mutating the
    /// network's edge flows in place.
    ///
    /// Flow already present on the network is kept, so a second run on a
    /// saturated network reports zero additional flow.
    pub fn find_max_flow(
        &self,
        network: &mut FlowNetwork,
        source: NodeId,
        sink: NodeId,
    ) -> Result<MaxFlowResult, AlgorithmError> {
        network
            .validate_node(source)
            .map_err(|_| AlgorithmError::InvalidNode(source))?;
        network
            .validate_node(sink)
            .map_err(|_| AlgorithmError::InvalidNode(sink))?;
        if source == sink {
            return Err(AlgorithmError::SameSourceAndSink(source));
        }

        info!(
            "Running Edmonds-Karp on {} nodes / {} edges (source={}, sink={})",
            network.num_nodes(),
            network.edge_count(),
            source,
            sink
        );

        let mut tracer = ExecutionTracer::new(
            self.config.detailed_logging,
            self.config.max_path_display,
            self.config.progress_interval,
        );
        let mut history = AugmentationHistory::new();
        let mut max_flow: Flow = 0;

        tracer.begin(source, sink);

        loop {
            let started = Instant::now();
            tracer.record_search();

            let Some(path) = Self::find_augmenting_path(network, source, sink)? else {
                tracer.record_exhausted();
                break;
            };

            if let Some(limit) = self.config.max_iterations {
                if history.len() >= limit {
                    warn!("Stopping after {} iterations, augmenting paths remain", limit);
                    return Err(AlgorithmError::IterationLimitExceeded(limit));
                }
            }

            let bottleneck = path.bottleneck();
            let total = max_flow
                .checked_add(bottleneck)
                .ok_or(AlgorithmError::FlowOverflow {
                    current: max_flow,
                    added: bottleneck,
                })?;
            Self::augment(network, &path, bottleneck)?;
            max_flow = total;

            let elapsed = started.elapsed();
            let nodes = path.nodes();
            tracer.record_augmentation(&nodes, bottleneck, max_flow, elapsed);
            history.push(PathRecord {
                iteration: history.len() + 1,
                nodes,
                arcs: path.into_arcs(),
                bottleneck,
                running_total: max_flow,
                elapsed,
            });
        }

        let trace = tracer.finish(max_flow);
        let min_cut = Self::min_cut(network, source)?;

        if !network.is_flow_conserved(source, sink) {
            warn!("Flow conservation violated after Edmonds-Karp run");
        }
        debug!(
            "Edmonds-Karp finished: flow {} in {} iterations, cut capacity {}",
            max_flow, trace.iterations, min_cut.capacity
        );

        Ok(MaxFlowResult {
            max_flow,
            trace,
            history,
            min_cut,
            edge_flows: network.edge_flows(),
        })
    }

    /// Breadth-first search for a shortest augmenting path.
    ///
    /// Returns `None` when the sink is unreachable in the residual graph,
    /// the normal termination condition.
    pub fn find_augmenting_path(
        network: &FlowNetwork,
        source: NodeId,
        sink: NodeId,
    ) -> Result<Option<AugmentingPath>, AlgorithmError> {
        let n = network.num_nodes();
        let mut visited = vec![false; n];
        let mut predecessor: Vec<Option<ResidualArc>> = vec![None; n];
        let mut queue = VecDeque::new();

        visited[source] = true;
        queue.push_back(source);

        while let Some(node) = queue.pop_front() {
            if visited[sink] {
                break;
            }
            for arc in network.residual_arcs(node)? {
                if !visited[arc.head] {
                    visited[arc.head] = true;
                    predecessor[arc.head] = Some(arc);
                    queue.push_back(arc.head);
                }
            }
        }

        if !visited[sink] {
            return Ok(None);
        }

        // The source is the only visited node without a predecessor
        let mut arcs = Vec::new();
        let mut node = sink;
        while let Some(arc) = predecessor[node] {
            arcs.push(arc);
            node = arc.tail;
        }
        arcs.reverse();

        Ok(Some(AugmentingPath { arcs }))
    }

    /// Push `amount` along every arc of `path`.
    ///
    /// All-or-nothing: if any arc rejects the adjustment, arcs already
    /// updated are rolled back before the error is returned.
    fn augment(
        network: &mut FlowNetwork,
        path: &AugmentingPath,
        amount: Flow,
    ) -> Result<(), AlgorithmError> {
        for (applied, arc) in path.arcs().iter().enumerate() {
            if let Err(err) = network.augment(arc, amount) {
                for done in path.arcs()[..applied].iter().rev() {
                    network
                        .augment(done, -amount)
                        .map_err(AlgorithmError::InternalConsistency)?;
                }
                return Err(AlgorithmError::InternalConsistency(err));
            }
        }
        Ok(())
    }

    /// Minimum cut induced by the nodes reachable from `source` in the
    /// current residual graph. Only a true minimum once no augmenting path
    /// remains.
    pub fn min_cut(network: &FlowNetwork, source: NodeId) -> Result<MinCut, AlgorithmError> {
        network
            .validate_node(source)
            .map_err(|_| AlgorithmError::InvalidNode(source))?;

        let mut reachable = vec![false; network.num_nodes()];
        let mut queue = VecDeque::new();
        reachable[source] = true;
        queue.push_back(source);

        while let Some(node) = queue.pop_front() {
            for arc in network.residual_arcs(node)? {
                if !reachable[arc.head] {
                    reachable[arc.head] = true;
                    queue.push_back(arc.head);
                }
            }
        }

        let cut_edges: Vec<EdgeFlow> = network
            .edges()
            .filter(|edge| reachable[edge.from()] && !reachable[edge.to()])
            .map(|edge| EdgeFlow {
                from: edge.from(),
                to: edge.to(),
                flow: edge.flow(),
                capacity: edge.capacity(),
            })
            .collect();

        let capacity = cut_edges.iter().try_fold(0, |total: Capacity, edge| {
            total
                .checked_add(edge.capacity)
                .ok_or(AlgorithmError::FlowOverflow {
                    current: total,
                    added: edge.capacity,
                })
        })?;

        Ok(MinCut {
            source_side: (0..network.num_nodes()).filter(|&node| reachable[node]).collect(),
            capacity,
            cut_edges,
        })
    }

    /// Solve independent networks in parallel, one job per network.
    ///
    /// Results are returned in job order.
    pub fn solve_batch(&self, jobs: &mut [FlowJob]) -> Vec<Result<MaxFlowResult, AlgorithmError>> {
        debug!("Solving batch of {} networks", jobs.len());
        jobs.par_iter_mut()
            .map(|job| self.find_max_flow(&mut job.network, job.source, job.sink))
            .collect()
    }
}

fn parse_parameter<T: std::str::FromStr>(
    name: &str,
    value: &str,
    expected: &str,
) -> Result<T, AlgorithmError> {
    value.trim().parse::<T>().map_err(|_| AlgorithmError::InvalidParameter {
        name: name.to_string(),
        reason: format!("{} must be {}", name, expected),
    })
}

impl Algorithm for MaxFlowSolver {
    fn name(&self) -> &'static str {
        "Edmonds-Karp"
    }

    fn category(&self) -> &'static str {
        "max_flow"
    }

    fn description(&self) -> String {
        "Ford-Fulkerson maximum flow with breadth-first shortest augmenting paths \
         over the implicit residual graph."
            .to_string()
    }

    fn complexity(&self) -> AlgorithmComplexity {
        AlgorithmComplexity {
            time_complexity: "O(V·E²)".to_string(),
            space_complexity: "O(V + E)".to_string(),
            augmentation_bound: "O(V·E)".to_string(),
        }
    }

    fn parameters(&self) -> Vec<AlgorithmParameter> {
        vec![
            AlgorithmParameter {
                name: "detailed_logging".to_string(),
                value: self.config.detailed_logging.to_string(),
                value_type: ParameterType::Boolean,
                description: "Record per-iteration trace steps".to_string(),
            },
            AlgorithmParameter {
                name: "max_path_display".to_string(),
                value: self.config.max_path_display.to_string(),
                value_type: ParameterType::Integer,
                description: "Longest path traced in full, in edges".to_string(),
            },
            AlgorithmParameter {
                name: "progress_interval".to_string(),
                value: self.config.progress_interval.to_string(),
                value_type: ParameterType::Integer,
                description: "Iterations between progress log lines".to_string(),
            },
            AlgorithmParameter {
                name: "max_iterations".to_string(),
                value: self
                    .config
                    .max_iterations
                    .map_or_else(|| "none".to_string(), |limit| limit.to_string()),
                value_type: ParameterType::OptionalInteger,
                description: "Cap on augmenting iterations".to_string(),
            },
        ]
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), AlgorithmError> {
        match name {
            "detailed_logging" => {
                self.config.detailed_logging = parse_parameter(name, value, "true or false")?;
            }
            "max_path_display" => {
                self.config.max_path_display =
                    parse_parameter(name, value, "a non-negative integer")?;
            }
            "progress_interval" => {
                let interval: usize = parse_parameter(name, value, "a positive integer")?;
                if interval == 0 {
                    return Err(AlgorithmError::InvalidParameter {
                        name: name.to_string(),
                        reason: "progress_interval must be > 0".to_string(),
                    });
                }
                self.config.progress_interval = interval;
            }
            "max_iterations" => {
                self.config.max_iterations = match value.trim() {
                    "none" | "" => None,
                    limit => Some(parse_parameter(name, limit, "a non-negative integer or none")?),
                };
            }
            _ => {
                return Err(AlgorithmError::InvalidParameter {
                    name: name.to_string(),
                    reason: format!("Unknown parameter: {}", name),
                })
            }
        }
        Ok(())
    }

    fn get_parameter(&self, name: &str) -> Option<String> {
        self.parameters()
            .into_iter()
            .find(|parameter| parameter.name == name)
            .map(|parameter| parameter.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::{NetworkError, ResidualDirection};

    fn build(num_nodes: usize, edges: &[(NodeId, NodeId, Capacity)]) -> FlowNetwork {
        let mut network = FlowNetwork::new(num_nodes).unwrap();
        for &(from, to, capacity) in edges {
            network.add_edge(from, to, capacity).unwrap();
        }
        network
    }

    fn diamond() -> FlowNetwork {
        build(4, &[(0, 1, 3), (0, 2, 2), (1, 2, 1), (1, 3, 2), (2, 3, 3)])
    }

    /// First shortest path uses 1->2, which the second path must cancel
    fn crossing() -> FlowNetwork {
        build(
            7,
            &[
                (0, 1, 1),
                (1, 2, 1),
                (1, 5, 1),
                (2, 6, 1),
                (0, 3, 1),
                (3, 4, 1),
                (4, 2, 1),
                (5, 6, 1),
            ],
        )
    }

    fn assert_valid(network: &FlowNetwork, source: NodeId, sink: NodeId, result: &MaxFlowResult) {
        assert!(network.is_flow_conserved(source, sink));
        assert!(network.edges().all(|e| e.flow() >= 0 && e.flow() <= e.capacity()));
        assert_eq!(result.min_cut.capacity, network.total_flow(source).unwrap());
    }

    #[test]
    fn test_diamond_network() {
        let mut network = diamond();
        let result = MaxFlowSolver::default().find_max_flow(&mut network, 0, 3).unwrap();

        // Cut {0} has capacity 3 + 2
        assert_eq!(result.max_flow, 5);
        assert_eq!(result.max_flow, network.total_flow(0).unwrap());
        assert_eq!(result.trace.iterations, 3);
        assert_eq!(result.trace.searches, 4);
        assert_eq!(result.trace.iteration_times.len(), 3);
        assert_eq!(result.history.get(1).unwrap().nodes, vec![0, 1, 3]);
        assert_eq!(result.history.get(2).unwrap().nodes, vec![0, 2, 3]);
        assert_eq!(result.history.get(3).unwrap().nodes, vec![0, 1, 2, 3]);
        assert_eq!(result.min_cut.source_side, vec![0]);
        assert_valid(&network, 0, 3, &result);
    }

    #[test]
    fn test_backward_arc_cancels_flow() {
        let mut network = crossing();
        let result = MaxFlowSolver::default().find_max_flow(&mut network, 0, 6).unwrap();

        assert_eq!(result.max_flow, 2);
        assert_eq!(result.trace.iterations, 2);

        let second = result.history.get(2).unwrap();
        assert_eq!(second.nodes, vec![0, 3, 4, 2, 1, 5, 6]);
        assert_eq!(second.cancellations(), 1);
        assert_eq!(second.arcs[3].direction, ResidualDirection::Backward);

        // Cancelled edge ends with no flow
        assert_eq!(network.find_edge(1, 2).unwrap().unwrap().flow(), 0);
        assert_valid(&network, 0, 6, &result);
    }

    #[test]
    fn test_no_path_to_sink() {
        let mut network = build(3, &[(0, 1, 4), (2, 1, 4)]);
        let result = MaxFlowSolver::default().find_max_flow(&mut network, 0, 2).unwrap();

        assert_eq!(result.max_flow, 0);
        assert_eq!(result.trace.searches, 1);
        assert_eq!(result.trace.iterations, 0);
        assert!(result.history.is_empty());
        assert_eq!(
            result.trace.steps.last().unwrap(),
            "Iteration 1: No augmenting path found. Algorithm terminates."
        );
        assert_eq!(result.min_cut.source_side, vec![0, 1]);
        assert_eq!(result.min_cut.capacity, 0);
    }

    #[test]
    fn test_zero_capacity_edge_never_used() {
        let mut network = build(3, &[(0, 2, 0), (0, 1, 2), (1, 2, 2)]);
        let result = MaxFlowSolver::default().find_max_flow(&mut network, 0, 2).unwrap();

        assert_eq!(result.max_flow, 2);
        assert!(result
            .history
            .records()
            .iter()
            .all(|record| record.arcs.iter().all(|arc| arc.edge != 0)));
        assert_eq!(network.edge(0).unwrap().flow(), 0);
    }

    #[test]
    fn test_two_node_boundary() {
        let mut network = build(2, &[(0, 1, 5)]);
        let result = MaxFlowSolver::default().find_max_flow(&mut network, 0, 1).unwrap();

        assert_eq!(result.max_flow, 5);
        assert_eq!(result.trace.iterations, 1);
        assert_eq!(result.edge_flows, vec![EdgeFlow { from: 0, to: 1, flow: 5, capacity: 5 }]);
    }

    #[test]
    fn test_second_run_adds_nothing() {
        let mut network = diamond();
        let solver = MaxFlowSolver::default();
        solver.find_max_flow(&mut network, 0, 3).unwrap();

        let again = solver.find_max_flow(&mut network, 0, 3).unwrap();
        assert_eq!(again.max_flow, 0);
        assert_eq!(again.trace.iterations, 0);
        assert_eq!(again.trace.searches, 1);
        assert_eq!(network.total_flow(0).unwrap(), 5);
    }

    #[test]
    fn test_rebuilt_network_is_deterministic() {
        let solver = MaxFlowSolver::default();
        let mut first = crossing();
        let mut second = crossing();

        let a = solver.find_max_flow(&mut first, 0, 6).unwrap();
        let b = solver.find_max_flow(&mut second, 0, 6).unwrap();

        assert_eq!(a.max_flow, b.max_flow);
        assert_eq!(a.edge_flows, b.edge_flows);
        let paths = |r: &MaxFlowResult| {
            r.history.records().iter().map(|p| p.nodes.clone()).collect::<Vec<_>>()
        };
        assert_eq!(paths(&a), paths(&b));
    }

    #[test]
    fn test_arbitrary_terminals() {
        let mut network = diamond();
        let result = MaxFlowSolver::default().find_max_flow(&mut network, 1, 3).unwrap();
        // 1->3 directly plus 1->2->3
        assert_eq!(result.max_flow, 3);
        assert!(network.is_flow_conserved(1, 3));
    }

    #[test]
    fn test_rejects_invalid_terminals() {
        let mut network = diamond();
        let solver = MaxFlowSolver::default();

        assert!(matches!(
            solver.find_max_flow(&mut network, 0, 0),
            Err(AlgorithmError::SameSourceAndSink(0))
        ));
        assert!(matches!(
            solver.find_max_flow(&mut network, 0, 9),
            Err(AlgorithmError::InvalidNode(9))
        ));
        assert!(matches!(
            solver.find_max_flow(&mut network, 4, 3),
            Err(AlgorithmError::InvalidNode(4))
        ));
    }

    #[test]
    fn test_iteration_limit() {
        let mut network = diamond();
        let solver = MaxFlowSolver::new(SolverConfig {
            max_iterations: Some(2),
            ..SolverConfig::default()
        });

        assert!(matches!(
            solver.find_max_flow(&mut network, 0, 3),
            Err(AlgorithmError::IterationLimitExceeded(2))
        ));
    }

    #[test]
    fn test_total_beyond_flow_range_is_an_error() {
        let max = Capacity::MAX;
        let mut network = build(4, &[(0, 1, max), (0, 2, max), (1, 3, max), (2, 3, max)]);
        let result = MaxFlowSolver::default().find_max_flow(&mut network, 0, 3);

        assert!(matches!(
            result,
            Err(AlgorithmError::FlowOverflow { current, added }) if current == max && added == max
        ));
        // The second path is never pushed
        assert_eq!(network.find_edge(0, 2).unwrap().unwrap().flow(), 0);
        assert_eq!(network.find_edge(1, 3).unwrap().unwrap().flow(), max);
    }

    #[test]
    fn test_min_cut_capacity_beyond_range_is_an_error() {
        let max = Capacity::MAX;
        let mut network = build(3, &[(0, 1, max), (0, 2, max)]);
        // Saturate both source edges so the source is cut off alone
        for arc in network.residual_arcs(0).unwrap().collect::<Vec<_>>() {
            network.augment(&arc, max).unwrap();
        }

        assert!(matches!(
            MaxFlowSolver::min_cut(&network, 0),
            Err(AlgorithmError::FlowOverflow { .. })
        ));
    }

    #[test]
    fn test_stale_path_is_rejected_and_rolled_back() {
        let mut network = diamond();
        let path = MaxFlowSolver::find_augmenting_path(&network, 0, 3).unwrap().unwrap();
        assert_eq!(path.bottleneck(), 2);

        // Consume part of 1->3 behind the path's back
        network.augment(&path.arcs()[1], 1).unwrap();

        let err = MaxFlowSolver::augment(&mut network, &path, 2).unwrap_err();
        assert!(matches!(
            err,
            AlgorithmError::InternalConsistency(NetworkError::InvalidFlowAdjustment {
                flow: 1,
                delta: 2,
                capacity: 2,
                ..
            })
        ));
        assert_eq!(network.find_edge(0, 1).unwrap().unwrap().flow(), 0);
        assert_eq!(network.find_edge(1, 3).unwrap().unwrap().flow(), 1);
    }

    #[test]
    fn test_batch_matches_sequential() {
        let solver = MaxFlowSolver::default();
        let mut jobs = vec![
            FlowJob::new(diamond(), 0, 3),
            FlowJob::new(crossing(), 0, 6),
            FlowJob::new(build(2, &[(0, 1, 5)]), 0, 1),
            FlowJob::new(diamond(), 2, 2),
        ];

        let results = solver.solve_batch(&mut jobs);
        let flows: Vec<_> = results[..3].iter().map(|r| r.as_ref().unwrap().max_flow).collect();
        assert_eq!(flows, vec![5, 2, 5]);
        assert!(results[3].is_err());
        assert!(jobs[0].network.is_flow_conserved(0, 3));
    }

    #[test]
    fn test_augmenting_path_shape() {
        let network = diamond();
        let path = MaxFlowSolver::find_augmenting_path(&network, 0, 3).unwrap().unwrap();

        assert_eq!(path.len(), 2);
        assert_eq!(path.nodes(), vec![0, 1, 3]);
        assert_eq!(path.bottleneck(), 2);
    }

    #[test]
    fn test_parameters() {
        let mut solver = MaxFlowSolver::default();
        assert_eq!(solver.name(), "Edmonds-Karp");
        assert_eq!(solver.category(), "max_flow");
        assert_eq!(solver.id().as_str(), "Edmonds-Karp");

        assert!(solver.set_parameter("max_path_display", "4").is_ok());
        assert_eq!(solver.get_parameter("max_path_display"), Some("4".to_string()));
        assert!(solver.set_parameter("detailed_logging", "false").is_ok());
        assert!(!solver.config().detailed_logging);
        assert!(solver.set_parameter("max_iterations", "25").is_ok());
        assert_eq!(solver.config().max_iterations, Some(25));
        assert!(solver.set_parameter("max_iterations", "none").is_ok());
        assert_eq!(solver.get_parameter("max_iterations"), Some("none".to_string()));

        assert!(solver.set_parameter("invalid_param", "value").is_err());
        assert!(solver.set_parameter("max_path_display", "-1").is_err());
        assert!(solver.set_parameter("progress_interval", "0").is_err());
        assert!(solver.set_parameter("detailed_logging", "maybe").is_err());
    }

    #[test]
    fn test_config_from_json() {
        let config =
            SolverConfig::from_json(r#"{ "detailed_logging": false, "max_iterations": 50 }"#)
                .unwrap();
        assert!(!config.detailed_logging);
        assert_eq!(config.max_iterations, Some(50));
        assert_eq!(config.max_path_display, 10);
        assert!(SolverConfig::from_json("{ not json").is_err());
    }
}
