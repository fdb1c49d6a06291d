//! Console and JSON rendering of solver results

use std::io::{self, Write};
use std::time::Duration;

use serde::Serialize;

use flowtrace_core::{
    CorrectnessReport, EdgeFlow, Flow, MaxFlowResult, MinCut, NodeId, TraceStatistics,
};

/// Machine-readable report of one run
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub source: NodeId,
    pub sink: NodeId,
    pub max_flow: Flow,
    pub iterations: usize,
    pub total_time_ms: f64,
    pub average_iteration_ms: f64,
    pub statistics: TraceStatistics,
    pub flow_conserved: bool,
    pub min_cut: &'a MinCut,
    pub edge_flows: &'a [EdgeFlow],
    pub steps: &'a [String],
    pub validation: &'a CorrectnessReport,
}

impl<'a> RunReport<'a> {
    pub fn new(
        source: NodeId,
        sink: NodeId,
        result: &'a MaxFlowResult,
        validation: &'a CorrectnessReport,
        flow_conserved: bool,
        elapsed: Duration,
    ) -> Self {
        Self {
            source,
            sink,
            max_flow: result.max_flow,
            iterations: result.trace.iterations,
            total_time_ms: millis(elapsed),
            average_iteration_ms: result.trace.average_iteration_time_ms(),
            statistics: result.trace.statistics(),
            flow_conserved,
            min_cut: &result.min_cut,
            edge_flows: &result.edge_flows,
            steps: &result.trace.steps,
            validation,
        }
    }

    /// Console layout: execution steps followed by the summary block
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n----- EXECUTION DETAILS -----")?;
        for step in self.steps {
            writeln!(out, "{}", step)?;
        }

        writeln!(out, "\n----- SUMMARY -----")?;
        writeln!(out, "Maximum Flow: {}", self.max_flow)?;
        writeln!(out, "Total Iterations: {}", self.iterations)?;
        writeln!(out, "Total Execution Time: {:.3} ms", self.total_time_ms)?;
        writeln!(out, "Average Time per Iteration: {:.3} ms", self.average_iteration_ms)?;
        writeln!(
            out,
            "Minimum Cut: {} edges, capacity {}",
            self.min_cut.cut_edges.len(),
            self.min_cut.capacity
        )?;
        Ok(())
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out).map_err(serde_json::Error::io)
    }
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000.0
}
