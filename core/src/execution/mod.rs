//! Execution tracing and augmentation history
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod history;
pub mod tracer;

pub use self::history::{AugmentationHistory, HistoryError, PathRecord};
pub use self::tracer::{ExecutionTrace, ExecutionTracer, TraceStatistics};
