//! Observability: pagination telemetry and sink abstractions.

pub(crate) mod sink;

// re-exports
pub use sink::{
    CountingSink, MetricsEvent, MetricsSink, NoopSink, PaginationCounters, TRACING_SINK,
    TracingSink,
};
