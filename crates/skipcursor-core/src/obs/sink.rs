//! Metrics sink boundary.
//!
//! Pagination logic MUST NOT log or count directly.
//! All instrumentation flows through MetricsEvent and MetricsSink, and the
//! sink is always handed in by the caller; there is no global sink state.

use crate::cursor::CursorErrorKind;
use std::cell::RefCell;

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    TokenParsed {
        segments: usize,
    },
    TokenRejected {
        kind: CursorErrorKind,
    },
    KeyObjectBuilt {
        segments: usize,
    },
    ResumeLocated {
        index: Option<usize>,
        exact: bool,
        comparisons: u32,
    },
    NextTokenBuilt {
        len: usize,
    },
    PageServed {
        rows: usize,
        has_next: bool,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

///
/// TracingSink
/// Default sink: forwards every event as a structured `tracing` event.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

/// Shared default sink instance.
pub static TRACING_SINK: TracingSink = TracingSink;

impl MetricsSink for TracingSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::TokenParsed { segments } => {
                tracing::trace!(segments, "skiptoken parsed");
            }
            MetricsEvent::TokenRejected { kind } => {
                tracing::debug!(?kind, "skiptoken rejected");
            }
            MetricsEvent::KeyObjectBuilt { segments } => {
                tracing::trace!(segments, "cursor key object built");
            }
            MetricsEvent::ResumeLocated {
                index,
                exact,
                comparisons,
            } => {
                if exact {
                    tracing::trace!(?index, comparisons, "resume point located");
                } else {
                    // cursor row no longer exists; resumed at the closest row
                    tracing::debug!(?index, comparisons, "resume point located by fallback");
                }
            }
            MetricsEvent::NextTokenBuilt { len } => {
                tracing::trace!(len, "next page skiptoken built");
            }
            MetricsEvent::PageServed { rows, has_next } => {
                tracing::trace!(rows, has_next, "page served");
            }
        }
    }
}

///
/// NoopSink
///

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl MetricsSink for NoopSink {
    fn record(&self, _event: MetricsEvent) {}
}

///
/// PaginationCounters
/// Plain counters accumulated by a `CountingSink`.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PaginationCounters {
    pub tokens_parsed: u64,
    pub tokens_rejected: u64,
    pub key_objects_built: u64,
    pub exact_resumes: u64,
    pub fallback_resumes: u64,
    pub search_comparisons: u64,
    pub tokens_built: u64,
    pub pages_served: u64,
    pub rows_served: u64,
}

///
/// CountingSink
///
/// Request-scoped sink that accumulates counters for the caller to report.
/// Not `Sync`; create one per request.
///

#[derive(Debug, Default)]
pub struct CountingSink {
    counters: RefCell<PaginationCounters>,
}

impl CountingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current counters.
    #[must_use]
    pub fn snapshot(&self) -> PaginationCounters {
        *self.counters.borrow()
    }
}

impl MetricsSink for CountingSink {
    fn record(&self, event: MetricsEvent) {
        let mut c = self.counters.borrow_mut();

        match event {
            MetricsEvent::TokenParsed { .. } => {
                c.tokens_parsed = c.tokens_parsed.saturating_add(1);
            }
            MetricsEvent::TokenRejected { .. } => {
                c.tokens_rejected = c.tokens_rejected.saturating_add(1);
            }
            MetricsEvent::KeyObjectBuilt { .. } => {
                c.key_objects_built = c.key_objects_built.saturating_add(1);
            }
            MetricsEvent::ResumeLocated {
                exact, comparisons, ..
            } => {
                if exact {
                    c.exact_resumes = c.exact_resumes.saturating_add(1);
                } else {
                    c.fallback_resumes = c.fallback_resumes.saturating_add(1);
                }
                c.search_comparisons = c.search_comparisons.saturating_add(u64::from(comparisons));
            }
            MetricsEvent::NextTokenBuilt { .. } => {
                c.tokens_built = c.tokens_built.saturating_add(1);
            }
            MetricsEvent::PageServed { rows, .. } => {
                c.pages_served = c.pages_served.saturating_add(1);
                c.rows_served = c
                    .rows_served
                    .saturating_add(u64::try_from(rows).unwrap_or(u64::MAX));
            }
        }
    }
}

///
/// TESTS
///
