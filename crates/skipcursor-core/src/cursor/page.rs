use crate::{
    config::CursorConfig,
    cursor::{PositionDescriptor, build_next_page_token},
    error::PaginationError,
    model::Record,
    obs::{MetricsEvent, MetricsSink},
    order::ResolvedOrder,
};
use serde::{Deserialize, Serialize};

///
/// PageRequest
/// Client paging inputs: an optional `$skiptoken` and an optional `$top`.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct PageRequest {
    pub skiptoken: Option<String>,
    pub top: Option<usize>,
}

impl PageRequest {
    #[must_use]
    pub fn first(top: Option<usize>) -> Self {
        Self {
            skiptoken: None,
            top,
        }
    }

    #[must_use]
    pub fn after(skiptoken: impl Into<String>, top: Option<usize>) -> Self {
        Self {
            skiptoken: Some(skiptoken.into()),
            top,
        }
    }
}

///
/// Page
///
/// One served window over caller-sorted rows, plus the skiptoken for the
/// next window when rows remain.
///

#[derive(Debug)]
pub struct Page<'r> {
    rows: &'r [Record],
    start: usize,
    next_token: Option<String>,
}

impl<'r> Page<'r> {
    #[must_use]
    pub const fn rows(&self) -> &'r [Record] {
        self.rows
    }

    /// Index of the first served row within the full row set.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    #[must_use]
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next_token.is_some()
    }

    #[must_use]
    pub fn into_next_token(self) -> Option<String> {
        self.next_token
    }
}

/// Serve one page of `rows`, which must already be sorted by `order`.
///
/// Without a skiptoken the page starts at the first row. With one, it
/// starts at the resume point; a cursor past the last row yields an empty
/// page with no next token. A config that fails [`CursorConfig::validate`]
/// fails the page before any row is served.
pub fn paginate<'r>(
    order: &ResolvedOrder,
    rows: &'r [Record],
    request: &PageRequest,
    config: &CursorConfig,
    sink: &dyn MetricsSink,
) -> Result<Page<'r>, PaginationError> {
    config.validate()?;

    let start = match request.skiptoken.as_deref() {
        None => 0,
        Some(token) => PositionDescriptor::from_token(order, token, config, sink)?
            .find_resume_index(rows)?
            .unwrap_or(rows.len()),
    };

    let end = start
        .saturating_add(config.page_size(request.top))
        .min(rows.len());
    let served = &rows[start..end];

    let next_token = if end < rows.len() && end > start {
        Some(build_next_page_token(order, &rows[end - 1], sink)?)
    } else {
        None
    };

    sink.record(MetricsEvent::PageServed {
        rows: served.len(),
        has_next: next_token.is_some(),
    });

    Ok(Page {
        rows: served,
        start,
        next_token,
    })
}
