use crate::{
    config::CursorConfig,
    cursor::{SkipTokenValues, parse_skiptoken, validate_arity, validate_types},
    error::{InternalError, PaginationError},
    model::Record,
    obs::{MetricsEvent, MetricsSink},
    order::ResolvedOrder,
};
use std::{cell::OnceCell, cmp::Ordering};

///
/// PositionDescriptor
///
/// A validated skiptoken bound to the ordering it was issued for.
/// Owns its parsed slots and lazily builds the synthetic key row that the
/// resume search compares against; the key is built at most once.
///

pub struct PositionDescriptor<'o> {
    order: &'o ResolvedOrder,
    values: SkipTokenValues,
    key: OnceCell<Record>,
    sink: &'o dyn MetricsSink,
}

impl<'o> PositionDescriptor<'o> {
    /// Bind parsed slots to `order`, checking arity then per-position kinds.
    pub fn new(
        order: &'o ResolvedOrder,
        values: SkipTokenValues,
        sink: &'o dyn MetricsSink,
    ) -> Result<Self, PaginationError> {
        let checked = validate_arity(order, &values).and_then(|()| validate_types(order, &values));
        if let Err(err) = checked {
            sink.record(MetricsEvent::TokenRejected { kind: err.kind() });
            return Err(err.into());
        }

        Ok(Self {
            order,
            values,
            key: OnceCell::new(),
            sink,
        })
    }

    /// Parse untrusted skiptoken text and bind it to `order`.
    pub fn from_token(
        order: &'o ResolvedOrder,
        token: &str,
        config: &CursorConfig,
        sink: &'o dyn MetricsSink,
    ) -> Result<Self, PaginationError> {
        config.validate()?;

        let values = parse_skiptoken(token, config).inspect_err(|err| {
            sink.record(MetricsEvent::TokenRejected { kind: err.kind() });
        })?;
        sink.record(MetricsEvent::TokenParsed {
            segments: values.len(),
        });

        Self::new(order, values, sink)
    }

    #[must_use]
    pub const fn order(&self) -> &ResolvedOrder {
        self.order
    }

    #[must_use]
    pub const fn values(&self) -> &SkipTokenValues {
        &self.values
    }

    /// Synthetic row of the ordered resource carrying the token's values at
    /// each segment's path. Nested records along a path are allocated on
    /// first use; every other slot stays null.
    pub fn key_object(&self) -> Result<&Record, InternalError> {
        if let Some(key) = self.key.get() {
            return Ok(key);
        }

        let mut key = self.order.blank_record();
        for (segment, slot) in self.order.segments().iter().zip(self.values.iter()) {
            segment.assign(&mut key, slot.value().clone())?;
        }
        self.sink.record(MetricsEvent::KeyObjectBuilt {
            segments: self.values.len(),
        });

        Ok(self.key.get_or_init(|| key))
    }

    /// Index of the first row to serve after the cursor, using the
    /// ordering's own comparator. `rows` must already be sorted by it.
    pub fn find_resume_index(&self, rows: &[Record]) -> Result<Option<usize>, InternalError> {
        self.find_resume_index_by(rows, |row, key| self.order.compare(row, key))
    }

    /// Binary search for the resume point under a caller comparator.
    ///
    /// An exact match resumes on the following row. Without one, the search
    /// resumes at the first row that sorts after the cursor. `None` means
    /// nothing remains after the cursor.
    pub fn find_resume_index_by<F>(
        &self,
        rows: &[Record],
        compare: F,
    ) -> Result<Option<usize>, InternalError>
    where
        F: Fn(&Record, &Record) -> Ordering,
    {
        let key = self.key_object()?;
        let mut low = 0;
        let mut high = rows.len();
        let mut comparisons = 0u32;

        while low < high {
            let mid = low + (high - low) / 2;
            comparisons = comparisons.saturating_add(1);

            match compare(&rows[mid], key) {
                Ordering::Less => low = mid + 1,
                Ordering::Greater => high = mid,
                Ordering::Equal => {
                    let index = (mid + 1 < rows.len()).then_some(mid + 1);
                    self.record_resume(index, true, comparisons);

                    return Ok(index);
                }
            }
        }

        let index = (low < rows.len()).then_some(low);
        self.record_resume(index, false, comparisons);

        Ok(index)
    }

    fn record_resume(&self, index: Option<usize>, exact: bool, comparisons: u32) {
        self.sink.record(MetricsEvent::ResumeLocated {
            index,
            exact,
            comparisons,
        });
    }
}

/// Render the skiptoken that resumes after `row` under `order`.
pub fn build_next_page_token(
    order: &ResolvedOrder,
    row: &Record,
    sink: &dyn MetricsSink,
) -> Result<String, InternalError> {
    let token = SkipTokenValues::from_row(order, row)?.to_string();
    sink.record(MetricsEvent::NextTokenBuilt { len: token.len() });

    Ok(token)
}
