use crate::{
    model::Record,
    order::{OrderDirection, ResolvedOrder},
    value::canonical_cmp,
};
use std::cmp::Ordering;

/// Flip an ascending comparison for descending segments.
#[must_use]
pub const fn apply_order_direction(ordering: Ordering, direction: OrderDirection) -> Ordering {
    match direction {
        OrderDirection::Asc => ordering,
        OrderDirection::Desc => ordering.reverse(),
    }
}

impl ResolvedOrder {
    /// Compare two rows under this ordering.
    ///
    /// Lexicographic across segments in declared order. Within a segment,
    /// null sorts first before the direction is applied. A path that cannot
    /// be followed on a row compares as null.
    #[must_use]
    pub fn compare(&self, left: &Record, right: &Record) -> Ordering {
        for segment in self.segments() {
            let ordering = canonical_cmp(segment.value_or_null(left), segment.value_or_null(right));
            let ordering = apply_order_direction(ordering, segment.direction());

            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        Ordering::Equal
    }

    /// Sort rows in place under this ordering (stable).
    pub fn sort(&self, rows: &mut [Record]) {
        rows.sort_by(|left, right| self.compare(left, right));
    }
}
