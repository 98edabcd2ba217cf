use crate::value::Value;
use std::cmp::Ordering;

/// Total canonical comparator used by row ordering and cursor search.
///
/// Ordering rules:
/// 1. `Null` sorts before every non-null value
/// 2. Same-kind values compare naturally (floats by IEEE total order)
/// 3. Mixed kinds compare by a fixed kind rank so the order stays total
#[must_use]
pub fn canonical_cmp(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::DateTime(a), Value::DateTime(b)) => a.cmp(b),
        (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
        (Value::Guid(a), Value::Guid(b)) => a.cmp(b),
        (Value::Int(a), Value::Int(b)) => a.cmp(b),
        (Value::Text(a), Value::Text(b)) => a.cmp(b),
        _ => canonical_rank(left).cmp(&canonical_rank(right)),
    }
}

// Stable rank used only for cross-kind comparisons; `Null` must stay lowest.
const fn canonical_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Int(_) => 2,
        Value::Float(_) => 3,
        Value::DateTime(_) => 4,
        Value::Guid(_) => 5,
        Value::Text(_) => 6,
    }
}
