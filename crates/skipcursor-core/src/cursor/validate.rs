use crate::{
    cursor::{CursorError, SkipTokenValues},
    order::ResolvedOrder,
    value::ValueKind,
};

/// Require exactly one skiptoken slot per ordering segment.
pub fn validate_arity(order: &ResolvedOrder, values: &SkipTokenValues) -> Result<(), CursorError> {
    if values.len() != order.len() {
        return Err(CursorError::arity(order.len(), values.len()));
    }

    Ok(())
}

/// Check each slot's kind against its segment's declared kind, in order.
///
/// Stops at the first incompatible position. The null marker is accepted
/// at every position.
pub fn validate_types(order: &ResolvedOrder, values: &SkipTokenValues) -> Result<(), CursorError> {
    for (position, (segment, slot)) in order.segments().iter().zip(values.iter()).enumerate() {
        let expected = segment.declared_kind();
        let provided = slot.kind();

        if !ValueKind::is_compatible(expected, provided) {
            return Err(CursorError::type_mismatch(position, expected, provided));
        }
    }

    Ok(())
}
