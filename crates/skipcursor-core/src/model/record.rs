use crate::{
    error::InternalError,
    model::{FieldKind, ResourceModel},
    value::Value,
};

///
/// Record
///
/// One materialized row: the resource it belongs to plus one slot per
/// declared field, in model order.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    resource: String,
    slots: Vec<Slot>,
}

///
/// Slot
///
/// `Value(Value::Null)` doubles as an absent relation.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Slot {
    Value(Value),
    Record(Box<Record>),
}

impl Record {
    /// Allocate a record with every slot null.
    #[must_use]
    pub fn blank(model: &ResourceModel) -> Self {
        Self::with_width(model.name(), model.width())
    }

    pub(crate) fn with_width(resource: &str, width: usize) -> Self {
        Self {
            resource: resource.to_string(),
            slots: vec![Slot::Value(Value::Null); width],
        }
    }

    #[must_use]
    pub fn resource(&self) -> &str {
        &self.resource
    }

    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> Option<&mut Slot> {
        self.slots.get_mut(index)
    }

    /// Borrow a slot by field name.
    #[must_use]
    pub fn get(&self, model: &ResourceModel, field: &str) -> Option<&Slot> {
        model.field_slot(field).and_then(|slot| self.slot(slot))
    }

    /// Assign a scalar (or null) to a field, checking it against the model.
    pub fn set_value(
        &mut self,
        model: &ResourceModel,
        field: &str,
        value: impl Into<Value>,
    ) -> Result<(), InternalError> {
        let value = value.into();
        let (index, kind) = self.resolve_field(model, field)?;

        if !kind.accepts(value.kind()) {
            return Err(InternalError::model_invariant(format!(
                "field '{}.{field}' cannot hold a {} value",
                model.name(),
                value.kind()
            )));
        }
        self.slots[index] = Slot::Value(value);

        Ok(())
    }

    /// Attach a nested record to a relation field.
    pub fn set_record(
        &mut self,
        model: &ResourceModel,
        field: &str,
        record: Self,
    ) -> Result<(), InternalError> {
        let (index, kind) = self.resolve_field(model, field)?;

        match kind {
            FieldKind::Relation { target } if *target == record.resource => {}
            _ => {
                return Err(InternalError::model_invariant(format!(
                    "field '{}.{field}' cannot hold a '{}' record",
                    model.name(),
                    record.resource
                )));
            }
        }
        self.slots[index] = Slot::Record(Box::new(record));

        Ok(())
    }

    /// Builder form of `set_value`.
    pub fn with_value(
        mut self,
        model: &ResourceModel,
        field: &str,
        value: impl Into<Value>,
    ) -> Result<Self, InternalError> {
        self.set_value(model, field, value)?;

        Ok(self)
    }

    /// Builder form of `set_record`.
    pub fn with_record(
        mut self,
        model: &ResourceModel,
        field: &str,
        record: Self,
    ) -> Result<Self, InternalError> {
        self.set_record(model, field, record)?;

        Ok(self)
    }

    fn resolve_field<'m>(
        &self,
        model: &'m ResourceModel,
        field: &str,
    ) -> Result<(usize, &'m FieldKind), InternalError> {
        if model.name() != self.resource || model.width() != self.slots.len() {
            return Err(InternalError::model_invariant(format!(
                "record of '{}' does not match model '{}'",
                self.resource,
                model.name()
            )));
        }

        model
            .field_slot(field)
            .and_then(|index| model.field_at(index).map(|f| (index, &f.kind)))
            .ok_or_else(|| {
                InternalError::model_invariant(format!(
                    "resource '{}' has no field '{field}'",
                    model.name()
                ))
            })
    }
}
