use crate::value::ValueKind;
use skipcursor_primitives::ScalarKind;

///
/// ResourceModel
///
/// Declared shape of one resource: its name and ordered fields.
/// A field's position in `fields` is its slot index in every `Record`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResourceModel {
    name: String,
    fields: Vec<FieldModel>,
}

impl ResourceModel {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a non-nullable scalar field.
    #[must_use]
    pub fn scalar(self, name: impl Into<String>, kind: ScalarKind) -> Self {
        self.field(name, FieldKind::Scalar {
            kind,
            nullable: false,
        })
    }

    /// Append a nullable scalar field.
    #[must_use]
    pub fn nullable(self, name: impl Into<String>, kind: ScalarKind) -> Self {
        self.field(name, FieldKind::Scalar {
            kind,
            nullable: true,
        })
    }

    /// Append a relation to another registered resource.
    #[must_use]
    pub fn relation(self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.field(name, FieldKind::Relation {
            target: target.into(),
        })
    }

    #[must_use]
    pub fn field(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.push(FieldModel {
            name: name.into(),
            kind,
        });
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldModel] {
        &self.fields
    }

    /// Number of slots a record of this resource carries.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.fields.len()
    }

    /// Resolve a field name to its slot index.
    #[must_use]
    pub fn field_slot(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    #[must_use]
    pub fn field_at(&self, slot: usize) -> Option<&FieldModel> {
        self.fields.get(slot)
    }
}

///
/// FieldModel
/// Runtime field metadata used by path resolution.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldModel {
    pub name: String,
    pub kind: FieldKind,
}

///
/// FieldKind
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldKind {
    Scalar { kind: ScalarKind, nullable: bool },

    /// Nested or related resource, referenced by name so cyclic
    /// associations can be declared.
    Relation { target: String },
}

impl FieldKind {
    /// Whether a value of `kind` may be stored in this field.
    #[must_use]
    pub fn accepts(&self, kind: ValueKind) -> bool {
        match (self, kind) {
            (Self::Scalar { nullable, .. }, ValueKind::Null) => *nullable,
            (Self::Scalar { kind: declared, .. }, ValueKind::Scalar(provided)) => {
                *declared == provided
            }
            // an absent relation is stored as a null slot
            (Self::Relation { .. }, ValueKind::Null) => true,
            (Self::Relation { .. }, ValueKind::Scalar(_)) => false,
        }
    }
}
