use crate::{
    config::CursorConfig,
    error::{ErrorClass, ErrorOrigin, InternalError},
    model::{FieldKind, ModelRegistry, Record, ResourceModel, Slot},
    order::{OrderDirection, OrderSegment, OrderSpec},
    value::{Value, ValueKind},
};
use skipcursor_primitives::ScalarKind;

static NULL_VALUE: Value = Value::Null;

///
/// ResolvedOrder
///
/// Slot-resolved ordering for one resource. Built once from an `OrderSpec`
/// so comparator and cursor paths never look fields up by name.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedOrder {
    resource: String,
    width: usize,
    segments: Vec<ResolvedSegment>,
}

impl ResolvedOrder {
    #[must_use]
    pub fn resource(&self) -> &str {
        &self.resource
    }

    #[must_use]
    pub fn segments(&self) -> &[ResolvedSegment] {
        &self.segments
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Allocate a blank row of the ordered resource.
    pub(crate) fn blank_record(&self) -> Record {
        Record::with_width(&self.resource, self.width)
    }

    /// Confirm a caller-supplied row has the ordered resource's layout.
    pub(crate) fn check_row(&self, row: &Record) -> Result<(), InternalError> {
        if row.resource() != self.resource || row.slots().len() != self.width {
            return Err(InternalError::path_resolution(
                ErrorOrigin::Cursor,
                row.resource(),
                "",
                0,
                format!(
                    "row does not match ordered resource '{}' ({} slots)",
                    self.resource, self.width
                ),
            ));
        }

        Ok(())
    }
}

///
/// ResolvedSegment
///
/// One ordering column as an explicit accessor: the slot to follow at each
/// relation hop, then the terminal slot and its declared kind.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedSegment {
    root: String,
    path: String,
    relations: Vec<RelationStep>,
    slot: usize,
    direction: OrderDirection,
    kind: ScalarKind,
    nullable: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct RelationStep {
    slot: usize,
    target: String,
    width: usize,
}

// Reason a path could not be followed on a concrete row.
struct PathFault {
    step: usize,
    reason: &'static str,
}

impl ResolvedSegment {
    /// Dotted ordering path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub const fn direction(&self) -> OrderDirection {
        self.direction
    }

    /// Declared scalar kind of the terminal field.
    #[must_use]
    pub const fn kind(&self) -> ScalarKind {
        self.kind
    }

    #[must_use]
    pub const fn declared_kind(&self) -> ValueKind {
        ValueKind::Scalar(self.kind)
    }

    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Terminal value on `row`, with unreadable paths treated as null.
    #[must_use]
    pub fn value_or_null<'r>(&self, row: &'r Record) -> &'r Value {
        self.walk(row).unwrap_or(&NULL_VALUE)
    }

    /// Terminal value on `row`.
    ///
    /// A null relation on the way yields `Value::Null` for this segment only.
    /// A row whose layout disagrees with the declared shape, or whose terminal
    /// value has the wrong kind, is a path-resolution fault.
    pub fn read<'r>(&self, row: &'r Record) -> Result<&'r Value, InternalError> {
        let value = self
            .walk(row)
            .map_err(|fault| self.fault(ErrorOrigin::Cursor, fault.step, fault.reason))?;

        if !ValueKind::is_compatible(self.declared_kind(), value.kind()) {
            return Err(self.fault(
                ErrorOrigin::Cursor,
                self.relations.len(),
                "terminal value kind disagrees with the declared field kind",
            ));
        }

        Ok(value)
    }

    /// Write `value` at this segment's terminal slot on a synthetic key row,
    /// allocating blank nested records for relation hops as needed.
    pub(crate) fn assign(&self, key: &mut Record, value: Value) -> Result<(), InternalError> {
        let mut current = key;

        for (step, relation) in self.relations.iter().enumerate() {
            let slot = current
                .slot_mut(relation.slot)
                .ok_or_else(|| {
                    self.fault(ErrorOrigin::Cursor, step, "slot missing on key object")
                })?;

            if matches!(slot, Slot::Value(Value::Null)) {
                *slot = Slot::Record(Box::new(Record::with_width(
                    &relation.target,
                    relation.width,
                )));
            }

            current = match slot {
                Slot::Record(nested) => nested.as_mut(),
                Slot::Value(_) => {
                    return Err(self.fault(
                        ErrorOrigin::Cursor,
                        step,
                        "relation slot holds a scalar on key object",
                    ));
                }
            };
        }

        let step = self.relations.len();
        let terminal = current
            .slot_mut(self.slot)
            .ok_or_else(|| self.fault(ErrorOrigin::Cursor, step, "slot missing on key object"))?;
        if matches!(terminal, Slot::Record(_)) {
            return Err(self.fault(
                ErrorOrigin::Cursor,
                step,
                "terminal slot holds a record on key object",
            ));
        }
        *terminal = Slot::Value(value);

        Ok(())
    }

    fn walk<'r>(&self, row: &'r Record) -> Result<&'r Value, PathFault> {
        let mut current = row;

        for (step, relation) in self.relations.iter().enumerate() {
            current = match current.slot(relation.slot) {
                Some(Slot::Record(nested)) if nested.resource() == relation.target => nested,
                Some(Slot::Value(Value::Null)) => return Ok(&NULL_VALUE),
                Some(Slot::Record(_)) => {
                    return Err(PathFault {
                        step,
                        reason: "relation holds a record of another resource",
                    });
                }
                Some(Slot::Value(_)) => {
                    return Err(PathFault {
                        step,
                        reason: "relation slot holds a scalar",
                    });
                }
                None => {
                    return Err(PathFault {
                        step,
                        reason: "row has no slot for this step",
                    });
                }
            };
        }

        let step = self.relations.len();
        match current.slot(self.slot) {
            Some(Slot::Value(value)) => Ok(value),
            Some(Slot::Record(_)) => Err(PathFault {
                step,
                reason: "terminal slot holds a record",
            }),
            None => Err(PathFault {
                step,
                reason: "row has no slot for this step",
            }),
        }
    }

    fn fault(&self, origin: ErrorOrigin, step: usize, reason: &str) -> InternalError {
        InternalError::path_resolution(origin, &self.root, &self.path, step, reason)
    }
}

impl OrderSpec {
    /// Resolve every segment against the registry.
    ///
    /// Unknown fields, scalar hops, relation terminals, dangling relation
    /// targets and over-deep paths all fail here, before any request runs.
    pub fn resolve(
        &self,
        registry: &ModelRegistry,
        config: &CursorConfig,
    ) -> Result<ResolvedOrder, InternalError> {
        config.validate()?;

        if self.segments.is_empty() {
            return Err(InternalError::new(
                ErrorClass::Unsupported,
                ErrorOrigin::Order,
                "cursor pagination requires non-empty ordering",
            ));
        }

        let model = registry.require(&self.resource)?;
        let segments = self
            .segments
            .iter()
            .map(|segment| {
                let resolver = PathResolver {
                    registry,
                    root: model.name(),
                    segment,
                    max_depth: config.max_path_depth,
                };
                resolver.resolve(model)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ResolvedOrder {
            resource: model.name().to_string(),
            width: model.width(),
            segments,
        })
    }
}

///
/// PathResolver
/// Walks one segment's steps through the registry, one relation hop per depth.
///

struct PathResolver<'a> {
    registry: &'a ModelRegistry,
    root: &'a str,
    segment: &'a OrderSegment,
    max_depth: usize,
}

impl PathResolver<'_> {
    fn resolve(&self, model: &ResourceModel) -> Result<ResolvedSegment, InternalError> {
        let mut relations = Vec::new();
        let (slot, kind, nullable) =
            self.resolve_steps(model, &self.segment.path, 0, &mut relations)?;

        Ok(ResolvedSegment {
            root: self.root.to_string(),
            path: self.segment.dotted(),
            relations,
            slot,
            direction: self.segment.direction,
            kind,
            nullable,
        })
    }

    fn resolve_steps(
        &self,
        model: &ResourceModel,
        steps: &[String],
        depth: usize,
        relations: &mut Vec<RelationStep>,
    ) -> Result<(usize, ScalarKind, bool), InternalError> {
        let Some((step, rest)) = steps.split_first() else {
            return Err(self.fail(depth, "ordering path is empty".to_string()));
        };
        if depth >= self.max_depth {
            return Err(self.fail(
                depth,
                format!("path exceeds max depth {}", self.max_depth),
            ));
        }

        let (slot, field) = model
            .field_slot(step)
            .and_then(|slot| model.field_at(slot).map(|field| (slot, field)))
            .ok_or_else(|| self.fail(depth, format!("'{}' has no field '{step}'", model.name())))?;

        match (&field.kind, rest.is_empty()) {
            (FieldKind::Scalar { kind, nullable }, true) => Ok((slot, *kind, *nullable)),
            (FieldKind::Scalar { .. }, false) => Err(self.fail(
                depth,
                format!("'{}.{step}' is a scalar and cannot be traversed", model.name()),
            )),
            (FieldKind::Relation { .. }, true) => Err(self.fail(
                depth,
                format!("'{}.{step}' is a relation and is not sortable", model.name()),
            )),
            (FieldKind::Relation { target }, false) => {
                let target_model = self.registry.get(target).ok_or_else(|| {
                    self.fail(
                        depth,
                        format!("'{}.{step}' targets unknown resource '{target}'", model.name()),
                    )
                })?;
                relations.push(RelationStep {
                    slot,
                    target: target.clone(),
                    width: target_model.width(),
                });

                self.resolve_steps(target_model, rest, depth + 1, relations)
            }
        }
    }

    fn fail(&self, depth: usize, reason: String) -> InternalError {
        InternalError::path_resolution(
            ErrorOrigin::Order,
            self.root,
            self.segment.dotted(),
            depth,
            reason,
        )
    }
}
