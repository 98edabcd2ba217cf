use crate::{
    error::InternalError,
    model::{Record, ResourceModel},
    value::Value,
};
use std::collections::{BTreeMap, BTreeSet};

///
/// ModelRegistry
///
/// Build-scoped lookup of resource models by name. Built once by the caller
/// and passed by reference to ordering resolution; never global.
///

#[derive(Clone, Debug, Default)]
pub struct ModelRegistry {
    models: BTreeMap<String, ResourceModel>,
}

impl ModelRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one resource model.
    ///
    /// Relation targets are not checked here so models may be registered in
    /// any order; dangling targets surface when an ordering path uses them.
    pub fn register(&mut self, model: ResourceModel) -> Result<(), InternalError> {
        if self.models.contains_key(model.name()) {
            return Err(InternalError::model_invariant(format!(
                "resource '{}' is already registered",
                model.name()
            )));
        }

        let mut seen = BTreeSet::new();
        for field in model.fields() {
            if !seen.insert(field.name.as_str()) {
                return Err(InternalError::model_invariant(format!(
                    "resource '{}' declares field '{}' twice",
                    model.name(),
                    field.name
                )));
            }
        }

        self.models.insert(model.name().to_string(), model);

        Ok(())
    }

    /// Builder form of `register`.
    pub fn with(mut self, model: ResourceModel) -> Result<Self, InternalError> {
        self.register(model)?;

        Ok(self)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ResourceModel> {
        self.models.get(name)
    }

    pub fn require(&self, name: &str) -> Result<&ResourceModel, InternalError> {
        self.get(name)
            .ok_or_else(|| InternalError::model_invariant(format!("unknown resource '{name}'")))
    }

    /// Build a record of `resource` from `(field, value)` pairs; unset fields stay null.
    pub fn record<'a>(
        &self,
        resource: &str,
        values: impl IntoIterator<Item = (&'a str, Value)>,
    ) -> Result<Record, InternalError> {
        let model = self.require(resource)?;
        let mut record = Record::blank(model);

        for (field, value) in values {
            record.set_value(model, field, value)?;
        }

        Ok(record)
    }
}
