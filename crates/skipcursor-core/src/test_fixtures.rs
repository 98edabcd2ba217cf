//! Shared resource shapes for unit tests.

use crate::{
    model::{ModelRegistry, Record, ResourceModel},
    value::Value,
};
use skipcursor_primitives::ScalarKind;

pub(crate) const PERSON: &str = "Person";
pub(crate) const PRODUCT: &str = "Product";
pub(crate) const CATEGORY: &str = "Category";
pub(crate) const EMPLOYEE: &str = "Employee";

/// Person(name, id), Product(sku, price, category → Category, released?,
/// featured?) with Category(title, rank?, parent → Category), and a
/// self-referencing Employee(id, manager → Employee).
pub(crate) fn registry() -> ModelRegistry {
    ModelRegistry::new()
        .with(
            ResourceModel::new(PERSON)
                .scalar("name", ScalarKind::Text)
                .scalar("id", ScalarKind::Int),
        )
        .and_then(|r| {
            r.with(
                ResourceModel::new(PRODUCT)
                    .scalar("sku", ScalarKind::Guid)
                    .scalar("price", ScalarKind::Float)
                    .relation("category", CATEGORY)
                    .nullable("released", ScalarKind::DateTime)
                    .nullable("featured", ScalarKind::Bool),
            )
        })
        .and_then(|r| {
            r.with(
                ResourceModel::new(CATEGORY)
                    .scalar("title", ScalarKind::Text)
                    .nullable("rank", ScalarKind::Int)
                    .relation("parent", CATEGORY),
            )
        })
        .and_then(|r| {
            r.with(
                ResourceModel::new(EMPLOYEE)
                    .scalar("id", ScalarKind::Int)
                    .relation("manager", EMPLOYEE),
            )
        })
        .expect("fixture registry should build")
}

pub(crate) fn person(registry: &ModelRegistry, name: &str, id: i64) -> Record {
    registry
        .record(PERSON, [("name", Value::from(name)), ("id", Value::Int(id))])
        .expect("person fixture should build")
}

pub(crate) fn category(registry: &ModelRegistry, title: &str) -> Record {
    registry
        .record(CATEGORY, [("title", Value::from(title))])
        .expect("category fixture should build")
}

/// Product with an optional category; `None` leaves the relation null.
pub(crate) fn product(
    registry: &ModelRegistry,
    category_title: Option<&str>,
    price: f64,
) -> Record {
    let model = registry.get(PRODUCT).expect("product model should exist");
    let mut row = registry
        .record(PRODUCT, [("price", Value::Float(price))])
        .expect("product fixture should build");

    if let Some(title) = category_title {
        row.set_record(model, "category", category(registry, title))
            .expect("category should attach");
    }

    row
}
