//! Given steps for uniqueness validation BDD scenarios.

use super::world::UniquenessWorld;
use eyre::WrapErr;
use indexed_validations::uniqueness::{
    adapters::memory::IndexedDocument,
    domain::{RecordId, UniquenessOptions},
    services::RecordValidator,
};
use rstest_bdd_macros::given;
use std::sync::Arc;

#[given(r#"a uniqueness rule on "{attribute}" mirrored by index field "{field}""#)]
fn a_uniqueness_rule(
    world: &mut UniquenessWorld,
    attribute: String,
    field: String,
) -> Result<(), eyre::Report> {
    let validator = RecordValidator::new(Arc::clone(&world.index))
        .validates_uniqueness_of([attribute], UniquenessOptions::new(field))
        .wrap_err("declare uniqueness rule for scenario")?;
    world.validator = Some(validator);
    Ok(())
}

#[given(r#"the index holds record "{id}" with "{field}" set to "{value}""#)]
fn index_holds_record(
    world: &mut UniquenessWorld,
    id: String,
    field: String,
    value: String,
) -> Result<(), eyre::Report> {
    let record_id = RecordId::new(id).wrap_err("parse record id")?;
    world
        .index
        .inner
        .index_document(record_id, IndexedDocument::new().with_field(field, value))
        .wrap_err("index record for scenario")?;
    Ok(())
}

#[given("the index is unreachable")]
fn index_is_unreachable(world: &mut UniquenessWorld) {
    world.index.go_offline();
}
