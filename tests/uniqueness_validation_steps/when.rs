//! When steps for uniqueness validation BDD scenarios.

use super::world::{UniquenessWorld, run_async};
use eyre::WrapErr;
use indexed_validations::uniqueness::{
    domain::{AttributeName, AttributeValue, RecordId, RecordRef},
    services::RecordAttributes,
};
use rstest_bdd_macros::when;

fn validate(
    world: &mut UniquenessWorld,
    record: &RecordRef,
    attribute: String,
    value: AttributeValue,
) -> Result<(), eyre::Report> {
    let name = AttributeName::new(attribute).wrap_err("parse attribute name")?;
    let attributes = RecordAttributes::from([(name, value)]);
    let validator = world
        .validator
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing validator in scenario world"))?;
    let result = run_async(validator.validate(record, &attributes));
    world.last_result = Some(result);
    Ok(())
}

#[when(r#"a new record is validated with "{attribute}" set to "{value}""#)]
fn validate_new_record(
    world: &mut UniquenessWorld,
    attribute: String,
    value: String,
) -> Result<(), eyre::Report> {
    validate(world, &RecordRef::new_record(), attribute, value.into())
}

#[when(r#"a new record is validated with "{attribute}" holding values "{first}" and "{second}""#)]
fn validate_new_record_with_values(
    world: &mut UniquenessWorld,
    attribute: String,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    validate(
        world,
        &RecordRef::new_record(),
        attribute,
        AttributeValue::sequence([first, second]),
    )
}

#[when(r#"persisted record "{id}" is validated with "{attribute}" set to "{value}""#)]
fn validate_persisted_record(
    world: &mut UniquenessWorld,
    id: String,
    attribute: String,
    value: String,
) -> Result<(), eyre::Report> {
    let record = RecordRef::persisted(RecordId::new(id).wrap_err("parse record id")?);
    validate(world, &record, attribute, value.into())
}
