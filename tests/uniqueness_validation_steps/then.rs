//! Then steps for uniqueness validation BDD scenarios.

use super::world::UniquenessWorld;
use indexed_validations::uniqueness::{domain::ValidationOutcome, services::UniquenessValidationError};
use rstest_bdd_macros::then;

fn last_outcome(world: &UniquenessWorld) -> Result<&ValidationOutcome, eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing validation result in scenario world"))?;
    result
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected validation failure: {err}"))
}

#[then("the outcome is valid")]
fn outcome_is_valid(world: &UniquenessWorld) -> Result<(), eyre::Report> {
    let outcome = last_outcome(world)?;
    if !outcome.is_valid() {
        return Err(eyre::eyre!(
            "expected a valid outcome, found {:?}",
            outcome.full_messages()
        ));
    }
    Ok(())
}

#[then(r#""{attribute}" is reported as "{message}""#)]
fn attribute_reported_as(
    world: &UniquenessWorld,
    attribute: String,
    message: String,
) -> Result<(), eyre::Report> {
    let outcome = last_outcome(world)?;
    let reported = outcome
        .violations()
        .iter()
        .any(|violation| violation.attribute().as_str() == attribute && violation.message() == message);
    if !reported {
        return Err(eyre::eyre!(
            "expected '{attribute} {message}', found {:?}",
            outcome.full_messages()
        ));
    }
    if outcome.len() != 1 {
        return Err(eyre::eyre!(
            "expected exactly one violation, found {:?}",
            outcome.full_messages()
        ));
    }
    Ok(())
}

#[then("the index was not queried")]
fn index_not_queried(world: &UniquenessWorld) -> Result<(), eyre::Report> {
    let queries = world.index.query_count();
    if queries != 0 {
        return Err(eyre::eyre!("expected no index queries, found {queries}"));
    }
    Ok(())
}

#[then("validation fails with a query error")]
fn validation_fails_with_query_error(world: &UniquenessWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing validation result in scenario world"))?;
    if !matches!(result, Err(UniquenessValidationError::Query(_))) {
        return Err(eyre::eyre!("expected a query error, got {result:?}"));
    }
    Ok(())
}
