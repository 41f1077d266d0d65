//! Uniqueness check against the search index.
//!
//! Uniqueness is decided by the searchable projection, not the primary
//! store. A stale index (a colliding record not yet indexed) or an analysed
//! text field that does not match exactly both make a taken value look
//! unique. These false negatives are an accepted limitation of querying the
//! index.

use crate::uniqueness::{
    domain::{UniquenessRule, ValidationRequest, Violation, ViolationKind},
    ports::{ExistenceQuery, IndexQueryError, IndexQueryResult, SearchIndex},
};

/// Builds the existence query for a request.
///
/// The value is normalised to its first element for sequences; persisted
/// records are excluded from matching themselves. A model-scoped rule only
/// matches documents of its model.
#[must_use]
pub fn build_existence_query(rule: &UniquenessRule, request: &ValidationRequest) -> ExistenceQuery {
    let mut query = ExistenceQuery::new(
        rule.indexed_field().clone(),
        request.value().normalized().cloned(),
    );
    if let Some(scope) = rule.model_scope() {
        query = query.within(scope.clone());
    }
    match request.record().self_exclusion() {
        Some(id) => query.excluding(rule.identity_field().clone(), id.clone()),
        None => query,
    }
}

/// Checks that no other indexed record holds the request's value.
///
/// Issues exactly one existence query. Callers must not invoke this after a
/// cardinality violation for the same attribute.
///
/// # Errors
///
/// Returns [`IndexQueryError`] when the index fails to answer, including
/// [`IndexQueryError::TimedOut`] when the rule's query timeout elapses.
pub async fn check_uniqueness<I>(
    index: &I,
    rule: &UniquenessRule,
    request: &ValidationRequest,
) -> IndexQueryResult<Option<Violation>>
where
    I: SearchIndex + ?Sized,
{
    let query = build_existence_query(rule, request);
    tracing::debug!(
        attribute = %request.attribute(),
        query = %query,
        "querying search index for uniqueness"
    );

    let exists = match rule.query_timeout() {
        Some(limit) => tokio::time::timeout(limit, index.exists(&query))
            .await
            .map_err(|_| IndexQueryError::TimedOut(limit))??,
        None => index.exists(&query).await?,
    };

    Ok(exists.then(|| Violation::new(request.attribute().clone(), ViolationKind::AlreadyTaken)))
}
