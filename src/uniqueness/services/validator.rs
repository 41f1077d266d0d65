//! Service running one uniqueness rule against the search index.
//!
//! Provides [`UniquenessValidator`], which sequences the cardinality and
//! uniqueness checks for a single attribute and applies the rule's query
//! failure policy.
//!
//! Validations are not serialised against each other. Two records saved
//! concurrently with the same value can both query the index before either
//! is indexed, and both pass. Callers needing strict uniqueness must add a
//! constraint in the primary store.

use crate::uniqueness::{
    domain::{
        AttributeName, AttributeValue, QueryFailurePolicy, RecordRef, UniquenessRule,
        ValidationOutcome, ValidationRequest, Violation, ViolationKind,
    },
    ports::{IndexQueryError, SearchIndex},
    rules,
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for uniqueness validation.
///
/// These are operational failures, never validation outcomes.
#[derive(Debug, Clone, Error)]
pub enum UniquenessValidationError {
    /// The search index failed to answer and the rule propagates failures.
    #[error(transparent)]
    Query(#[from] IndexQueryError),

    /// The request targets an attribute the rule is not bound to.
    #[error("rule for attribute '{expected}' cannot validate attribute '{actual}'")]
    AttributeMismatch {
        /// Attribute the rule is bound to.
        expected: AttributeName,
        /// Attribute named by the request.
        actual: AttributeName,
    },
}

/// Result type for uniqueness validation service operations.
pub type UniquenessValidationResult<T> = Result<T, UniquenessValidationError>;

/// Validates one attribute against the search index.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use indexed_validations::uniqueness::{
///     adapters::memory::InMemorySearchIndex,
///     domain::{RecordRef, UniquenessOptions, UniquenessRule},
///     services::UniquenessValidator,
/// };
///
/// # tokio::runtime::Builder::new_current_thread().enable_all().build().expect("runtime").block_on(async {
/// let rule = UniquenessRule::new("email", UniquenessOptions::new("email_ssim"))
///     .expect("valid rule");
/// let validator = UniquenessValidator::new(rule, Arc::new(InMemorySearchIndex::new()));
///
/// let outcome = validator
///     .validate(&RecordRef::new_record(), "a@x.com".into())
///     .await
///     .expect("index answers");
/// assert!(outcome.is_valid());
/// # });
/// ```
pub struct UniquenessValidator<I>
where
    I: SearchIndex + ?Sized,
{
    rule: UniquenessRule,
    index: Arc<I>,
}

impl<I> Clone for UniquenessValidator<I>
where
    I: SearchIndex + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            rule: self.rule.clone(),
            index: Arc::clone(&self.index),
        }
    }
}

impl<I> UniquenessValidator<I>
where
    I: SearchIndex + ?Sized,
{
    /// Creates a validator for `rule` querying `index`.
    #[must_use]
    pub const fn new(rule: UniquenessRule, index: Arc<I>) -> Self {
        Self { rule, index }
    }

    /// Returns the rule this validator applies.
    #[must_use]
    pub const fn rule(&self) -> &UniquenessRule {
        &self.rule
    }

    /// Validates `value` as the rule's attribute of `record`.
    ///
    /// # Errors
    ///
    /// Returns [`UniquenessValidationError::Query`] when the index fails and
    /// the rule's policy is [`QueryFailurePolicy::Propagate`].
    pub async fn validate(
        &self,
        record: &RecordRef,
        value: AttributeValue,
    ) -> UniquenessValidationResult<ValidationOutcome> {
        let request =
            ValidationRequest::new(record.clone(), self.rule.attribute().clone(), value);
        self.validate_request(&request).await
    }

    /// Validates a prepared request.
    ///
    /// Cardinality runs first. When it fails, the index is not queried and
    /// the outcome holds only the `TooManyValues` violation.
    ///
    /// # Errors
    ///
    /// Returns [`UniquenessValidationError::AttributeMismatch`] when the
    /// request names another attribute, or
    /// [`UniquenessValidationError::Query`] when the index fails and the
    /// rule's policy is [`QueryFailurePolicy::Propagate`].
    pub async fn validate_request(
        &self,
        request: &ValidationRequest,
    ) -> UniquenessValidationResult<ValidationOutcome> {
        let attribute = self.rule.attribute();
        if request.attribute() != attribute {
            return Err(UniquenessValidationError::AttributeMismatch {
                expected: attribute.clone(),
                actual: request.attribute().clone(),
            });
        }

        let mut outcome = ValidationOutcome::new();
        if let Some(violation) =
            rules::check_cardinality(self.rule.cardinality(), attribute, request.value())
        {
            tracing::debug!(
                attribute = %attribute,
                values = request.value().cardinality(),
                "cardinality violated, skipping uniqueness query"
            );
            outcome.record(violation);
            return Ok(outcome);
        }

        match rules::check_uniqueness(&*self.index, &self.rule, request).await {
            Ok(Some(violation)) => {
                tracing::debug!(
                    attribute = %attribute,
                    field = %self.rule.indexed_field(),
                    "value already taken"
                );
                outcome.record(violation);
            }
            Ok(None) => {}
            Err(err) => self.apply_failure_policy(&mut outcome, err)?,
        }
        Ok(outcome)
    }

    fn apply_failure_policy(
        &self,
        outcome: &mut ValidationOutcome,
        err: IndexQueryError,
    ) -> UniquenessValidationResult<()> {
        let attribute = self.rule.attribute();
        match self.rule.on_query_failure() {
            QueryFailurePolicy::Propagate => Err(err.into()),
            QueryFailurePolicy::TreatAsTaken => {
                tracing::warn!(
                    attribute = %attribute,
                    error = %err,
                    "search index query failed, treating value as taken"
                );
                outcome.record(Violation::new(attribute.clone(), ViolationKind::AlreadyTaken));
                Ok(())
            }
            QueryFailurePolicy::TreatAsUnique => {
                tracing::warn!(
                    attribute = %attribute,
                    error = %err,
                    "search index query failed, treating value as unique"
                );
                Ok(())
            }
        }
    }
}
