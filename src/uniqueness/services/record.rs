//! Record-level validation across several uniqueness rules.

use super::validator::{UniquenessValidationResult, UniquenessValidator};
use crate::uniqueness::{
    domain::{
        AttributeName, AttributeValue, RecordRef, RuleConfigurationError, RuleDeclaration,
        UniquenessOptions, UniquenessRule, ValidationOutcome,
    },
    ports::SearchIndex,
};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Attribute values of one record, keyed by attribute name.
pub type RecordAttributes = BTreeMap<AttributeName, AttributeValue>;

/// The uniqueness rules declared for one record type.
///
/// Rules run in declaration order against a shared index. Violations from
/// every rule are merged into one outcome.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use indexed_validations::uniqueness::{
///     adapters::memory::InMemorySearchIndex,
///     domain::{RuleConfigurationError, UniquenessOptions},
///     services::RecordValidator,
/// };
///
/// let index = Arc::new(InMemorySearchIndex::new());
/// let validator = RecordValidator::new(Arc::clone(&index))
///     .validates_uniqueness_of(["email"], UniquenessOptions::new("email_ssim"))
///     .expect("valid declaration");
/// assert_eq!(validator.rules().count(), 1);
///
/// let rejected = RecordValidator::new(index)
///     .validates_uniqueness_of(["email", "login"], UniquenessOptions::new("email_ssim"));
/// assert!(matches!(rejected, Err(RuleConfigurationError::MultipleAttributes(_))));
/// ```
pub struct RecordValidator<I>
where
    I: SearchIndex + ?Sized,
{
    index: Arc<I>,
    validators: Vec<UniquenessValidator<I>>,
}

impl<I> Clone for RecordValidator<I>
where
    I: SearchIndex + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            index: Arc::clone(&self.index),
            validators: self.validators.clone(),
        }
    }
}

impl<I> RecordValidator<I>
where
    I: SearchIndex + ?Sized,
{
    /// Creates a validator with no rules.
    #[must_use]
    pub const fn new(index: Arc<I>) -> Self {
        Self {
            index,
            validators: Vec::new(),
        }
    }

    /// Builds a validator from declarations loaded from configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`RuleConfigurationError`] among the declarations.
    pub fn from_declarations(
        index: Arc<I>,
        declarations: impl IntoIterator<Item = RuleDeclaration>,
    ) -> Result<Self, RuleConfigurationError> {
        declarations
            .into_iter()
            .try_fold(Self::new(index), |validator, declaration| {
                Ok(validator.with_rule(declaration.into_rule()?))
            })
    }

    /// Adds an already validated rule.
    #[must_use]
    pub fn with_rule(mut self, rule: UniquenessRule) -> Self {
        self.validators
            .push(UniquenessValidator::new(rule, Arc::clone(&self.index)));
        self
    }

    /// Declares a uniqueness rule on one attribute.
    ///
    /// # Errors
    ///
    /// Returns [`RuleConfigurationError`] when the attribute list does not
    /// hold exactly one valid name or the options are incomplete.
    pub fn validates_uniqueness_of<A, S>(
        self,
        attributes: A,
        options: UniquenessOptions,
    ) -> Result<Self, RuleConfigurationError>
    where
        A: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rule = UniquenessRule::for_attributes(attributes, options)?;
        Ok(self.with_rule(rule))
    }

    /// Returns the declared rules in order.
    pub fn rules(&self) -> impl Iterator<Item = &UniquenessRule> {
        self.validators.iter().map(UniquenessValidator::rule)
    }

    /// Validates every declared attribute of `record`.
    ///
    /// Attributes missing from `attributes` are validated as unset.
    ///
    /// # Errors
    ///
    /// Returns the first query failure from a rule whose policy propagates
    /// failures; violations gathered so far are discarded.
    pub async fn validate(
        &self,
        record: &RecordRef,
        attributes: &RecordAttributes,
    ) -> UniquenessValidationResult<ValidationOutcome> {
        let mut outcome = ValidationOutcome::new();
        for validator in &self.validators {
            let value = attributes
                .get(validator.rule().attribute())
                .cloned()
                .unwrap_or_default();
            outcome.merge(validator.validate(record, value).await?);
        }
        Ok(outcome)
    }
}
