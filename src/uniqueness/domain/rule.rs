//! Validated uniqueness rule configuration.

use super::{
    AttributeName, CardinalityMode, IdentityFieldName, IndexedFieldName, ModelName, ModelScope,
    QueryFailurePolicy, RuleConfigurationError, UniquenessOptions,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A uniqueness rule bound to exactly one attribute.
///
/// Construction checks the configuration once, independent of any record.
///
/// # Examples
///
/// ```
/// use indexed_validations::uniqueness::domain::{
///     RuleConfigurationError, UniquenessOptions, UniquenessRule,
/// };
///
/// let rule = UniquenessRule::new("email", UniquenessOptions::new("email_ssim"))
///     .expect("valid rule");
/// assert_eq!(rule.indexed_field().as_str(), "email_ssim");
///
/// let missing = UniquenessRule::new("email", UniquenessOptions::new(""));
/// assert_eq!(missing, Err(RuleConfigurationError::MissingIndexedField));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniquenessRule {
    attribute: AttributeName,
    indexed_field: IndexedFieldName,
    identity_field: IdentityFieldName,
    model_scope: Option<ModelScope>,
    cardinality: CardinalityMode,
    on_query_failure: QueryFailurePolicy,
    query_timeout: Option<Duration>,
}

impl UniquenessRule {
    /// Creates a rule for a single attribute.
    ///
    /// # Errors
    ///
    /// Returns [`RuleConfigurationError::InvalidAttribute`] when the
    /// attribute name is empty, [`RuleConfigurationError::MissingIndexedField`]
    /// when no indexed field is configured, or
    /// [`RuleConfigurationError::InvalidIdentityField`] when the identity
    /// field name is empty. A model scope with an empty model or model field
    /// returns [`RuleConfigurationError::InvalidModel`] or
    /// [`RuleConfigurationError::InvalidModelField`].
    pub fn new(
        attribute: impl Into<String>,
        options: UniquenessOptions,
    ) -> Result<Self, RuleConfigurationError> {
        let attribute_name =
            AttributeName::new(attribute).map_err(RuleConfigurationError::InvalidAttribute)?;
        let indexed_field = IndexedFieldName::new(options.indexed_field())
            .map_err(|_| RuleConfigurationError::MissingIndexedField)?;
        let identity_field = IdentityFieldName::new(options.identity_field())
            .map_err(RuleConfigurationError::InvalidIdentityField)?;
        let model_scope = build_model_scope(&options)?;

        Ok(Self {
            attribute: attribute_name,
            indexed_field,
            identity_field,
            model_scope,
            cardinality: CardinalityMode::Single,
            on_query_failure: options.on_query_failure(),
            query_timeout: options.query_timeout(),
        })
    }

    /// Creates a rule from a declared attribute list.
    ///
    /// A rule instance accepts exactly one attribute; declare one rule per
    /// attribute to make several attributes unique.
    ///
    /// # Errors
    ///
    /// Returns [`RuleConfigurationError::NoAttributes`] for an empty list,
    /// [`RuleConfigurationError::MultipleAttributes`] for more than one
    /// attribute, or any error from [`UniquenessRule::new`].
    pub fn for_attributes<I, S>(
        attributes: I,
        options: UniquenessOptions,
    ) -> Result<Self, RuleConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = attributes.into_iter().map(Into::into).collect();
        match names.as_slice() {
            [] => Err(RuleConfigurationError::NoAttributes),
            [single] => Self::new(single.clone(), options),
            _ => Err(RuleConfigurationError::MultipleAttributes(names.clone())),
        }
    }

    /// Returns the attribute this rule validates.
    #[must_use]
    pub const fn attribute(&self) -> &AttributeName {
        &self.attribute
    }

    /// Returns the index field mirroring the attribute.
    #[must_use]
    pub const fn indexed_field(&self) -> &IndexedFieldName {
        &self.indexed_field
    }

    /// Returns the index field holding record identities.
    #[must_use]
    pub const fn identity_field(&self) -> &IdentityFieldName {
        &self.identity_field
    }

    /// Returns the model scope applied to the uniqueness query, if any.
    #[must_use]
    pub const fn model_scope(&self) -> Option<&ModelScope> {
        self.model_scope.as_ref()
    }

    /// Returns the cardinality enforced before the uniqueness query.
    #[must_use]
    pub const fn cardinality(&self) -> CardinalityMode {
        self.cardinality
    }

    /// Returns the query failure policy.
    #[must_use]
    pub const fn on_query_failure(&self) -> QueryFailurePolicy {
        self.on_query_failure
    }

    /// Returns the per-query timeout, if any.
    #[must_use]
    pub const fn query_timeout(&self) -> Option<Duration> {
        self.query_timeout
    }
}

fn build_model_scope(
    options: &UniquenessOptions,
) -> Result<Option<ModelScope>, RuleConfigurationError> {
    let Some(model) = options.model() else {
        return Ok(None);
    };
    let model = ModelName::new(model).map_err(RuleConfigurationError::InvalidModel)?;
    let field = IndexedFieldName::new(options.model_field())
        .map_err(RuleConfigurationError::InvalidModelField)?;
    Ok(Some(ModelScope::new(field, model)))
}

/// A rule declaration as loaded from configuration.
///
/// ```json
/// { "attributes": ["email"], "uniqueness": { "indexed_field": "email_ssim" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDeclaration {
    /// Attributes the rule is declared on. Exactly one is accepted.
    pub attributes: Vec<String>,
    /// Uniqueness options.
    pub uniqueness: UniquenessOptions,
}

impl RuleDeclaration {
    /// Validates the declaration and builds the rule.
    ///
    /// # Errors
    ///
    /// Returns [`RuleConfigurationError`] as described on
    /// [`UniquenessRule::for_attributes`].
    pub fn into_rule(self) -> Result<UniquenessRule, RuleConfigurationError> {
        UniquenessRule::for_attributes(self.attributes, self.uniqueness)
    }
}
