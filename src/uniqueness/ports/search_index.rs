//! Search index port used to answer existence queries.

use crate::uniqueness::domain::{
    IdentityFieldName, IndexedFieldName, ModelScope, RecordId, ScalarValue,
};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Result type for search index operations.
pub type IndexQueryResult<T> = Result<T, IndexQueryError>;

/// Read-only query contract against the searchable projection of records.
///
/// Implementations must be safe to share between concurrent validations.
/// They own transport concerns such as retries; validators never mutate
/// the index. Queries carry a [`ModelScope`] when the rule is restricted to
/// one model type; an unscoped query spans every document in the index.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchIndex: Send + Sync {
    /// Returns `true` when at least one indexed document matches the query.
    ///
    /// # Errors
    ///
    /// Returns [`IndexQueryError`] when the index is unreachable or answers
    /// with a response that cannot be interpreted.
    async fn exists(&self, query: &ExistenceQuery) -> IndexQueryResult<bool>;
}

/// Predicate `field == value`, optionally limited to one model type and
/// excluding one record identity.
///
/// The [`fmt::Display`] form is a Lucene filter query:
///
/// ```
/// use indexed_validations::uniqueness::domain::{
///     IdentityFieldName, IndexedFieldName, ModelName, ModelScope, RecordId, ScalarValue,
/// };
/// use indexed_validations::uniqueness::ports::ExistenceQuery;
///
/// let field = IndexedFieldName::new("email_ssim").expect("valid field");
/// let query = ExistenceQuery::new(field, Some(ScalarValue::from("a@x.com")))
///     .excluding(IdentityFieldName::default(), RecordId::new("42").expect("valid id"));
/// assert_eq!(query.to_string(), r#"email_ssim:"a@x.com" AND -id:"42""#);
///
/// let scope = ModelScope::new(
///     IndexedFieldName::new(ModelScope::DEFAULT_FIELD).expect("valid field"),
///     ModelName::new("User").expect("valid model"),
/// );
/// assert_eq!(
///     query.within(scope).to_string(),
///     r#"email_ssim:"a@x.com" AND has_model_ssim:"User" AND -id:"42""#,
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistenceQuery {
    field: IndexedFieldName,
    value: Option<ScalarValue>,
    scope: Option<ModelScope>,
    exclusion: Option<(IdentityFieldName, RecordId)>,
}

impl ExistenceQuery {
    /// Creates a query matching `field == value`.
    ///
    /// A `None` value matches documents where the field holds no value.
    #[must_use]
    pub const fn new(field: IndexedFieldName, value: Option<ScalarValue>) -> Self {
        Self {
            field,
            value,
            scope: None,
            exclusion: None,
        }
    }

    /// Restricts matches to documents of the scoped model type.
    #[must_use]
    pub fn within(mut self, scope: ModelScope) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Excludes the document whose `identity_field` equals `id`.
    #[must_use]
    pub fn excluding(mut self, identity_field: IdentityFieldName, id: RecordId) -> Self {
        self.exclusion = Some((identity_field, id));
        self
    }

    /// Returns the queried index field.
    #[must_use]
    pub const fn field(&self) -> &IndexedFieldName {
        &self.field
    }

    /// Returns the value to match, or `None` to match an empty field.
    #[must_use]
    pub const fn value(&self) -> Option<&ScalarValue> {
        self.value.as_ref()
    }

    /// Returns the model scope, if the query is restricted to one type.
    #[must_use]
    pub const fn scope(&self) -> Option<&ModelScope> {
        self.scope.as_ref()
    }

    /// Returns the excluded identity field and record identity.
    #[must_use]
    pub fn exclusion(&self) -> Option<(&IdentityFieldName, &RecordId)> {
        self.exclusion.as_ref().map(|(field, id)| (field, id))
    }

    /// Returns the excluded record identity, if any.
    #[must_use]
    pub fn excluded_id(&self) -> Option<&RecordId> {
        self.exclusion.as_ref().map(|(_, id)| id)
    }
}

impl fmt::Display for ExistenceQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}:{}", self.field, quote(&value.to_string()))?,
            None => write!(f, "-{}:[* TO *]", self.field)?,
        }
        if let Some(scope) = &self.scope {
            write!(f, " AND {}:{}", scope.field(), quote(scope.model().as_str()))?;
        }
        if let Some((identity_field, id)) = &self.exclusion {
            write!(f, " AND -{}:{}", identity_field, quote(id.as_str()))?;
        }
        Ok(())
    }
}

fn quote(term: &str) -> String {
    let mut quoted = String::with_capacity(term.len() + 2);
    quoted.push('"');
    for ch in term.chars() {
        if matches!(ch, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}

/// Errors returned by search index implementations.
#[derive(Debug, Clone, Error)]
pub enum IndexQueryError {
    /// The index could not be reached.
    #[error("search index unreachable: {0}")]
    Unreachable(String),

    /// The index answered with a response that could not be interpreted.
    #[error("malformed search index response: {0}")]
    MalformedResponse(String),

    /// The query did not complete within the configured limit.
    #[error("search index query timed out after {0:?}")]
    TimedOut(Duration),

    /// The query was cancelled before an answer arrived.
    #[error("search index query cancelled")]
    Cancelled,

    /// Client-specific failure.
    #[error("search index error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl IndexQueryError {
    /// Creates an unreachable error.
    #[must_use]
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::Unreachable(message.into())
    }

    /// Creates a malformed response error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// Wraps a client-specific error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
