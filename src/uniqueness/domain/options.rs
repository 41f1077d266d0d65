//! Declarative options for uniqueness rules.

use super::{IdentityFieldName, ModelScope};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::time::Duration;

/// What a validation call does when the search index cannot answer.
///
/// # Examples
///
/// ```
/// use indexed_validations::uniqueness::domain::QueryFailurePolicy;
///
/// assert_eq!(QueryFailurePolicy::default(), QueryFailurePolicy::Propagate);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryFailurePolicy {
    /// Return the query error to the caller; no outcome is produced.
    #[default]
    Propagate,
    /// Record the value as already taken.
    TreatAsTaken,
    /// Record nothing, as if the value were unique.
    TreatAsUnique,
}

/// Options accepted when declaring a uniqueness rule.
///
/// Values are kept raw here and checked when the rule is built, so a
/// declaration loaded from configuration fails at setup rather than at the
/// first validation.
///
/// # Examples
///
/// ```
/// use indexed_validations::uniqueness::domain::{QueryFailurePolicy, UniquenessOptions};
///
/// let options: UniquenessOptions = serde_json::from_str(
///     r#"{ "solr_name": "email_ssim", "on_query_failure": "treat_as_taken" }"#,
/// )
/// .expect("valid options");
///
/// assert_eq!(options.indexed_field(), "email_ssim");
/// assert_eq!(options.identity_field(), "id");
/// assert_eq!(options.on_query_failure(), QueryFailurePolicy::TreatAsTaken);
/// assert_eq!(options.model(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UniquenessOptions {
    #[serde(default, alias = "solr_name")]
    indexed_field: String,
    #[serde(default = "default_identity_field")]
    identity_field: String,
    #[serde(default)]
    on_query_failure: QueryFailurePolicy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    #[serde(default = "default_model_field")]
    model_field: String,
    #[serde(default, rename = "query_timeout_ms", skip_serializing_if = "Option::is_none")]
    query_timeout: Option<TimeoutMillis>,
}

fn default_identity_field() -> String {
    IdentityFieldName::DEFAULT.to_owned()
}

fn default_model_field() -> String {
    ModelScope::DEFAULT_FIELD.to_owned()
}

/// Query timeout kept at full precision and serialised in milliseconds.
///
/// A sub-millisecond remainder rounds up, so a non-zero timeout never
/// serialises as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TimeoutMillis(Duration);

impl Serialize for TimeoutMillis {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let whole = self.0.as_millis();
        let millis = if self.0.subsec_nanos() % 1_000_000 == 0 {
            whole
        } else {
            whole.saturating_add(1)
        };
        serializer.serialize_u64(u64::try_from(millis).unwrap_or(u64::MAX))
    }
}

impl<'de> Deserialize<'de> for TimeoutMillis {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u64::deserialize(deserializer).map(|millis| Self(Duration::from_millis(millis)))
    }
}

impl UniquenessOptions {
    /// Creates options querying `indexed_field`.
    #[must_use]
    pub fn new(indexed_field: impl Into<String>) -> Self {
        Self {
            indexed_field: indexed_field.into(),
            identity_field: default_identity_field(),
            on_query_failure: QueryFailurePolicy::default(),
            model: None,
            model_field: default_model_field(),
            query_timeout: None,
        }
    }

    /// Restricts the uniqueness query to records of `model`.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the index field holding the model type.
    #[must_use]
    pub fn with_model_field(mut self, model_field: impl Into<String>) -> Self {
        self.model_field = model_field.into();
        self
    }

    /// Sets the index field holding record identities.
    #[must_use]
    pub fn with_identity_field(mut self, identity_field: impl Into<String>) -> Self {
        self.identity_field = identity_field.into();
        self
    }

    /// Sets the query failure policy.
    #[must_use]
    pub const fn with_query_failure_policy(mut self, policy: QueryFailurePolicy) -> Self {
        self.on_query_failure = policy;
        self
    }

    /// Bounds each existence query by `timeout`.
    ///
    /// The duration is kept exactly; only the serialised form is in whole
    /// milliseconds.
    #[must_use]
    pub const fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = Some(TimeoutMillis(timeout));
        self
    }

    /// Returns the raw indexed field name.
    #[must_use]
    pub fn indexed_field(&self) -> &str {
        &self.indexed_field
    }

    /// Returns the raw identity field name.
    #[must_use]
    pub fn identity_field(&self) -> &str {
        &self.identity_field
    }

    /// Returns the query failure policy.
    #[must_use]
    pub const fn on_query_failure(&self) -> QueryFailurePolicy {
        self.on_query_failure
    }

    /// Returns the raw model name, when the rule is scoped to a model.
    #[must_use]
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Returns the raw model field name.
    #[must_use]
    pub fn model_field(&self) -> &str {
        &self.model_field
    }

    /// Returns the query timeout, if one is configured.
    #[must_use]
    pub const fn query_timeout(&self) -> Option<Duration> {
        match self.query_timeout {
            Some(TimeoutMillis(timeout)) => Some(timeout),
            None => None,
        }
    }
}
