//! Attribute values as seen at the validation boundary.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single indexable value.
///
/// Variant order matters for untagged deserialization: timestamps are tried
/// before plain text so RFC 3339 strings keep their type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    /// Boolean value.
    Boolean(bool),
    /// Signed integer value.
    Integer(i64),
    /// UTC timestamp.
    Timestamp(DateTime<Utc>),
    /// Text value.
    Text(String),
}

impl ScalarValue {
    /// Returns the text value, if this is a text scalar.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Timestamp(value) => {
                f.write_str(&value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<DateTime<Utc>> for ScalarValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

/// The raw value bound to an attribute at validation time.
///
/// The shape is fixed when the value is built: a single-valued attribute is
/// [`AttributeValue::Scalar`] (or [`AttributeValue::Null`] when unset) and a
/// multi-valued attribute is always [`AttributeValue::Sequence`], whatever
/// its length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Unset single-valued attribute.
    #[default]
    Null,
    /// Single-valued attribute.
    Scalar(ScalarValue),
    /// Multi-valued attribute, in declaration order.
    Sequence(Vec<ScalarValue>),
}

impl AttributeValue {
    /// Builds a sequence value from anything convertible to scalars.
    pub fn sequence<T>(values: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<ScalarValue>,
    {
        Self::Sequence(values.into_iter().map(Into::into).collect())
    }

    /// Returns `true` for multi-valued attributes.
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Returns the number of values bound to the attribute.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        match self {
            Self::Null => 0,
            Self::Scalar(_) => 1,
            Self::Sequence(values) => values.len(),
        }
    }

    /// Returns the single value to compare against the index.
    ///
    /// Sequences yield their first element; an empty sequence and
    /// [`AttributeValue::Null`] yield `None`.
    #[must_use]
    pub fn normalized(&self) -> Option<&ScalarValue> {
        match self {
            Self::Null => None,
            Self::Scalar(value) => Some(value),
            Self::Sequence(values) => values.first(),
        }
    }
}

impl From<ScalarValue> for AttributeValue {
    fn from(value: ScalarValue) -> Self {
        Self::Scalar(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<DateTime<Utc>> for AttributeValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Scalar(value.into())
    }
}

impl<T> From<Vec<T>> for AttributeValue
where
    T: Into<ScalarValue>,
{
    fn from(values: Vec<T>) -> Self {
        Self::sequence(values)
    }
}

impl<T> From<Option<T>> for AttributeValue
where
    T: Into<ScalarValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, |inner| Self::Scalar(inner.into()))
    }
}
