//! Cardinality check for attribute values.

use crate::uniqueness::domain::{
    AttributeName, AttributeValue, CardinalityMode, Violation, ViolationKind,
};

/// Checks that `value` carries no more values than `mode` allows.
///
/// Scalars and unset values always pass; only sequences are counted. The
/// excess elements are never inspected.
///
/// # Examples
///
/// ```
/// use indexed_validations::uniqueness::domain::{
///     AttributeName, AttributeValue, CardinalityMode, ViolationKind,
/// };
/// use indexed_validations::uniqueness::rules::check_cardinality;
///
/// let email = AttributeName::new("email").expect("valid name");
/// let value = AttributeValue::sequence(["a@x.com", "b@x.com"]);
///
/// let violation = check_cardinality(CardinalityMode::Single, &email, &value)
///     .expect("two values violate single cardinality");
/// assert_eq!(violation.kind(), ViolationKind::TooManyValues);
/// ```
#[must_use]
pub fn check_cardinality(
    mode: CardinalityMode,
    attribute: &AttributeName,
    value: &AttributeValue,
) -> Option<Violation> {
    if !value.is_sequence() || mode.permits(value.cardinality()) {
        return None;
    }
    Some(Violation::new(attribute.clone(), ViolationKind::TooManyValues))
}
