//! Accumulated validation violations.

use super::AttributeName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of validation violation recorded against an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// The attribute carries more values than its cardinality allows.
    TooManyValues,
    /// Another record already holds the attribute value.
    AlreadyTaken,
}

impl ViolationKind {
    /// Returns the human-readable message attached to the attribute.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::TooManyValues => "can't have more than one value",
            Self::AlreadyTaken => "has already been taken",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A violation attached to a single attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Violation {
    attribute: AttributeName,
    kind: ViolationKind,
}

impl Violation {
    /// Creates a violation for an attribute.
    #[must_use]
    pub const fn new(attribute: AttributeName, kind: ViolationKind) -> Self {
        Self { attribute, kind }
    }

    /// Returns the attribute the violation is attached to.
    #[must_use]
    pub const fn attribute(&self) -> &AttributeName {
        &self.attribute
    }

    /// Returns the violation kind.
    #[must_use]
    pub const fn kind(&self) -> ViolationKind {
        self.kind
    }

    /// Returns the attribute-relative message, e.g. `has already been taken`.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.kind.message()
    }

    /// Returns the message prefixed with the attribute name.
    #[must_use]
    pub fn full_message(&self) -> String {
        format!("{} {}", self.attribute, self.kind.message())
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.attribute, self.kind)
    }
}

/// Ordered violations produced by one validation call.
///
/// A `TooManyValues` violation on an attribute supersedes uniqueness: any
/// later `AlreadyTaken` for the same attribute is dropped on recording.
/// Each message appears at most once per attribute, so several rules on one
/// attribute that all find a match yield a single `AlreadyTaken`.
///
/// # Examples
///
/// ```
/// use indexed_validations::uniqueness::domain::{
///     AttributeName, ValidationOutcome, Violation, ViolationKind,
/// };
///
/// let email = AttributeName::new("email").expect("valid name");
/// let mut outcome = ValidationOutcome::new();
/// outcome.record(Violation::new(email.clone(), ViolationKind::TooManyValues));
/// outcome.record(Violation::new(email.clone(), ViolationKind::AlreadyTaken));
///
/// assert_eq!(outcome.len(), 1);
/// assert!(outcome.has(&email, ViolationKind::TooManyValues));
/// assert!(!outcome.has(&email, ViolationKind::AlreadyTaken));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationOutcome {
    violations: Vec<Violation>,
}

impl ValidationOutcome {
    /// Creates an empty outcome.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    /// Records a violation.
    ///
    /// Returns `false` when the violation was suppressed, either because it
    /// is already present or because the attribute already carries a
    /// `TooManyValues` violation.
    pub fn record(&mut self, violation: Violation) -> bool {
        let superseded = violation.kind() == ViolationKind::AlreadyTaken
            && self.has(violation.attribute(), ViolationKind::TooManyValues);
        if superseded || self.violations.contains(&violation) {
            return false;
        }
        self.violations.push(violation);
        true
    }

    /// Appends every violation from `other`, preserving order.
    pub fn merge(&mut self, other: Self) {
        for violation in other.violations {
            self.record(violation);
        }
    }

    /// Returns `true` when a violation of `kind` exists for `attribute`.
    #[must_use]
    pub fn has(&self, attribute: &AttributeName, kind: ViolationKind) -> bool {
        self.violations
            .iter()
            .any(|violation| violation.attribute() == attribute && violation.kind() == kind)
    }

    /// Returns `true` when no violation was recorded.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the number of recorded violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns `true` when no violation was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns all violations in recording order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns the violations attached to `attribute`.
    pub fn for_attribute<'a>(
        &'a self,
        attribute: &'a AttributeName,
    ) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations
            .iter()
            .filter(move |violation| violation.attribute() == attribute)
    }

    /// Returns every violation as a full message, in recording order.
    #[must_use]
    pub fn full_messages(&self) -> Vec<String> {
        self.violations.iter().map(Violation::full_message).collect()
    }

    /// Consumes the outcome, returning its violations.
    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

impl From<Violation> for ValidationOutcome {
    fn from(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
        }
    }
}
