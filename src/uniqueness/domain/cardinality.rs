//! Expected cardinality of an attribute.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of values an attribute may carry at validation time.
///
/// Rules pass the mode explicitly so new modes can be added without
/// changing the checker's signature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum CardinalityMode {
    /// At most one value.
    #[default]
    Single,
}

impl CardinalityMode {
    /// Returns `true` when `count` values satisfy this mode.
    #[must_use]
    pub const fn permits(self, count: usize) -> bool {
        match self {
            Self::Single => count <= 1,
        }
    }

    /// Returns the mode name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
        }
    }
}

impl fmt::Display for CardinalityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
