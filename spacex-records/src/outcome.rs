use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary launch outcome as recorded in the `class` column.
///
/// Serialized as the bare integer (`0` or `1`) so query results can be handed
/// to the chart scripts without translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum OutcomeClass {
    Failure,
    Success,
}

impl OutcomeClass {
    /// Label shown on pie slices for a single site.
    pub fn label(&self) -> &'static str {
        match self {
            OutcomeClass::Failure => "Failed",
            OutcomeClass::Success => "Successful",
        }
    }

    /// Slice colour for a single-site pie: red for failure, green for success.
    pub fn color(&self) -> &'static str {
        match self {
            OutcomeClass::Failure => "red",
            OutcomeClass::Success => "green",
        }
    }

    pub fn as_flag(&self) -> u8 {
        match self {
            OutcomeClass::Failure => 0,
            OutcomeClass::Success => 1,
        }
    }
}

impl TryFrom<u8> for OutcomeClass {
    type Error = InvalidOutcomeClass;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OutcomeClass::Failure),
            1 => Ok(OutcomeClass::Success),
            other => Err(InvalidOutcomeClass(i64::from(other))),
        }
    }
}

impl TryFrom<i64> for OutcomeClass {
    type Error = InvalidOutcomeClass;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| InvalidOutcomeClass(value))
            .and_then(OutcomeClass::try_from)
    }
}

impl From<OutcomeClass> for u8 {
    fn from(class: OutcomeClass) -> Self {
        class.as_flag()
    }
}

/// A `class` value other than 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidOutcomeClass(pub i64);

impl fmt::Display for InvalidOutcomeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid outcome class {} (expected 0 or 1)", self.0)
    }
}

impl std::error::Error for InvalidOutcomeClass {}
