#![forbid(unsafe_code)]

//! User-facing validation errors.

use std::fmt;

/// Which form field an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    Height,
    Weight,
}

impl Field {
    /// Capitalized noun used at the start of error sentences.
    #[must_use]
    pub fn noun(self) -> &'static str {
        match self {
            Self::Height => "Height",
            Self::Weight => "Weight",
        }
    }
}

/// Validation failure raised by [`compute`].
///
/// Every variant is recoverable: the user fixes the input and triggers
/// another computation. `Display` renders the exact sentence the form
/// shows, so front-ends display errors verbatim.
///
/// [`compute`]: crate::BmiEngine::compute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComputeError {
    /// At least one field is still empty.
    MissingInput,
    /// The field text does not parse as a finite decimal number.
    NotANumber(Field),
    /// The parsed value is zero or negative.
    NonPositive(Field),
}

impl fmt::Display for ComputeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput => f.write_str("Please enter both height and weight."),
            Self::NotANumber(field) => write!(f, "{} must be a number.", field.noun()),
            Self::NonPositive(field) => {
                write!(f, "{} must be a positive number.", field.noun())
            }
        }
    }
}

impl std::error::Error for ComputeError {}
