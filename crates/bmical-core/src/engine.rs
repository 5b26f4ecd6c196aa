#![forbid(unsafe_code)]

//! The BMI engine: raw form text and the latest computation outcome.
//!
//! Setters store text verbatim; nothing is parsed until [`BmiEngine::compute`]
//! runs. Validation short-circuits on the first failed check, so the engine
//! never publishes a reading alongside an error.

use crate::category::BmiCategory;
use crate::error::{ComputeError, Field};

/// A successful computation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BmiReading {
    /// BMI rounded to exactly one fractional digit, half away from zero
    /// ([`f64::round`] semantics).
    pub bmi: f64,
    /// Category of the unrounded ratio. Can disagree with a category
    /// derived from the rounded `bmi` near a boundary (raw 24.96 reads as
    /// `25.0 Normal`), matching how the form has always displayed results.
    pub category: BmiCategory,
}

impl std::fmt::Display for BmiReading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} ({})", self.bmi, self.category)
    }
}

/// Owns the form's state: two raw text inputs and the latest outcome.
///
/// One engine per widget instance. The outcome always reflects the most
/// recent [`compute`] call; it is replaced wholesale, never accumulated.
///
/// [`compute`]: BmiEngine::compute
#[derive(Debug, Clone, Default)]
pub struct BmiEngine {
    height_text: String,
    weight_text: String,
    outcome: Option<Result<BmiReading, ComputeError>>,
}

impl BmiEngine {
    /// Create an engine with empty inputs and no outcome.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw height text as last entered.
    #[must_use]
    pub fn height_text(&self) -> &str {
        &self.height_text
    }

    /// Raw weight text as last entered.
    #[must_use]
    pub fn weight_text(&self) -> &str {
        &self.weight_text
    }

    /// Store the height text verbatim. Always succeeds; no parsing happens
    /// until [`compute`](Self::compute).
    pub fn set_height(&mut self, text: impl Into<String>) {
        self.height_text = text.into();
    }

    /// Store the weight text verbatim.
    pub fn set_weight(&mut self, text: impl Into<String>) {
        self.weight_text = text.into();
    }

    /// Latest outcome, or `None` before the first computation.
    #[must_use]
    pub fn outcome(&self) -> Option<&Result<BmiReading, ComputeError>> {
        self.outcome.as_ref()
    }

    /// Latest reading, if the most recent computation succeeded.
    #[must_use]
    pub fn reading(&self) -> Option<BmiReading> {
        match self.outcome {
            Some(Ok(reading)) => Some(reading),
            _ => None,
        }
    }

    /// Latest error, if the most recent computation failed.
    #[must_use]
    pub fn error(&self) -> Option<ComputeError> {
        match self.outcome {
            Some(Err(err)) => Some(err),
            _ => None,
        }
    }

    /// Return to the initial state: empty inputs, no outcome.
    pub fn reset(&mut self) {
        self.height_text.clear();
        self.weight_text.clear();
        self.outcome = None;
    }

    /// Validate the stored text, compute, and publish the outcome.
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// empty inputs, then height (parse, then sign), then weight.
    /// Height is entered in centimeters and converted to meters before
    /// the sign check, weight in kilograms; the ratio is `kg / m²`.
    ///
    /// The returned value is also stored and readable through
    /// [`outcome`](Self::outcome) until the next call replaces it.
    /// Idempotent for unchanged inputs.
    pub fn compute(&mut self) -> Result<BmiReading, ComputeError> {
        let result = self.check_and_compute();
        #[cfg(feature = "tracing")]
        match &result {
            Ok(reading) => {
                tracing::debug!(bmi = reading.bmi, category = %reading.category, "bmi computed");
            }
            Err(err) => tracing::debug!(error = %err, "input rejected"),
        }
        self.outcome = Some(result);
        result
    }

    fn check_and_compute(&self) -> Result<BmiReading, ComputeError> {
        if self.height_text.is_empty() || self.weight_text.is_empty() {
            return Err(ComputeError::MissingInput);
        }
        let meters =
            parse_finite(&self.height_text).ok_or(ComputeError::NotANumber(Field::Height))? / 100.0;
        if meters <= 0.0 {
            return Err(ComputeError::NonPositive(Field::Height));
        }
        let kilograms =
            parse_finite(&self.weight_text).ok_or(ComputeError::NotANumber(Field::Weight))?;
        if kilograms <= 0.0 {
            return Err(ComputeError::NonPositive(Field::Weight));
        }

        let bmi = kilograms / (meters * meters);
        Ok(BmiReading {
            bmi: round_to_tenth(bmi),
            category: BmiCategory::of(bmi),
        })
    }
}

/// Parse a decimal number, rejecting NaN and infinities.
///
/// Surrounding whitespace is tolerated; anything else non-numeric fails.
fn parse_finite(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Round to one fractional digit, half away from zero.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
