#![forbid(unsafe_code)]

//! Property-based invariant tests for the BMI engine.
//!
//! Verifies:
//! 1. Positive inputs always produce a reading matching the formula
//! 2. Readings carry at most one fractional digit
//! 3. The stored category matches classifying the unrounded ratio
//! 4. An empty field is rejected before anything else, whatever the other
//!    field holds
//! 5. Non-positive weights are rejected with the weight error
//! 6. compute() is idempotent for unchanged inputs
//! 7. The outcome always reflects the latest call

use bmical_core::{BmiCategory, BmiEngine, ComputeError, Field};
use proptest::prelude::*;

fn engine_with(height: &str, weight: &str) -> BmiEngine {
    let mut engine = BmiEngine::new();
    engine.set_height(height);
    engine.set_weight(weight);
    engine
}

// ─── 1. Positive inputs always succeed and match the formula ─────────────

proptest! {
    #[test]
    fn positive_inputs_match_the_formula(
        height in 30.0f64..=272.0,
        weight in 1.0f64..=650.0,
    ) {
        let mut engine = engine_with(&format!("{height}"), &format!("{weight}"));
        let reading = engine.compute();
        prop_assert!(reading.is_ok(), "rejected {height}/{weight}: {reading:?}");

        let meters = height / 100.0;
        let expected = (weight / (meters * meters) * 10.0).round() / 10.0;
        prop_assert_eq!(reading.unwrap().bmi, expected);
    }
}

// ─── 2. At most one fractional digit ─────────────────────────────────────

proptest! {
    #[test]
    fn readings_have_one_fractional_digit(
        height in 30.0f64..=272.0,
        weight in 1.0f64..=650.0,
    ) {
        let mut engine = engine_with(&format!("{height}"), &format!("{weight}"));
        let bmi = engine.compute().unwrap().bmi;
        let scaled = bmi * 10.0;
        prop_assert!(
            (scaled - scaled.round()).abs() < 1e-9,
            "bmi {bmi} has more than one fractional digit"
        );
    }
}

// ─── 3. Category agrees with the unrounded ratio ─────────────────────────

proptest! {
    #[test]
    fn category_matches_the_raw_ratio(
        height in 30.0f64..=272.0,
        weight in 1.0f64..=650.0,
    ) {
        let mut engine = engine_with(&format!("{height}"), &format!("{weight}"));
        let reading = engine.compute().unwrap();
        let meters = height / 100.0;
        prop_assert_eq!(reading.category, BmiCategory::of(weight / (meters * meters)));
    }
}

// ─── 4. Empty input wins over everything else ────────────────────────────

proptest! {
    #[test]
    fn empty_weight_is_rejected_first(height in "\\PC{0,12}") {
        let mut engine = engine_with(&height, "");
        prop_assert_eq!(engine.compute(), Err(ComputeError::MissingInput));
    }

    #[test]
    fn empty_height_is_rejected_first(weight in "\\PC{0,12}") {
        let mut engine = engine_with("", &weight);
        prop_assert_eq!(engine.compute(), Err(ComputeError::MissingInput));
    }
}

// ─── 5. Non-positive weights name the weight field ───────────────────────

proptest! {
    #[test]
    fn non_positive_weight_is_rejected(
        height in 30.0f64..=272.0,
        weight in -650.0f64..=0.0,
    ) {
        let mut engine = engine_with(&format!("{height}"), &format!("{weight}"));
        prop_assert_eq!(
            engine.compute(),
            Err(ComputeError::NonPositive(Field::Weight))
        );
    }
}

// ─── 6. Idempotence ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn compute_is_idempotent(height in "\\PC{0,12}", weight in "\\PC{0,12}") {
        let mut engine = engine_with(&height, &weight);
        let first = engine.compute();
        let second = engine.compute();
        prop_assert_eq!(first, second);
    }
}

// ─── 7. The outcome is always the latest result ──────────────────────────

proptest! {
    #[test]
    fn outcome_is_the_latest_result(
        height in 30.0f64..=272.0,
        weight in 1.0f64..=650.0,
    ) {
        let mut engine = engine_with(&format!("{height}"), &format!("{weight}"));
        engine.compute().unwrap();

        // A failing computation replaces the reading...
        engine.set_height("not a height");
        let err = engine.compute().unwrap_err();
        prop_assert_eq!(engine.error(), Some(err));
        prop_assert!(engine.reading().is_none());

        // ...and a succeeding one replaces the error.
        engine.set_height(format!("{height}"));
        let reading = engine.compute().unwrap();
        prop_assert_eq!(engine.reading(), Some(reading));
        prop_assert!(engine.error().is_none());
    }
}
