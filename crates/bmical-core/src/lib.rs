#![forbid(unsafe_code)]

//! Core: BMI form state, validation, and classification.
//!
//! # Role in bmical
//! `bmical-core` is the engine behind the form. It owns the two raw text
//! inputs, validates them on demand, and publishes either a rounded BMI
//! reading with a category or a user-facing error sentence.
//!
//! # Primary responsibilities
//! - **BmiEngine**: raw input storage and the latest computation outcome.
//! - **BmiCategory**: the four-way range classification and its thresholds.
//! - **ComputeError**: recoverable validation errors, rendered verbatim.
//!
//! # How it fits in the system
//! Front-ends (`bmical-tui`) push text into the engine on every accepted
//! edit and call [`BmiEngine::compute`] on the user's trigger. The engine
//! has no I/O and no terminal dependencies, so it renders anywhere and
//! tests headlessly.

pub mod category;
pub mod engine;
pub mod error;

pub use category::BmiCategory;
pub use engine::{BmiEngine, BmiReading};
pub use error::{ComputeError, Field};
