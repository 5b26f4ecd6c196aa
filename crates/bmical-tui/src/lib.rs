#![forbid(unsafe_code)]

//! Terminal front-end for the BMI form.
//!
//! This module exposes the application internals so that integration tests
//! can construct the app, feed it events, and assert rendered snapshots.
//!
//! # Role in bmical
//! `bmical-tui` is the presentation layer: a centered card with two labeled
//! text fields, a compute trigger, and an outcome area, drawn into a
//! char-cell buffer and painted through crossterm. All form semantics live
//! in `bmical-core`; this crate only routes keys and renders state.

pub mod app;
pub mod msg;
pub mod render;
pub mod terminal;
pub mod theme;
pub mod widgets;
