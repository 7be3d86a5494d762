//! Small ndarray-like matrix type used throughout the crate.
//!
//! Provides a row-major `Array2` with the handful of accessors the encoder
//! and model need. Intentionally dependency-free to keep the crate portable
//! and easy to test.
pub mod matrix;

pub use matrix::{Array2, ShapeError};
