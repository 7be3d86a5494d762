//! cohort-core: inference pipeline for the customer segmentation model.
//!
//! This crate turns raw customer attribute rows (two numeric fields plus
//! region and acquisition channel) into the fixed 11-column feature matrix
//! the pre-trained clustering model expects, and assigns a cluster id per
//! row. The scaler and centroid table are artifacts produced by an external
//! training step; they are loaded once and treated as immutable.
//!
//! The design favors small, testable modules: the boundary schema, the
//! encoder, and the model are independent pieces wired together by
//! [`predictor::Predictor`].
pub mod artifacts;
pub mod encoding;
pub mod error;
pub mod math;
pub mod model;
pub mod predictor;
pub mod preprocessing;
pub mod schema;
