//! cohort-server: HTTP serving process for the customer segmentation model.
//!
//! The router lives in [`server`] so integration tests can drive it
//! in-process; `main.rs` only adds artifact loading and the listener.
pub mod server;
