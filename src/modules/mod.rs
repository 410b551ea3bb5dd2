//! Modules layer - infrastructure behind the page models
//!
//! Contains the record store and the submission sinks.

pub mod sink;
pub mod store;
