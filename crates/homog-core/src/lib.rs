//! # homog-core
//! Foundation types and traits for the homogenizer globule-decay model.

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;
