//! Integration test suite for the homogenizer decay model.
//!
//! Exercises the model end to end, from user-unit configuration through the
//! sampled display curve, against the reference operating point and the
//! model's algebraic properties.

pub mod helpers;
