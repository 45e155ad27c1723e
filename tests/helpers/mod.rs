//! Test helpers module
//!
//! This module provides utilities and helpers for testing the HoopBuddy application.
//! It includes a seeded application context and request builders.

#![allow(dead_code)]

pub mod test_context;
pub mod test_data;

#[allow(unused_imports)]
pub use test_context::*;
#[allow(unused_imports)]
pub use test_data::*;
