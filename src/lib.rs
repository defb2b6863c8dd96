//! Strongly-validated value types for network byte quantities, IP addresses
//! and US states.
//!
//! Every type is immutable once built: construction validates the input and
//! either fails with a [`ValueError`] or yields a value that can only be read.

pub mod domain;

pub use domain::*;
