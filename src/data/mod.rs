//! Turning raw input text into domain values.

pub mod inspector;

pub use inspector::*;
