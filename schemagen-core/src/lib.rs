//! Core utilities for the schemagen schema generator.
//!
//! This crate provides the case-conversion engine and the fundamental
//! style enums shared across the schemagen ecosystem.

mod case;
mod style;

// Style enums
pub use case::CaseStyle;
pub use style::EnumValueStyle;
// String utilities
pub use case::{to_camel_case, to_kebab_case, to_screaming_snake_case, to_snake_case};
