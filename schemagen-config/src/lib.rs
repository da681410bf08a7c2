// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Naming-policy configuration for the schemagen schema generator.
//!
//! [`Config`] is parsed once per run from TOML and handed read-only to
//! every resolver. Unset knobs resolve to their documented defaults
//! through the accessor methods; parsing a knob never fails (unknown
//! style names fall back to their defaults).

mod config;
mod error;

pub use config::{Config, KnownType};
pub use error::{Error, Result};
