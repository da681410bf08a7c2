//! Name and metadata resolution for the schemagen schema generator.
//!
//! Given parsed declarations (`schemagen-ir`) and a configuration
//! snapshot (`schemagen-config`), this crate computes the final names,
//! descriptions, and value representations the schema emitter writes
//! out. Every resolution is a pure function of the declaration and the
//! configuration: nothing here performs I/O or depends on another
//! entity's resolved output.
//!
//! # Module Organization
//!
//! - [`naming`] - Type, enum, and enum-value name transformations
//! - [`field`] - Field resolution into [`ProcessedField`] records
//! - [`description`] - Description precedence over describable entities
//! - [`resolver`] - The type classification seam ([`TypeResolver`])
//! - [`context`] - The per-run bundle handed to an emitter

pub mod context;
pub mod description;
pub mod field;
pub mod naming;
pub mod resolver;

pub use context::GenerationContext;
pub use description::resolve_description;
pub use field::{FieldResolver, ProcessedField};
pub use naming::NamingStrategy;
pub use resolver::{SyntaxTypeResolver, TypeResolver};
