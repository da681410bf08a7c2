//! Declaration metadata for the schemagen schema generator.
//!
//! The source parser produces these types; the resolvers in
//! `schemagen-codegen` consume them. Everything here is plain immutable
//! data: no resolution logic lives in this crate.

mod annotation;
mod decl;
mod tags;

pub use annotation::{Annotation, custom_name};
pub use decl::{
    Describable, EnumDecl, EnumValueDecl, FieldDecl, InterfaceDecl, StructDecl,
};
pub use tags::{TAG_ALLOW_LIST, TagSet};
