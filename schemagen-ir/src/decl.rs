//! Parsed declarations.
//!
//! One record per declaration kind the parser can hand over. Comments are
//! stored as raw strings (empty when the declaration had none); trimming
//! and precedence against annotations happen in the description resolver,
//! not here.

use serde::{Deserialize, Serialize};

use crate::annotation::Annotation;

/// Read-only access to the description sources of a declaration.
///
/// Every declaration kind exposes its raw comment and annotation sequence
/// through this trait, so description resolution is written once instead
/// of per kind.
pub trait Describable {
    /// The raw source comment, empty when absent.
    fn comment(&self) -> &str;
    /// Annotations in source order.
    fn annotations(&self) -> &[Annotation];
}

macro_rules! describable {
    ($ty:ty) => {
        impl Describable for $ty {
            fn comment(&self) -> &str {
                &self.comment
            }

            fn annotations(&self) -> &[Annotation] {
                &self.annotations
            }
        }
    };
}

/// A parsed struct declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructDecl {
    pub ident: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
}

/// A parsed struct field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub ident: String,
    /// Raw type expression as written in source (e.g. `*User`, `[]string`,
    /// `map[string]int`). Classification is the type resolver's job.
    pub ty: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    /// Raw tag blob, backticks included, when the field carried one.
    #[serde(default)]
    pub raw_tag: Option<String>,
    #[serde(default)]
    pub is_embedded: bool,
}

/// A parsed enum declaration with its members.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnumDecl {
    pub ident: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub values: Vec<EnumValueDecl>,
}

/// A parsed enum member.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnumValueDecl {
    pub ident: String,
    /// Explicit source literal, when the member has one.
    #[serde(default)]
    pub value: Option<String>,
    /// True for ordinal-style members whose value is derived from their
    /// position rather than an explicit literal.
    #[serde(default)]
    pub is_iota: bool,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

/// A parsed interface declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterfaceDecl {
    pub ident: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

describable!(StructDecl);
describable!(FieldDecl);
describable!(EnumDecl);
describable!(EnumValueDecl);
describable!(InterfaceDecl);
