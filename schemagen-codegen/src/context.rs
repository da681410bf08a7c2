//! Per-run resolution context.

use schemagen_config::Config;
use schemagen_ir::{Describable, EnumDecl, EnumValueDecl, StructDecl, custom_name};

use crate::description::resolve_description;
use crate::field::{FieldResolver, ProcessedField};
use crate::naming::NamingStrategy;
use crate::resolver::TypeResolver;

/// Everything a schema emitter needs for one generation run: the
/// configuration snapshot and the resolvers built over it.
pub struct GenerationContext<'a> {
    pub config: &'a Config,
    pub naming: NamingStrategy<'a>,
    pub fields: FieldResolver<'a>,
}

impl<'a> GenerationContext<'a> {
    pub fn new(config: &'a Config, resolver: &'a dyn TypeResolver) -> Self {
        Self {
            config,
            naming: NamingStrategy::new(config),
            fields: FieldResolver::new(config, resolver),
        }
    }

    /// Final schema name for a struct declaration.
    pub fn struct_name(&self, decl: &StructDecl) -> String {
        self.naming
            .type_name(&decl.ident, custom_name(&decl.annotations))
    }

    /// Final schema name for an enum declaration.
    pub fn enum_name(&self, decl: &EnumDecl) -> String {
        self.naming
            .enum_name(&decl.ident, custom_name(&decl.annotations))
    }

    /// Final representation of an enum member. Ordinal members derive
    /// from the member name; literal members start from their literal.
    pub fn enum_value(&self, decl: &EnumValueDecl) -> String {
        let raw = if decl.is_iota {
            decl.ident.as_str()
        } else {
            decl.value.as_deref().unwrap_or(&decl.ident)
        };
        self.naming.enum_value(raw, decl.is_iota)
    }

    /// Process every field of a struct in declaration order.
    pub fn process_fields(&self, decl: &StructDecl) -> Vec<ProcessedField> {
        decl.fields.iter().map(|f| self.fields.process(f)).collect()
    }

    /// Description for any describable declaration.
    pub fn describe(&self, entity: &dyn Describable) -> String {
        resolve_description(self.config, entity)
    }
}
