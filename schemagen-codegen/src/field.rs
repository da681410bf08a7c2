//! Field processing.

use serde::Serialize;

use schemagen_config::Config;
use schemagen_ir::{Annotation, FieldDecl, TagSet};

use crate::description::resolve_description;
use crate::resolver::TypeResolver;

/// The fully resolved output record for one source field.
///
/// Built exactly once per field and never updated afterwards; the schema
/// emitter consumes it as-is.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedField {
    /// Identifier as written in source.
    pub ident: String,
    /// Final name in the output schema.
    pub schema_name: String,
    /// Raw type expression as written in source.
    pub declared_type: String,
    /// Element type name after unwrapping and type mapping.
    pub resolved_type: String,
    pub is_pointer: bool,
    pub is_slice: bool,
    pub is_map: bool,
    pub is_embedded: bool,
    pub description: String,
    pub tags: TagSet,
    pub annotations: Vec<Annotation>,
}

/// Resolves a raw field declaration into a [`ProcessedField`].
pub struct FieldResolver<'a> {
    config: &'a Config,
    resolver: &'a dyn TypeResolver,
}

impl<'a> FieldResolver<'a> {
    pub fn new(config: &'a Config, resolver: &'a dyn TypeResolver) -> Self {
        Self { config, resolver }
    }

    /// Process one field declaration.
    pub fn process(&self, field: &FieldDecl) -> ProcessedField {
        let tags = field
            .raw_tag
            .as_deref()
            .map(TagSet::parse)
            .unwrap_or_default();

        let schema_name = self.resolve_name(&field.ident, &tags);
        let element = self.resolver.type_name(&field.ty);
        let resolved_type = self.config.schema_type(&element).to_string();

        ProcessedField {
            ident: field.ident.clone(),
            schema_name,
            declared_type: field.ty.clone(),
            resolved_type,
            is_pointer: self.resolver.is_pointer(&field.ty),
            is_slice: self.resolver.is_slice(&field.ty),
            is_map: self.resolver.is_map(&field.ty),
            is_embedded: field.is_embedded,
            description: resolve_description(self.config, field),
            tags,
            annotations: field.annotations.clone(),
        }
    }

    /// Resolve the schema name of a field. First satisfied rule wins:
    /// the configured structured tag, then the `json` tag when enabled,
    /// then the case-transformed identifier.
    fn resolve_name(&self, ident: &str, tags: &TagSet) -> String {
        let tag_key = self.config.struct_tag_name();
        if !tag_key.is_empty() {
            if let Some(name) = tags.schema_name(tag_key) {
                return name.to_string();
            }
        }

        if self.config.use_json_tag() {
            if let Some(name) = tags.schema_name("json") {
                return name.to_string();
            }
        }

        self.config.field_case().apply(ident)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::resolver::SyntaxTypeResolver;

    use super::*;

    fn field(ident: &str, ty: &str, raw_tag: Option<&str>) -> FieldDecl {
        FieldDecl {
            ident: ident.to_string(),
            ty: ty.to_string(),
            raw_tag: raw_tag.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_structured_tag_wins() {
        let config = Config::from_str(r#"struct_tag_name = "gql""#).unwrap();
        let resolver = SyntaxTypeResolver;
        let fields = FieldResolver::new(&config, &resolver);

        let pf = fields.process(&field(
            "UserID",
            "int64",
            Some(r#"gql:"customName" json:"jsonName""#),
        ));
        assert_eq!(pf.schema_name, "customName");
    }

    #[test]
    fn test_json_tag_second() {
        let config = Config::from_str(r#"struct_tag_name = "gql""#).unwrap();
        let resolver = SyntaxTypeResolver;
        let fields = FieldResolver::new(&config, &resolver);

        let pf = fields.process(&field("UserID", "int64", Some(r#"json:"jsonName""#)));
        assert_eq!(pf.schema_name, "jsonName");
    }

    #[test]
    fn test_identifier_fallback() {
        let config = Config::from_str(r#"struct_tag_name = "gql""#).unwrap();
        let resolver = SyntaxTypeResolver;
        let fields = FieldResolver::new(&config, &resolver);

        let pf = fields.process(&field("UserID", "int64", None));
        assert_eq!(pf.schema_name, "userID");
    }

    #[test]
    fn test_json_tag_disabled() {
        let config = Config::from_str("use_json_tag = false").unwrap();
        let resolver = SyntaxTypeResolver;
        let fields = FieldResolver::new(&config, &resolver);

        let pf = fields.process(&field("Name", "string", Some(r#"json:"jsonName""#)));
        assert_eq!(pf.schema_name, "name");
    }

    #[test]
    fn test_skip_marker_falls_through() {
        let config = Config::default();
        let resolver = SyntaxTypeResolver;
        let fields = FieldResolver::new(&config, &resolver);

        let pf = fields.process(&field("Secret", "string", Some(r#"json:"-""#)));
        assert_eq!(pf.schema_name, "secret");
    }

    #[test]
    fn test_shape_flags_and_resolved_type() {
        let config = Config::from_str(
            r#"
            [type_mappings]
            int64 = "int64_t"
            "#,
        )
        .unwrap();
        let resolver = SyntaxTypeResolver;
        let fields = FieldResolver::new(&config, &resolver);

        let pf = fields.process(&field("Scores", "map[string]*int64", None));
        assert!(pf.is_map);
        assert!(!pf.is_pointer);
        assert!(!pf.is_slice);
        assert_eq!(pf.declared_type, "map[string]*int64");
        assert_eq!(pf.resolved_type, "int64_t");

        let pf = fields.process(&field("Parent", "*Node", None));
        assert!(pf.is_pointer);
        assert_eq!(pf.resolved_type, "Node");
    }

    #[test]
    fn test_embedded_flag_copied() {
        let config = Config::default();
        let resolver = SyntaxTypeResolver;
        let fields = FieldResolver::new(&config, &resolver);

        let mut decl = field("Base", "Base", None);
        decl.is_embedded = true;
        assert!(fields.process(&decl).is_embedded);
    }

    #[test]
    fn test_description_attached() {
        let config = Config::from_str("use_comments_as_description = true").unwrap();
        let resolver = SyntaxTypeResolver;
        let fields = FieldResolver::new(&config, &resolver);

        let mut decl = field("Name", "string", None);
        decl.comment = "display name".to_string();
        assert_eq!(fields.process(&decl).description, "display name");
    }
}
