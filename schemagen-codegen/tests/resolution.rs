//! End-to-end resolution tests driven by TOML configuration fixtures.

use std::str::FromStr;

use schemagen_codegen::{GenerationContext, SyntaxTypeResolver};
use schemagen_config::Config;
use schemagen_ir::{Annotation, EnumDecl, EnumValueDecl, FieldDecl, StructDecl};

fn context(config: &Config) -> GenerationContext<'_> {
    GenerationContext::new(config, &SyntaxTypeResolver)
}

fn sample_struct() -> StructDecl {
    StructDecl {
        ident: "UserDTO".to_string(),
        comment: "A user of the system".to_string(),
        fields: vec![
            FieldDecl {
                ident: "UserID".to_string(),
                ty: "int64".to_string(),
                raw_tag: Some(r#"`json:"id,omitempty" gql:"userId"`"#.to_string()),
                ..Default::default()
            },
            FieldDecl {
                ident: "HomeURL".to_string(),
                ty: "*string".to_string(),
                comment: "optional home page".to_string(),
                ..Default::default()
            },
            FieldDecl {
                ident: "Friends".to_string(),
                ty: "[]*UserDTO".to_string(),
                ..Default::default()
            },
        ],
        ..Default::default()
    }
}

#[test]
fn test_default_config_resolution() {
    let config = Config::default();
    let ctx = context(&config);
    let decl = sample_struct();

    assert_eq!(ctx.struct_name(&decl), "UserDTO");

    let fields = ctx.process_fields(&decl);
    // json tag wins by default
    assert_eq!(fields[0].schema_name, "id");
    // bare identifiers fall back to camel case
    assert_eq!(fields[1].schema_name, "homeURL");
    assert_eq!(fields[2].schema_name, "friends");

    assert!(fields[1].is_pointer);
    assert!(fields[2].is_slice);
    assert_eq!(fields[2].resolved_type, "UserDTO");

    // Descriptions are off by default.
    assert_eq!(ctx.describe(&decl), "");
    assert_eq!(fields[1].description, "");
}

#[test]
fn test_field_name_precedence_chain() {
    let config = Config::from_str(r#"struct_tag_name = "gql""#).unwrap();
    let ctx = context(&config);

    let mut field = FieldDecl {
        ident: "UserID".to_string(),
        ty: "int64".to_string(),
        raw_tag: Some(r#"gql:"customName" json:"jsonName""#.to_string()),
        ..Default::default()
    };
    assert_eq!(ctx.fields.process(&field).schema_name, "customName");

    field.raw_tag = Some(r#"json:"jsonName""#.to_string());
    assert_eq!(ctx.fields.process(&field).schema_name, "jsonName");

    field.raw_tag = None;
    assert_eq!(ctx.fields.process(&field).schema_name, "userID");
}

#[test]
fn test_type_pipeline_with_strip_and_add() {
    let config = Config::from_str(
        r#"
        strip_suffix = "DTO"
        add_type_suffix = "Response"
        field_case = "snake"
        "#,
    )
    .unwrap();
    let ctx = context(&config);
    let decl = sample_struct();

    assert_eq!(ctx.struct_name(&decl), "UserResponse");

    let fields = ctx.process_fields(&decl);
    // json tag still beats the configured field case
    assert_eq!(fields[0].schema_name, "id");
    assert_eq!(fields[1].schema_name, "home_url");
}

#[test]
fn test_custom_name_annotation_bypass() {
    let config = Config::from_str(r#"strip_suffix = "DTO""#).unwrap();
    let ctx = context(&config);

    let mut decl = sample_struct();
    decl.annotations
        .push(Annotation::new("name").with_param("name", "Account"));
    assert_eq!(ctx.struct_name(&decl), "Account");
}

#[test]
fn test_enum_resolution_end_to_end() {
    let config = Config::from_str(
        r#"
        strip_enum_prefix = "E"
        add_enum_suffix = "Kind"
        use_comments_as_description = true
        "#,
    )
    .unwrap();
    let ctx = context(&config);

    let decl = EnumDecl {
        ident: "EStatus".to_string(),
        comment: "lifecycle states".to_string(),
        values: vec![
            EnumValueDecl {
                ident: "ActiveUser".to_string(),
                is_iota: true,
                ..Default::default()
            },
            EnumValueDecl {
                ident: "Inactive".to_string(),
                value: Some("inactive".to_string()),
                annotations: vec![
                    Annotation::new("description").with_param("description", "soft deleted"),
                ],
                ..Default::default()
            },
        ],
        ..Default::default()
    };

    assert_eq!(ctx.enum_name(&decl), "StatusKind");
    assert_eq!(ctx.enum_value(&decl.values[0]), "ACTIVE_USER");
    assert_eq!(ctx.enum_value(&decl.values[1]), "inactive");

    assert_eq!(ctx.describe(&decl), "lifecycle states");
    assert_eq!(ctx.describe(&decl.values[1]), "soft deleted");
}

#[test]
fn test_description_precedence() {
    let config = Config::from_str("use_comments_as_description = true").unwrap();
    let ctx = context(&config);

    let mut decl = StructDecl {
        ident: "Widget".to_string(),
        comment: "legacy comment".to_string(),
        annotations: vec![Annotation::new("description").with_param("desc", "A widget")],
        ..Default::default()
    };
    assert_eq!(ctx.describe(&decl), "A widget");

    decl.annotations.clear();
    assert_eq!(ctx.describe(&decl), "legacy comment");

    let disabled = Config::default();
    let ctx = context(&disabled);
    assert_eq!(ctx.describe(&decl), "");
}

#[test]
fn test_acronym_stability() {
    // Downstream schemas depend on these exact renderings.
    let config = Config::from_str(r#"field_case = "snake""#).unwrap();
    let ctx = context(&config);

    for (ident, expected) in [
        ("URLValue", "url_value"),
        ("ID", "id"),
        ("HTTPServer", "http_server"),
        ("UserName", "user_name"),
    ] {
        let field = FieldDecl {
            ident: ident.to_string(),
            ty: "string".to_string(),
            ..Default::default()
        };
        assert_eq!(ctx.fields.process(&field).schema_name, expected);
    }
}
