use std::{path::Path, str::FromStr};

use indexmap::IndexMap;
use serde::Deserialize;

use schemagen_core::{CaseStyle, EnumValueStyle};

use crate::{Error, Result};

/// Naming policy for one generation run.
///
/// Every policy field is tri-state: `None` means "unset, apply the
/// documented default", which the accessor methods resolve at the point
/// of use. An explicitly set empty string is therefore distinct from an
/// unset field. The record is never mutated after construction; all
/// entities in a run observe the same snapshot.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    // Field naming
    pub field_case: Option<CaseStyle>,
    pub use_json_tag: Option<bool>,
    /// Tag key consulted before `json` when resolving field names
    /// (e.g. `gql`). Must be one of the recognized tag keys to ever match.
    pub struct_tag_name: Option<String>,

    // General naming transformations
    pub use_comments_as_description: Option<bool>,
    /// Comma-separated prefixes to strip from type names (first match wins)
    pub strip_prefix: Option<String>,
    /// Comma-separated suffixes to strip from type names (first match wins)
    pub strip_suffix: Option<String>,
    pub add_type_prefix: Option<String>,
    pub add_type_suffix: Option<String>,

    // Enum naming transformations
    pub strip_enum_prefix: Option<String>,
    pub strip_enum_suffix: Option<String>,
    pub add_enum_prefix: Option<String>,
    pub add_enum_suffix: Option<String>,

    // Enum value transformations
    pub enum_value_case: Option<CaseStyle>,
    pub enum_value_style: Option<EnumValueStyle>,
    pub iota_enum_value_style: Option<EnumValueStyle>,

    /// Source type name -> schema type name
    #[serde(default)]
    pub type_mappings: IndexMap<String, String>,

    /// Types the output schema imports rather than defines
    #[serde(default)]
    pub known_types: IndexMap<String, KnownType>,
}

/// An imported schema type: what to call it and where it comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct KnownType {
    pub schema_type: String,
    #[serde(default)]
    pub import: String,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "schemagen.toml")
    }
}

impl Config {
    /// Parse a configuration file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a configuration from a string with a custom filename for
    /// error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        Ok(config)
    }

    /// Case style for field names (default: camel).
    pub fn field_case(&self) -> CaseStyle {
        self.field_case.unwrap_or(CaseStyle::Camel)
    }

    /// Whether a `json` tag overrides the bare identifier (default: true).
    pub fn use_json_tag(&self) -> bool {
        self.use_json_tag.unwrap_or(true)
    }

    /// Tag key consulted first for field names (default: none).
    pub fn struct_tag_name(&self) -> &str {
        self.struct_tag_name.as_deref().unwrap_or("")
    }

    /// Whether source comments feed entity descriptions (default: false).
    pub fn use_comments_as_description(&self) -> bool {
        self.use_comments_as_description.unwrap_or(false)
    }

    pub fn strip_prefix(&self) -> &str {
        self.strip_prefix.as_deref().unwrap_or("")
    }

    pub fn strip_suffix(&self) -> &str {
        self.strip_suffix.as_deref().unwrap_or("")
    }

    pub fn add_type_prefix(&self) -> &str {
        self.add_type_prefix.as_deref().unwrap_or("")
    }

    pub fn add_type_suffix(&self) -> &str {
        self.add_type_suffix.as_deref().unwrap_or("")
    }

    pub fn strip_enum_prefix(&self) -> &str {
        self.strip_enum_prefix.as_deref().unwrap_or("")
    }

    pub fn strip_enum_suffix(&self) -> &str {
        self.strip_enum_suffix.as_deref().unwrap_or("")
    }

    pub fn add_enum_prefix(&self) -> &str {
        self.add_enum_prefix.as_deref().unwrap_or("")
    }

    pub fn add_enum_suffix(&self) -> &str {
        self.add_enum_suffix.as_deref().unwrap_or("")
    }

    /// Case style for enum values rendered from names (default:
    /// screaming_snake).
    pub fn enum_value_case(&self) -> CaseStyle {
        self.enum_value_case.unwrap_or(CaseStyle::ScreamingSnake)
    }

    /// Style for enum values with explicit literals (default: keep the
    /// literal).
    pub fn enum_value_style(&self) -> EnumValueStyle {
        self.enum_value_style.unwrap_or(EnumValueStyle::Value)
    }

    /// Style for ordinal-style enum values (default: derive from name).
    pub fn iota_enum_value_style(&self) -> EnumValueStyle {
        self.iota_enum_value_style.unwrap_or(EnumValueStyle::Name)
    }

    /// Map a source type name to its schema type name.
    ///
    /// Explicit `type_mappings` win over `known_types`; an unmapped name
    /// is returned unchanged.
    pub fn schema_type<'a>(&'a self, name: &'a str) -> &'a str {
        if let Some(mapped) = self.type_mappings.get(name) {
            return mapped;
        }
        if let Some(known) = self.known_types.get(name) {
            return &known.schema_type;
        }
        name
    }
}
