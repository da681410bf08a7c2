//! Annotation markers attached to declarations.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A named, parameterized metadata marker attached to a declaration.
///
/// Annotations are distinct from struct tags: tags are key/value strings
/// inside a field's tag blob, while annotations are parsed markers
/// (e.g. `@name(value="User")`) that can appear on any declaration.
/// Parameter order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub name: String,
    #[serde(default)]
    pub params: IndexMap<String, String>,
}

impl Annotation {
    /// Create an annotation with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: IndexMap::new(),
        }
    }

    /// Add a parameter, returning self for chaining.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Look up a parameter value by name.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// Extract an explicit output name from a declaration's annotations.
///
/// The first annotation named `name` supplies it, from its `name` or
/// `value` parameter. An explicit name bypasses every other naming rule.
pub fn custom_name(annotations: &[Annotation]) -> Option<&str> {
    annotations
        .iter()
        .find(|a| a.name == "name")
        .and_then(|a| a.param("name").or_else(|| a.param("value")))
        .filter(|s| !s.is_empty())
}
