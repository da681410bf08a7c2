//! Enum value rendering styles.

use serde::{Deserialize, Deserializer};

/// How an enum value is rendered in the output schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumValueStyle {
    /// Derive the output from the member name, applying the configured
    /// case style.
    Name,
    /// Keep the source value as-is.
    Value,
}

impl EnumValueStyle {
    /// Parse a style name. Anything other than `"name"` behaves as
    /// [`EnumValueStyle::Value`].
    pub fn parse(s: &str) -> Self {
        match s {
            "name" => EnumValueStyle::Name,
            _ => EnumValueStyle::Value,
        }
    }

    /// Get the configuration-file name of this style.
    pub fn as_str(&self) -> &'static str {
        match self {
            EnumValueStyle::Name => "name",
            EnumValueStyle::Value => "value",
        }
    }
}

impl<'de> Deserialize<'de> for EnumValueStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(EnumValueStyle::parse(&s))
    }
}
