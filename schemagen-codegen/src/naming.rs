//! Name transformation rules for types, enums, and enum values.

use schemagen_config::Config;
use schemagen_core::EnumValueStyle;

/// Applies the configured naming policy to declaration names.
///
/// Types and enums use independently configured strip/add lists; an
/// explicit custom name from an annotation bypasses every rule.
#[derive(Debug, Clone, Copy)]
pub struct NamingStrategy<'a> {
    config: &'a Config,
}

impl<'a> NamingStrategy<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Transform a field identifier with the configured case style.
    pub fn field_name(&self, name: &str) -> String {
        self.config.field_case().apply(name)
    }

    /// Transform a type name, unless a custom name overrides it.
    pub fn type_name(&self, name: &str, custom: Option<&str>) -> String {
        if let Some(custom) = custom.filter(|c| !c.is_empty()) {
            return custom.to_string();
        }
        apply_affixes(
            name,
            self.config.strip_prefix(),
            self.config.strip_suffix(),
            self.config.add_type_prefix(),
            self.config.add_type_suffix(),
        )
    }

    /// Transform an enum name, unless a custom name overrides it.
    pub fn enum_name(&self, name: &str, custom: Option<&str>) -> String {
        if let Some(custom) = custom.filter(|c| !c.is_empty()) {
            return custom.to_string();
        }
        apply_affixes(
            name,
            self.config.strip_enum_prefix(),
            self.config.strip_enum_suffix(),
            self.config.add_enum_prefix(),
            self.config.add_enum_suffix(),
        )
    }

    /// Transform an enum value.
    ///
    /// Exactly one style selector applies, chosen by `is_iota`: ordinal
    /// members consult the iota style (default: derive from name), literal
    /// members the value style (default: keep as-is). Only when the
    /// selector picks name-derivation is the enum value case applied.
    pub fn enum_value(&self, value: &str, is_iota: bool) -> String {
        let derive_from_name = if is_iota {
            self.config.iota_enum_value_style() == EnumValueStyle::Name
        } else {
            self.config.enum_value_style() == EnumValueStyle::Name
        };
        if derive_from_name {
            self.config.enum_value_case().apply(value)
        } else {
            value.to_string()
        }
    }
}

/// Strip the first matching prefix and suffix from their comma-separated
/// lists (entries trimmed, one strip each), then unconditionally add the
/// configured prefix and suffix.
fn apply_affixes(
    name: &str,
    strip_prefixes: &str,
    strip_suffixes: &str,
    add_prefix: &str,
    add_suffix: &str,
) -> String {
    let mut result = name.to_string();

    if !strip_prefixes.is_empty() {
        for prefix in strip_prefixes.split(',') {
            let prefix = prefix.trim();
            if let Some(stripped) = result.strip_prefix(prefix) {
                result = stripped.to_string();
                break;
            }
        }
    }

    if !strip_suffixes.is_empty() {
        for suffix in strip_suffixes.split(',') {
            let suffix = suffix.trim();
            if let Some(stripped) = result.strip_suffix(suffix) {
                result = stripped.to_string();
                break;
            }
        }
    }

    if !add_prefix.is_empty() {
        result = format!("{add_prefix}{result}");
    }
    if !add_suffix.is_empty() {
        result.push_str(add_suffix);
    }

    result
}
