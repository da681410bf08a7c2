//! Identifier case conversion.
//!
//! The conversions here are acronym-aware: `URLValue` becomes `url_value`
//! in snake case and `urlValue` in camel case, not `u_r_l_value` or
//! `uRLValue`. Word-boundary detection works on ASCII letters only, since
//! source identifiers feeding the generator are ASCII.

use serde::{Deserialize, Deserializer};

/// Target lexical convention for an identifier.
///
/// Parsing a style name is total: unrecognized strings fall back to
/// [`CaseStyle::Camel`], so a bad configuration value degrades to the
/// default instead of failing the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseStyle {
    /// Leave the identifier untouched.
    None,
    /// Alias for [`CaseStyle::None`].
    Original,
    /// Uppercase every character.
    Upper,
    /// Lowercase every character.
    Lower,
    /// `fooBar` -> `foo_bar`, `URLValue` -> `url_value`
    Snake,
    /// Snake case, uppercased: `fooBar` -> `FOO_BAR`
    ScreamingSnake,
    /// Snake case with dashes: `fooBar` -> `foo-bar`
    Kebab,
    /// Source identifiers are already PascalCase, so this is the identity.
    Pascal,
    /// `UserName` -> `userName`, `HTTPServer` -> `httpServer`
    Camel,
}

impl CaseStyle {
    /// Parse a style name (used in configuration files).
    ///
    /// Unrecognized names resolve to [`CaseStyle::Camel`].
    pub fn parse(s: &str) -> Self {
        match s {
            "none" => CaseStyle::None,
            "original" => CaseStyle::Original,
            "upper" => CaseStyle::Upper,
            "lower" => CaseStyle::Lower,
            "snake" => CaseStyle::Snake,
            "screaming_snake" => CaseStyle::ScreamingSnake,
            "kebab" => CaseStyle::Kebab,
            "pascal" => CaseStyle::Pascal,
            _ => CaseStyle::Camel,
        }
    }

    /// Get the configuration-file name of this style.
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStyle::None => "none",
            CaseStyle::Original => "original",
            CaseStyle::Upper => "upper",
            CaseStyle::Lower => "lower",
            CaseStyle::Snake => "snake",
            CaseStyle::ScreamingSnake => "screaming_snake",
            CaseStyle::Kebab => "kebab",
            CaseStyle::Pascal => "pascal",
            CaseStyle::Camel => "camel",
        }
    }

    /// Apply this style to an identifier.
    ///
    /// Total over any input; the empty string is returned unchanged.
    pub fn apply(&self, name: &str) -> String {
        match self {
            CaseStyle::None | CaseStyle::Original | CaseStyle::Pascal => name.to_string(),
            CaseStyle::Upper => name.to_uppercase(),
            CaseStyle::Lower => name.to_lowercase(),
            CaseStyle::Snake => to_snake_case(name),
            CaseStyle::ScreamingSnake => to_screaming_snake_case(name),
            CaseStyle::Kebab => to_kebab_case(name),
            CaseStyle::Camel => to_camel_case(name),
        }
    }
}

impl<'de> Deserialize<'de> for CaseStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CaseStyle::parse(&s))
    }
}

/// Convert an identifier to snake_case (e.g., "fooBar" -> "foo_bar").
///
/// An underscore is inserted before an uppercase character that either
/// follows a lowercase character, or follows an uppercase character while
/// preceding a lowercase one. The second rule places the boundary at the
/// tail of an acronym run: "URLValue" -> "url_value".
pub fn to_snake_case(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if prev.is_ascii_lowercase() || (prev.is_ascii_uppercase() && next_lower) {
                out.push('_');
            }
        }
        out.push(c);
    }
    out.to_lowercase()
}

/// Convert an identifier to SCREAMING_SNAKE_CASE (e.g., "fooBar" -> "FOO_BAR").
pub fn to_screaming_snake_case(s: &str) -> String {
    to_snake_case(s).to_uppercase()
}

/// Convert an identifier to kebab-case (e.g., "fooBar" -> "foo-bar").
pub fn to_kebab_case(s: &str) -> String {
    to_snake_case(s).replace('_', "-")
}

/// Convert an identifier to lowerCamelCase while preserving interior
/// acronym casing (e.g., "UserName" -> "userName", "URLValue" -> "urlValue",
/// "ID" -> "id").
pub fn to_camel_case(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    // A name with no lowercase letters is a bare acronym.
    if !s.chars().any(|c| c.is_ascii_lowercase()) {
        return s.to_lowercase();
    }
    let chars: Vec<char> = s.chars().collect();
    if chars.len() > 1 && chars[0].is_ascii_uppercase() && chars[1].is_ascii_uppercase() {
        // Leading acronym run: find where it ends. Walking from index 1,
        // an uppercase character followed by a lowercase letter starts the
        // next word; reaching a non-uppercase character puts the boundary
        // at the previous index.
        let mut boundary = None;
        for i in 1..chars.len() {
            if chars[i].is_ascii_uppercase() {
                if chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase()) {
                    boundary = Some(i);
                    break;
                }
            } else {
                boundary = Some(i - 1);
                break;
            }
        }
        match boundary {
            Some(b) => {
                let head: String = chars[..b].iter().collect();
                let tail: String = chars[b..].iter().collect();
                head.to_lowercase() + &tail
            }
            None => lower_first(&chars),
        }
    } else {
        lower_first(&chars)
    }
}

fn lower_first(chars: &[char]) -> String {
    let mut out: String = chars[0].to_lowercase().collect();
    out.extend(&chars[1..]);
    out
}
