//! Type classification seam.
//!
//! The generator does not parse source types itself; it asks a
//! [`TypeResolver`] to classify a raw type expression and name its
//! element type. [`SyntaxTypeResolver`] covers the common textual forms;
//! a parser with full type information can provide its own implementation.

/// Classifies raw type expressions for field processing.
pub trait TypeResolver {
    /// Whether the type is a pointer (optional in the output schema).
    fn is_pointer(&self, ty: &str) -> bool;

    /// Whether the type is a slice (repeated in the output schema).
    fn is_slice(&self, ty: &str) -> bool;

    /// Whether the type is a map.
    fn is_map(&self, ty: &str) -> bool;

    /// The resolved element type name, with pointer/slice/map wrappers
    /// removed.
    fn type_name(&self, ty: &str) -> String;
}

/// A [`TypeResolver`] over the textual form of a type expression
/// (`*User`, `[]string`, `map[string][]int`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntaxTypeResolver;

impl TypeResolver for SyntaxTypeResolver {
    fn is_pointer(&self, ty: &str) -> bool {
        ty.starts_with('*')
    }

    fn is_slice(&self, ty: &str) -> bool {
        ty.starts_with("[]")
    }

    fn is_map(&self, ty: &str) -> bool {
        ty.starts_with("map[")
    }

    fn type_name(&self, ty: &str) -> String {
        if let Some(inner) = ty.strip_prefix('*') {
            return self.type_name(inner);
        }
        if let Some(inner) = ty.strip_prefix("[]") {
            return self.type_name(inner);
        }
        if let Some(rest) = ty.strip_prefix("map[") {
            // Skip the (possibly nested) key type and resolve the value.
            let mut depth = 1usize;
            for (i, c) in rest.char_indices() {
                match c {
                    '[' => depth += 1,
                    ']' => {
                        depth -= 1;
                        if depth == 0 {
                            return self.type_name(&rest[i + 1..]);
                        }
                    }
                    _ => {}
                }
            }
        }
        ty.to_string()
    }
}
