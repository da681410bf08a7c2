//! Description resolution.
//!
//! A description comes from annotations first, the raw source comment
//! second, and only when the configuration opts in; otherwise every
//! entity resolves to an empty description.

use schemagen_config::Config;
use schemagen_ir::{Annotation, Describable};

/// Annotation names that carry a description, in lookup order for both
/// the annotation name and its parameters.
const DESCRIPTION_KEYS: &[&str] = &["description", "desc", "comment"];

/// Resolve the description for any describable declaration.
///
/// Returns an empty string unless `use_comments_as_description` is set.
pub fn resolve_description(config: &Config, entity: &dyn Describable) -> String {
    if !config.use_comments_as_description() {
        return String::new();
    }
    if let Some(desc) = description_from_annotations(entity.annotations()) {
        if !desc.is_empty() {
            return desc;
        }
        // A parameter that trims to nothing counts as absent.
    }
    entity.comment().trim().to_string()
}

/// Scan annotations in source order for the first description-carrying
/// annotation with a non-empty parameter.
fn description_from_annotations(annotations: &[Annotation]) -> Option<String> {
    for ann in annotations {
        if !DESCRIPTION_KEYS.contains(&ann.name.as_str()) {
            continue;
        }
        for key in DESCRIPTION_KEYS {
            if let Some(value) = ann.param(key) {
                if !value.is_empty() {
                    return Some(value.trim().to_string());
                }
            }
        }
    }
    None
}
