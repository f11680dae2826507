//! `<meta>` tag rendering.

use std::collections::BTreeMap;

use html_escape::encode_double_quoted_attribute as escape;

use crate::types::PropertyValue;
use crate::validator::{Level, ValidationResult};

/// Render the bag as one `<meta>` tag per value, in key order.
///
/// With `debug`, tags for properties that have a finding in `errors` carry a
/// `critical-error` or `recommended-error` attribute.
pub fn render_tags(
    data: &BTreeMap<String, PropertyValue>,
    errors: &ValidationResult,
    debug: bool,
) -> String {
    let mut tags = Vec::new();
    for (name, value) in data {
        let annotation = if debug {
            errors
                .finding(name)
                .map(|(level, message)| annotation(level, message))
                .unwrap_or_default()
        } else {
            String::new()
        };
        for scalar in value.iter() {
            tags.push(format!(
                r#"<meta property="{}" content="{}"{}/>"#,
                escape(name),
                escape(&scalar.to_content()),
                annotation
            ));
        }
    }
    tags.join("\n")
}

fn annotation(level: Level, message: &str) -> String {
    let attr = match level {
        Level::Critical => "critical-error",
        Level::Recommended => "recommended-error",
    };
    format!(r#" {}="{}""#, attr, escape(message))
}
