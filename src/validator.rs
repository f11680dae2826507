//! Schema walk over a property bag.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::check::validate_item;
use crate::error::OgError;
use crate::schema::{
    LegacyType, SchemaEntry, TypeVariant, DISCRIMINATOR, LEGACY_TYPES, PROPERTIES, VARIANTS,
};
use crate::types::{PropertyValue, Scalar, SchemaVersion, ValidateOptions};

pub const MISSING_REQUIRED: &str = "Missing Required Element";
pub const REQUIRED_INVALID: &str = "Required Element does not validate";
pub const OPTIONAL_INVALID: &str = "non-required Element does not validate";
pub const MISSING_TYPE: &str = "Missing og:type";
pub const INVALID_TYPE: &str = "Invalid og:type";
pub const MISSING_REQUIRED_SUBTYPE: &str = "Missing required subtype";
pub const REQUIRED_SUBTYPE_INVALID: &str = "Required subtype does not validate correctly";
pub const OPTIONAL_SUBTYPE_MISSING: &str = "non-required subtype not included";
pub const OPTIONAL_SUBTYPE_INVALID: &str = "non-required subtype does not validate correctly";

/// Severity bucket for a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Critical,
    Recommended,
}

/// Findings from one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Findings that make the item invalid.
    pub critical: BTreeMap<String, String>,
    /// Advisory findings.
    pub recommended: BTreeMap<String, String>,
    /// Bag keys that no schema rule looked at, sorted.
    pub not_validated: Vec<String>,
}

impl ValidationResult {
    /// Returns true if there are no critical findings.
    pub fn is_valid(&self) -> bool {
        self.critical.is_empty()
    }

    /// Record a finding. A key is never in both buckets; critical wins.
    pub fn record(&mut self, level: Level, property: &str, message: &str) {
        tracing::trace!(?level, property, message, "validation finding");
        match level {
            Level::Critical => {
                self.recommended.remove(property);
                self.critical.insert(property.to_string(), message.to_string());
            }
            Level::Recommended => {
                if !self.critical.contains_key(property) {
                    self.recommended.insert(property.to_string(), message.to_string());
                }
            }
        }
    }

    /// The finding for a property, critical first.
    pub fn finding(&self, property: &str) -> Option<(Level, &str)> {
        self.critical
            .get(property)
            .map(|m| (Level::Critical, m.as_str()))
            .or_else(|| {
                self.recommended
                    .get(property)
                    .map(|m| (Level::Recommended, m.as_str()))
            })
    }
}

/// Validate a property bag.
///
/// Every problem is collected in one pass; only option misuse is an error.
///
/// # Errors
///
/// Returns an [`OgError`] if `options` request Facebook validation or do not
/// select exactly one schema.
pub fn validate_properties(
    data: &BTreeMap<String, PropertyValue>,
    options: &ValidateOptions,
) -> Result<ValidationResult, OgError> {
    let version = options.schema()?;
    Ok(walk(data, PROPERTIES, VARIANTS, LEGACY_TYPES, version))
}

/// Walk `data` against the given tables.
fn walk(
    data: &BTreeMap<String, PropertyValue>,
    properties: &[SchemaEntry],
    variants: &[TypeVariant],
    legacy: &[LegacyType],
    version: SchemaVersion,
) -> ValidationResult {
    let mut result = ValidationResult::default();
    let mut unaccounted: BTreeSet<&str> = data.keys().map(String::as_str).collect();

    for entry in properties {
        match data.get(entry.name) {
            None if entry.required => {
                result.record(Level::Critical, entry.name, MISSING_REQUIRED);
            }
            None => {}
            Some(value) => {
                unaccounted.remove(entry.name);
                if !validate_item(entry, value) {
                    if entry.required {
                        result.record(Level::Critical, entry.name, REQUIRED_INVALID);
                    } else {
                        result.record(Level::Recommended, entry.name, OPTIONAL_INVALID);
                    }
                }
            }
        }
    }

    match discriminator(data) {
        Discriminator::Missing => {
            result.record(Level::Critical, DISCRIMINATOR, MISSING_TYPE);
        }
        Discriminator::Unusable => {
            result.record(Level::Critical, DISCRIMINATOR, INVALID_TYPE);
        }
        Discriminator::Value(og_type) => match version {
            SchemaVersion::Schema1 => {
                if !legacy.iter().any(|t| t.name == og_type) {
                    result.record(Level::Critical, DISCRIMINATOR, INVALID_TYPE);
                }
            }
            SchemaVersion::Schema2 => match variants.iter().find(|v| v.name == og_type) {
                None => result.record(Level::Critical, DISCRIMINATOR, INVALID_TYPE),
                Some(variant) => {
                    // Criticality comes from the variant, not the sub-property.
                    let (level, missing, invalid) = if variant.required {
                        (
                            Level::Critical,
                            MISSING_REQUIRED_SUBTYPE,
                            REQUIRED_SUBTYPE_INVALID,
                        )
                    } else {
                        (
                            Level::Recommended,
                            OPTIONAL_SUBTYPE_MISSING,
                            OPTIONAL_SUBTYPE_INVALID,
                        )
                    };
                    for entry in variant.properties {
                        match data.get(entry.name) {
                            None => result.record(level, entry.name, missing),
                            Some(value) => {
                                unaccounted.remove(entry.name);
                                if !validate_item(entry, value) {
                                    result.record(level, entry.name, invalid);
                                }
                            }
                        }
                    }
                }
            },
        },
    }

    result.not_validated = unaccounted.into_iter().map(str::to_string).collect();

    tracing::debug!(
        schema = ?version,
        critical = result.critical.len(),
        recommended = result.recommended.len(),
        not_validated = result.not_validated.len(),
        "validated open graph properties"
    );

    result
}

enum Discriminator<'a> {
    Missing,
    /// Present but not a single text value.
    Unusable,
    Value(&'a str),
}

fn discriminator(data: &BTreeMap<String, PropertyValue>) -> Discriminator<'_> {
    match data.get(DISCRIMINATOR) {
        None => Discriminator::Missing,
        Some(PropertyValue::One(Scalar::Text(s))) if s.is_empty() => Discriminator::Missing,
        Some(PropertyValue::One(Scalar::Text(s))) => Discriminator::Value(s),
        Some(_) => Discriminator::Unusable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;

    fn bag(pairs: &[(&str, &str)]) -> BTreeMap<String, PropertyValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), PropertyValue::One(Scalar::from(*v))))
            .collect()
    }

    fn core(og_type: &str) -> BTreeMap<String, PropertyValue> {
        bag(&[
            ("og:title", "MyWebsite"),
            ("og:type", og_type),
            ("og:image", "http://f.me/a.png"),
            ("og:url", "http://f.me"),
        ])
    }

    #[test]
    fn empty_bag_reports_every_required_property() {
        let result = validate_properties(&BTreeMap::new(), &ValidateOptions::default()).unwrap();
        assert!(!result.is_valid());
        assert_eq!(result.critical["og:title"], MISSING_REQUIRED);
        assert_eq!(result.critical["og:image"], MISSING_REQUIRED);
        assert_eq!(result.critical["og:url"], MISSING_REQUIRED);
        // Discriminator check overwrites the generic message.
        assert_eq!(result.critical["og:type"], MISSING_TYPE);
        assert!(result.recommended.is_empty());
        assert!(result.not_validated.is_empty());
    }

    #[test]
    fn website_has_no_sub_properties() {
        let result = validate_properties(&core("website"), &ValidateOptions::default()).unwrap();
        assert!(result.is_valid());
        assert!(result.recommended.is_empty());
        assert!(result.not_validated.is_empty());
    }

    #[test]
    fn unknown_schema2_type_is_critical() {
        let result = validate_properties(&core("blog"), &ValidateOptions::default()).unwrap();
        assert_eq!(result.critical["og:type"], INVALID_TYPE);
    }

    #[test]
    fn schema1_checks_legacy_names_only() {
        let options = ValidateOptions::for_schema(SchemaVersion::Schema1);
        let mut data = core("blog");
        data.insert(
            "article:author".into(),
            PropertyValue::One(Scalar::from("abc")),
        );
        let result = validate_properties(&data, &options).unwrap();
        assert!(result.is_valid());
        assert!(result.recommended.is_empty());
        assert_eq!(result.not_validated, ["article:author"]);

        let result = validate_properties(&core("music.song"), &options).unwrap();
        assert_eq!(result.critical["og:type"], INVALID_TYPE);
    }

    #[test]
    fn empty_type_counts_as_missing() {
        let result = validate_properties(&core(""), &ValidateOptions::default()).unwrap();
        assert_eq!(result.critical["og:type"], MISSING_TYPE);
    }

    #[test]
    fn non_text_type_is_invalid() {
        let mut data = core("article");
        data.insert("og:type".into(), PropertyValue::One(Scalar::Integer(3)));
        let result = validate_properties(&data, &ValidateOptions::default()).unwrap();
        assert_eq!(result.critical["og:type"], INVALID_TYPE);
    }

    #[test]
    fn invalid_optional_top_level_is_recommended() {
        let mut data = core("website");
        data.insert("og:determiner".into(), PropertyValue::One(Scalar::from("some")));
        let result = validate_properties(&data, &ValidateOptions::default()).unwrap();
        assert!(result.is_valid());
        assert_eq!(result.recommended["og:determiner"], OPTIONAL_INVALID);
    }

    #[test]
    fn invalid_required_top_level_is_critical() {
        let mut data = core("website");
        data.insert("og:url".into(), PropertyValue::One(Scalar::from("f.me")));
        let result = validate_properties(&data, &ValidateOptions::default()).unwrap();
        assert_eq!(result.critical["og:url"], REQUIRED_INVALID);
    }

    #[test]
    fn structured_properties_are_not_validated() {
        let mut data = core("website");
        data.insert("og:image:width".into(), PropertyValue::One(Scalar::from(640)));
        let result = validate_properties(&data, &ValidateOptions::default()).unwrap();
        assert_eq!(result.not_validated, ["og:image:width"]);
    }

    #[test]
    fn object_reference_sub_property_is_recommended() {
        let mut data = core("music.song");
        data.insert(
            "music:album".into(),
            PropertyValue::One(Scalar::from("http://f.me/album")),
        );
        let result = validate_properties(&data, &ValidateOptions::default()).unwrap();
        assert!(result.is_valid());
        assert_eq!(result.recommended["music:album"], OPTIONAL_SUBTYPE_INVALID);
        assert_eq!(result.recommended["music:duration"], OPTIONAL_SUBTYPE_MISSING);
    }

    fn walk_required(data: &BTreeMap<String, PropertyValue>) -> ValidationResult {
        let article = schema::variant("article").unwrap();
        let variants =
            [TypeVariant::new(article.name, article.namespace, article.properties).required()];
        walk(data, PROPERTIES, &variants, LEGACY_TYPES, SchemaVersion::Schema2)
    }

    #[test]
    fn required_variant_missing_sub_property_is_critical() {
        let result = walk_required(&core("article"));
        assert!(!result.is_valid());
        assert_eq!(result.critical["article:published_time"], MISSING_REQUIRED_SUBTYPE);
        assert!(!result.recommended.contains_key("article:published_time"));
    }

    #[test]
    fn required_variant_invalid_sub_property_is_critical() {
        let mut data = core("article");
        data.insert("article:published_time".into(), PropertyValue::One(Scalar::from("soon")));
        let result = walk_required(&data);
        assert_eq!(result.critical["article:published_time"], REQUIRED_SUBTYPE_INVALID);
    }

    #[test]
    fn required_variant_valid_sub_property_has_no_finding() {
        let mut data = core("article");
        let published = PropertyValue::One(Scalar::from("2012-01-10"));
        data.insert("article:published_time".into(), published);
        let result = walk_required(&data);
        assert_eq!(result.finding("article:published_time"), None);
        assert!(result.not_validated.is_empty());
    }

    #[test]
    fn option_errors_abort() {
        let both = ValidateOptions::new().schema1(true);
        assert_eq!(
            validate_properties(&core("website"), &both),
            Err(OgError::ConflictingSchemas)
        );
    }

    #[test]
    fn critical_replaces_recommended() {
        let mut result = ValidationResult::default();
        result.record(Level::Recommended, "og:type", "advisory");
        result.record(Level::Critical, "og:type", INVALID_TYPE);
        result.record(Level::Recommended, "og:type", "advisory again");
        assert!(result.recommended.is_empty());
        assert_eq!(
            result.finding("og:type"),
            Some((Level::Critical, INVALID_TYPE))
        );
        assert_eq!(result.finding("og:title"), None);
    }

    #[test]
    fn result_serializes_buckets() {
        let mut result = ValidationResult::default();
        result.record(Level::Critical, "og:type", MISSING_TYPE);
        result.not_validated.push("og:tag".into());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["critical"]["og:type"], MISSING_TYPE);
        assert_eq!(json["recommended"], serde_json::json!({}));
        assert_eq!(json["not_validated"], serde_json::json!(["og:tag"]));
    }
}
