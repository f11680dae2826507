//! The Open Graph item: a property bag plus its last validation result.

use std::collections::BTreeMap;

use crate::error::OgError;
use crate::render::render_tags;
use crate::types::{PropertyValue, Scalar, ValidateOptions};
use crate::validator::{validate_properties, ValidationResult};

/// Open Graph properties for one page.
///
/// Values are accepted unchecked; call [`validate`](Self::validate) before
/// reading [`errors`](Self::errors) or rendering with [`as_html`](Self::as_html).
///
/// ```
/// use opengraph_writer::{OpenGraphItem, ValidateOptions};
///
/// let mut item = OpenGraphItem::new();
/// item.set_many([
///     ("og:title", "The Rock"),
///     ("og:type", "website"),
///     ("og:image", "http://example.com/rock.jpg"),
///     ("og:url", "http://example.com"),
/// ]);
/// assert!(item.validate(&ValidateOptions::default()).unwrap());
/// assert_eq!(
///     item.as_html(false).unwrap().lines().next(),
///     Some(r#"<meta property="og:image" content="http://example.com/rock.jpg"/>"#)
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct OpenGraphItem {
    data: BTreeMap<String, PropertyValue>,
    errors: Option<ValidationResult>,
}

impl OpenGraphItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an item populated from `(name, value)` pairs.
    pub fn with_properties<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Scalar>,
    {
        let mut item = Self::new();
        item.set_many(pairs);
        item
    }

    /// Set `name` to a single value, replacing any previous value or sequence.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Scalar>) {
        self.data.insert(name.into(), PropertyValue::One(value.into()));
    }

    /// Append a value to `name`.
    ///
    /// An absent property becomes a one-element sequence; an existing single
    /// value is kept as the first element.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<Scalar>) {
        let value = value.into();
        let slot = self
            .data
            .entry(name.into())
            .or_insert_with(|| PropertyValue::Many(Vec::new()));
        match slot {
            PropertyValue::Many(values) => values.push(value),
            PropertyValue::One(existing) => {
                let first = existing.clone();
                *slot = PropertyValue::Many(vec![first, value]);
            }
        }
    }

    /// [`set`](Self::set) each pair in order; later pairs win.
    pub fn set_many<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Scalar>,
    {
        for (name, value) in pairs {
            self.set(name, value);
        }
    }

    /// Current value of `name`.
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.data.get(name)
    }

    /// All properties, in key order.
    pub fn properties(&self) -> &BTreeMap<String, PropertyValue> {
        &self.data
    }

    /// Validate the bag, replacing any earlier result.
    ///
    /// Returns `true` when there are no critical findings; details are in
    /// [`errors`](Self::errors).
    ///
    /// # Errors
    ///
    /// Returns an [`OgError`] if `options` request Facebook validation or do not
    /// select exactly one schema. The previous result is kept in that case.
    pub fn validate(&mut self, options: &ValidateOptions) -> Result<bool, OgError> {
        let result = validate_properties(&self.data, options)?;
        let valid = result.is_valid();
        self.errors = Some(result);
        Ok(valid)
    }

    /// Findings from the last [`validate`](Self::validate) call.
    pub fn errors(&self) -> Result<&ValidationResult, OgError> {
        self.errors.as_ref().ok_or(OgError::NotValidated)
    }

    /// Render all properties as `<meta>` tags, one per line, sorted by name.
    ///
    /// With `debug`, tags carry the finding recorded for their property.
    pub fn as_html(&self, debug: bool) -> Result<String, OgError> {
        let errors = self.errors()?;
        Ok(render_tags(&self.data, errors, debug))
    }
}
