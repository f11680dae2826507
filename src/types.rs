//! Core value and option types.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Timelike};

use crate::error::OgError;

/// A single property value as stored in the bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    Text(String),
    Integer(i64),
    Boolean(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    ZonedDateTime(DateTime<FixedOffset>),
}

impl Scalar {
    /// Returns the text if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Stringify for the `content` attribute.
    ///
    /// Dates and datetimes use ISO-8601; fractional seconds are only written
    /// when the microsecond part is non-zero.
    pub fn to_content(&self) -> String {
        match self {
            Scalar::Text(s) => s.clone(),
            Scalar::Integer(i) => i.to_string(),
            Scalar::Boolean(true) => "true".to_string(),
            Scalar::Boolean(false) => "false".to_string(),
            Scalar::Date(d) => d.format("%Y-%m-%d").to_string(),
            Scalar::DateTime(dt) => isoformat(dt),
            Scalar::ZonedDateTime(dt) => {
                format!("{}{}", isoformat(&dt.naive_local()), dt.format("%:z"))
            }
        }
    }
}

fn isoformat(dt: &NaiveDateTime) -> String {
    let base = dt.format("%Y-%m-%dT%H:%M:%S").to_string();
    let micros = dt.nanosecond() % 1_000_000_000 / 1_000;
    if micros == 0 {
        base
    } else {
        format!("{base}.{micros:06}")
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Integer(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Integer(value.into())
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Boolean(value)
    }
}

impl From<NaiveDate> for Scalar {
    fn from(value: NaiveDate) -> Self {
        Scalar::Date(value)
    }
}

impl From<NaiveDateTime> for Scalar {
    fn from(value: NaiveDateTime) -> Self {
        Scalar::DateTime(value)
    }
}

impl From<DateTime<FixedOffset>> for Scalar {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Scalar::ZonedDateTime(value)
    }
}

/// A bag entry: one value, or a sequence built up by appending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    One(Scalar),
    Many(Vec<Scalar>),
}

impl PropertyValue {
    /// Iterate the contained scalars in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        match self {
            PropertyValue::One(s) => std::slice::from_ref(s).iter(),
            PropertyValue::Many(v) => v.iter(),
        }
    }
}

/// Which Open Graph schema a validation runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVersion {
    /// Pre-2.0 type list; only checks that `og:type` is a known name.
    Schema1,
    /// Current protocol; checks `og:type` and walks its sub-properties.
    Schema2,
}

/// Options for [`OpenGraphItem::validate`](crate::OpenGraphItem::validate).
#[derive(Debug, Clone)]
pub struct ValidateOptions {
    pub schema1: bool,
    pub schema2: bool,
    /// Reserved; validating Facebook extensions is not supported.
    pub facebook: bool,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            schema1: false,
            schema2: true,
            facebook: false,
        }
    }
}

impl ValidateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options selecting exactly the given schema.
    pub fn for_schema(version: SchemaVersion) -> Self {
        Self {
            schema1: version == SchemaVersion::Schema1,
            schema2: version == SchemaVersion::Schema2,
            facebook: false,
        }
    }

    pub fn schema1(mut self, enabled: bool) -> Self {
        self.schema1 = enabled;
        self
    }

    pub fn schema2(mut self, enabled: bool) -> Self {
        self.schema2 = enabled;
        self
    }

    pub fn facebook(mut self, enabled: bool) -> Self {
        self.facebook = enabled;
        self
    }

    /// Resolve the flags to a single schema.
    ///
    /// # Errors
    ///
    /// Fails when Facebook validation is requested, or when the schema
    /// selection is not exactly one of schema1/schema2.
    pub fn schema(&self) -> Result<SchemaVersion, OgError> {
        if self.facebook {
            return Err(OgError::FacebookUnsupported);
        }
        match (self.schema1, self.schema2) {
            (true, true) => Err(OgError::ConflictingSchemas),
            (true, false) => Ok(SchemaVersion::Schema1),
            (false, true) => Ok(SchemaVersion::Schema2),
            (false, false) => Err(OgError::NoSchemaSelected),
        }
    }
}
