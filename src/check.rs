//! Value checks against a single schema entry.

use std::sync::LazyLock;

use regex::Regex;

use crate::schema::{SchemaEntry, ValueType};
use crate::types::{PropertyValue, Scalar};

// http://en.wikipedia.org/wiki/ISO_8601
static DATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // 2012-02-02
        r"^([0-9]{4})-(1[0-2]|0[1-9])-(3[0-1]|0[1-9]|[1-2][0-9])$",
        // 2012-033
        r"^([0-9]{4})-(36[0-6]|3[0-5][0-9]|[12][0-9]{2}|0[1-9][0-9]|00[1-9])$",
        // 2012-W05-4
        r"^([0-9]{4})-?W(5[0-3]|[1-4][0-9]|0[1-9])-?([1-7])$",
        // 2012-02-02T15:29:00Z
        r"^(-?(?:[1-9][0-9]*)?[0-9]{4})-(1[0-2]|0[1-9])-(3[0-1]|0[1-9]|[1-2][0-9])T(2[0-3]|[0-1][0-9]):([0-5][0-9]):([0-5][0-9])(.[0-9]+)?(Z|[+-](?:2[0-3]|[0-1][0-9]):[0-5][0-9])?$",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("date pattern is valid"))
    .collect()
});

// Only a loose prefix check: scheme, host-ish string, short TLD.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[a-z0-9.\-]+[.][a-z]{2,4}/?").expect("url pattern is valid")
});

/// Check a bag value against its schema entry.
///
/// A sequence passes only when the entry allows arrays and every element
/// passes on its own.
pub fn validate_item(entry: &SchemaEntry, value: &PropertyValue) -> bool {
    match value {
        PropertyValue::One(scalar) => validate_scalar(entry, scalar),
        PropertyValue::Many(items) => {
            entry.array_allowed
                && !items.is_empty()
                && items.iter().all(|s| validate_scalar(entry, s))
        }
    }
}

/// Check one scalar against the entry's declared type.
pub fn validate_scalar(entry: &SchemaEntry, value: &Scalar) -> bool {
    match entry.value_type {
        ValueType::String => matches!(value, Scalar::Text(_)),
        ValueType::Boolean => {
            matches!(value, Scalar::Boolean(_) | Scalar::Integer(0 | 1))
                || matches!(value.as_text(), Some("true" | "false"))
        }
        ValueType::Enum => value.as_text().is_some_and(|s| entry.enums.contains(&s)),
        ValueType::Integer => match value {
            Scalar::Integer(_) => true,
            Scalar::Text(s) => is_canonical_integer(s),
            _ => false,
        },
        ValueType::DateTime => match value {
            Scalar::Date(_) | Scalar::DateTime(_) | Scalar::ZonedDateTime(_) => true,
            Scalar::Text(s) => DATE_PATTERNS.iter().any(|re| re.is_match(s)),
            _ => false,
        },
        ValueType::Url => value.as_text().is_some_and(|s| URL_PATTERN.is_match(s)),
        // TODO: resolve the linked profile object and check its fields.
        ValueType::Profile => true,
        ValueType::Object(_) => false,
    }
}

/// "42" passes; "42.0", "+42", " 42", "042" and "-0" do not. No width limit.
fn is_canonical_integer(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match digits.as_bytes() {
        [] => false,
        [b'0'] => digits.len() == s.len(),
        [b'0', ..] => false,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{describe, property};
    use chrono::NaiveDate;

    fn one(value: impl Into<Scalar>) -> PropertyValue {
        PropertyValue::One(value.into())
    }

    fn entry(name: &str) -> &'static SchemaEntry {
        describe(name).unwrap()
    }

    fn with_type(value_type: ValueType) -> SchemaEntry {
        SchemaEntry {
            value_type,
            ..*property("og:title").unwrap()
        }
    }

    #[test]
    fn string_requires_text() {
        let title = entry("og:title");
        assert!(validate_item(title, &one("MyWebsite")));
        assert!(validate_item(title, &one("")));
        assert!(!validate_item(title, &one(5)));
        assert!(!validate_item(title, &one(true)));
    }

    #[test]
    fn boolean_accepts_four_tokens() {
        let flag = with_type(ValueType::Boolean);
        assert!(validate_item(&flag, &one(0)));
        assert!(validate_item(&flag, &one(1)));
        assert!(validate_item(&flag, &one("true")));
        assert!(validate_item(&flag, &one("false")));
        assert!(validate_item(&flag, &one(false)));

        assert!(!validate_item(&flag, &one(2)));
        assert!(!validate_item(&flag, &one("True")));
        assert!(!validate_item(&flag, &one("1")));
        assert!(!validate_item(&flag, &one("yes")));
    }

    #[test]
    fn enum_is_case_sensitive() {
        let gender = entry("profile:gender");
        assert!(validate_item(gender, &one("male")));
        assert!(validate_item(gender, &one("female")));
        assert!(!validate_item(gender, &one("Male")));
        assert!(!validate_item(gender, &one("ai")));

        let determiner = entry("og:determiner");
        assert!(validate_item(determiner, &one("")));
        assert!(validate_item(determiner, &one("auto")));
    }

    #[test]
    fn integer_text_must_be_canonical() {
        let width = entry("og:image:width");
        assert!(validate_item(width, &one(640)));
        assert!(validate_item(width, &one("42")));
        assert!(validate_item(width, &one("-7")));
        assert!(validate_item(width, &one("0")));
        assert!(validate_item(width, &one("170141183460469231731687303715884105728")));
        assert!(validate_item(width, &one("-99999999999999999999999999999999999999999")));
        assert!(!validate_item(width, &one("042")));
        assert!(!validate_item(width, &one("-0")));
        assert!(!validate_item(width, &one("-")));
        assert!(!validate_item(width, &one("42.0")));
        assert!(!validate_item(width, &one("4a")));
        assert!(!validate_item(width, &one("+42")));
        assert!(!validate_item(width, &one(" 42")));
        assert!(!validate_item(width, &one("")));
        assert!(!validate_item(width, &one(true)));
    }

    #[test]
    fn datetime_accepts_native_values() {
        let published = entry("article:published_time");
        let date = NaiveDate::from_ymd_opt(2021, 1, 10).unwrap();
        assert!(validate_item(published, &one(date)));
        assert!(validate_item(published, &one(date.and_hms_opt(0, 0, 0).unwrap())));
        assert!(!validate_item(published, &one(20210110)));
    }

    #[test]
    fn datetime_text_patterns() {
        let published = entry("article:published_time");
        for ok in [
            "2012-01-10",
            "2012-033",
            "2012-W05-4",
            "2012W054",
            "2012-02-02T15:29:00",
            "2012-02-02T15:29:00Z",
            "2012-02-02T15:29:00.123+05:30",
            "2012-02-02T15:29:00-08:00",
        ] {
            assert!(validate_item(published, &one(ok)), "{ok} should validate");
        }
        for bad in [
            "2012-13-01",
            "2012-00-10",
            "2012-367",
            "2012-W54-1",
            "2012-02-02 15:29:00",
            "2012-02-02T24:00:00",
            "10/01/2012",
            "2012-01-10\n",
            "2012-02-02T15:29:00Z\n",
            "",
        ] {
            assert!(!validate_item(published, &one(bad)), "{bad:?} should not validate");
        }
    }

    #[test]
    fn url_prefix_pattern() {
        let url = entry("og:url");
        assert!(validate_item(url, &one("http://f.me")));
        assert!(validate_item(url, &one("https://example.com/a/b?c=d")));
        assert!(validate_item(url, &one("http://sub.example.info/")));
        assert!(!validate_item(url, &one("ftp://example.com")));
        assert!(!validate_item(url, &one("http://Example.COM")));
        assert!(!validate_item(url, &one("http://localhost")));
        assert!(!validate_item(url, &one("example.com")));
        assert!(!validate_item(url, &one(80)));
    }

    #[test]
    fn profile_always_passes() {
        let author = entry("article:author");
        assert!(validate_item(author, &one("abc")));
        assert!(validate_item(author, &one(12)));
    }

    #[test]
    fn object_references_fail_closed() {
        let album = entry("music:album");
        assert!(!validate_item(album, &one("http://f.me/album")));
    }

    #[test]
    fn sequences_need_array_allowed() {
        let tag = entry("article:tag");
        let tags = PropertyValue::Many(vec!["rust".into(), "web".into()]);
        assert!(validate_item(tag, &tags));
        assert!(!validate_item(tag, &PropertyValue::Many(vec![])));
        assert!(!validate_item(
            tag,
            &PropertyValue::Many(vec!["rust".into(), 3.into()])
        ));

        let section = entry("article:section");
        assert!(!validate_item(section, &tags));
    }
}
