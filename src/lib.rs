//! Open Graph Writer
//!
//! Store, validate and render [Open Graph](https://ogp.me/) metadata.
//!
//! Properties are collected on an [`OpenGraphItem`], checked against the
//! built-in Open Graph schema, and rendered as `<meta>` tags.
//!
//! # Example
//!
//! ```
//! use opengraph_writer::{OpenGraphItem, ValidateOptions};
//!
//! let mut item = OpenGraphItem::new();
//! item.set("og:title", "MyWebsite");
//! item.set("og:type", "article");
//! item.set_many([
//!     ("article:author", "abc"),
//!     ("article:published_time", "2012-01-10"),
//!     ("og:image", "http://f.me/a.png"),
//!     ("og:url", "http://f.me"),
//! ]);
//!
//! assert!(item.validate(&ValidateOptions::default()).unwrap());
//!
//! let errors = item.errors().unwrap();
//! assert_eq!(
//!     errors.recommended["article:section"],
//!     "non-required subtype not included"
//! );
//!
//! let html = item.as_html(false).unwrap();
//! assert!(html.starts_with(r#"<meta property="article:author" content="abc"/>"#));
//! ```
//!
//! # Findings
//!
//! | Bucket | Meaning |
//! |--------|---------|
//! | `critical` | Required property missing or invalid, or `og:type` missing/unknown |
//! | `recommended` | Optional property invalid, or a sub-property of the type absent or invalid |
//! | `not_validated` | Present properties no schema rule looked at |
//!
//! Only `critical` findings make [`OpenGraphItem::validate`] return `false`.
//!
//! # Schemas
//!
//! Schema 2 (the default) checks `og:type` against the current protocol and
//! walks the sub-properties of that type. Schema 1 only checks `og:type`
//! against the older list of type names.

mod check;
mod error;
mod item;
mod loader;
mod render;
pub mod schema;
mod types;
mod validator;

pub use check::{validate_item, validate_scalar};
pub use error::{LoadError, OgError};
pub use item::OpenGraphItem;
pub use loader::{load_properties, load_properties_str, properties_from_value};
pub use render::render_tags;
pub use schema::{SchemaEntry, TypeVariant, ValueType};
pub use types::{PropertyValue, Scalar, SchemaVersion, ValidateOptions};
pub use validator::{validate_properties, Level, ValidationResult};
