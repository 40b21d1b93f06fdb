//! Tagged JSON codec derivation for closed variant sets.
//!
//! Given a description of a union type — a fixed, fully enumerable set of
//! alternatives, each either a record with named fields or a dataless
//! marker — [`derive_format`] produces a bidirectional [`Codec`]: encode
//! tags each value's JSON object with its variant name under `"$variant"`,
//! decode validates the tag and delegates to the variant's structural codec.
//!
//! The alternative set is checked and frozen at derivation time: an open or
//! empty union, a duplicate tag, or an alternative that is neither record
//! nor marker all fail derivation up front, and the derived codec can never
//! grow a variant afterwards.
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use tagform::{derive_format, UnionSchema};
//!
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! struct Bar { x: i64 }
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Shape {
//!     Bar(Bar),
//!     Bah,
//! }
//!
//! let schema = UnionSchema::closed("Shape")
//!     .record("Bar", |v: &Shape| match v {
//!         Shape::Bar(bar) => Some(bar),
//!         _ => None,
//!     }, Shape::Bar)
//!     .marker("Bah", |v| matches!(v, Shape::Bah), || Shape::Bah);
//!
//! let codec = derive_format(&schema).unwrap();
//! let wire = codec.encode(&Shape::Bar(Bar { x: 5 }));
//! assert_eq!(wire, serde_json::json!({"x": 5, "$variant": "Bar"}));
//! assert_eq!(codec.decode(&wire).unwrap(), Shape::Bar(Bar { x: 5 }));
//! ```

pub mod codegen;
pub mod constants;
pub mod registry;
pub mod schema;

pub use codegen::{synthesize, Codec, DecodeError, DecodeFn, EncodeFn};
pub use constants::VARIANT_TAG;
pub use registry::{resolve, DeriveError, VariantDef, VariantKind, VariantSet};
pub use schema::{
    AltSchema, AltShape, MarkerShape, RecordShape, StructError, UnionSchema,
};

/// Derives the tagged codec for a union description.
///
/// Resolution then synthesis; any resolution failure aborts the whole
/// derivation — the caller gets a usable codec or none at all.
pub fn derive_format<T>(schema: &UnionSchema<T>) -> Result<Codec<T>, DeriveError> {
    let set = registry::resolve(schema)?;
    Ok(codegen::synthesize(set))
}
