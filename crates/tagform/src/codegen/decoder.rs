//! Tag-driven decoder synthesis.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::constants::VARIANT_TAG;
use crate::registry::{VariantKind, VariantSet};
use crate::schema::StructError;

use super::DecodeFn;

/// Errors returned by a derived decoder. Ordinary recoverable values, never
/// control flow.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input is not a JSON object carrying a string-valued tag key.
    #[error("expected a JSON object carrying a string \"$variant\" tag")]
    MissingTag,
    /// The tag matches no variant of the union.
    #[error("unknown variant tag {0:?}")]
    UnknownVariant(String),
    /// The tag named a record variant but the structural decoder rejected
    /// the fields.
    #[error("invalid fields for variant {variant:?}: {source}")]
    Fields {
        variant: String,
        #[source]
        source: StructError,
    },
    /// The input text is not JSON at all (text-layer entry points only).
    #[error("failed to parse JSON text: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Builds the compiled decoder for a resolved variant set.
pub(crate) fn build<T>(set: Arc<VariantSet<T>>) -> DecodeFn<T> {
    Arc::new(move |json: &Value| decode_value(&set, json))
}

fn decode_value<T>(set: &VariantSet<T>, json: &Value) -> Result<T, DecodeError> {
    let Some(obj) = json.as_object() else {
        return Err(DecodeError::MissingTag);
    };
    let Some(tag) = obj.get(VARIANT_TAG).and_then(Value::as_str) else {
        return Err(DecodeError::MissingTag);
    };
    let Some(def) = set.lookup(tag) else {
        return Err(DecodeError::UnknownVariant(tag.to_string()));
    };
    match &def.kind {
        // The structural decoder sees the whole object, tag key included.
        VariantKind::Structured(shape) => (shape.decode)(obj).map_err(|source| {
            DecodeError::Fields {
                variant: def.name.clone(),
                source,
            }
        }),
        VariantKind::Singleton(shape) => Ok((shape.instance)()),
    }
}
