//! Tagged encoder synthesis.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::constants::VARIANT_TAG;
use crate::registry::{VariantKind, VariantSet};

use super::EncodeFn;

/// Builds the compiled encoder for a resolved variant set.
///
/// Variants are probed in declaration order; the first match produces the
/// output object, with the tag key inserted after the structural fields so
/// the tag wins on a key collision.
pub(crate) fn build<T>(set: Arc<VariantSet<T>>) -> EncodeFn<T> {
    Arc::new(move |value: &T| encode_value(&set, value))
}

fn encode_value<T>(set: &VariantSet<T>, value: &T) -> Value {
    for def in set.defs() {
        match &def.kind {
            VariantKind::Structured(shape) => {
                if let Some(mut fields) = (shape.encode)(value) {
                    fields.insert(VARIANT_TAG.to_string(), Value::String(def.name.clone()));
                    return Value::Object(fields);
                }
            }
            VariantKind::Singleton(shape) => {
                if (shape.is)(value) {
                    let mut obj = Map::with_capacity(1);
                    obj.insert(VARIANT_TAG.to_string(), Value::String(def.name.clone()));
                    return Value::Object(obj);
                }
            }
        }
    }
    // Unreachable for a correctly described closed union; a miss here means
    // the description and the runtime type disagree.
    panic!(
        "value of union type {:?} matched no declared variant",
        set.type_name()
    );
}
