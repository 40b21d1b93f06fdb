//! Variant registry resolution.
//!
//! Turns a union description into a resolved, ordered variant set, or
//! rejects the description outright. Every check here runs at derivation
//! time; nothing is deferred to the first encode or decode call.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::schema::{AltShape, MarkerShape, RecordShape, UnionSchema};

/// Errors that abort derivation.
#[derive(Debug, Error)]
pub enum DeriveError {
    /// The union's alternative set is not declared closed, so it cannot be
    /// enumerated exhaustively.
    #[error("union type {0:?} is not declared closed")]
    NotClosed(String),
    /// The union declares no alternatives at all.
    #[error("union type {0:?} declares no alternatives")]
    EmptyUnion(String),
    /// Alternatives that are neither records nor markers. All offenders
    /// found in one pass are reported together.
    #[error("union type {:?} has non-variant alternatives: {}", .type_name, .alts.join(", "))]
    InvalidAlts { type_name: String, alts: Vec<String> },
    /// Two alternatives declare the same case-sensitive tag.
    #[error("union type {type_name:?} declares duplicate variant tag {tag:?}")]
    DuplicateTag { type_name: String, tag: String },
}

/// A resolved alternative: exactly a record or a dataless marker.
pub enum VariantKind<T: 'static> {
    Structured(RecordShape<T>),
    Singleton(MarkerShape<T>),
}

impl<T> fmt::Debug for VariantKind<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Structured(_) => "structured",
            Self::Singleton(_) => "singleton",
        })
    }
}

/// One resolved variant: its wire tag plus its kind.
pub struct VariantDef<T: 'static> {
    pub name: String,
    pub kind: VariantKind<T>,
}

impl<T> fmt::Debug for VariantDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantDef")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

/// The resolved registry of a union: variants in declaration order plus an
/// exact-match tag index. Immutable once built; the closed-set guarantee
/// rests on nothing being able to append to it.
pub struct VariantSet<T: 'static> {
    type_name: String,
    defs: Vec<VariantDef<T>>,
    index: HashMap<String, usize>,
}

impl<T> VariantSet<T> {
    /// The union's declared identity.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Variants in declaration order.
    pub fn defs(&self) -> &[VariantDef<T>] {
        &self.defs
    }

    /// Exact, case-sensitive tag lookup.
    pub fn lookup(&self, tag: &str) -> Option<&VariantDef<T>> {
        self.index.get(tag).map(|&i| &self.defs[i])
    }
}

impl<T> fmt::Debug for VariantSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantSet")
            .field("type_name", &self.type_name)
            .field("defs", &self.defs)
            .finish()
    }
}

/// Resolves a union description into its variant set.
///
/// Enumerates direct alternatives only; an alternative that is itself
/// subdivided is invalid here, not recursed into.
pub fn resolve<T>(schema: &UnionSchema<T>) -> Result<VariantSet<T>, DeriveError> {
    if !schema.closed {
        return Err(DeriveError::NotClosed(schema.name.clone()));
    }
    if schema.alts.is_empty() {
        return Err(DeriveError::EmptyUnion(schema.name.clone()));
    }

    let invalid: Vec<String> = schema
        .alts
        .iter()
        .filter(|alt| matches!(alt.shape, AltShape::Abstract))
        .map(|alt| alt.name.clone())
        .collect();
    if !invalid.is_empty() {
        return Err(DeriveError::InvalidAlts {
            type_name: schema.name.clone(),
            alts: invalid,
        });
    }

    let mut defs: Vec<VariantDef<T>> = Vec::with_capacity(schema.alts.len());
    let mut index: HashMap<String, usize> = HashMap::with_capacity(schema.alts.len());
    for alt in &schema.alts {
        let kind = match &alt.shape {
            AltShape::Record(shape) => VariantKind::Structured(shape.clone()),
            AltShape::Marker(shape) => VariantKind::Singleton(shape.clone()),
            AltShape::Abstract => unreachable!("rejected above"),
        };
        if index.insert(alt.name.clone(), defs.len()).is_some() {
            return Err(DeriveError::DuplicateTag {
                type_name: schema.name.clone(),
                tag: alt.name.clone(),
            });
        }
        defs.push(VariantDef {
            name: alt.name.clone(),
            kind,
        });
    }

    Ok(VariantSet {
        type_name: schema.name.clone(),
        defs,
        index,
    })
}
