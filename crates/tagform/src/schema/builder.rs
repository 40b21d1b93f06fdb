//! Fluent construction of union descriptions.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::schema::{AltSchema, RecordDecodeFn, RecordEncodeFn, UnionSchema};

impl<T> UnionSchema<T> {
    /// Starts a description whose alternative set is complete.
    pub fn closed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            closed: true,
            alts: Vec::new(),
        }
    }

    /// Starts a description whose alternative set is not statically
    /// enumerable. Such a description exists only to be rejected by
    /// derivation; it can never yield a codec.
    pub fn open(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            closed: false,
            alts: Vec::new(),
        }
    }

    /// Appends an alternative. Declaration order is the dispatch order.
    pub fn alt(mut self, alt: AltSchema<T>) -> Self {
        self.alts.push(alt);
        self
    }

    /// Appends a serde-backed record alternative.
    pub fn record<V>(self, name: impl Into<String>, project: fn(&T) -> Option<&V>, embed: fn(V) -> T) -> Self
    where
        V: Serialize + DeserializeOwned + 'static,
    {
        self.alt(AltSchema::record(name, project, embed))
    }

    /// Appends a record alternative with an explicit structural codec pair.
    pub fn record_with(
        self,
        name: impl Into<String>,
        encode: RecordEncodeFn<T>,
        decode: RecordDecodeFn<T>,
    ) -> Self {
        self.alt(AltSchema::record_with(name, encode, decode))
    }

    /// Appends a dataless marker alternative.
    pub fn marker(self, name: impl Into<String>, is: fn(&T) -> bool, instance: fn() -> T) -> Self {
        self.alt(AltSchema::marker(name, is, instance))
    }

    /// Appends a non-instantiable alternative, for descriptions of unions
    /// whose hierarchy is deeper than one level.
    pub fn abstract_(self, name: impl Into<String>) -> Self {
        self.alt(AltSchema::abstract_(name))
    }
}
