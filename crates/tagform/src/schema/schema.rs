//! Union description model.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Opaque failure reported by an external structural decoder.
pub type StructError = Box<dyn std::error::Error + Send + Sync>;

/// Structural field encoder for one alternative.
///
/// Returns the alternative's field object when the runtime value is this
/// alternative, `None` otherwise — the probe doubles as the encoder so that
/// dispatch never inspects a value it cannot encode.
pub type RecordEncodeFn<T> =
    Arc<dyn Fn(&T) -> Option<Map<String, Value>> + Send + Sync>;

/// Structural field decoder for one alternative.
///
/// Receives the whole wire object and must tolerate the extra tag key.
pub type RecordDecodeFn<T> =
    Arc<dyn Fn(&Map<String, Value>) -> Result<T, StructError> + Send + Sync>;

/// Identity probe for a dataless alternative.
pub type MarkerIsFn<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Produces the unique instance of a dataless alternative.
pub type MarkerInstanceFn<T> = Arc<dyn Fn() -> T + Send + Sync>;

/// Structural codec pair for an alternative that carries named fields.
pub struct RecordShape<T: 'static> {
    pub encode: RecordEncodeFn<T>,
    pub decode: RecordDecodeFn<T>,
}

impl<T> Clone for RecordShape<T> {
    fn clone(&self) -> Self {
        Self {
            encode: Arc::clone(&self.encode),
            decode: Arc::clone(&self.decode),
        }
    }
}

impl<T> fmt::Debug for RecordShape<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordShape").finish_non_exhaustive()
    }
}

/// Probe and instance producer for a dataless alternative.
pub struct MarkerShape<T: 'static> {
    pub is: MarkerIsFn<T>,
    pub instance: MarkerInstanceFn<T>,
}

impl<T> Clone for MarkerShape<T> {
    fn clone(&self) -> Self {
        Self {
            is: Arc::clone(&self.is),
            instance: Arc::clone(&self.instance),
        }
    }
}

impl<T> fmt::Debug for MarkerShape<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkerShape").finish_non_exhaustive()
    }
}

/// The shape of one alternative of a union.
pub enum AltShape<T: 'static> {
    /// Carries named fields, encoded and decoded by a structural codec.
    Record(RecordShape<T>),
    /// Carries no data; represented on the wire solely by its tag.
    Marker(MarkerShape<T>),
    /// Subdivided further and not directly instantiable. Cannot appear in a
    /// flat variant set; resolution rejects it.
    Abstract,
}

impl<T> AltShape<T> {
    /// Returns the "kind" string identifier for this shape.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Record(_) => "record",
            Self::Marker(_) => "marker",
            Self::Abstract => "abstract",
        }
    }
}

impl<T> Clone for AltShape<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Record(shape) => Self::Record(shape.clone()),
            Self::Marker(shape) => Self::Marker(shape.clone()),
            Self::Abstract => Self::Abstract,
        }
    }
}

impl<T> fmt::Debug for AltShape<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

/// One alternative of a union: a tag name plus its shape.
///
/// The name is used verbatim as the wire tag and must be unique across the
/// union, case-sensitive.
pub struct AltSchema<T: 'static> {
    pub name: String,
    pub shape: AltShape<T>,
}

impl<T> Clone for AltSchema<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            shape: self.shape.clone(),
        }
    }
}

impl<T> AltSchema<T> {
    /// Record alternative backed by an explicit structural codec pair.
    pub fn record_with(
        name: impl Into<String>,
        encode: RecordEncodeFn<T>,
        decode: RecordDecodeFn<T>,
    ) -> Self {
        Self {
            name: name.into(),
            shape: AltShape::Record(RecordShape { encode, decode }),
        }
    }

    /// Record alternative whose fields are the serde representation of `V`.
    ///
    /// `project` returns the payload when the value is this alternative;
    /// `embed` wraps a decoded payload back into the union type. Serde's
    /// default handling of unknown keys lets the decoder ignore the tag key.
    pub fn record<V>(
        name: impl Into<String>,
        project: fn(&T) -> Option<&V>,
        embed: fn(V) -> T,
    ) -> Self
    where
        V: Serialize + DeserializeOwned + 'static,
    {
        let name = name.into();
        let tag = name.clone();
        let encode: RecordEncodeFn<T> = Arc::new(move |value: &T| {
            let payload = project(value)?;
            match serde_json::to_value(payload) {
                Ok(Value::Object(fields)) => Some(fields),
                Ok(other) => panic!(
                    "structural encoding of variant {tag:?} is not an object: {other}"
                ),
                Err(err) => panic!("structural encoding of variant {tag:?} failed: {err}"),
            }
        });
        let decode: RecordDecodeFn<T> = Arc::new(move |fields: &Map<String, Value>| {
            serde_json::from_value::<V>(Value::Object(fields.clone()))
                .map(embed)
                .map_err(|err| Box::new(err) as StructError)
        });
        Self {
            name,
            shape: AltShape::Record(RecordShape { encode, decode }),
        }
    }

    /// Dataless alternative: an identity probe plus its unique instance.
    pub fn marker(name: impl Into<String>, is: fn(&T) -> bool, instance: fn() -> T) -> Self {
        Self {
            name: name.into(),
            shape: AltShape::Marker(MarkerShape {
                is: Arc::new(is),
                instance: Arc::new(instance),
            }),
        }
    }

    /// Alternative that is itself subdivided further. Derivation rejects it.
    pub fn abstract_(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shape: AltShape::Abstract,
        }
    }
}

impl<T> fmt::Debug for AltSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AltSchema")
            .field("name", &self.name)
            .field("shape", &self.shape)
            .finish()
    }
}

/// Description of a union type: its identity, whether its alternative set is
/// closed, and the ordered list of direct alternatives.
///
/// Only a closed union can be derived into a codec; the whole alternative set
/// must be present here before derivation runs.
pub struct UnionSchema<T: 'static> {
    pub name: String,
    pub closed: bool,
    pub alts: Vec<AltSchema<T>>,
}

impl<T> Clone for UnionSchema<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            closed: self.closed,
            alts: self.alts.clone(),
        }
    }
}

impl<T> fmt::Debug for UnionSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnionSchema")
            .field("name", &self.name)
            .field("closed", &self.closed)
            .field("alts", &self.alts)
            .finish()
    }
}
