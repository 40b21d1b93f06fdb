//! Union description model and construction helpers.

pub mod builder;
pub mod schema;

pub use schema::{
    AltSchema, AltShape, MarkerInstanceFn, MarkerIsFn, MarkerShape, RecordDecodeFn,
    RecordEncodeFn, RecordShape, StructError, UnionSchema,
};
