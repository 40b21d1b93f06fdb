use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use tagform::{derive_format, Codec, UnionSchema, VARIANT_TAG};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Bar {
    x: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Baz {
    name: String,
    on: bool,
}

#[derive(Debug, Clone, PartialEq)]
enum Shape {
    Bar(Bar),
    Baz(Baz),
    Bah,
}

fn shape_codec() -> Codec<Shape> {
    let schema = UnionSchema::closed("Shape")
        .record(
            "Bar",
            |v: &Shape| match v {
                Shape::Bar(bar) => Some(bar),
                _ => None,
            },
            Shape::Bar,
        )
        .record(
            "Baz",
            |v: &Shape| match v {
                Shape::Baz(baz) => Some(baz),
                _ => None,
            },
            Shape::Baz,
        )
        .marker("Bah", |v| matches!(v, Shape::Bah), || Shape::Bah);
    derive_format(&schema).expect("codec")
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    prop_oneof![
        any::<i64>().prop_map(|x| Shape::Bar(Bar { x })),
        (".*", any::<bool>()).prop_map(|(name, on)| Shape::Baz(Baz { name, on })),
        Just(Shape::Bah),
    ]
}

proptest! {
    #[test]
    fn round_trip_holds_for_every_instance(value in shape_strategy()) {
        let codec = shape_codec();
        let wire = codec.encode(&value);
        prop_assert_eq!(codec.decode(&wire).expect("decoded"), value.clone());
    }

    #[test]
    fn text_round_trip_holds_for_every_instance(value in shape_strategy()) {
        let codec = shape_codec();
        let text = codec.encode_to_string(&value).expect("text");
        prop_assert_eq!(codec.decode_str(&text).expect("decoded"), value.clone());
    }

    #[test]
    fn encode_is_total_and_always_tagged(value in shape_strategy()) {
        let codec = shape_codec();
        let wire = codec.encode(&value);
        let obj = wire.as_object().expect("object");
        prop_assert!(obj.get(VARIANT_TAG).and_then(|tag| tag.as_str()).is_some());
    }
}
