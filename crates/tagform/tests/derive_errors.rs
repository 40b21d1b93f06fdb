use serde_json::json;
use tagform::{derive_format, DeriveError, UnionSchema};

#[derive(Debug, Clone, PartialEq)]
enum Toggle {
    On,
    Off,
}

fn toggle() -> UnionSchema<Toggle> {
    UnionSchema::closed("Toggle")
        .marker("On", |v| matches!(v, Toggle::On), || Toggle::On)
        .marker("Off", |v| matches!(v, Toggle::Off), || Toggle::Off)
}

#[test]
fn open_union_never_yields_a_codec() {
    let schema = UnionSchema::<Toggle>::open("Toggle")
        .marker("On", |v| matches!(v, Toggle::On), || Toggle::On)
        .marker("Off", |v| matches!(v, Toggle::Off), || Toggle::Off);
    match derive_format(&schema) {
        Err(DeriveError::NotClosed(name)) => assert_eq!(name, "Toggle"),
        Ok(_) => panic!("open union must not derive"),
        Err(other) => panic!("expected NotClosed, got {other:?}"),
    }
}

#[test]
fn abstract_alternative_fails_derivation_naming_it() {
    let schema = toggle().abstract_("Dimmed");
    match derive_format(&schema) {
        Err(DeriveError::InvalidAlts { type_name, alts }) => {
            assert_eq!(type_name, "Toggle");
            assert_eq!(alts, ["Dimmed"]);
        }
        other => panic!("expected InvalidAlts, got {other:?}"),
    }
}

#[test]
fn every_abstract_alternative_is_named() {
    let schema = toggle().abstract_("DimA").abstract_("DimB").abstract_("DimC");
    match derive_format(&schema) {
        Err(DeriveError::InvalidAlts { alts, .. }) => {
            assert_eq!(alts, ["DimA", "DimB", "DimC"]);
        }
        other => panic!("expected InvalidAlts, got {other:?}"),
    }
}

#[test]
fn duplicate_tag_fails_derivation() {
    let schema = toggle().marker("Off", |v| matches!(v, Toggle::Off), || Toggle::Off);
    match derive_format(&schema) {
        Err(DeriveError::DuplicateTag { type_name, tag }) => {
            assert_eq!(type_name, "Toggle");
            assert_eq!(tag, "Off");
        }
        other => panic!("expected DuplicateTag, got {other:?}"),
    }
}

#[test]
fn empty_union_fails_derivation() {
    assert!(matches!(
        derive_format(&UnionSchema::<Toggle>::closed("Toggle")),
        Err(DeriveError::EmptyUnion(_))
    ));
}

#[test]
fn tags_differing_only_in_case_are_distinct() {
    let schema = UnionSchema::closed("Toggle")
        .marker("on", |v| matches!(v, Toggle::On), || Toggle::On)
        .marker("On", |v| matches!(v, Toggle::Off), || Toggle::Off);
    let codec = derive_format(&schema).expect("codec");
    assert_eq!(
        codec.decode(&json!({"$variant": "on"})).expect("decoded"),
        Toggle::On
    );
    assert_eq!(
        codec.decode(&json!({"$variant": "On"})).expect("decoded"),
        Toggle::Off
    );
}

#[test]
fn error_display_matrix() {
    let cases: Vec<(DeriveError, &str)> = vec![
        (
            DeriveError::NotClosed("Toggle".into()),
            "union type \"Toggle\" is not declared closed",
        ),
        (
            DeriveError::EmptyUnion("Toggle".into()),
            "union type \"Toggle\" declares no alternatives",
        ),
        (
            DeriveError::InvalidAlts {
                type_name: "Toggle".into(),
                alts: vec!["DimA".into(), "DimB".into()],
            },
            "union type \"Toggle\" has non-variant alternatives: DimA, DimB",
        ),
        (
            DeriveError::DuplicateTag {
                type_name: "Toggle".into(),
                tag: "On".into(),
            },
            "union type \"Toggle\" declares duplicate variant tag \"On\"",
        ),
    ];
    for (err, display) in cases {
        assert_eq!(err.to_string(), display);
    }
}
