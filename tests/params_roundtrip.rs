use merkle_drop::params::{
    deserialize_params, serialize_params, CommitmentParams, CommitmentParamsBuilder, HashFamily,
    ParamsError, MAX_LEAF_CAP,
};
use proptest::prelude::*;

fn arb_params() -> impl Strategy<Value = CommitmentParams> {
    (
        prop_oneof![Just(HashFamily::Keccak256), Just(HashFamily::Blake2s)],
        1u64..=MAX_LEAF_CAP,
    )
        .prop_map(|(hash, max_leaves)| {
            let mut builder = CommitmentParamsBuilder::for_family(hash);
            builder.max_leaves = max_leaves;
            builder.build().expect("valid randomized params")
        })
}

#[test]
fn canonical_roundtrip() {
    let params = CommitmentParamsBuilder::new().build().expect("valid");
    let json = serialize_params(&params).expect("serialise");
    let decoded = deserialize_params(&json).expect("deserialise");
    assert_eq!(params, decoded);
}

#[test]
fn default_params_json() {
    let params = CommitmentParams::default();
    insta::assert_snapshot!(serialize_params(&params).unwrap(), @r###"
    {
      "hash": "Keccak256",
      "max_leaves": 4294967295
    }
    "###);
}

#[test]
fn invalid_leaf_cap() {
    let mut builder = CommitmentParamsBuilder::new();
    builder.max_leaves = 0;
    let err = builder.build().unwrap_err();
    assert!(matches!(err, ParamsError::LeafCapZero));
}

#[test]
fn deserialise_revalidates() {
    let err = deserialize_params(r#"{"hash":"Blake2s","max_leaves":0}"#).unwrap_err();
    assert_eq!(err, ParamsError::LeafCapZero);

    let too_large = format!(r#"{{"hash":"Keccak256","max_leaves":{}}}"#, MAX_LEAF_CAP + 1);
    assert!(matches!(
        deserialize_params(&too_large),
        Err(ParamsError::LeafCapTooLarge { .. })
    ));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let err = deserialize_params(r#"{"hash":"Sha1","max_leaves":4}"#).unwrap_err();
    assert!(matches!(err, ParamsError::SerializationError { .. }));
}

proptest! {
    #[test]
    fn prop_roundtrip_idempotent(params in arb_params()) {
        let json = serialize_params(&params).unwrap();
        let decoded = deserialize_params(&json).unwrap();
        prop_assert_eq!(params, decoded);
        let json_again = serialize_params(&decoded).unwrap();
        prop_assert_eq!(json, json_again);
    }
}
