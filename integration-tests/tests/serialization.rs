use callsig_core::{Spelling, describe};
use integration_tests::fixtures::{AnyFunctor, Clz};
use serde_json::json;

#[test]
fn spellings_serialize_by_name() {
    let json =
        serde_json::to_string(&Spelling::ConstMemberFnPtr).expect("Serializing should succeed");
    assert_eq!(json, "\"ConstMemberFnPtr\"");

    let spelling: Spelling =
        serde_json::from_str("\"GenericCallable\"").expect("Deserializing should succeed");
    assert_eq!(spelling, Spelling::GenericCallable);
}

#[test]
fn all_spellings_survive_json() {
    let json = serde_json::to_value(Spelling::ALL).expect("Serializing should succeed");
    let spellings: Vec<Spelling> =
        serde_json::from_value(json).expect("Deserializing should succeed");
    assert_eq!(spellings, Spelling::ALL);
}

#[test]
fn descriptors_serialize_as_objects() {
    let value = serde_json::to_value(describe::<fn(&mut Clz, i32, i32) -> i32>())
        .expect("Serializing should succeed");
    assert_eq!(value, json!({ "kind": "MemberFnPtr", "output": "i32" }));

    let value = serde_json::to_value(describe::<AnyFunctor>()).expect("Serializing should succeed");
    assert_eq!(value, json!({ "kind": "GenericCallable", "output": "i32" }));
}

#[test]
fn unknown_spellings_are_rejected() {
    let result = serde_json::from_str::<Spelling>("\"Lambda\"");
    assert!(result.is_err());
}
