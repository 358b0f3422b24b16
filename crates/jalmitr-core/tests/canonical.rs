use jalmitr_core::{canonical, sha256_hex};
use proptest::prelude::*;
use serde_json::json;

#[test]
fn stable_json_bytes_are_key_order_deterministic() {
    let a = json!({"z": 2, "a": 1, "nested": {"y": true, "b": false}});
    let b = json!({"nested": {"b": false, "y": true}, "a": 1, "z": 2});
    let ba = canonical::stable_json_bytes(&a).expect("stable json a");
    let bb = canonical::stable_json_bytes(&b).expect("stable json b");
    assert_eq!(ba, bb);
}

#[test]
fn stable_json_string_matches_bytes() {
    let value = json!({"status": "fail", "parameter": "TDS"});
    let text = canonical::stable_json_string(&value).expect("string");
    let bytes = canonical::stable_json_bytes(&value).expect("bytes");
    assert_eq!(text.as_bytes(), bytes.as_slice());
    assert_eq!(text, r#"{"parameter":"TDS","status":"fail"}"#);
}

#[test]
fn sha256_matches_known_vector() {
    assert_eq!(
        sha256_hex(b"abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

proptest! {
    #[test]
    fn stable_hash_is_independent_of_key_order(a in "[a-z]{1,12}", b in "[a-z]{1,12}", av in any::<u32>(), bv in any::<u32>()) {
        prop_assume!(a != b);
        let left = json!({a.clone(): av, b.clone(): bv});
        let right = json!({b: bv, a: av});
        prop_assert_eq!(
            canonical::stable_json_hash_hex(&left).expect("left"),
            canonical::stable_json_hash_hex(&right).expect("right")
        );
    }
}
