// crates/shared-kernel/tests/digest_serde.rs
use provmeta_shared_kernel::Sha1Digest;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Wrapper {
    sha1: Sha1Digest,
}

#[test]
fn serializes_as_plain_string() {
    let wrapper = Wrapper { sha1: "7d793037a0760186574b0282f2f435e7321355a7".parse().expect("valid digest") };
    let json = serde_json::to_string(&wrapper).expect("serializes");
    assert_eq!(json, r#"{"sha1":"7d793037a0760186574b0282f2f435e7321355a7"}"#);
}

#[test]
fn deserialization_validates() {
    let err = serde_json::from_str::<Wrapper>(r#"{"sha1":"not-a-digest"}"#).unwrap_err();
    assert!(err.to_string().contains("Invalid SHA-1 digest"));
}
