//! Tests for redeem-script encoding, the decode scanner, and multisig

use address_codec::*;

fn three_keys() -> Vec<String> {
    vec![
        "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798".to_string(),
        "0250863ad64a87ae8a2fe83c1af1a8403cb53f53e486d8511dad8a04887e5b2352".to_string(),
        "0379be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798".to_string(),
    ]
}

#[test]
fn test_two_of_three_script_layout() {
    let keys = three_keys();
    let script = script::create_redeem_script(2, &keys).unwrap();
    // OP_2, then 33-byte pushes, then OP_3 OP_CHECKMULTISIG
    assert!(script.starts_with("52"));
    assert!(script.ends_with("53ae"));
    // 1 + 3*(1 + 33) + 2 bytes
    assert_eq!(script.len(), 2 * (1 + 3 * 34 + 2));
    assert_eq!(&script[2..4], "21");
}

#[test]
fn test_decode_round_trip_preserves_key_order() {
    let keys = three_keys();
    let script = script::create_redeem_script(2, &keys).unwrap();
    let info = script::decode_redeem_script(&script).unwrap();
    assert_eq!(info.m, 2);
    assert_eq!(info.n, 3);
    assert_eq!(info.keys, keys);
}

#[test]
fn test_round_trip_mixed_key_lengths() {
    // A 65-byte key in the middle of 33-byte keys
    let keys = vec![
        "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798".to_string(),
        "0450863ad64a87ae8a2fe83c1af1a8403cb53f53e486d8511dad8a04887e5b2352\
         2cd470243453a299fa9e77237716103abc11a1df38855ed6f2ee187e9c582ba6"
            .to_string(),
        "0250863ad64a87ae8a2fe83c1af1a8403cb53f53e486d8511dad8a04887e5b2352".to_string(),
    ];
    let script = script::create_redeem_script(3, &keys).unwrap();
    let info = script::decode_redeem_script(&script).unwrap();
    assert_eq!((info.m, info.n), (3, 3));
    assert_eq!(info.keys, keys);
}

#[test]
fn test_encode_policy_violations() {
    let keys = three_keys();
    assert!(matches!(
        script::create_redeem_script(0, &keys).unwrap_err(),
        CodecError::PolicyViolation(_)
    ));
    assert!(matches!(
        script::create_redeem_script(2, &[]).unwrap_err(),
        CodecError::PolicyViolation(_)
    ));
    assert!(matches!(
        script::create_redeem_script(4, &keys).unwrap_err(),
        CodecError::PolicyViolation(_)
    ));
}

#[test]
fn test_encode_rejects_opcode_overflow() {
    let keys: Vec<String> = (0..17)
        .map(|_| "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798".to_string())
        .collect();
    assert!(matches!(
        script::create_redeem_script(2, &keys).unwrap_err(),
        CodecError::MalformedScript(_)
    ));
    assert!(matches!(
        script::create_redeem_script(17, &keys[..3].to_vec()).unwrap_err(),
        CodecError::MalformedScript(_)
    ));
}

#[test]
fn test_decode_rejects_odd_length_hex() {
    assert!(matches!(
        script::decode_redeem_script("52a").unwrap_err(),
        CodecError::MalformedInput(_)
    ));
}

#[test]
fn test_decode_rejects_non_hex() {
    assert!(matches!(
        script::decode_redeem_script("zz").unwrap_err(),
        CodecError::MalformedInput(_)
    ));
}

#[test]
fn test_decode_rejects_bad_threshold_opcode() {
    // 0x4f is not in the OP_1..OP_16 range
    assert!(matches!(
        script::decode_redeem_script("4f21ff").unwrap_err(),
        CodecError::MalformedScript(_)
    ));
}

#[test]
fn test_decode_rejects_truncated_key() {
    // OP_2, then a 33-byte push with only two bytes present
    assert!(matches!(
        script::decode_redeem_script("5221abcd").unwrap_err(),
        CodecError::MalformedScript(_)
    ));
}

#[test]
fn test_decode_rejects_unrecognized_opcode_after_key() {
    // OP_2, 1-byte key, then 0xff where a push or OP_n belongs
    assert!(matches!(
        script::decode_redeem_script("5201abff").unwrap_err(),
        CodecError::MalformedScript(_)
    ));
}

#[test]
fn test_decode_rejects_missing_checkmultisig() {
    let keys = three_keys();
    let script = script::create_redeem_script(2, &keys).unwrap();
    let clipped = &script[..script.len() - 2];
    assert!(matches!(
        script::decode_redeem_script(clipped).unwrap_err(),
        CodecError::MalformedScript(_)
    ));
}

#[test]
fn test_decode_rejects_trailing_garbage() {
    let keys = three_keys();
    let script = script::create_redeem_script(2, &keys).unwrap();
    let extended = format!("{script}00");
    assert!(matches!(
        script::decode_redeem_script(&extended).unwrap_err(),
        CodecError::MalformedScript(_)
    ));
}

#[test]
fn test_create_multisig_builds_p2sh_address() {
    let keys = three_keys();
    let multisig = script::create_multisig(2, &keys).unwrap();
    assert!(multisig.redeem_script.starts_with("52"));
    assert!(multisig.redeem_script.ends_with("53ae"));
    // Script-hash version 0x05 puts the address in the '3' range
    assert!(multisig.address.starts_with('3'));
    base58::verify_address(&multisig.address, P2SH_VERSION).unwrap();
    // The address is a pure function of the script bytes
    let again = keys::public_key_to_address(&multisig.redeem_script, P2SH_VERSION).unwrap();
    assert_eq!(again, multisig.address);
}
