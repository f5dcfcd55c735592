//! Tests for Base58Check encoding, decoding and address verification

use address_codec::*;

#[test]
fn test_encode_checksum_round_trip_retains_payload() {
    let payload = "00f54a5851e9372b87810a8e60cdd2e7cfd80b6e31";
    let encoded = base58::encode_checksum(payload).unwrap();
    let decoded = base58::decode(&encoded).unwrap();
    // Decoded hex is the payload plus a 4-byte checksum
    assert_eq!(&decoded[..payload.len()], payload);
    assert_eq!(decoded.len(), payload.len() + CHECKSUM_HEX_LENGTH);
    // And the trailing checksum is the real hash256 of the payload
    let expected = hex::encode(&hashes::hash256(&hex::decode(payload).unwrap())[..4]);
    assert_eq!(&decoded[payload.len()..], expected);
}

#[test]
fn test_classic_hash160_address() {
    let address = base58::encode_checksum("00010966776006953d5567439e5e39f86a0d273bee").unwrap();
    assert_eq!(address, "16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM");
    base58::verify_address(&address, 0x00).unwrap();
}

#[test]
fn test_leading_zero_bytes_become_ones() {
    // Version 0 over an all-zero hash160: 21 zero bytes, so 21 leading '1'
    // characters before the checksum-derived suffix
    let payload = "00".repeat(21);
    let address = base58::encode_checksum(&payload).unwrap();
    assert!(address.starts_with(&"1".repeat(21)));
    assert_ne!(address.chars().nth(21), Some('1'));
    assert_eq!(address, "1111111111111111111114oLvT2");
    base58::verify_address(&address, 0x00).unwrap();
}

#[test]
fn test_verify_address_rejects_tampered_checksum() {
    // Valid address with its final character changed
    let err = base58::verify_address("16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvN", 0x00).unwrap_err();
    assert!(matches!(err, CodecError::InvalidChecksum(_)));
}

#[test]
fn test_verify_address_rejects_excess_version() {
    // Version 0x05 address against a maximum of 0x04
    let address = base58::encode_checksum(&format!("05{}", "ab".repeat(20))).unwrap();
    let err = base58::verify_address(&address, 0x04).unwrap_err();
    assert!(matches!(err, CodecError::InvalidVersion(_)));
    base58::verify_address(&address, 0x05).unwrap();
}

#[test]
fn test_verify_address_rejects_wrong_length() {
    // A WIF string decodes to 38 bytes, not 25
    let err = base58::verify_address(
        "5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTJ",
        0xff,
    )
    .unwrap_err();
    assert!(matches!(err, CodecError::MalformedInput(_)));
}

#[test]
fn test_verify_address_rejects_non_base58() {
    let err = base58::verify_address("16UwLL9Risc3QfPqBUvKofHmBQ7wMtjv0", 0x00).unwrap_err();
    assert!(matches!(err, CodecError::MalformedInput(_)));
}

#[test]
fn test_decode_is_case_exact() {
    // Base58 is case sensitive; swapping case changes the value entirely
    let a = base58::decode("16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM").unwrap();
    let b = base58::decode("16UWLL9Risc3QfPqBUvKofHmBQ7wMtjvM").unwrap();
    assert_ne!(a, b);
}
