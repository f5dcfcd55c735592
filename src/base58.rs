//! Base58Check: base58 with an appended double-SHA256 integrity checksum

use crate::bignum;
use crate::constants::{ADDRESS_HEX_LENGTH, CHECKSUM_HEX_LENGTH};
use crate::error::{CodecError, Result};
use crate::hashes::hash256;

/// Append the 4-byte hash256 checksum to `hex` and encode the whole
/// payload in base58.
pub fn encode_checksum(hex: &str) -> Result<String> {
    let bytes = hex::decode(hex)
        .map_err(|e| CodecError::MalformedInput(format!("payload hex: {e}")))?;
    let checksum = hash256(&bytes);
    let mut payload = hex.to_ascii_lowercase();
    payload.push_str(&hex::encode(&checksum[..4]));
    bignum::hex_to_base58(&payload)
}

/// Decode a Base58Check string back to hex.
///
/// The checksum bytes remain part of the returned hex; callers are
/// responsible for validating and trimming them.
pub fn decode(base58: &str) -> Result<String> {
    bignum::base58_to_hex(base58)
}

/// Verify a Base58Check address: exactly 25 decoded bytes, version byte
/// no greater than `max_version`, and a matching trailing checksum.
pub fn verify_address(address: &str, max_version: u8) -> Result<()> {
    let hex = bignum::base58_to_hex(address)?;
    if hex.len() != ADDRESS_HEX_LENGTH {
        return Err(CodecError::MalformedInput(format!(
            "address decodes to {} hex chars, expected {}",
            hex.len(),
            ADDRESS_HEX_LENGTH
        )));
    }
    // The decoded hex is our own output, so the parse cannot fail
    let version = u8::from_str_radix(&hex[..2], 16)
        .map_err(|e| CodecError::MalformedInput(format!("version byte: {e}")))?;
    if version > max_version {
        return Err(CodecError::InvalidVersion(format!(
            "version {version:#04x} exceeds maximum {max_version:#04x}"
        )));
    }
    let payload = &hex[..ADDRESS_HEX_LENGTH - CHECKSUM_HEX_LENGTH];
    let payload_bytes = hex::decode(payload)
        .map_err(|e| CodecError::MalformedInput(format!("address payload: {e}")))?;
    let expected = hex::encode(&hash256(&payload_bytes)[..4]);
    if expected != hex[ADDRESS_HEX_LENGTH - CHECKSUM_HEX_LENGTH..] {
        return Err(CodecError::InvalidChecksum(format!(
            "checksum {} does not match computed {expected}",
            &hex[ADDRESS_HEX_LENGTH - CHECKSUM_HEX_LENGTH..]
        )));
    }
    Ok(())
}
