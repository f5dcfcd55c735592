//! Key generation, derivation, compression and address encoding
//!
//! Curve arithmetic is delegated entirely to the secp256k1 library: scalar
//! multiplication for public-key derivation, and point construction with
//! validity checking for decompression and validation. Reconstructing a
//! point from a 33-byte encoding is where the modular square root happens;
//! an x coordinate that is not a quadratic residue surfaces as
//! [`CodecError::NotOnCurve`].

use secp256k1::constants::CURVE_ORDER;
use secp256k1::{PublicKey, Secp256k1, SecretKey};

use crate::base58;
use crate::constants::{
    COMPRESSED_PUBKEY_HEX_LENGTH, MAX_SAMPLING_ATTEMPTS, PRIVATE_KEY_HEX_LENGTH,
    UNCOMPRESSED_PUBKEY_HEX_LENGTH, WIF_VERSION_OFFSET,
};
use crate::error::{CodecError, Result};
use crate::hashes::hash160;
use crate::types::{DecompressedKey, KeySet};

/// Generate a private key uniform over `[1, n)` for curve order `n`.
///
/// Draws 32 random bytes and rejects any draw that is zero or not below
/// the curve order, so the result needs no modular reduction. Returns the
/// key as 64 zero-padded lowercase hex chars.
pub fn generate_private_key() -> Result<String> {
    for _ in 0..MAX_SAMPLING_ATTEMPTS {
        let mut candidate = [0u8; 32];
        getrandom::getrandom(&mut candidate)
            .map_err(|e| CodecError::Randomness(format!("secure random source: {e}")))?;
        // Big-endian byte comparison is numeric comparison here
        let nonzero = candidate.iter().any(|&b| b != 0);
        if nonzero && candidate < CURVE_ORDER {
            return Ok(hex::encode(candidate));
        }
    }
    Err(CodecError::Randomness(
        "rejection sampling budget exhausted; random source looks broken".to_string(),
    ))
}

/// Derive the public key `Q = k·G` for private key `k`.
///
/// Returns `04 ‖ x ‖ y` (130 hex chars), or the 66-char compressed form
/// when `compressed` is set.
pub fn derive_public_key(private_key: &str, compressed: bool) -> Result<String> {
    if private_key.len() != PRIVATE_KEY_HEX_LENGTH {
        return Err(CodecError::MalformedInput(format!(
            "private key is {} hex chars, expected {}",
            private_key.len(),
            PRIVATE_KEY_HEX_LENGTH
        )));
    }
    let bytes = hex::decode(private_key)
        .map_err(|e| CodecError::MalformedInput(format!("private key hex: {e}")))?;
    let secret = SecretKey::from_slice(&bytes)
        .map_err(|e| CodecError::MalformedInput(format!("private key: {e}")))?;
    let secp = Secp256k1::new();
    let point = PublicKey::from_secret_key(&secp, &secret);
    let uncompressed = hex::encode(point.serialize_uncompressed());
    if compressed {
        compress_public_key(&uncompressed)
    } else {
        Ok(uncompressed)
    }
}

/// Compress an uncompressed public key: `02`/`03` by y parity, then x.
pub fn compress_public_key(public_key: &str) -> Result<String> {
    if public_key.len() != UNCOMPRESSED_PUBKEY_HEX_LENGTH || !public_key.starts_with("04") {
        return Err(CodecError::MalformedInput(
            "expected a 130 hex char uncompressed public key with 04 prefix".to_string(),
        ));
    }
    let x = &public_key[2..66];
    let y_parity = public_key
        .chars()
        .last()
        .and_then(|c| c.to_digit(16))
        .ok_or_else(|| CodecError::MalformedInput("non-hex y coordinate".to_string()))?;
    let prefix = if y_parity % 2 == 0 { "02" } else { "03" };
    Ok(format!("{prefix}{}", x.to_ascii_lowercase()))
}

/// Reconstruct the full curve point from a compressed public key.
///
/// The y coordinate is recovered as the modular square root of
/// `x³ + b (mod p)` with the parity selected by the prefix. An x that has
/// no square root is not a curve coordinate and yields `NotOnCurve`.
pub fn decompress_public_key(public_key: &str) -> Result<DecompressedKey> {
    if public_key.len() != COMPRESSED_PUBKEY_HEX_LENGTH {
        return Err(CodecError::MalformedInput(format!(
            "compressed public key is {} hex chars, expected {}",
            public_key.len(),
            COMPRESSED_PUBKEY_HEX_LENGTH
        )));
    }
    if !public_key.starts_with("02") && !public_key.starts_with("03") {
        return Err(CodecError::MalformedInput(
            "compressed public key prefix must be 02 or 03".to_string(),
        ));
    }
    let bytes = hex::decode(public_key)
        .map_err(|e| CodecError::MalformedInput(format!("public key hex: {e}")))?;
    let point = PublicKey::from_slice(&bytes).map_err(|_| {
        CodecError::NotOnCurve(format!(
            "x coordinate {} has no square root on the curve",
            &public_key[2..]
        ))
    })?;
    let uncompressed = hex::encode(point.serialize_uncompressed());
    Ok(DecompressedKey {
        x: uncompressed[2..66].to_string(),
        y: uncompressed[66..].to_string(),
        point,
        uncompressed,
    })
}

/// Import a public key in either serialized form, returning the
/// uncompressed hex. `04` keys pass through untreated; `02`/`03` keys are
/// decompressed; any other prefix is malformed.
pub fn import_public_key(public_key: &str) -> Result<String> {
    match public_key.get(..2) {
        Some("04") => Ok(public_key.to_ascii_lowercase()),
        Some("02") | Some("03") => Ok(decompress_public_key(public_key)?.uncompressed),
        _ => Err(CodecError::MalformedInput(
            "public key prefix must be 02, 03 or 04".to_string(),
        )),
    }
}

/// Check whether `public_key` describes a point on the curve.
///
/// 66 hex chars are validated by decompression, 130 by direct point
/// construction; any other length is invalid.
pub fn validate_public_key(public_key: &str) -> bool {
    match public_key.len() {
        COMPRESSED_PUBKEY_HEX_LENGTH => decompress_public_key(public_key).is_ok(),
        UNCOMPRESSED_PUBKEY_HEX_LENGTH => match hex::decode(public_key) {
            Ok(bytes) => PublicKey::from_slice(&bytes).is_ok(),
            Err(_) => false,
        },
        _ => false,
    }
}

/// Encode `version ‖ hash160` as a Base58Check address.
pub fn hash160_to_address(hash160_hex: &str, version: u8) -> Result<String> {
    let payload = format!("{version:02x}{}", hash160_hex.to_ascii_lowercase());
    base58::encode_checksum(&payload)
}

/// Derive the address of a public key: Base58Check of its hash160.
///
/// The hashing step takes whatever byte string it is given, which is how
/// P2SH addresses are built from serialized scripts.
pub fn public_key_to_address(public_key: &str, version: u8) -> Result<String> {
    let bytes = hex::decode(public_key)
        .map_err(|e| CodecError::MalformedInput(format!("public key hex: {e}")))?;
    hash160_to_address(&hex::encode(hash160(&bytes)), version)
}

/// Derive the address directly from a private key.
pub fn private_key_to_address(private_key: &str, version: u8) -> Result<String> {
    let public_key = derive_public_key(private_key, false)?;
    public_key_to_address(&public_key, version)
}

/// Encode a private key in Wallet Import Format.
///
/// The WIF version byte is the address version plus `0x80`; address
/// versions above `0x7f` would overflow the single-byte prefix and are
/// rejected.
pub fn private_key_to_wif(private_key: &str, version: u8) -> Result<String> {
    if version > u8::MAX - WIF_VERSION_OFFSET {
        return Err(CodecError::InvalidVersion(format!(
            "address version {version:#04x} overflows the single-byte WIF prefix"
        )));
    }
    hash160_to_address(private_key, version + WIF_VERSION_OFFSET)
}

/// Decode a WIF string to hex.
///
/// The version byte and trailing checksum are retained in the returned
/// hex; callers trim both to recover the 32-byte key.
pub fn wif_to_private_key(wif: &str) -> Result<String> {
    base58::decode(wif)
}

/// Generate a private key and its uncompressed public key.
pub fn generate_key_pair() -> Result<(String, String)> {
    let private_key = generate_private_key()?;
    let public_key = derive_public_key(&private_key, false)?;
    Ok((private_key, public_key))
}

/// Generate a full key set: private key, public key, WIF and address.
///
/// The just-derived address is revalidated with [`base58::verify_address`]
/// and the whole key pair regenerated if that ever fails. For a correct
/// curve implementation the first iteration always succeeds; the loop
/// shares the sampling attempt budget so it cannot spin forever.
pub fn generate_key_set(version: u8) -> Result<KeySet> {
    for _ in 0..MAX_SAMPLING_ATTEMPTS {
        let (private_key, public_key) = generate_key_pair()?;
        let wif = private_key_to_wif(&private_key, version)?;
        let address = public_key_to_address(&public_key, version)?;
        if base58::verify_address(&address, version).is_ok() {
            return Ok(KeySet {
                private_key,
                public_key,
                wif,
                address,
            });
        }
    }
    Err(CodecError::Randomness(
        "key set generation budget exhausted".to_string(),
    ))
}
