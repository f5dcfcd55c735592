//! # Address-Codec
//!
//! Address and key encoding layer for a secp256k1-based cryptocurrency:
//! conversion between raw elliptic-curve key material and the textual and
//! binary formats used on the wire and in user-facing addresses.
//!
//! ## Architecture
//!
//! The crate is layered, leaves first:
//! - `bignum` - arbitrary-precision base conversion (hex, decimal, base58)
//! - `base58` - Base58Check with checksum and leading-zero preservation
//! - `keys` - key generation, WIF, compression/decompression, addresses
//! - `script` - multisignature redeem-script encode/decode
//! - `validate` - structural validation of partially signed inputs
//!
//! Elliptic-curve arithmetic and hashing are consumed as collaborators
//! (the secp256k1, sha2 and ripemd crates); nothing here reimplements
//! curve or digest internals.
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: everything is a deterministic transform over its
//!    inputs, apart from the secure random draw behind key generation
//! 2. **Typed Failures**: every failure mode is a distinguishable
//!    [`CodecError`] variant, never a silent boolean
//! 3. **Exact Version Pinning**: consensus-critical crypto dependencies are
//!    pinned to exact versions
//!
//! ## Usage
//!
//! ```rust
//! use address_codec::AddressCodec;
//!
//! let codec = AddressCodec::new();
//! let address = codec
//!     .hash160_to_address("010966776006953d5567439e5e39f86a0d273bee", 0x00)
//!     .unwrap();
//! assert_eq!(address, "16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM");
//! codec.verify_address(&address, 0x00).unwrap();
//! ```

pub mod base58;
pub mod bignum;
pub mod constants;
pub mod error;
pub mod hashes;
pub mod keys;
pub mod script;
pub mod types;
pub mod validate;

// Re-export commonly used types
pub use constants::*;
pub use error::{CodecError, Result};
pub use types::*;

/// Main encoding facade
///
/// A thin, stateless front over the codec modules, for callers that prefer
/// one entry point over reaching into individual modules.
///
/// # Examples
///
/// ```
/// use address_codec::AddressCodec;
///
/// let codec = AddressCodec::new();
/// let key_set = codec.generate_key_set(0x00).unwrap();
/// assert_eq!(key_set.private_key.len(), 64);
/// codec.verify_address(&key_set.address, 0x00).unwrap();
/// ```
pub struct AddressCodec;

impl AddressCodec {
    /// Create a new codec instance
    pub fn new() -> Self {
        Self
    }

    /// Encode `hex` with an appended 4-byte double-SHA256 checksum
    pub fn encode_checksum(&self, hex: &str) -> Result<String> {
        base58::encode_checksum(hex)
    }

    /// Decode a Base58Check string to hex, checksum bytes retained
    pub fn decode_base58(&self, encoded: &str) -> Result<String> {
        base58::decode(encoded)
    }

    /// Verify an address: 25 decoded bytes, permitted version, valid checksum
    ///
    /// # Examples
    ///
    /// ```
    /// use address_codec::AddressCodec;
    ///
    /// let codec = AddressCodec::new();
    /// codec
    ///     .verify_address("16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM", 0x00)
    ///     .unwrap();
    ///
    /// // A single tampered character breaks the checksum
    /// assert!(codec
    ///     .verify_address("16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvN", 0x00)
    ///     .is_err());
    /// ```
    pub fn verify_address(&self, address: &str, max_version: u8) -> Result<()> {
        base58::verify_address(address, max_version)
    }

    /// Generate a private key uniform over `[1, curve_order)`
    pub fn generate_private_key(&self) -> Result<String> {
        keys::generate_private_key()
    }

    /// Derive the public key for a private key
    ///
    /// # Examples
    ///
    /// ```
    /// use address_codec::AddressCodec;
    ///
    /// let codec = AddressCodec::new();
    /// // Private key 1 maps to the generator point itself
    /// let generator = codec
    ///     .derive_public_key(
    ///         "0000000000000000000000000000000000000000000000000000000000000001",
    ///         true,
    ///     )
    ///     .unwrap();
    /// assert_eq!(
    ///     generator,
    ///     "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
    /// );
    /// ```
    pub fn derive_public_key(&self, private_key: &str, compressed: bool) -> Result<String> {
        keys::derive_public_key(private_key, compressed)
    }

    /// Compress an uncompressed public key
    pub fn compress_public_key(&self, public_key: &str) -> Result<String> {
        keys::compress_public_key(public_key)
    }

    /// Reconstruct the full point behind a compressed public key
    pub fn decompress_public_key(&self, public_key: &str) -> Result<DecompressedKey> {
        keys::decompress_public_key(public_key)
    }

    /// Import a public key in either form, yielding the uncompressed hex
    pub fn import_public_key(&self, public_key: &str) -> Result<String> {
        keys::import_public_key(public_key)
    }

    /// Check whether a serialized public key describes a curve point
    pub fn validate_public_key(&self, public_key: &str) -> bool {
        keys::validate_public_key(public_key)
    }

    /// Base58Check-encode `version ‖ hash160`
    pub fn hash160_to_address(&self, hash160_hex: &str, version: u8) -> Result<String> {
        keys::hash160_to_address(hash160_hex, version)
    }

    /// Derive the address of a public key
    pub fn public_key_to_address(&self, public_key: &str, version: u8) -> Result<String> {
        keys::public_key_to_address(public_key, version)
    }

    /// Derive the address directly from a private key
    pub fn private_key_to_address(&self, private_key: &str, version: u8) -> Result<String> {
        keys::private_key_to_address(private_key, version)
    }

    /// Encode a private key in Wallet Import Format
    ///
    /// # Examples
    ///
    /// ```
    /// use address_codec::AddressCodec;
    ///
    /// let codec = AddressCodec::new();
    /// let wif = codec
    ///     .private_key_to_wif(
    ///         "0c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d",
    ///         0x00,
    ///     )
    ///     .unwrap();
    /// assert_eq!(wif, "5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTJ");
    /// ```
    pub fn private_key_to_wif(&self, private_key: &str, version: u8) -> Result<String> {
        keys::private_key_to_wif(private_key, version)
    }

    /// Decode a WIF string; version and checksum bytes are retained
    pub fn wif_to_private_key(&self, wif: &str) -> Result<String> {
        keys::wif_to_private_key(wif)
    }

    /// Generate a private key and its uncompressed public key
    pub fn generate_key_pair(&self) -> Result<(String, String)> {
        keys::generate_key_pair()
    }

    /// Generate a full key set for the given address version
    pub fn generate_key_set(&self, version: u8) -> Result<KeySet> {
        keys::generate_key_set(version)
    }

    /// Encode an m-of-n redeem script
    pub fn create_redeem_script(&self, m: u8, public_keys: &[String]) -> Result<String> {
        script::create_redeem_script(m, public_keys)
    }

    /// Decode a redeem script into m, n and the embedded keys
    ///
    /// # Examples
    ///
    /// ```
    /// use address_codec::AddressCodec;
    ///
    /// let codec = AddressCodec::new();
    /// let keys = vec![
    ///     "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798".to_string(),
    ///     "0250863ad64a87ae8a2fe83c1af1a8403cb53f53e486d8511dad8a04887e5b2352".to_string(),
    /// ];
    /// let script = codec.create_redeem_script(2, &keys).unwrap();
    /// let info = codec.decode_redeem_script(&script).unwrap();
    /// assert_eq!(info.m, 2);
    /// assert_eq!(info.n, 2);
    /// assert_eq!(info.keys, keys);
    /// ```
    pub fn decode_redeem_script(&self, script_hex: &str) -> Result<RedeemScriptInfo> {
        script::decode_redeem_script(script_hex)
    }

    /// Build a multisig descriptor: redeem script plus P2SH address
    pub fn create_multisig(&self, m: u8, public_keys: &[String]) -> Result<Multisig> {
        script::create_multisig(m, public_keys)
    }

    /// Extract r and s from a DER signature by byte offset
    pub fn decode_signature(&self, signature_hex: &str) -> Result<DerSignature> {
        validate::decode_signature(signature_hex)
    }

    /// Structurally validate one partially signed input
    pub fn validate_partially_signed_input(
        &self,
        input: &TransactionInput,
        redeem_script: &str,
    ) -> Result<ValidatedInput> {
        validate::validate_partially_signed_input(input, redeem_script)
    }

    /// Structurally validate every input of a partially signed transaction
    pub fn validate_partially_signed_transaction(
        &self,
        transaction: &Transaction,
        redeem_script: &str,
    ) -> Result<TransactionValidation> {
        validate::validate_partially_signed_transaction(transaction, redeem_script)
    }
}

impl Default for AddressCodec {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_address_derivation() {
        let codec = AddressCodec::new();
        let address = codec
            .hash160_to_address("010966776006953d5567439e5e39f86a0d273bee", 0x00)
            .unwrap();
        assert_eq!(address, "16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM");
        codec.verify_address(&address, 0x00).unwrap();
    }

    #[test]
    fn test_facade_key_set() {
        let codec = AddressCodec::new();
        let key_set = codec.generate_key_set(0x00).unwrap();
        assert_eq!(key_set.private_key.len(), PRIVATE_KEY_HEX_LENGTH);
        assert_eq!(key_set.public_key.len(), UNCOMPRESSED_PUBKEY_HEX_LENGTH);
        codec.verify_address(&key_set.address, 0x00).unwrap();
    }

    #[test]
    fn test_facade_default() {
        let codec = AddressCodec::default();
        assert!(codec.validate_public_key(
            "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        ));
    }
}
