//! Core data types for the encoding layer

use serde::{Deserialize, Serialize};

/// A freshly generated key set: every serialized form of one key pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySet {
    pub private_key: String,
    pub public_key: String,
    pub wif: String,
    pub address: String,
}

/// Result of reconstructing a full curve point from a compressed key
///
/// Not serde-serializable because it carries the live curve point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecompressedKey {
    /// x coordinate, 64 hex chars
    pub x: String,
    /// y coordinate, 64 hex chars
    pub y: String,
    /// The reconstructed curve point
    pub point: secp256k1::PublicKey,
    /// `04 ‖ x ‖ y`, 130 hex chars
    pub uncompressed: String,
}

/// Decoded m-of-n redeem script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedeemScriptInfo {
    /// Required signature count
    pub m: u8,
    /// Total key count
    pub n: u8,
    /// Embedded public keys, hex, in script order
    pub keys: Vec<String>,
}

/// A multisig descriptor: the redeem script and its P2SH address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Multisig {
    pub redeem_script: String,
    pub address: String,
}

/// r and s extracted from a DER-encoded signature, hex, unvalidated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerSignature {
    pub r: String,
    pub s: String,
}

/// Decoded signature script of one transaction input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureScript {
    /// Whitespace-separated assembly: `OP_0 <sig>.. <redeemScript>`
    pub asm: String,
}

/// Transaction input as seen by the partial-signature validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInput {
    pub script_sig: SignatureScript,
}

/// Transaction output; only its presence matters to the validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutput {
    pub value: i64,
    pub script_pubkey: String,
}

/// Decoded transaction under partial-signature validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
}

/// Successful validation of one partially signed input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedInput {
    /// Candidate signatures, hex, in scriptSig order
    pub signatures: Vec<String>,
    /// The embedded redeem script, hex
    pub redeem_script: String,
    /// Decode of the embedded redeem script
    pub decoded: RedeemScriptInfo,
}

/// Per-input validation results plus the transaction they came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionValidation {
    pub inputs: Vec<ValidatedInput>,
    pub transaction: Transaction,
}
