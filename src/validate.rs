//! Partial-signature validation for multisig transaction inputs
//!
//! Validation here is structural: signatures are extracted from the
//! signature script and the embedded redeem script is checked against the
//! expected one. No cryptographic signature verification is performed;
//! that is a separately specified concern.

use crate::error::{CodecError, Result};
use crate::script;
use crate::types::{
    DerSignature, Transaction, TransactionInput, TransactionValidation, ValidatedInput,
};

/// Extract r and s from a DER-encoded signature by byte offset.
///
/// No checking is done on the validity of the numbers, only that the
/// declared lengths fit inside the input.
pub fn decode_signature(signature_hex: &str) -> Result<DerSignature> {
    let bytes = hex::decode(signature_hex)
        .map_err(|e| CodecError::MalformedInput(format!("signature hex: {e}")))?;
    // Layout: 0x30 len 0x02 r_len r 0x02 s_len s
    let r_len = *bytes
        .get(3)
        .ok_or_else(|| CodecError::MalformedInput("truncated signature".to_string()))?
        as usize;
    let r = bytes
        .get(4..4 + r_len)
        .ok_or_else(|| CodecError::MalformedInput("truncated r value".to_string()))?;
    let s_len = *bytes
        .get(5 + r_len)
        .ok_or_else(|| CodecError::MalformedInput("truncated signature".to_string()))?
        as usize;
    let s = bytes
        .get(6 + r_len..6 + r_len + s_len)
        .ok_or_else(|| CodecError::MalformedInput("truncated s value".to_string()))?;
    Ok(DerSignature {
        r: hex::encode(r),
        s: hex::encode(s),
    })
}

/// Validate one partially signed input against the expected redeem script.
///
/// The signature-script assembly is tokenized on whitespace: the first
/// token is the OP_0 placeholder and is ignored, the last token is the
/// redeem script, everything in between is a candidate signature. At
/// least one signature must be present, the embedded redeem script must
/// equal the expected one exactly, and it must decode.
pub fn validate_partially_signed_input(
    input: &TransactionInput,
    redeem_script: &str,
) -> Result<ValidatedInput> {
    let tokens: Vec<&str> = input.script_sig.asm.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(CodecError::PolicyViolation(
            "signature script carries no signatures".to_string(),
        ));
    }
    let embedded = tokens[tokens.len() - 1];
    let signatures: Vec<String> = tokens[1..tokens.len() - 1]
        .iter()
        .map(|s| s.to_string())
        .collect();
    if embedded != redeem_script {
        return Err(CodecError::PolicyViolation(
            "embedded redeem script does not match the expected one".to_string(),
        ));
    }
    let decoded = script::decode_redeem_script(embedded)?;
    Ok(ValidatedInput {
        signatures,
        redeem_script: embedded.to_string(),
        decoded,
    })
}

/// Validate every input of a partially signed transaction.
///
/// Fails immediately on a transaction with no inputs or no outputs, and
/// on the first invalid input. Success returns the per-input results plus
/// the decoded transaction.
pub fn validate_partially_signed_transaction(
    transaction: &Transaction,
    redeem_script: &str,
) -> Result<TransactionValidation> {
    if transaction.inputs.is_empty() || transaction.outputs.is_empty() {
        return Err(CodecError::PolicyViolation(
            "transaction has no inputs or no outputs".to_string(),
        ));
    }
    let mut inputs = Vec::with_capacity(transaction.inputs.len());
    for input in &transaction.inputs {
        inputs.push(validate_partially_signed_input(input, redeem_script)?);
    }
    Ok(TransactionValidation {
        inputs,
        transaction: transaction.clone(),
    })
}
