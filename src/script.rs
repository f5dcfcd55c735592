//! Multisignature redeem-script encoding and decoding
//!
//! A redeem script is `OP_m ‖ (push-len ‖ pubkey)* ‖ OP_n ‖ OP_CHECKMULTISIG`
//! with m and n carried by the small-integer opcodes OP_1..OP_16. Decoding
//! runs an explicit four-state scanner over a byte cursor, so termination is
//! auditable and malformed scripts fail with a typed error instead of
//! recursing.

use crate::constants::{
    MAX_MULTISIG_KEYS, MAX_PUSH_OPCODE, OP_CHECKMULTISIG, OP_SMALLNUM_BASE, P2SH_VERSION,
};
use crate::error::{CodecError, Result};
use crate::keys;
use crate::types::{Multisig, RedeemScriptInfo};

/// Scanner states for [`decode_redeem_script`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Initial: the first byte carries m
    ReadM,
    /// The next byte is the length of the upcoming key
    ReadKeyLength,
    /// Read the key of the given length, then classify the following opcode
    ReadKeyAndOpcode(usize),
    /// Terminal: m, n and all keys collected
    Done,
}

/// Encode an m-of-n redeem script over the given public keys.
///
/// Each key is emitted as a direct push: one length byte followed by the
/// key bytes. m and n must fit the single-byte opcode space (1..=16).
pub fn create_redeem_script(m: u8, public_keys: &[String]) -> Result<String> {
    if m == 0 {
        return Err(CodecError::PolicyViolation(
            "signature threshold of zero".to_string(),
        ));
    }
    if public_keys.is_empty() {
        return Err(CodecError::PolicyViolation("no public keys".to_string()));
    }
    let n = public_keys.len();
    if m > MAX_MULTISIG_KEYS || n > MAX_MULTISIG_KEYS as usize {
        return Err(CodecError::MalformedScript(format!(
            "{m}-of-{n} exceeds the OP_16 opcode range"
        )));
    }
    if m as usize > n {
        return Err(CodecError::PolicyViolation(format!(
            "threshold {m} exceeds key count {n}"
        )));
    }

    let mut script = vec![OP_SMALLNUM_BASE + m];
    for key in public_keys {
        let bytes = hex::decode(key)
            .map_err(|e| CodecError::MalformedInput(format!("public key hex: {e}")))?;
        if bytes.is_empty() || bytes.len() > MAX_PUSH_OPCODE as usize {
            return Err(CodecError::MalformedScript(format!(
                "key of {} bytes does not fit a direct push",
                bytes.len()
            )));
        }
        script.push(bytes.len() as u8);
        script.extend_from_slice(&bytes);
    }
    script.push(OP_SMALLNUM_BASE + n as u8);
    script.push(OP_CHECKMULTISIG);
    Ok(hex::encode(script))
}

/// Decode a redeem script back into m, n and the embedded keys.
pub fn decode_redeem_script(script_hex: &str) -> Result<RedeemScriptInfo> {
    if script_hex.len() % 2 != 0 {
        return Err(CodecError::MalformedInput(
            "odd number of hex characters".to_string(),
        ));
    }
    let script = hex::decode(script_hex)
        .map_err(|e| CodecError::MalformedInput(format!("script hex: {e}")))?;

    let mut cursor = 0usize;
    let mut state = ScanState::ReadM;
    let mut m = 0u8;
    let mut n = 0u8;
    let mut keys = Vec::new();

    loop {
        match state {
            ScanState::ReadM => {
                let op = *script
                    .get(cursor)
                    .ok_or_else(|| CodecError::MalformedScript("empty script".to_string()))?;
                if !(OP_SMALLNUM_BASE + 1..=OP_SMALLNUM_BASE + MAX_MULTISIG_KEYS).contains(&op) {
                    return Err(CodecError::MalformedScript(format!(
                        "threshold opcode {op:#04x} outside OP_1..OP_16"
                    )));
                }
                m = op - OP_SMALLNUM_BASE;
                cursor += 1;
                state = ScanState::ReadKeyLength;
            }
            ScanState::ReadKeyLength => {
                let len = *script.get(cursor).ok_or_else(|| {
                    CodecError::MalformedScript("script truncated before key length".to_string())
                })?;
                if len == 0 || len > MAX_PUSH_OPCODE {
                    return Err(CodecError::MalformedScript(format!(
                        "key length {len:#04x} outside the direct-push range"
                    )));
                }
                cursor += 1;
                state = ScanState::ReadKeyAndOpcode(len as usize);
            }
            ScanState::ReadKeyAndOpcode(len) => {
                if cursor + len > script.len() {
                    return Err(CodecError::MalformedScript(
                        "script truncated inside a key".to_string(),
                    ));
                }
                keys.push(hex::encode(&script[cursor..cursor + len]));
                cursor += len;

                let next_op = *script.get(cursor).ok_or_else(|| {
                    CodecError::MalformedScript("script truncated after key".to_string())
                })?;
                if (1..=MAX_PUSH_OPCODE).contains(&next_op) {
                    // Another key follows; the byte is re-read as its length
                    state = ScanState::ReadKeyLength;
                } else if (OP_SMALLNUM_BASE + 2..=OP_SMALLNUM_BASE + MAX_MULTISIG_KEYS)
                    .contains(&next_op)
                {
                    n = next_op - OP_SMALLNUM_BASE;
                    cursor += 1;
                    let tail = *script.get(cursor).ok_or_else(|| {
                        CodecError::MalformedScript("missing OP_CHECKMULTISIG".to_string())
                    })?;
                    if tail != OP_CHECKMULTISIG {
                        return Err(CodecError::MalformedScript(format!(
                            "expected OP_CHECKMULTISIG, found {tail:#04x}"
                        )));
                    }
                    cursor += 1;
                    if cursor != script.len() {
                        return Err(CodecError::MalformedScript(
                            "trailing bytes after OP_CHECKMULTISIG".to_string(),
                        ));
                    }
                    state = ScanState::Done;
                } else {
                    return Err(CodecError::MalformedScript(format!(
                        "unrecognized opcode {next_op:#04x}"
                    )));
                }
            }
            ScanState::Done => {
                if m > n {
                    return Err(CodecError::MalformedScript(format!(
                        "threshold {m} exceeds key count {n}"
                    )));
                }
                return Ok(RedeemScriptInfo { m, n, keys });
            }
        }
    }
}

/// Build an m-of-n multisig: the redeem script plus its P2SH address.
///
/// The address hashes the serialized script bytes exactly like a public
/// key, under the script-hash version byte.
pub fn create_multisig(m: u8, public_keys: &[String]) -> Result<Multisig> {
    let redeem_script = create_redeem_script(m, public_keys)?;
    let address = keys::public_key_to_address(&redeem_script, P2SH_VERSION)?;
    Ok(Multisig {
        redeem_script,
        address,
    })
}
