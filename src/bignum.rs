//! Arbitrary-precision base conversion for hex, decimal and base58
//!
//! The codec works on digit vectors rather than machine words, so values are
//! unbounded. Base58 carries the Bitcoin leading-zero convention: every
//! leading zero byte of the binary value is represented by one leading `'1'`
//! character, outside the positional part of the encoding.

use crate::constants::BASE58_ALPHABET;
use crate::error::{CodecError, Result};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Re-express big-endian `digits` (values `< from`) in base `to`.
///
/// Returns big-endian digits with no leading zeros; the value zero is the
/// empty vector.
fn change_base(digits: &[u8], from: u32, to: u32) -> Vec<u8> {
    // Little-endian accumulator in base `to`; each input digit performs
    // acc = acc * from + digit with carry propagation.
    let mut acc: Vec<u32> = Vec::new();
    for &digit in digits {
        let mut carry = digit as u32;
        for place in acc.iter_mut() {
            let value = *place * from + carry;
            *place = value % to;
            carry = value / to;
        }
        while carry > 0 {
            acc.push(carry % to);
            carry /= to;
        }
    }
    acc.iter().rev().map(|&d| d as u8).collect()
}

fn decimal_digits(decimal: &str) -> Result<Vec<u8>> {
    if decimal.is_empty() {
        return Err(CodecError::MalformedInput("empty decimal string".to_string()));
    }
    decimal
        .chars()
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as u8)
                .ok_or_else(|| CodecError::MalformedInput(format!("non-decimal character '{c}'")))
        })
        .collect()
}

fn hex_digits(hex: &str) -> Result<Vec<u8>> {
    hex.chars()
        .map(|c| {
            c.to_digit(16)
                .map(|d| d as u8)
                .ok_or_else(|| CodecError::MalformedInput(format!("non-hex character '{c}'")))
        })
        .collect()
}

/// Convert a decimal digit string to lowercase hex, no leading zeros.
pub fn decimal_to_hex(decimal: &str) -> Result<String> {
    let digits = change_base(&decimal_digits(decimal)?, 10, 16);
    if digits.is_empty() {
        return Ok("0".to_string());
    }
    Ok(digits.iter().map(|&d| HEX_DIGITS[d as usize] as char).collect())
}

/// Convert a hex string to its decimal digit string.
pub fn hex_to_decimal(hex: &str) -> Result<String> {
    if hex.is_empty() {
        return Err(CodecError::MalformedInput("empty hex string".to_string()));
    }
    let digits = change_base(&hex_digits(hex)?, 16, 10);
    if digits.is_empty() {
        return Ok("0".to_string());
    }
    Ok(digits.iter().map(|&d| (b'0' + d) as char).collect())
}

/// Decode a base58 string to hex.
///
/// Accumulates `acc = acc * 58 + digit` over the canonical alphabet, then
/// re-prepends one zero byte (`"00"`) for every leading `'1'` of the input
/// and left-pads a single `'0'` if the hex length comes out odd.
pub fn base58_to_hex(base58: &str) -> Result<String> {
    let mut digits = Vec::with_capacity(base58.len());
    for c in base58.chars() {
        let position = BASE58_ALPHABET
            .iter()
            .position(|&a| a as char == c)
            .ok_or_else(|| CodecError::MalformedInput(format!("non-base58 character '{c}'")))?;
        digits.push(position as u8);
    }
    let mut hex: String = change_base(&digits, 58, 16)
        .iter()
        .map(|&d| HEX_DIGITS[d as usize] as char)
        .collect();
    for c in base58.chars() {
        if c != '1' {
            break;
        }
        hex.insert_str(0, "00");
    }
    if hex.len() % 2 != 0 {
        hex.insert(0, '0');
    }
    Ok(hex)
}

/// Encode a hex string in base58.
///
/// Callers pass even-length, byte-aligned hex: leading zeros are only
/// recognized as `"00"` pairs, each contributing one leading `'1'`.
pub fn hex_to_base58(hex: &str) -> Result<String> {
    let digits = hex_digits(hex)?;
    let mut encoded = String::new();
    let bytes = hex.as_bytes();
    let mut i = 0;
    while i + 1 < bytes.len() && bytes[i] == b'0' && bytes[i + 1] == b'0' {
        encoded.push('1');
        i += 2;
    }
    for d in change_base(&digits, 16, 58) {
        encoded.push(BASE58_ALPHABET[d as usize] as char);
    }
    Ok(encoded)
}
