//! Double-SHA256 and hash160 digest helpers

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// hash256: SHA256(SHA256(bytes))
pub fn hash256(bytes: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(bytes);
    let second = Sha256::digest(first);
    let mut out = [0u8; 32];
    out.copy_from_slice(&second);
    out
}

/// hash160: RIPEMD160(SHA256(bytes)), the 20-byte address payload
pub fn hash160(bytes: &[u8]) -> [u8; 20] {
    let sha = Sha256::digest(bytes);
    let ripe = Ripemd160::digest(sha);
    let mut out = [0u8; 20];
    out.copy_from_slice(&ripe);
    out
}
