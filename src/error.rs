//! Error types for address and key encoding

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Invalid checksum: {0}")]
    InvalidChecksum(String),

    #[error("Invalid version byte: {0}")]
    InvalidVersion(String),

    #[error("Not on curve: {0}")]
    NotOnCurve(String),

    #[error("Malformed script: {0}")]
    MalformedScript(String),

    #[error("Policy violation: {0}")]
    PolicyViolation(String),

    #[error("Randomness failure: {0}")]
    Randomness(String),
}

pub type Result<T> = std::result::Result<T, CodecError>;
