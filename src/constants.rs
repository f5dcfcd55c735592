//! Encoding constants for Base58Check, keys, and redeem scripts

/// Base58 alphabet: 58 symbols, excluding 0, O, I and l
pub const BASE58_ALPHABET: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Hex length of a zero-padded private key (32 bytes)
pub const PRIVATE_KEY_HEX_LENGTH: usize = 64;

/// Hex length of a compressed public key: prefix byte plus x (33 bytes)
pub const COMPRESSED_PUBKEY_HEX_LENGTH: usize = 66;

/// Hex length of an uncompressed public key: prefix byte plus x and y (65 bytes)
pub const UNCOMPRESSED_PUBKEY_HEX_LENGTH: usize = 130;

/// Hex length of a decoded address: version, hash160 and checksum (25 bytes)
pub const ADDRESS_HEX_LENGTH: usize = 50;

/// Hex length of the 4-byte Base58Check checksum
pub const CHECKSUM_HEX_LENGTH: usize = 8;

/// Version byte for pay-to-script-hash addresses
pub const P2SH_VERSION: u8 = 0x05;

/// Offset added to an address version to form the WIF version byte
pub const WIF_VERSION_OFFSET: u8 = 0x80;

/// Base for the small-integer opcodes: OP_1..OP_16 = 0x51..0x60
pub const OP_SMALLNUM_BASE: u8 = 0x50;

/// OP_CHECKMULTISIG opcode terminating a redeem script
pub const OP_CHECKMULTISIG: u8 = 0xae;

/// Largest direct push opcode: 0x01..0x4b push that many bytes
pub const MAX_PUSH_OPCODE: u8 = 0x4b;

/// Maximum m or n expressible with a single small-integer opcode
pub const MAX_MULTISIG_KEYS: u8 = 16;

/// Attempt budget for the rejection-sampling loops; a healthy random
/// source succeeds on the first draw with overwhelming probability
pub const MAX_SAMPLING_ATTEMPTS: usize = 128;
