//! Constants used by the BLS scheme.

/// Try-and-increment attempts before hashing gives up.
///
/// Each attempt succeeds with probability close to 1/2, so the default bound
/// is never reached in practice.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 256;

/// Size of a big-endian secret key encoding in bytes.
pub const SK_SIZE: usize = 32;

/// Size of a Keccak-256 or SHA-256 message digest in bytes.
pub const DIGEST_SIZE: usize = 32;
