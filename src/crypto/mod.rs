//! Cryptographic primitives for the credential codec.
//!
//! Provides salt generation, PBKDF2 key stretching, and timing-safe digest
//! comparison.

pub mod kdf;

pub use kdf::{derive_digest, digests_match, generate_salt};

/// Length of the salt (16 bytes / 128 bits).
pub const SALT_LEN: usize = 16;
/// Length of the derived digest (32 bytes / 256 bits).
pub const DIGEST_LEN: usize = 32;
/// Default PBKDF2 iteration count recorded into newly hashed credentials.
pub const DEFAULT_ITERATIONS: u32 = 10_000;
