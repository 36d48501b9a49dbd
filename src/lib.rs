//! Password-at-rest hashing with a self-describing stored format.
//!
//! A password is stretched with PBKDF2-HMAC-SHA256 over a fresh random
//! 16-byte salt, and the result is stored as a single string:
//!
//! ```text
//! <iterations-decimal>.<salt-base64>.<digest-base64>
//! ```
//!
//! The work factor is embedded in the stored value, so verification always
//! uses the count a credential was created with, even after the default
//! changes.
//!
//! ```
//! let stored = saltcred::hash("hunter2").unwrap();
//! assert!(saltcred::verify(&stored, "hunter2"));
//! assert!(!saltcred::verify(&stored, "hunter3"));
//! ```

mod crypto;
mod error;
mod format;

pub use crate::crypto::{DEFAULT_ITERATIONS, DIGEST_LEN, SALT_LEN};
pub use crate::error::FormatError;
pub use crate::format::StoredCredential;

use anyhow::{Context, Result};

/// Hashes a password with the default work factor.
///
/// Returns the serialized credential, ready to be persisted by the caller.
/// A fresh salt is drawn from the OS random generator on every call, so
/// hashing the same password twice produces different values.
///
/// # Errors
///
/// Fails only if the OS random generator is unavailable. There is no
/// fallback randomness.
pub fn hash(password: &str) -> Result<String> {
    hash_with_iterations(password, DEFAULT_ITERATIONS)
}

/// Hashes a password with a caller-chosen work factor.
///
/// The iteration count is embedded in the serialized credential, so values
/// created with any count keep verifying after the default changes.
///
/// # Errors
///
/// Fails if `iterations` is zero or the OS random generator is unavailable.
pub fn hash_with_iterations(password: &str, iterations: u32) -> Result<String> {
    let salt = crypto::generate_salt()?;
    let digest = crypto::derive_digest(password, &salt, iterations)
        .context("failed to derive credential digest")?;

    Ok(StoredCredential::new(iterations, salt, *digest).encode())
}

/// Verifies a candidate password against a stored credential.
///
/// The digest comparison is constant-time. A malformed `stored` value is a
/// verification failure, not an error: through this channel the caller
/// cannot tell "wrong password" from "unparseable credential". Use
/// [`StoredCredential::parse`] to validate stored values out of band.
pub fn verify(stored: &str, candidate: &str) -> bool {
    let cred = match StoredCredential::parse(stored) {
        Ok(cred) => cred,
        Err(_) => return false,
    };

    match crypto::derive_digest(candidate, cred.salt(), cred.iterations()) {
        Ok(digest) => crypto::digests_match(&*digest, cred.digest()),
        Err(_) => false,
    }
}
