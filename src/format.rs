//! Stored credential wire format.
//!
//! Serialized Format:
//! ```text
//! ITERATIONS (decimal) . SALT (base64, 16 bytes) . DIGEST (base64, 32 bytes)
//! ```
//!
//! Exactly two literal `.` separators, standard base64 alphabet with
//! canonical padding, no whitespace, no trailing data.

use crate::crypto::{DIGEST_LEN, SALT_LEN};
use crate::error::FormatError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// The three fields a serialized credential is made of.
///
/// New values are produced by [`hash`](crate::hash); existing strings are
/// taken apart with [`parse`](Self::parse).
#[derive(Debug)]
pub struct StoredCredential {
    iterations: u32,
    salt: [u8; SALT_LEN],
    digest: [u8; DIGEST_LEN],
}

impl StoredCredential {
    pub(crate) fn new(iterations: u32, salt: [u8; SALT_LEN], digest: [u8; DIGEST_LEN]) -> Self {
        Self {
            iterations,
            salt,
            digest,
        }
    }

    /// Returns the PBKDF2 iteration count embedded in the credential.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Returns the salt the digest was derived over.
    pub fn salt(&self) -> &[u8; SALT_LEN] {
        &self.salt
    }

    /// Returns the stored digest.
    pub fn digest(&self) -> &[u8; DIGEST_LEN] {
        &self.digest
    }

    /// Serializes the credential into its stored string form.
    pub fn encode(&self) -> String {
        format!(
            "{}.{}.{}",
            self.iterations,
            STANDARD.encode(self.salt),
            STANDARD.encode(self.digest)
        )
    }

    /// Parses a stored credential string.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The string does not split into exactly three dot-separated fields
    /// - The iteration count is not a positive decimal integer
    /// - The salt or digest is not canonical base64
    /// - The salt or digest decodes to the wrong number of bytes
    pub fn parse(stored: &str) -> Result<Self, FormatError> {
        let fields: Vec<&str> = stored.split('.').collect();
        if fields.len() != 3 {
            return Err(FormatError::FieldCount(fields.len()));
        }

        let iterations: u32 = fields[0].parse().map_err(|_| FormatError::Iterations)?;
        if iterations == 0 {
            return Err(FormatError::Iterations);
        }

        let salt: [u8; SALT_LEN] = STANDARD
            .decode(fields[1])
            .map_err(|_| FormatError::SaltEncoding)?
            .try_into()
            .map_err(|bytes: Vec<u8>| FormatError::SaltLength(bytes.len()))?;

        let digest: [u8; DIGEST_LEN] = STANDARD
            .decode(fields[2])
            .map_err(|_| FormatError::DigestEncoding)?
            .try_into()
            .map_err(|bytes: Vec<u8>| FormatError::DigestLength(bytes.len()))?;

        Ok(Self {
            iterations,
            salt,
            digest,
        })
    }
}
