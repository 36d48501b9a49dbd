use anyhow::{Result, anyhow, bail};
use getrandom::fill;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use super::{DIGEST_LEN, SALT_LEN};

/// Fill buffer with cryptographically secure random bytes
fn secure_random(buf: &mut [u8]) -> Result<()> {
    fill(buf).map_err(|_| anyhow!("OS random generator unavailable"))
}

/// Generate salt
pub fn generate_salt() -> Result<[u8; SALT_LEN]> {
    let mut salt = [0u8; SALT_LEN];
    secure_random(&mut salt)?;
    Ok(salt)
}

/// Derive the credential digest from a password, salt and work factor
/// via PBKDF2-HMAC-SHA256.
pub fn derive_digest(
    password: &str,
    salt: &[u8],
    iterations: u32,
) -> Result<Zeroizing<[u8; DIGEST_LEN]>> {
    if iterations == 0 {
        bail!("PBKDF2 iteration count must be >= 1");
    }

    let mut digest = Zeroizing::new([0u8; DIGEST_LEN]);
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut *digest);

    Ok(digest)
}

/// Compare two digests in constant time.
///
/// Length equality is established first; after that, comparison time does
/// not depend on where the inputs differ.
pub fn digests_match(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
