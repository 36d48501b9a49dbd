use crate::crypto::{DIGEST_LEN, SALT_LEN};
use std::fmt;

/// Why a stored credential string failed to parse.
///
/// `verify` never surfaces this; it collapses every variant into `false` so
/// the verification channel stays a single boolean. It is only reachable
/// through [`StoredCredential::parse`](crate::StoredCredential::parse).
#[derive(Debug)]
pub enum FormatError {
    FieldCount(usize),
    Iterations,
    SaltEncoding,
    SaltLength(usize),
    DigestEncoding,
    DigestLength(usize),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FieldCount(n) => {
                write!(f, "expected 3 dot-separated fields, found {n}")
            }
            FormatError::Iterations => write!(f, "iteration count is not a positive integer"),
            FormatError::SaltEncoding => write!(f, "salt is not valid base64"),
            FormatError::SaltLength(n) => {
                write!(f, "salt must decode to {SALT_LEN} bytes, found {n}")
            }
            FormatError::DigestEncoding => write!(f, "digest is not valid base64"),
            FormatError::DigestLength(n) => {
                write!(f, "digest must decode to {DIGEST_LEN} bytes, found {n}")
            }
        }
    }
}

impl std::error::Error for FormatError {}
