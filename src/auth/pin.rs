use sha2::{Digest, Sha256};

/// Salted one-way digest of a PIN: lowercase hex SHA-256 of salt ++ PIN.
///
/// Deliberately deterministic for a given (salt, PIN) pair. The verifier
/// stores nothing beyond the digest itself, so it must be able to recompute
/// it from a submitted PIN at login time. The salt is a deployment-wide
/// secret, not a per-record value.
pub fn pin_hash(salt: &str, pin: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(pin.trim().as_bytes());
    hex::encode(hasher.finalize())
}
