use crate::auth::pin::pin_hash;
use crate::errors::{PortalError, PortalResult};
use crate::model::member::{Credential, Member};
use tracing::warn;

/// Locates the member matching a submitted email + PIN.
///
/// Every rejection path returns the same `AuthFailed` so the caller cannot
/// tell whether the email was unknown, ambiguous, or the PIN was wrong:
/// - empty email
/// - no row with that email (case-insensitive, trimmed)
/// - more than one row with that email
/// - credential mismatch, or a row with no usable credential
pub fn find_member<'a>(
    members: &'a [Member],
    email: &str,
    pin: &str,
    salt: &str,
) -> PortalResult<&'a Member> {
    let needle = email.trim().to_lowercase();
    if needle.is_empty() {
        return Err(PortalError::AuthFailed);
    }

    let matches: Vec<&Member> = members
        .iter()
        .filter(|m| m.email.to_lowercase() == needle)
        .collect();

    let member = match matches.as_slice() {
        [one] => *one,
        [] => return Err(PortalError::AuthFailed),
        many => {
            // Ambiguous sheet data. Never pick one by precedence.
            warn!(count = many.len(), "Multiple member rows share one email");
            return Err(PortalError::AuthFailed);
        }
    };

    let pin_ok = match &member.credential {
        Credential::Hashed(stored) => pin_hash(salt, pin) == stored.trim(),
        Credential::Plaintext(stored) => pin.trim() == stored.trim(),
        Credential::Missing => false,
    };

    if pin_ok {
        Ok(member)
    } else {
        Err(PortalError::AuthFailed)
    }
}
