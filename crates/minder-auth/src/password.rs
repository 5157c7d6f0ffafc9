//! Argon2 password hashing and verification.
//!
//! Digests are PHC strings carrying their own salt and parameters, so the
//! stored column is self-describing and the work factor can be raised
//! without migrating existing rows.

use super::AuthError;
use argon2::Argon2;
use argon2::PasswordHash;
use argon2::PasswordHasher;
use argon2::PasswordVerifier;
use argon2::password_hash::SaltString;

/// Registration policy: anything shorter is rejected before hashing.
pub const MIN_PASSWORD_LEN: usize = 6;

fn salt() -> SaltString {
    use rand::Rng;
    let ref mut bytes = [0u8; 16];
    rand::rng().fill(bytes);
    SaltString::encode_b64(bytes).expect("salt")
}

/// Hashes a password into a salted Argon2 PHC string.
///
/// Rejects passwords below [`MIN_PASSWORD_LEN`] with
/// [`AuthError::WeakPassword`].
pub fn hash(password: &str) -> Result<String, AuthError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::WeakPassword);
    }
    Argon2::default()
        .hash_password(password.as_bytes(), &salt())
        .map(|h| h.to_string())
        .map_err(|_| AuthError::Hashing)
}

/// Verifies a password against a stored PHC digest.
///
/// Comparison runs inside argon2 in constant time; an unparseable digest
/// verifies false rather than erroring.
pub fn verify(password: &str, hashword: &str) -> bool {
    PasswordHash::new(hashword)
        .ok()
        .as_ref()
        .map(|hash| {
            Argon2::default()
                .verify_password(password.as_bytes(), hash)
                .is_ok()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_verifies() {
        let digest = hash("correct horse").unwrap();
        assert!(verify("correct horse", &digest));
    }

    #[test]
    fn wrong_password_fails() {
        let digest = hash("correct horse").unwrap();
        assert!(!verify("battery staple", &digest));
    }

    #[test]
    fn same_password_salts_differently() {
        let a = hash("correct horse").unwrap();
        let b = hash("correct horse").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn short_password_is_weak() {
        assert_eq!(hash("12345"), Err(AuthError::WeakPassword));
        assert_eq!(hash(""), Err(AuthError::WeakPassword));
    }

    #[test]
    fn garbage_digest_verifies_false() {
        assert!(!verify("anything", "not-a-phc-string"));
    }
}
