use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::error;

/// Derive a salted hash of the plaintext. A fresh random salt is generated
/// per call; the plaintext is never stored anywhere.
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let digest = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })?
        .to_string();
    Ok(digest)
}

pub fn verify_password(plain: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| {
        error!(error = %e, "argon2 parse hash error");
        anyhow::anyhow!(e.to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_never_equals_plaintext() {
        let plain = "hunter2hunter2";
        let digest = hash_password(plain).expect("hashing should succeed");
        assert_ne!(digest, plain);
        assert!(digest.starts_with("$argon2"));
    }

    #[test]
    fn hash_and_verify_roundtrip() {
        let plain = "s3cure-enough";
        let digest = hash_password(plain).expect("hashing should succeed");
        assert!(verify_password(plain, &digest).expect("verify should succeed"));
    }

    #[test]
    fn same_password_hashes_differently_per_salt() {
        let plain = "repeatable";
        let a = hash_password(plain).expect("first hash");
        let b = hash_password(plain).expect("second hash");
        assert_ne!(a, b);
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let digest = hash_password("right-password").expect("hashing should succeed");
        assert!(!verify_password("wrong-password", &digest).expect("verify should not error"));
    }

    #[test]
    fn verify_errors_on_malformed_hash() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }
}
