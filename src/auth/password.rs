use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::error;

/// Hashes a plaintext password with argon2 under a fresh random salt.
/// The returned PHC string is the only thing that ever reaches storage.
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

/// Checks a plaintext password against a stored PHC hash string. Returns
/// `Ok(false)` on mismatch; `Err` only when the stored hash is unparseable.
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

    const PASSWORD: &str = "lunch-money-9000";

    #[test]
    fn stored_hash_verifies_original_password() {
        let hash = hash_password(PASSWORD).expect("hash");
        assert!(verify_password(PASSWORD, &hash).expect("verify"));
    }

    #[test]
    fn mismatched_password_fails_verification() {
        let hash = hash_password(PASSWORD).expect("hash");
        assert!(!verify_password("dinner-money-9000", &hash).expect("verify"));
    }

    #[test]
    fn unparseable_hash_is_an_error_not_a_mismatch() {
        assert!(verify_password(PASSWORD, "plainly-not-a-phc-string").is_err());
    }

    #[test]
    fn each_hash_gets_its_own_salt() {
        let first = hash_password(PASSWORD).expect("hash");
        let second = hash_password(PASSWORD).expect("hash");
        assert_ne!(first, second);
    }

    #[test]
    fn hash_output_is_a_phc_string() {
        let hash = hash_password(PASSWORD).expect("hash");
        assert!(hash.starts_with("$argon2"));
        assert!(!hash.contains(PASSWORD));
    }
}
