use super::AuthError;
use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use once_cell::sync::Lazy;

/// Stand-in hash checked when no account matches, so unknown usernames cost
/// the same argon2 work as wrong passwords.
static MISSING_ACCOUNT_HASH: Lazy<String> =
    Lazy::new(|| hash_password("missing-account").unwrap_or_default());

/// Hashes a password into an argon2 PHC string with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::Hash(e.to_string()))?;

    Ok(hash.to_string())
}

/// A stored value that does not parse as a PHC string never matches.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(h) => h,
        Err(_) => return false,
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

/// Runs the same verification as for a real account; never matches.
pub fn verify_missing_account(password: &str) -> bool {
    verify_password(password, &MISSING_ACCOUNT_HASH);
    false
}
