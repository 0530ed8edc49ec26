//! Argon2 password hashing for stored user credentials.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::AppError;

/// Hashes a plaintext password into a PHC string with a random salt.
///
/// # Arguments
/// - `password` - The plaintext password
///
/// # Returns
/// - `Ok(String)` - The PHC-formatted argon2 hash
/// - `Err(AppError::InternalError)` - Hashing failed
pub fn hash(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {}", e)))?;

    Ok(hash.to_string())
}

/// Verifies a plaintext password against a stored PHC string.
///
/// Malformed stored hashes never verify.
pub fn verify(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
