//! Argon2id password hashing.
//!
//! Hashes use a random salt from [`OsRng`] and are stored in PHC string format, which
//! embeds the algorithm parameters and the salt in the stored value.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};

/// Hash a plaintext password using Argon2id with a random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;

    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC string.
///
/// Returns `Ok(false)` on mismatch and `Err` only if the stored hash cannot be parsed.
/// There is no login endpoint, only tests check stored hashes.
#[cfg(test)]
pub(crate) fn verify_password(
    password: &str,
    hash: &str,
) -> Result<bool, argon2::password_hash::Error> {
    use argon2::password_hash::{PasswordHash, PasswordVerifier};

    let parsed_hash = PasswordHash::new(hash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}
