use bcrypt::{DEFAULT_COST, hash, verify};

use crate::utils::errors::AppError;

/// Hash a plaintext password with bcrypt at the default work factor.
/// The salt is generated internally, so two hashes of the same password differ.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    Ok(hash(password, DEFAULT_COST)?)
}

/// Check a plaintext password against a stored bcrypt hash.
/// Returns `Ok(false)` on mismatch; `Err` only when the stored hash is not
/// a parseable bcrypt string.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AppError> {
    Ok(verify(password, stored_hash)?)
}
