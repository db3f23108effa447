/// Password Hashing and Verification
///
/// bcrypt with a random salt and the library's default cost. The stored
/// string (`$2b$<cost>$<salt><digest>`) carries everything needed to verify.

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::error::AppError;

/// Hash a password using bcrypt
///
/// # Errors
/// Returns error if bcrypt hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
}

/// Verify a password against its hash
///
/// A malformed or foreign hash string counts as a mismatch.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match verify(password, hash) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::debug!("Password hash could not be verified: {}", e);
            false
        }
    }
}
