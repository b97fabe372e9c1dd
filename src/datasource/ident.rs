// ABOUTME: Resource identifier generation
// ABOUTME: Derives a stable SHA256 hex digest from an input string

use sha2::{Digest, Sha256};

/// Return the lowercase hex SHA256 digest of `input`.
///
/// Pure and deterministic, so the same input always produces the same
/// identifier.
pub fn generate_id(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
